use serde::Serialize;

use super::{Expression, Position, TypeSpec};

/// A local variable declaration, optionally an array, optionally with an
/// initializer expression (scalars only).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    pub type_spec: TypeSpec,
    pub name: String,
    pub array_size: Option<i64>,
    pub init: Option<Expression>,
    pub position: Position,
}
