use serde::Serialize;

use super::{Expression, Position, TypeSpec};

/// A global variable declaration, optionally an array, optionally with a
/// constant initializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalVar {
    pub type_spec: TypeSpec,
    pub name: String,
    pub array_size: Option<i64>,
    pub init: Option<Expression>,
    pub position: Position,
}
