use serde::Serialize;

use super::{Position, TypeSpec};

/// A function parameter. An array suffix (`T name[]`) has already decayed:
/// the parser sets `is_pointer` on the type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub type_spec: TypeSpec,
    pub name: String,
    pub position: Position,
}
