use serde::Serialize;

use super::{Expression, Position};

/// A call of a named function. The grammar only admits bare identifiers as
/// callees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub callee: String,
    pub args: Vec<Expression>,
    pub position: Position,
}
