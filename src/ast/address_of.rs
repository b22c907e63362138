use serde::Serialize;

use super::{Expression, Position};

/// `&expr`. The operand must be an lvalue, checked at code generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressOf {
    pub operand: Box<Expression>,
    pub position: Position,
}
