use serde::Serialize;

use super::{Expression, Position};

/// `array[index]`. The indexed expression must evaluate to an address
/// (an array name or a pointer), checked at code generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Index {
    pub array: Box<Expression>,
    pub index: Box<Expression>,
    pub position: Position,
}
