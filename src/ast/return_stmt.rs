use serde::Serialize;

use super::{Expression, Position};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Return {
    pub value: Option<Expression>,
    pub position: Position,
}
