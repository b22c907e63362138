use serde::Serialize;

use super::{Expression, Position, Statement};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub position: Position,
}
