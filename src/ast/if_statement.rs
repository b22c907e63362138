use serde::Serialize;

use super::{Expression, Position, Statement};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct If {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub position: Position,
}
