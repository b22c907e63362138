use serde::Serialize;

use super::{Position, Statement};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub position: Position,
}
