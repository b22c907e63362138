use serde::Serialize;

use super::Position;

/// An integer literal. Character literals arrive here as well, already
/// decoded to their code point by the lexer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Number {
    pub value: i64,
    pub position: Position,
}
