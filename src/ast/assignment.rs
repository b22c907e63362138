use serde::Serialize;

use super::{Expression, Position};

/// `target = value`. Any expression is accepted as the target here; the
/// lvalue check happens during code generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub target: Box<Expression>,
    pub value: Box<Expression>,
    pub position: Position,
}
