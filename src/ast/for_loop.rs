use serde::Serialize;

use super::{Expression, Position, Statement, VarDecl};

/// The init clause of a `for` loop: either a declaration in the enclosing
/// function's flat scope, or a plain expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForInit {
    Decl(VarDecl),
    Expression(Expression),
}

/// A `for` loop. A missing condition is treated as always true.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForLoop {
    pub init: Option<ForInit>,
    pub condition: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
    pub position: Position,
}
