use serde::Serialize;

use super::{Block, Expression, ForLoop, If, Return, VarDecl, WhileLoop};

/// A statement. A bare `;` is an expression statement without expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Block(Block),
    Expression(Option<Expression>),
    If(If),
    While(WhileLoop),
    For(ForLoop),
    Return(Return),
    VarDecl(VarDecl),
}
