use serde::Serialize;

use super::{
    AddressOf, Assignment, BinaryExpr, Call, Ident, Index, Number, Position, Str, UnaryExpr,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    Number(Number),
    Str(Str),
    Ident(Ident),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    AddressOf(AddressOf),
    Index(Index),
    Call(Call),
    Assignment(Assignment),
}

impl Expression {
    pub fn position(&self) -> Position {
        match self {
            Expression::Number(Number { position, .. })
            | Expression::Str(Str { position, .. })
            | Expression::Ident(Ident { position, .. })
            | Expression::Binary(BinaryExpr { position, .. })
            | Expression::Unary(UnaryExpr { position, .. })
            | Expression::AddressOf(AddressOf { position, .. })
            | Expression::Index(Index { position, .. })
            | Expression::Call(Call { position, .. })
            | Expression::Assignment(Assignment { position, .. }) => *position,
        }
    }
}
