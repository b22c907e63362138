use serde::Serialize;

use super::Position;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ident {
    pub name: String,
    pub position: Position,
}
