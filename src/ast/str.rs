use serde::Serialize;

use super::Position;

/// A string literal, escapes already decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Str {
    pub value: String,
    pub position: Position,
}
