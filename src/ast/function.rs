use serde::Serialize;

use super::{Block, Param, Position, TypeSpec};

/// A function declaration without a body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionProto {
    pub ret: TypeSpec,
    pub name: String,
    pub params: Vec<Param>,
    pub position: Position,
}

/// A function definition. The body is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub ret: TypeSpec,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
    pub position: Position,
}
