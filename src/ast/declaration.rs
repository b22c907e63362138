use serde::Serialize;

use super::{Function, FunctionProto, GlobalVar};

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Declaration {
    Prototype(FunctionProto),
    Function(Function),
    GlobalVar(GlobalVar),
}
