use std::collections::HashMap;

use crate::ast::{ForInit, Function, Statement, TypeSpec, VarDecl};

/// A local's stack slot: frame-pointer-relative offset, declared type, and
/// element count for arrays.
#[derive(Debug, Clone, Copy)]
pub struct Local {
    pub offset: i64,
    pub type_spec: TypeSpec,
    pub array_size: Option<i64>,
}

/// The flat per-function symbol environment. All locals of a function,
/// including those declared in nested blocks and `for`-inits, share one map
/// and one stack region; re-declaring a name rebinds it.
#[derive(Debug, Default)]
pub struct Frame {
    locals: HashMap<String, Local>,
    stack_offset: i64,
}

pub fn round_up(value: i64, alignment: i64) -> i64 {
    (value + alignment - 1) / alignment * alignment
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&Local> {
        self.locals.get(name)
    }

    /// Allocate the slot for a declaration and bind its name.
    pub fn declare(&mut self, decl: &VarDecl) -> i64 {
        match decl.array_size {
            Some(len) => self.declare_array(&decl.name, decl.type_spec, len),
            None => self.declare_scalar(&decl.name, decl.type_spec),
        }
    }

    /// Every scalar occupies a uniform 8-byte slot, regardless of its
    /// declared size.
    pub fn declare_scalar(&mut self, name: &str, type_spec: TypeSpec) -> i64 {
        self.stack_offset += 8;
        let offset = -self.stack_offset;
        self.locals.insert(
            name.to_string(),
            Local {
                offset,
                type_spec,
                array_size: None,
            },
        );
        offset
    }

    /// Arrays consume `element_size * len` bytes and are 16-byte aligned.
    pub fn declare_array(&mut self, name: &str, type_spec: TypeSpec, len: i64) -> i64 {
        let size = type_spec.element_size() * len;
        self.stack_offset = round_up(self.stack_offset + size, 16);
        let offset = -self.stack_offset;
        self.locals.insert(
            name.to_string(),
            Local {
                offset,
                type_spec: TypeSpec {
                    is_array: true,
                    ..type_spec
                },
                array_size: Some(len),
            },
        );
        offset
    }

    /// Total frame size for a function, rounded up to 16: a structural walk
    /// that performs the same allocations the emission pass will, without
    /// keeping the bindings.
    pub fn size_of(function: &Function) -> i64 {
        let mut probe = Frame::new();
        for param in &function.params {
            probe.declare_scalar(&param.name, param.type_spec);
        }
        for statement in &function.body.statements {
            probe.measure(statement);
        }
        round_up(probe.stack_offset, 16)
    }

    fn measure(&mut self, statement: &Statement) {
        match statement {
            Statement::VarDecl(decl) => {
                self.declare(decl);
            }
            Statement::Block(block) => {
                for statement in &block.statements {
                    self.measure(statement);
                }
            }
            Statement::If(if_stmt) => {
                self.measure(&if_stmt.then_branch);
                if let Some(else_branch) = &if_stmt.else_branch {
                    self.measure(else_branch);
                }
            }
            Statement::While(while_loop) => self.measure(&while_loop.body),
            Statement::For(for_loop) => {
                if let Some(ForInit::Decl(decl)) = &for_loop.init {
                    self.declare(decl);
                }
                self.measure(&for_loop.body);
            }
            Statement::Expression(_) | Statement::Return(_) => {}
        }
    }
}
