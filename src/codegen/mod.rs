//! Code generator for Micro C.
//!
//! A single pass over the AST, accumulator-based: every expression leaves its
//! result in `%eax` (32-bit values) or `%rax` (pointers and addresses). The
//! generator owns the symbol environment, the label counter and the string
//! pool for the duration of one compilation.
mod frame;

use std::collections::HashMap;
use std::{error::Error, fmt::Display};

use log::debug;

use Cond::*;
use Instruction::*;
use Operand::*;
use Reg::*;

use crate::asm::{Cond, Instruction, Operand, Reg};
use crate::ast::{
    Assignment, BaseType, BinaryExpr, BinaryOp, Call, Declaration, Expression, ForInit, ForLoop,
    Function, GlobalVar, Ident, If, Index, Program, Return, Statement, TypeSpec, UnaryExpr,
    UnaryOp, VarDecl, WhileLoop,
};

use self::frame::Frame;

/// The System V integer argument registers, in order.
const ARG_REGS: [Reg; 6] = [Rdi, Rsi, Rdx, Rcx, R8, R9];

/// Error raised on an undefined name or an unsupported construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenError {
    pub message: String,
}

impl CodegenError {
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CodegenError {}

pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(Debug, Clone)]
struct FnSig {
    ret: TypeSpec,
}

#[derive(Debug, Clone, Copy)]
struct Global {
    type_spec: TypeSpec,
    array_size: Option<i64>,
    init: Option<i64>,
}

pub struct CodeGenerator {
    functions: HashMap<String, FnSig>,
    globals: HashMap<String, Global>,
    global_order: Vec<String>,
    /// Append-only pool of string literals, label to bytes.
    strings: Vec<(String, String)>,
    instructions: Vec<Instruction>,
    label_count: usize,
    frame: Frame,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            globals: HashMap::new(),
            global_order: vec![],
            strings: vec![],
            instructions: vec![],
            label_count: 0,
            frame: Frame::new(),
        }
    }

    /// Generate the assembly document for a whole program.
    pub fn generate(mut self, program: &Program) -> CodegenResult<String> {
        self.register_declarations(program)?;

        for declaration in &program.declarations {
            // prototypes and globals emit no text
            if let Declaration::Function(function) = declaration {
                self.emit_function(function)?;
            }
        }

        Ok(self.render())
    }

    /// Register every function signature and global name up front so that
    /// forward references work.
    fn register_declarations(&mut self, program: &Program) -> CodegenResult<()> {
        for declaration in &program.declarations {
            match declaration {
                Declaration::Prototype(proto) => {
                    self.functions
                        .insert(proto.name.clone(), FnSig { ret: proto.ret });
                }
                Declaration::Function(function) => {
                    self.functions
                        .insert(function.name.clone(), FnSig { ret: function.ret });
                }
                Declaration::GlobalVar(global) => self.register_global(global)?,
            }
        }
        Ok(())
    }

    fn register_global(&mut self, global: &GlobalVar) -> CodegenResult<()> {
        let init = match &global.init {
            None => None,
            Some(expression) => Some(Self::const_init(expression)?),
        };
        let type_spec = if global.array_size.is_some() {
            TypeSpec {
                is_array: true,
                ..global.type_spec
            }
        } else {
            global.type_spec
        };
        let entry = Global {
            type_spec,
            array_size: global.array_size,
            init,
        };
        if self.globals.insert(global.name.clone(), entry).is_none() {
            self.global_order.push(global.name.clone());
        }
        Ok(())
    }

    fn const_init(expression: &Expression) -> CodegenResult<i64> {
        match expression {
            Expression::Number(number) => Ok(number.value),
            Expression::Unary(UnaryExpr {
                op: UnaryOp::Neg,
                operand,
                ..
            }) => {
                if let Expression::Number(number) = operand.as_ref() {
                    return Ok(-number.value);
                }
                Err(CodegenError::new(
                    "global initializer must be an integer constant",
                ))
            }
            _ => Err(CodegenError::new(
                "global initializer must be an integer constant",
            )),
        }
    }

    fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    fn label_id(&mut self) -> usize {
        let id = self.label_count;
        self.label_count += 1;
        id
    }

    fn emit_function(&mut self, function: &Function) -> CodegenResult<()> {
        debug!("generating code for function '{}'", function.name);

        self.frame = Frame::new();
        let frame_size = Frame::size_of(function);

        self.emit(Label(function.name.clone()));
        self.emit(Pushq(Rbp));
        self.emit(Movq(Register(Rsp), Register(Rbp)));
        if frame_size > 0 {
            self.emit(Subq(Immediate(frame_size), Register(Rsp)));
        }

        for (index, param) in function.params.iter().enumerate() {
            let offset = self.frame.declare_scalar(&param.name, param.type_spec);
            self.emit(Comment(format!("{} = {}", param.name, ARG_REGS[index])));
            self.emit(Movq(Register(ARG_REGS[index]), Frame(offset)));
        }

        for statement in &function.body.statements {
            self.emit_statement(statement)?;
        }

        // fall-through return for bodies without a trailing `return`
        self.emit(Movl(Immediate(0), Register(Eax)));
        self.emit(Leave);
        self.emit(Ret);
        Ok(())
    }

    fn emit_statement(&mut self, statement: &Statement) -> CodegenResult<()> {
        match statement {
            Statement::Block(block) => {
                for statement in &block.statements {
                    self.emit_statement(statement)?;
                }
                Ok(())
            }
            Statement::Expression(expression) => {
                if let Some(expression) = expression {
                    self.emit_expression(expression)?;
                }
                Ok(())
            }
            Statement::VarDecl(decl) => self.emit_var_decl(decl),
            Statement::If(if_stmt) => self.emit_if(if_stmt),
            Statement::While(while_loop) => self.emit_while(while_loop),
            Statement::For(for_loop) => self.emit_for(for_loop),
            Statement::Return(ret) => self.emit_return(ret),
        }
    }

    fn emit_var_decl(&mut self, decl: &VarDecl) -> CodegenResult<()> {
        let offset = self.frame.declare(decl);
        if let Some(init) = &decl.init {
            self.emit_expression(init)?;
            self.store_slot(offset, decl.type_spec);
        }
        Ok(())
    }

    fn emit_if(&mut self, if_stmt: &If) -> CodegenResult<()> {
        let id = self.label_id();
        let else_label = format!(".Lelse{id}");
        let done_label = format!(".Ldone{id}");

        self.emit_expression(&if_stmt.condition)?;
        self.emit(Cmpl(Immediate(0), Register(Eax)));
        if if_stmt.else_branch.is_some() {
            self.emit(Je(else_label.clone()));
        } else {
            self.emit(Je(done_label.clone()));
        }

        self.emit_statement(&if_stmt.then_branch)?;

        if let Some(else_branch) = &if_stmt.else_branch {
            self.emit(Jmp(done_label.clone()));
            self.emit(Label(else_label));
            self.emit_statement(else_branch)?;
        }

        self.emit(Label(done_label));
        Ok(())
    }

    fn emit_while(&mut self, while_loop: &WhileLoop) -> CodegenResult<()> {
        let id = self.label_id();
        let loop_label = format!(".Lloop{id}");
        let done_label = format!(".Ldone{id}");

        self.emit(Label(loop_label.clone()));
        self.emit_expression(&while_loop.condition)?;
        self.emit(Cmpl(Immediate(0), Register(Eax)));
        self.emit(Je(done_label.clone()));

        self.emit_statement(&while_loop.body)?;
        self.emit(Jmp(loop_label));
        self.emit(Label(done_label));
        Ok(())
    }

    fn emit_for(&mut self, for_loop: &ForLoop) -> CodegenResult<()> {
        match &for_loop.init {
            Some(ForInit::Decl(decl)) => self.emit_var_decl(decl)?,
            Some(ForInit::Expression(expression)) => {
                self.emit_expression(expression)?;
            }
            None => {}
        }

        let id = self.label_id();
        let loop_label = format!(".Lloop{id}");
        let done_label = format!(".Ldone{id}");

        self.emit(Label(loop_label.clone()));
        // a missing condition is always true
        if let Some(condition) = &for_loop.condition {
            self.emit_expression(condition)?;
            self.emit(Cmpl(Immediate(0), Register(Eax)));
            self.emit(Je(done_label.clone()));
        }

        self.emit_statement(&for_loop.body)?;
        if let Some(update) = &for_loop.update {
            self.emit_expression(update)?;
        }
        self.emit(Jmp(loop_label));
        self.emit(Label(done_label));
        Ok(())
    }

    fn emit_return(&mut self, ret: &Return) -> CodegenResult<()> {
        match &ret.value {
            Some(expression) => {
                self.emit_expression(expression)?;
            }
            None => self.emit(Movl(Immediate(0), Register(Eax))),
        }
        self.emit(Leave);
        self.emit(Ret);
        Ok(())
    }

    /// Emit an expression and report its type. The value ends up in `%eax`,
    /// or in `%rax` for pointers and addresses.
    fn emit_expression(&mut self, expression: &Expression) -> CodegenResult<TypeSpec> {
        match expression {
            Expression::Number(number) => {
                self.emit(Movl(Immediate(number.value), Register(Eax)));
                Ok(TypeSpec::new(BaseType::Int))
            }
            Expression::Str(string) => {
                let label = format!(".str{}", self.strings.len());
                self.strings.push((label.clone(), string.value.clone()));
                self.emit(Leaq(Rip(label), Rax));
                Ok(TypeSpec::new(BaseType::Char).pointer_to())
            }
            Expression::Ident(ident) => self.emit_ident(ident),
            Expression::Unary(unary) => self.emit_unary(unary),
            Expression::AddressOf(address_of) => {
                let type_spec = self.emit_address(&address_of.operand)?;
                Ok(type_spec.pointer_to())
            }
            Expression::Index(index) => {
                let element = self.emit_index_address(index)?;
                self.load_indirect(element);
                Ok(element)
            }
            Expression::Binary(binary) => self.emit_binary(binary),
            Expression::Call(call) => self.emit_call(call),
            Expression::Assignment(assignment) => self.emit_assignment(assignment),
        }
    }

    fn emit_ident(&mut self, ident: &Ident) -> CodegenResult<TypeSpec> {
        if let Some(local) = self.frame.lookup(&ident.name).copied() {
            let type_spec = local.type_spec;
            if type_spec.is_array {
                // an array name decays to its address
                self.emit(Leaq(Frame(local.offset), Rax));
            } else if type_spec.is_pointer {
                self.emit(Movq(Frame(local.offset), Register(Rax)));
            } else if type_spec.base == BaseType::Char {
                self.emit(Movsbl(Frame(local.offset), Eax));
            } else {
                self.emit(Movl(Frame(local.offset), Register(Eax)));
            }
            return Ok(type_spec);
        }

        if let Some(global) = self.globals.get(&ident.name).copied() {
            let type_spec = global.type_spec;
            if type_spec.is_array {
                self.emit(Leaq(Rip(ident.name.clone()), Rax));
            } else if type_spec.is_pointer {
                self.emit(Movq(Rip(ident.name.clone()), Register(Rax)));
            } else if type_spec.base == BaseType::Char {
                self.emit(Movsbl(Rip(ident.name.clone()), Eax));
            } else {
                self.emit(Movl(Rip(ident.name.clone()), Register(Eax)));
            }
            return Ok(type_spec);
        }

        Err(CodegenError::new(format!(
            "undefined identifier '{}'",
            ident.name
        )))
    }

    fn emit_unary(&mut self, unary: &UnaryExpr) -> CodegenResult<TypeSpec> {
        match unary.op {
            UnaryOp::Neg => {
                self.emit_expression(&unary.operand)?;
                self.emit(Negl(Eax));
                Ok(TypeSpec::new(BaseType::Int))
            }
            UnaryOp::Not => {
                self.emit_expression(&unary.operand)?;
                self.emit(Cmpl(Immediate(0), Register(Eax)));
                self.emit(Set(E, Al));
                self.emit(Movzbl(Al, Eax));
                Ok(TypeSpec::new(BaseType::Int))
            }
            UnaryOp::Deref => {
                let type_spec = self.emit_expression(&unary.operand)?;
                if !type_spec.is_pointer && !type_spec.is_array {
                    return Err(CodegenError::new(
                        "cannot dereference a value of non-pointer type",
                    ));
                }
                let element = type_spec.deref();
                self.load_indirect(element);
                Ok(element)
            }
        }
    }

    /// Load the scalar at the address in `%rax` into the accumulator.
    fn load_indirect(&mut self, element: TypeSpec) {
        if element.base == BaseType::Char {
            self.emit(Movsbl(Indirect(Rax), Eax));
        } else {
            self.emit(Movl(Indirect(Rax), Register(Eax)));
        }
    }

    fn emit_binary(&mut self, binary: &BinaryExpr) -> CodegenResult<TypeSpec> {
        match binary.op {
            BinaryOp::And => return self.emit_logical_and(binary),
            BinaryOp::Or => return self.emit_logical_or(binary),
            _ => {}
        }

        // evaluate right first so the left operand ends up in the accumulator
        self.emit_expression(&binary.rhs)?;
        self.emit(Pushq(Rax));
        self.emit_expression(&binary.lhs)?;
        self.emit(Popq(Rcx));

        match binary.op {
            BinaryOp::Add => self.emit(Addl(Register(Ecx), Register(Eax))),
            BinaryOp::Sub => self.emit(Subl(Register(Ecx), Register(Eax))),
            BinaryOp::Mul => self.emit(Imull(Register(Ecx), Register(Eax))),
            BinaryOp::Div => {
                self.emit(Cltd);
                self.emit(Idivl(Register(Ecx)));
            }
            BinaryOp::Mod => {
                self.emit(Cltd);
                self.emit(Idivl(Register(Ecx)));
                self.emit(Movl(Register(Edx), Register(Eax)));
            }
            BinaryOp::Less
            | BinaryOp::Greater
            | BinaryOp::LessEqual
            | BinaryOp::GreaterEqual
            | BinaryOp::Equal
            | BinaryOp::NotEqual => {
                let cond = match binary.op {
                    BinaryOp::Less => L,
                    BinaryOp::Greater => G,
                    BinaryOp::LessEqual => Le,
                    BinaryOp::GreaterEqual => Ge,
                    BinaryOp::Equal => E,
                    _ => Ne,
                };
                // left is in %eax, right in %ecx: flags reflect left OP right
                self.emit(Cmpl(Register(Ecx), Register(Eax)));
                self.emit(Set(cond, Al));
                self.emit(Movzbl(Al, Eax));
            }
            BinaryOp::And | BinaryOp::Or => unreachable!(),
        }
        Ok(TypeSpec::new(BaseType::Int))
    }

    /// `&&` with two branch targets; the result is 0 or 1, never the
    /// short-circuited operand.
    fn emit_logical_and(&mut self, binary: &BinaryExpr) -> CodegenResult<TypeSpec> {
        let id = self.label_id();
        let false_label = format!(".Lfalse{id}");
        let done_label = format!(".Ldone{id}");

        self.emit_expression(&binary.lhs)?;
        self.emit(Cmpl(Immediate(0), Register(Eax)));
        self.emit(Je(false_label.clone()));
        self.emit_expression(&binary.rhs)?;
        self.emit(Cmpl(Immediate(0), Register(Eax)));
        self.emit(Je(false_label.clone()));
        self.emit(Movl(Immediate(1), Register(Eax)));
        self.emit(Jmp(done_label.clone()));
        self.emit(Label(false_label));
        self.emit(Movl(Immediate(0), Register(Eax)));
        self.emit(Label(done_label));
        Ok(TypeSpec::new(BaseType::Int))
    }

    fn emit_logical_or(&mut self, binary: &BinaryExpr) -> CodegenResult<TypeSpec> {
        let id = self.label_id();
        let true_label = format!(".Ltrue{id}");
        let done_label = format!(".Ldone{id}");

        self.emit_expression(&binary.lhs)?;
        self.emit(Cmpl(Immediate(0), Register(Eax)));
        self.emit(Jne(true_label.clone()));
        self.emit_expression(&binary.rhs)?;
        self.emit(Cmpl(Immediate(0), Register(Eax)));
        self.emit(Jne(true_label.clone()));
        self.emit(Movl(Immediate(0), Register(Eax)));
        self.emit(Jmp(done_label.clone()));
        self.emit(Label(true_label));
        self.emit(Movl(Immediate(1), Register(Eax)));
        self.emit(Label(done_label));
        Ok(TypeSpec::new(BaseType::Int))
    }

    /// Arguments are evaluated right to left onto the stack, then popped
    /// into the argument registers in left-to-right order. Pushing and
    /// popping the same number of slots keeps the 16-byte alignment the
    /// prologue established.
    fn emit_call(&mut self, call: &Call) -> CodegenResult<TypeSpec> {
        if call.args.len() > ARG_REGS.len() {
            return Err(CodegenError::new(format!(
                "call to '{}' with more than six arguments is unsupported",
                call.callee
            )));
        }

        for arg in call.args.iter().rev() {
            self.emit_expression(arg)?;
            self.emit(Pushq(Rax));
        }
        for index in 0..call.args.len() {
            self.emit(Popq(ARG_REGS[index]));
        }

        // %al = 0 before calling a possibly-variadic callee
        self.emit(Movl(Immediate(0), Register(Eax)));
        self.emit(Call(call.callee.clone()));

        // unknown callees are C-runtime externs returning int by convention
        let ret = self
            .functions
            .get(&call.callee)
            .map(|sig| sig.ret)
            .unwrap_or(TypeSpec::new(BaseType::Int));
        Ok(ret)
    }

    fn emit_assignment(&mut self, assignment: &Assignment) -> CodegenResult<TypeSpec> {
        match assignment.target.as_ref() {
            Expression::Ident(ident) => {
                if let Some(local) = self.frame.lookup(&ident.name).copied() {
                    if local.type_spec.is_array {
                        return Err(CodegenError::new(format!(
                            "cannot assign to array '{}'",
                            ident.name
                        )));
                    }
                    self.emit_expression(&assignment.value)?;
                    self.store_slot(local.offset, local.type_spec);
                    return Ok(local.type_spec);
                }
                if let Some(global) = self.globals.get(&ident.name).copied() {
                    if global.type_spec.is_array {
                        return Err(CodegenError::new(format!(
                            "cannot assign to array '{}'",
                            ident.name
                        )));
                    }
                    self.emit_expression(&assignment.value)?;
                    self.store_global(&ident.name, global.type_spec);
                    return Ok(global.type_spec);
                }
                Err(CodegenError::new(format!(
                    "undefined identifier '{}'",
                    ident.name
                )))
            }
            Expression::Index(_)
            | Expression::Unary(UnaryExpr {
                op: UnaryOp::Deref, ..
            }) => {
                // stage the value while the target address is computed
                self.emit_expression(&assignment.value)?;
                self.emit(Pushq(Rax));
                let element = self.emit_address(&assignment.target)?;
                self.emit(Popq(Rcx));
                if element.base == BaseType::Char {
                    self.emit(Movb(Register(Cl), Indirect(Rax)));
                    self.emit(Movl(Register(Ecx), Register(Eax)));
                } else {
                    self.emit(Movl(Register(Ecx), Indirect(Rax)));
                    self.emit(Movl(Register(Ecx), Register(Eax)));
                }
                Ok(element)
            }
            _ => Err(CodegenError::new("invalid lvalue in assignment")),
        }
    }

    /// Store the accumulator into a local slot according to the declared type.
    fn store_slot(&mut self, offset: i64, type_spec: TypeSpec) {
        if type_spec.is_pointer {
            self.emit(Movq(Register(Rax), Frame(offset)));
        } else if type_spec.base == BaseType::Char {
            self.emit(Movb(Register(Al), Frame(offset)));
        } else {
            self.emit(Movl(Register(Eax), Frame(offset)));
        }
    }

    fn store_global(&mut self, name: &str, type_spec: TypeSpec) {
        if type_spec.is_pointer {
            self.emit(Movq(Register(Rax), Rip(name.to_string())));
        } else if type_spec.base == BaseType::Char {
            self.emit(Movb(Register(Al), Rip(name.to_string())));
        } else {
            self.emit(Movl(Register(Eax), Rip(name.to_string())));
        }
    }

    /// Leave the address of an lvalue in `%rax` and report the type of the
    /// addressed location.
    fn emit_address(&mut self, expression: &Expression) -> CodegenResult<TypeSpec> {
        match expression {
            Expression::Ident(ident) => {
                if let Some(local) = self.frame.lookup(&ident.name).copied() {
                    self.emit(Leaq(Frame(local.offset), Rax));
                    return Ok(local.type_spec);
                }
                if let Some(global) = self.globals.get(&ident.name).copied() {
                    self.emit(Leaq(Rip(ident.name.clone()), Rax));
                    return Ok(global.type_spec);
                }
                Err(CodegenError::new(format!(
                    "undefined identifier '{}'",
                    ident.name
                )))
            }
            Expression::Index(index) => self.emit_index_address(index),
            Expression::Unary(UnaryExpr {
                op: UnaryOp::Deref,
                operand,
                ..
            }) => {
                let type_spec = self.emit_expression(operand)?;
                if !type_spec.is_pointer && !type_spec.is_array {
                    return Err(CodegenError::new(
                        "cannot dereference a value of non-pointer type",
                    ));
                }
                Ok(type_spec.deref())
            }
            _ => Err(CodegenError::new("expression is not addressable")),
        }
    }

    /// Compute the address of `array[index]` into `%rax`.
    fn emit_index_address(&mut self, index: &Index) -> CodegenResult<TypeSpec> {
        let array_type = self.emit_expression(&index.array)?;
        if !array_type.is_pointer && !array_type.is_array {
            return Err(CodegenError::new(
                "indexed expression is not an array or pointer",
            ));
        }

        self.emit(Pushq(Rax));
        self.emit_expression(&index.index)?;
        self.emit(Movslq(Eax, Rax));
        let element = array_type.deref();
        if element.size() == 4 {
            self.emit(Shlq(2, Rax));
        }
        self.emit(Popq(Rcx));
        self.emit(Addq(Register(Rcx), Register(Rax)));
        Ok(element)
    }

    fn render(&self) -> String {
        let mut output = String::new();
        output.push_str("\t.section .note.GNU-stack,\"\",@progbits\n");
        output.push_str("\t.section .text\n");
        output.push_str("\t.globl main\n");

        for instruction in &self.instructions {
            output.push_str(&format!("{instruction}\n"));
        }

        if !self.strings.is_empty() {
            output.push_str("\n\t.section .rodata\n");
            for (label, value) in &self.strings {
                output.push_str(&format!("{label}:\n\t.string \"{}\"\n", escape_string(value)));
            }
        }

        let initialized: Vec<_> = self
            .global_order
            .iter()
            .filter(|name| self.globals[*name].init.is_some())
            .collect();
        if !initialized.is_empty() {
            output.push_str("\n\t.section .data\n");
            for name in initialized {
                let global = self.globals[name];
                let directive = if global.type_spec.is_pointer {
                    ".quad"
                } else if global.type_spec.base == BaseType::Char {
                    ".byte"
                } else {
                    ".long"
                };
                output.push_str(&format!(
                    "{name}:\n\t{directive} {}\n",
                    global.init.unwrap_or(0)
                ));
            }
        }

        let uninitialized: Vec<_> = self
            .global_order
            .iter()
            .filter(|name| self.globals[*name].init.is_none())
            .collect();
        if !uninitialized.is_empty() {
            output.push_str("\n\t.section .bss\n");
            for name in uninitialized {
                let global = self.globals[name];
                let size = match global.array_size {
                    Some(len) => global.type_spec.element_size() * len.max(1),
                    None => global.type_spec.size(),
                };
                let align = size.min(16);
                output.push_str(&format!("\t.comm {name}, {size}, {align}\n"));
            }
        }

        output
    }
}

/// Re-escape pooled literal bytes for a `.string` directive. NUL and bytes
/// outside the printable ASCII range are emitted as three-digit octal so a
/// following digit cannot extend the escape.
fn escape_string(value: &str) -> String {
    let mut escaped = String::new();
    for byte in value.bytes() {
        match byte {
            b'\\' => escaped.push_str("\\\\"),
            b'"' => escaped.push_str("\\\""),
            b'\n' => escaped.push_str("\\n"),
            b'\t' => escaped.push_str("\\t"),
            b'\r' => escaped.push_str("\\r"),
            0x20..=0x7e => escaped.push(byte as char),
            byte => escaped.push_str(&format!("\\{byte:03o}")),
        }
    }
    escaped
}
