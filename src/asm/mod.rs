//! Textual x86-64 assembly in GNU (AT&T) syntax.
//!
//! The code generator builds a flat list of [`Instruction`]s per function and
//! renders them through their [`Display`] impls. Operand order follows AT&T
//! conventions throughout: source first, destination second.
mod reg;

use std::fmt::Display;

pub use self::reg::Reg;

/// An instruction operand: immediate, register, or one of the three memory
/// addressing forms the generator needs.
#[derive(Debug, Clone)]
pub enum Operand {
    Immediate(i64),
    Register(Reg),
    /// Memory at the address held in a register, e.g. `(%rax)`.
    Indirect(Reg),
    /// A frame-pointer-relative stack slot, e.g. `-8(%rbp)`.
    Frame(i64),
    /// A rip-relative symbol reference, e.g. `.str0(%rip)`.
    Rip(String),
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&match self {
            Operand::Immediate(value) => format!("${value}"),
            Operand::Register(reg) => reg.to_string(),
            Operand::Indirect(reg) => format!("({reg})"),
            Operand::Frame(offset) => format!("{offset}(%rbp)"),
            Operand::Rip(symbol) => format!("{symbol}(%rip)"),
        })
    }
}

/// Condition codes for `set<cc>`.
#[derive(Debug, Clone, Copy)]
pub enum Cond {
    E,
    Ne,
    L,
    Le,
    G,
    Ge,
}

impl Display for Cond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Cond::E => "e",
            Cond::Ne => "ne",
            Cond::L => "l",
            Cond::Le => "le",
            Cond::G => "g",
            Cond::Ge => "ge",
        })
    }
}

#[derive(Debug, Clone)]
pub enum Instruction {
    Comment(String),
    Label(String),
    Movb(Operand, Operand),
    Movl(Operand, Operand),
    Movq(Operand, Operand),
    /// Sign-extending byte load into a 32-bit register.
    Movsbl(Operand, Reg),
    /// Sign-extend a 32-bit register into its 64-bit counterpart.
    Movslq(Reg, Reg),
    /// Zero-extending byte move, used to widen `set<cc>` results.
    Movzbl(Reg, Reg),
    Leaq(Operand, Reg),
    Addl(Operand, Operand),
    Addq(Operand, Operand),
    Subl(Operand, Operand),
    Subq(Operand, Operand),
    Imull(Operand, Operand),
    Idivl(Operand),
    /// Sign-extend `%eax` into `%edx:%eax` ahead of `idivl`.
    Cltd,
    Negl(Reg),
    Cmpl(Operand, Operand),
    Set(Cond, Reg),
    Shlq(i64, Reg),
    Pushq(Reg),
    Popq(Reg),
    Je(String),
    Jne(String),
    Jmp(String),
    Call(String),
    Leave,
    Ret,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Instruction::Comment(comment) => format!("\t# {comment}"),
            Instruction::Label(label) => format!("\n{label}:"),
            Instruction::Movb(source, target) => format!("\tmovb {source}, {target}"),
            Instruction::Movl(source, target) => format!("\tmovl {source}, {target}"),
            Instruction::Movq(source, target) => format!("\tmovq {source}, {target}"),
            Instruction::Movsbl(source, target) => format!("\tmovsbl {source}, {target}"),
            Instruction::Movslq(source, target) => format!("\tmovslq {source}, {target}"),
            Instruction::Movzbl(source, target) => format!("\tmovzbl {source}, {target}"),
            Instruction::Leaq(source, target) => format!("\tleaq {source}, {target}"),
            Instruction::Addl(source, target) => format!("\taddl {source}, {target}"),
            Instruction::Addq(source, target) => format!("\taddq {source}, {target}"),
            Instruction::Subl(source, target) => format!("\tsubl {source}, {target}"),
            Instruction::Subq(source, target) => format!("\tsubq {source}, {target}"),
            Instruction::Imull(source, target) => format!("\timull {source}, {target}"),
            Instruction::Idivl(source) => format!("\tidivl {source}"),
            Instruction::Cltd => "\tcltd".to_string(),
            Instruction::Negl(target) => format!("\tnegl {target}"),
            Instruction::Cmpl(source, target) => format!("\tcmpl {source}, {target}"),
            Instruction::Set(cond, target) => format!("\tset{cond} {target}"),
            Instruction::Shlq(amount, target) => format!("\tshlq ${amount}, {target}"),
            Instruction::Pushq(source) => format!("\tpushq {source}"),
            Instruction::Popq(target) => format!("\tpopq {target}"),
            Instruction::Je(target) => format!("\tje {target}"),
            Instruction::Jne(target) => format!("\tjne {target}"),
            Instruction::Jmp(target) => format!("\tjmp {target}"),
            Instruction::Call(name) => format!("\tcall {name}"),
            Instruction::Leave => "\tleave".to_string(),
            Instruction::Ret => "\tret".to_string(),
        };
        f.write_str(&value)
    }
}
