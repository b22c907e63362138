//! # Micro C
//!
//! Compiler library for a small procedural subset of C. Source text goes
//! through the [`lexer`], the [`parser`] and the [`codegen`] stage in order
//! and comes out as x86-64 assembly in GNU (AT&T) syntax. There is no
//! intermediate representation and no optimizer; the first error aborts the
//! pipeline.

pub mod asm;
pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;

use std::{error::Error, fmt::Display};

use codegen::{CodeGenerator, CodegenError};
use lexer::{LexError, Lexer};
use parser::{ParseError, Parser};

/// Any error one of the three pipeline stages can produce.
#[derive(Debug)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Codegen(CodegenError),
}

impl Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex(error) => error.fmt(f),
            CompileError::Parse(error) => error.fmt(f),
            CompileError::Codegen(error) => error.fmt(f),
        }
    }
}

impl Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(error: LexError) -> Self {
        CompileError::Lex(error)
    }
}

impl From<ParseError> for CompileError {
    fn from(error: ParseError) -> Self {
        CompileError::Parse(error)
    }
}

impl From<CodegenError> for CompileError {
    fn from(error: CodegenError) -> Self {
        CompileError::Codegen(error)
    }
}

/// Compile a translation unit into an assembly document.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = Lexer::new(source).lex()?;
    let program = Parser::new(tokens).parse_program()?;
    let assembly = CodeGenerator::new().generate(&program)?;
    Ok(assembly)
}
