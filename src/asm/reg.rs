use std::fmt::Display;

/// Registers used by the code generator, in their size-specific AT&T
/// spellings. The accumulator convention only ever touches a handful of
/// them: `%rax`/`%eax`/`%al` for results, `%rcx`/`%ecx`/`%cl` as the
/// scratch for binary operands and staged stores, `%edx` for division
/// remainders, and the six System V argument registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    Rax,
    Rcx,
    Rdx,
    Rsi,
    Rdi,
    R8,
    R9,
    Rbp,
    Rsp,
    Eax,
    Ecx,
    Edx,
    Al,
    Cl,
}

impl Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Reg::Rax => "%rax",
            Reg::Rcx => "%rcx",
            Reg::Rdx => "%rdx",
            Reg::Rsi => "%rsi",
            Reg::Rdi => "%rdi",
            Reg::R8 => "%r8",
            Reg::R9 => "%r9",
            Reg::Rbp => "%rbp",
            Reg::Rsp => "%rsp",
            Reg::Eax => "%eax",
            Reg::Ecx => "%ecx",
            Reg::Edx => "%edx",
            Reg::Al => "%al",
            Reg::Cl => "%cl",
        })
    }
}
