use micro_c::CompileError;
use test_utils::compile_err;

#[test]
fn unknown_character_is_a_lex_error() {
    let error = compile_err("int main() { return @; }");
    assert!(matches!(error, CompileError::Lex(_)));
}

#[test]
fn unterminated_string_is_a_lex_error() {
    let error = compile_err("int main() { puts(\"oops); }");
    assert!(matches!(error, CompileError::Lex(_)));
}

#[test]
fn missing_semicolon_is_a_parse_error() {
    let error = compile_err("int main() { return 0 }");
    let CompileError::Parse(parse_error) = error else {
        panic!("expected a parse error");
    };
    assert!(parse_error.message.contains("';'"));
}

#[test]
fn call_of_non_identifier_is_a_parse_error() {
    let error = compile_err("int main() { int a[1]; a[0](); return 0; }");
    let CompileError::Parse(parse_error) = error else {
        panic!("expected a parse error");
    };
    assert!(parse_error.message.contains("function name"));
}

#[test]
fn double_pointer_is_rejected() {
    let error = compile_err("int **p; int main() { return 0; }");
    assert!(matches!(error, CompileError::Parse(_)));
}

#[test]
fn seventh_parameter_is_rejected() {
    let error = compile_err("int f(int a, int b, int c, int d, int e, int g, int h);");
    let CompileError::Parse(parse_error) = error else {
        panic!("expected a parse error");
    };
    assert!(parse_error.message.contains("too many parameters"));
}

#[test]
fn seventh_call_argument_is_a_codegen_error() {
    let error = compile_err("int f(int a); int main() { return f(1, 2, 3, 4, 5, 6, 7); }");
    let CompileError::Codegen(codegen_error) = error else {
        panic!("expected a codegen error");
    };
    assert!(codegen_error.message.contains("more than six arguments"));
}

#[test]
fn undefined_identifier_is_a_codegen_error() {
    let error = compile_err("int main() { return nope; }");
    let CompileError::Codegen(codegen_error) = error else {
        panic!("expected a codegen error");
    };
    assert!(codegen_error.message.contains("nope"));
}

#[test]
fn assignment_to_literal_is_a_codegen_error() {
    let error = compile_err("int main() { 1 = 2; return 0; }");
    let CompileError::Codegen(codegen_error) = error else {
        panic!("expected a codegen error");
    };
    assert!(codegen_error.message.contains("lvalue"));
}

#[test]
fn errors_carry_positions() {
    let error = compile_err("int main() {\n  return @;\n}");
    let CompileError::Lex(lex_error) = error else {
        panic!("expected a lex error");
    };
    assert_eq!(lex_error.position, (2, 10));
    assert!(format!("{lex_error}").contains("(2:10)"));
}
