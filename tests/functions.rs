use test_utils::{compile_ok, count_lines, has_label, has_line, line_index};

#[test]
fn prototypes_emit_nothing() {
    let assembly = compile_ok("int add(int a, int b); int main(){return add(1, 2);}");

    assert!(!has_label(&assembly, "add"));
    assert!(has_line(&assembly, "call add"));
}

#[test]
fn one_label_per_definition() {
    let assembly = compile_ok(
        "int helper(); int helper() { return 1; } int main() { return helper(); }",
    );

    assert_eq!(count_lines(&assembly, "helper:"), 1);
    assert_eq!(count_lines(&assembly, "main:"), 1);
}

#[test]
fn parameters_are_spilled_in_register_order() {
    let assembly = compile_ok("int f(int a, int b, int c) { return a + b + c; }");

    assert!(has_line(&assembly, "movq %rdi, -8(%rbp)"));
    assert!(has_line(&assembly, "movq %rsi, -16(%rbp)"));
    assert!(has_line(&assembly, "movq %rdx, -24(%rbp)"));
}

#[test]
fn six_parameters_use_all_argument_registers() {
    let assembly =
        compile_ok("int f(int a, int b, int c, int d, int e, int g) { return a; } int main() { return f(1, 2, 3, 4, 5, 6); }");

    for reg in ["%rdi", "%rsi", "%rdx", "%rcx", "%r8", "%r9"] {
        assert!(has_line(&assembly, &format!("popq {reg}")));
    }
}

#[test]
fn arguments_are_popped_left_to_right() {
    let assembly = compile_ok("int sub(int a, int b) { return a - b; } int main() { return sub(9, 4); }");

    let first = line_index(&assembly, "popq %rdi").unwrap();
    let second = line_index(&assembly, "popq %rsi").unwrap();
    assert!(first < second);
}

#[test]
fn al_is_zeroed_before_every_call() {
    let assembly = compile_ok(
        r#"int puts(char *s); int main(){ puts("one"); puts("two"); return 0; }"#,
    );

    assert_eq!(count_lines(&assembly, "call puts"), 2);

    // every call is preceded by zeroing the accumulator
    let mut previous: Option<&str> = None;
    for line in assembly.lines() {
        if line.trim() == "call puts" {
            assert_eq!(previous.map(str::trim), Some("movl $0, %eax"));
        }
        previous = Some(line);
    }
}

#[test]
fn forward_references_work() {
    let assembly = compile_ok("int main() { return later(); } int later() { return 4; }");

    assert!(has_line(&assembly, "call later"));
    assert!(has_label(&assembly, "later"));
}

#[test]
fn void_functions_fall_through() {
    let assembly = compile_ok("void nop() {} int main() { nop(); return 0; }");

    assert!(has_label(&assembly, "nop"));
    assert!(has_line(&assembly, "call nop"));
}
