use test_utils::{compile_ok, has_label, has_line};

const SRC: &str = "int main(){return 0;}";

#[test]
fn compile_return_zero() {
    let assembly = compile_ok(SRC);

    assert!(has_line(&assembly, ".section .note.GNU-stack,\"\",@progbits"));
    assert!(has_line(&assembly, ".section .text"));
    assert!(has_line(&assembly, ".globl main"));
    assert!(has_label(&assembly, "main"));

    assert!(has_line(&assembly, "pushq %rbp"));
    assert!(has_line(&assembly, "movq %rsp, %rbp"));
    assert!(has_line(&assembly, "movl $0, %eax"));
    assert!(has_line(&assembly, "leave"));
    assert!(has_line(&assembly, "ret"));
}

#[test]
fn empty_body_still_returns_zero() {
    let assembly = compile_ok("int main(){}");
    assert!(has_line(&assembly, "movl $0, %eax"));
    assert!(has_line(&assembly, "leave"));
    assert!(has_line(&assembly, "ret"));
}
