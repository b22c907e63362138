use test_utils::{compile_ok, has_line};

#[test]
fn uninitialized_globals_land_in_bss() {
    let assembly = compile_ok("int counter; char flag; int table[5]; int main(){return 0;}");

    assert!(has_line(&assembly, ".section .bss"));
    assert!(has_line(&assembly, ".comm counter, 4, 4"));
    assert!(has_line(&assembly, ".comm flag, 1, 1"));
    // 5 ints, alignment capped at 16
    assert!(has_line(&assembly, ".comm table, 20, 16"));
}

#[test]
fn zero_length_array_reserves_one_element() {
    let assembly = compile_ok("int empty[0]; int main(){return 0;}");
    assert!(has_line(&assembly, ".comm empty, 4, 4"));
}

#[test]
fn global_pointer_is_a_quadword() {
    let assembly = compile_ok("char *message; int main(){return 0;}");
    assert!(has_line(&assembly, ".comm message, 8, 8"));
}

#[test]
fn initialized_global_lands_in_data() {
    let assembly = compile_ok("int seed = 42; int main(){return seed;}");

    assert!(has_line(&assembly, ".section .data"));
    assert!(has_line(&assembly, ".long 42"));
    assert!(!assembly.contains(".comm seed"));
}

#[test]
fn globals_are_accessed_rip_relative() {
    let assembly =
        compile_ok("int counter; int main(){counter = 3; return counter;}");

    assert!(has_line(&assembly, "movl %eax, counter(%rip)"));
    assert!(has_line(&assembly, "movl counter(%rip), %eax"));
}

#[test]
fn global_arrays_decay_to_their_symbol() {
    let assembly = compile_ok("int table[4]; int main(){table[2] = 9; return table[2];}");

    assert!(has_line(&assembly, "leaq table(%rip), %rax"));
    assert!(has_line(&assembly, "shlq $2, %rax"));
}

#[test]
fn global_char_reads_sign_extend() {
    let assembly = compile_ok("char flag; int main(){flag = 'y'; return flag;}");

    assert!(has_line(&assembly, "movb %al, flag(%rip)"));
    assert!(has_line(&assembly, "movsbl flag(%rip), %eax"));
}
