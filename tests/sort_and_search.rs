use test_utils::{compile_ok, count_lines, has_label, has_line};

/// Sort five numbers, print them with `int_to_string` + `puts`, then print
/// the index `binary_search` finds for 3.
const SRC: &str = r#"
int puts(char *s);

void swap(int values[], int i, int j) {
    int tmp;
    tmp = values[i];
    values[i] = values[j];
    values[j] = tmp;
}

void bubble_sort(int values[], int count) {
    int i;
    int j;
    for (i = 0; i < count - 1; i = i + 1) {
        for (j = 0; j < count - 1 - i; j = j + 1) {
            if (values[j] > values[j + 1])
                swap(values, j, j + 1);
        }
    }
}

int int_to_string(int value, char *buffer) {
    char reversed[12];
    int length;
    int i;
    length = 0;
    if (value == 0) {
        buffer[0] = '0';
        buffer[1] = '\0';
        return 1;
    }
    if (value < 0) {
        buffer[0] = '-';
        return 1 + int_to_string(0 - value, &buffer[1]);
    }
    while (value > 0) {
        reversed[length] = '0' + value % 10;
        value = value / 10;
        length = length + 1;
    }
    for (i = 0; i < length; i = i + 1)
        buffer[i] = reversed[length - 1 - i];
    buffer[length] = '\0';
    return length;
}

int binary_search(int values[], int count, int needle) {
    int lo;
    int hi;
    int mid;
    lo = 0;
    hi = count - 1;
    while (lo <= hi) {
        mid = (lo + hi) / 2;
        if (values[mid] == needle)
            return mid;
        if (values[mid] < needle)
            lo = mid + 1;
        else
            hi = mid - 1;
    }
    return -1;
}

int main() {
    int numbers[5];
    char buffer[16];
    int i;
    int index;

    numbers[0] = 5;
    numbers[1] = 2;
    numbers[2] = 9;
    numbers[3] = 1;
    numbers[4] = 3;

    bubble_sort(numbers, 5);

    puts("sorted numbers");
    for (i = 0; i < 5; i = i + 1) {
        int_to_string(numbers[i], buffer);
        puts(buffer);
    }
    puts("");

    puts("search result");
    index = binary_search(numbers, 5, 3);
    int_to_string(index, buffer);
    puts(buffer);
    return 0;
}
"#;

#[test]
fn compile_sort_and_search() {
    let assembly = compile_ok(SRC);

    // one label per definition, none for the puts prototype
    for name in ["swap", "bubble_sort", "int_to_string", "binary_search", "main"] {
        assert_eq!(count_lines(&assembly, &format!("{name}:")), 1, "{name}");
    }
    assert!(!has_label(&assembly, "puts"));

    // every call site names its callee
    assert_eq!(count_lines(&assembly, "call puts"), 5);
    assert_eq!(count_lines(&assembly, "call swap"), 1);
    assert_eq!(count_lines(&assembly, "call bubble_sort"), 1);
    assert_eq!(count_lines(&assembly, "call binary_search"), 1);
    // two calls from main plus the recursive one
    assert_eq!(count_lines(&assembly, "call int_to_string"), 3);

    // the literals are pooled in order of appearance
    assert!(assembly.contains(".str0:\n\t.string \"sorted numbers\""));
    assert!(assembly.contains(".str1:\n\t.string \"\""));
    assert!(assembly.contains(".str2:\n\t.string \"search result\""));

    // the frame of main holds both arrays: 5 ints then 16 chars
    assert!(has_line(&assembly, "leaq -32(%rbp), %rax"));
    assert!(has_line(&assembly, "leaq -48(%rbp), %rax"));
}

#[test]
fn division_by_two_in_binary_search() {
    let assembly = compile_ok(SRC);
    assert!(has_line(&assembly, "cltd"));
    assert!(has_line(&assembly, "idivl %ecx"));
}
