use rstest::rstest;
use treewalk::interpreter::engine::Interpreter;
use treewalk::parser::parse_program;

fn printed(expr: &str) -> Vec<String> {
    let program = parse_program(&format!("print({});", expr)).expect("Parsing failed");
    let execution = Interpreter::new(program).run();
    execution.channels().effects().map(str::to_string).collect()
}

#[rstest]
#[case("1 + 2 * 3", 7)]
#[case("(1 + 2) * 3", 9)]
#[case("10 - 4 - 3", 3)]
#[case("100 / 10 / 5", 2)]
#[case("7 / 2", 3)]
#[case("0 - 7 / 2", -3)]
#[case("3 <= 3", 1)]
#[case("3 < 3", 0)]
#[case("3 >= 4", 0)]
#[case("4 > 3", 1)]
#[case("2 + 2 == 4", 1)]
#[case("2 * 3 != 6", 0)]
#[case("1 + 2 < 2 * 2", 1)]
#[case("2147483647 + 1", i32::MIN)]
fn test_expression_values(#[case] expr: &str, #[case] expected: i32) {
    assert_eq!(printed(expr), vec![format!("Print: {}", expected)]);
}

#[rstest]
#[case("5 / 0")]
#[case("5 / (3 - 3)")]
#[case("x / y")]
fn test_division_by_zero_prints_zero(#[case] expr: &str) {
    let program = parse_program(&format!("print({});", expr)).expect("Parsing failed");
    let execution = Interpreter::new(program).run();
    assert_eq!(
        execution.channels().effects().collect::<Vec<_>>(),
        vec!["Print: 0"]
    );
    assert_eq!(
        execution.channels().diagnostics().collect::<Vec<_>>(),
        vec!["Error: Division by zero at line 1"]
    );
}

#[test]
fn test_both_operands_evaluated_before_reporting() {
    // Left operand errors first, then the outer division
    let program = parse_program("print((1 / 0) / 0);").expect("Parsing failed");
    let execution = Interpreter::new(program).run();
    assert_eq!(execution.error_count(), 2);
}
