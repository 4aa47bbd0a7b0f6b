// Integration tests for the interpreter: parse a whole program, run it, inspect the channels

use pretty_assertions::assert_eq;
use treewalk::interpreter::engine::{Execution, Interpreter};
use treewalk::parser::parse_program;

fn run(source: &str) -> Execution {
    let program = parse_program(source).expect("Parsing failed");
    Interpreter::new(program).run()
}

fn effects(execution: &Execution) -> Vec<&str> {
    execution.channels().effects().collect()
}

fn diagnostics(execution: &Execution) -> Vec<&str> {
    execution.channels().diagnostics().collect()
}

#[test]
fn test_declare_assign_print() {
    let execution = run("int a = 3; a = a + 4; print(a);");
    assert_eq!(
        effects(&execution),
        vec!["Declared var[0] = 3", "Assigned var[0] = 7", "Print: 7"]
    );
    assert!(execution.ran_clean());
    assert_eq!(execution.symbols().read(0), 7);
}

#[test]
fn test_if_runs_only_then_branch() {
    let execution = run("if (1 == 1): print(1); else: print(2); end");
    assert_eq!(effects(&execution), vec!["Print: 1"]);
}

#[test]
fn test_if_runs_only_else_branch() {
    let execution = run("if (1 == 2): print(1); else: print(2); end");
    assert_eq!(effects(&execution), vec!["Print: 2"]);
}

#[test]
fn test_if_without_else_and_false_condition() {
    let execution = run("if (1 == 2): print(1); end");
    assert!(effects(&execution).is_empty());
    assert!(execution.ran_clean());
}

#[test]
fn test_division_by_zero_continues() {
    let execution = run("print(5 / 0);\nprint(9);");
    assert_eq!(effects(&execution), vec!["Print: 0", "Print: 9"]);
    assert_eq!(diagnostics(&execution), vec!["Error: Division by zero at line 1"]);
    assert_eq!(execution.error_count(), 1);
    assert!(!execution.ran_clean());
}

#[test]
fn test_division_by_zero_inside_larger_expression() {
    // Only the failing subtree defaults to 0
    let execution = run("int a = 1 + 10 / (2 - 2) * 3;\nprint(a + 1);");
    assert_eq!(effects(&execution), vec!["Declared var[0] = 1", "Print: 2"]);
    assert_eq!(execution.error_count(), 1);
}

#[test]
fn test_unassigned_variable_reads_zero() {
    let execution = run("print(x);");
    assert_eq!(effects(&execution), vec!["Print: 0"]);
    assert!(execution.ran_clean());
}

#[test]
fn test_assignment_without_declaration_is_allowed() {
    let execution = run("b = 4;\nprint(b * 2);");
    assert_eq!(effects(&execution), vec!["Assigned var[0] = 4", "Print: 8"]);
    assert!(execution.ran_clean());
}

#[test]
fn test_statements_run_in_source_order() {
    let source = "\
print(1);
if (1):
    print(2);
    if (0): print(100); else: print(3); end
    print(4);
end
print(5);
";
    let execution = run(source);
    assert_eq!(
        effects(&execution),
        vec!["Print: 1", "Print: 2", "Print: 3", "Print: 4", "Print: 5"]
    );
}

#[test]
fn test_one_trace_block_per_executed_statement() {
    let source = "\
int a = 2;
if (a > 5):
    print(a);
    print(a * 2);
else:
    print(0);
end
";
    let execution = run(source);
    // dec, if, print(0); the two prints in the untaken branch get no block
    assert_eq!(execution.channels().trace_blocks().len(), 3);
    assert_eq!(effects(&execution), vec!["Declared var[0] = 2", "Print: 0"]);
}

#[test]
fn test_expression_statement_is_printed() {
    let execution = run("int a = 6;\na * 7;");
    assert_eq!(effects(&execution), vec!["Declared var[0] = 6", "Print: 42"]);
}

#[test]
fn test_variable_ids_follow_first_appearance() {
    let execution = run("int b = 1; int a = 2; print(a - b);");
    assert_eq!(
        effects(&execution),
        vec!["Declared var[0] = 1", "Declared var[1] = 2", "Print: 1"]
    );
    assert_eq!(execution.variable_name(0), Some("b"));
}

#[test]
fn test_syntax_error_means_nothing_runs() {
    let source = "print(1);\nprint(2)\nprint(3);";
    let err = parse_program(source).unwrap_err();
    assert_eq!(err.location.line, 3);
    assert!(err.diagnostic_line().starts_with("Error: "));
    assert!(err.diagnostic_line().ends_with(" at line 3"));
}

#[test]
fn test_trace_of_declaration() {
    let execution = run("int a = 3;");
    let expected = concat!(
        "\n",
        "     INTEGER(3)\n",
        "\n",
        "dec\n",
        "\n",
        "     VAR(id=0)\n",
        "\n",
        "--------------------------------------------------\n",
        "\n",
    );
    assert_eq!(execution.channels().trace_text(), expected);
}

#[test]
fn test_trace_of_if_includes_both_branches() {
    let execution = run("if (1 == 1): print(1); else: print(2); end");
    let if_block = concat!(
        "\n",
        "               print\n",
        "\n",
        "                    INTEGER(2)\n",
        "\n",
        "          stmtlist\n",
        "\n",
        "     branches\n",
        "\n",
        "               print\n",
        "\n",
        "                    INTEGER(1)\n",
        "\n",
        "          stmtlist\n",
        "\n",
        "if\n",
        "\n",
        "          INTEGER(1)\n",
        "\n",
        "     ==\n",
        "\n",
        "          INTEGER(1)\n",
        "\n",
        "--------------------------------------------------\n",
        "\n",
    );
    let print_block = concat!(
        "\n",
        "print\n",
        "\n",
        "     INTEGER(1)\n",
        "\n",
        "--------------------------------------------------\n",
        "\n",
    );

    let blocks = execution.channels().trace_blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], if_block);
    assert_eq!(blocks[1], print_block);
}

#[test]
fn test_empty_program() {
    let execution = run("// nothing here\n");
    assert!(effects(&execution).is_empty());
    assert!(execution.channels().trace_blocks().is_empty());
    assert!(execution.ran_clean());
}
