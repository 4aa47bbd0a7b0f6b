//! Vertical tree rendering for the execution trace
//!
//! A node is printed with its right subtree above it and its left subtree
//! below it, each depth level indented by [`INDENT_PER_LEVEL`] columns:
//!
//! ```text
//!
//!      INTEGER(3)
//!
//! dec
//!
//!      VAR(id=0)
//!
//! --------------------------------------------------
//! ```
//!
//! Statement lists are shown as the classic left-leaning chain: a list of
//! `n` statements is `n` nested `stmtlist` nodes, each holding the newest
//! statement on the right and the preceding ones on the left.

use crate::interpreter::constants::{INDENT_PER_LEVEL, SEPARATOR_WIDTH};
use crate::parser::ast::AstNode;

/// Binary view over the AST used for layout
#[derive(Clone, Copy)]
enum View<'a> {
    Node(&'a AstNode),
    /// A non-empty run of statements
    List(&'a [AstNode]),
}

impl<'a> View<'a> {
    fn of(node: &'a AstNode) -> Option<View<'a>> {
        match node {
            AstNode::StmtList { statements, .. } => View::list(statements),
            node => Some(View::Node(node)),
        }
    }

    fn list(statements: &'a [AstNode]) -> Option<View<'a>> {
        if statements.is_empty() {
            None
        } else {
            Some(View::List(statements))
        }
    }

    fn label(&self) -> String {
        match self {
            View::Node(node) => node.label(),
            View::List(_) => "stmtlist".to_string(),
        }
    }

    /// (left, right) children
    fn children(&self) -> (Option<View<'a>>, Option<View<'a>>) {
        match *self {
            View::List(statements) => match statements.split_last() {
                Some((last, rest)) => (View::list(rest), View::of(last)),
                None => (None, None),
            },
            View::Node(node) => match node {
                AstNode::IntLiteral(..) | AstNode::Variable(..) => (None, None),
                AstNode::BinaryOp { left, right, .. } => (View::of(left), View::of(right)),
                AstNode::Declaration { target, init, .. } => (View::of(target), View::of(init)),
                AstNode::Assignment { target, value, .. } => (View::of(target), View::of(value)),
                AstNode::Print { expr, .. } => (View::of(expr), None),
                AstNode::If {
                    condition,
                    branches,
                    ..
                } => (View::of(condition), View::of(branches)),
                AstNode::Branches {
                    then_branch,
                    else_branch,
                    ..
                } => (View::of(then_branch), View::of(else_branch)),
                AstNode::StmtList { statements, .. } => View::List(statements).children(),
            },
        }
    }
}

fn render_into(out: &mut String, view: Option<View<'_>>, space: usize) {
    let Some(view) = view else {
        return;
    };
    let space = space + INDENT_PER_LEVEL;
    let (left, right) = view.children();

    render_into(out, right, space);

    out.push('\n');
    out.extend(std::iter::repeat(' ').take(space - INDENT_PER_LEVEL));
    out.push_str(&view.label());
    out.push('\n');

    render_into(out, left, space);
}

/// Render `node` without the closing separator
pub fn render_vertical(node: &AstNode) -> String {
    let mut out = String::new();
    render_into(&mut out, View::of(node), 0);
    out
}

/// Line closing each trace block
pub fn separator() -> String {
    format!("\n{}\n\n", "-".repeat(SEPARATOR_WIDTH))
}

/// Render one trace block: the vertical layout of `node` plus the separator
pub fn render_tree(node: &AstNode) -> String {
    let mut block = render_vertical(node);
    block.push_str(&separator());
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{BinOp, SourceLocation};
    use pretty_assertions::assert_eq;

    fn loc() -> SourceLocation {
        SourceLocation::new(1, 1)
    }

    fn lit(value: i32) -> AstNode {
        AstNode::int_literal(value, loc())
    }

    #[test]
    fn test_render_leaf() {
        assert_eq!(render_vertical(&lit(7)), "\nINTEGER(7)\n");
    }

    #[test]
    fn test_render_declaration() {
        let node = AstNode::declaration(0, lit(3), loc());
        let expected = concat!(
            "\n",
            "     INTEGER(3)\n",
            "\n",
            "dec\n",
            "\n",
            "     VAR(id=0)\n",
        );
        assert_eq!(render_vertical(&node), expected);
    }

    #[test]
    fn test_render_binary_op_nests_indentation() {
        // print(1 + 2 * 3)
        let expr = AstNode::binary_op(
            BinOp::Add,
            lit(1),
            AstNode::binary_op(BinOp::Mul, lit(2), lit(3), loc()),
            loc(),
        );
        let node = AstNode::print(expr, loc());
        let expected = concat!(
            "\nprint\n",
            "\n",
            "               INTEGER(3)\n",
            "\n",
            "          *\n",
            "\n",
            "               INTEGER(2)\n",
            "\n",
            "     +\n",
            "\n",
            "          INTEGER(1)\n",
        );
        assert_eq!(render_vertical(&node), expected);
    }

    #[test]
    fn test_statement_list_is_left_leaning_chain() {
        let list = AstNode::append(
            AstNode::append(AstNode::stmt_list(loc()), AstNode::print(lit(1), loc())),
            AstNode::print(lit(2), loc()),
        );
        let expected = concat!(
            "\n",
            "     print\n",
            "\n",
            "          INTEGER(2)\n",
            "\n",
            "stmtlist\n",
            "\n",
            "          print\n",
            "\n",
            "               INTEGER(1)\n",
            "\n",
            "     stmtlist\n",
        );
        assert_eq!(render_vertical(&list), expected);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(render_vertical(&AstNode::stmt_list(loc())), "");
    }

    #[test]
    fn test_block_ends_with_separator() {
        let block = render_tree(&lit(1));
        assert!(block.ends_with(&format!("\n{}\n\n", "-".repeat(50))));
        assert!(block.starts_with("\nINTEGER(1)\n"));
    }
}
