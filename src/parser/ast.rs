// AST (Abstract Syntax Tree) definitions for the interpreter

/// Index of a variable slot in the symbol store
pub type VarId = usize;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
}

impl BinOp {
    /// The operator as written in source, also used as its tree label
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
        }
    }

    pub fn is_comparison(self) -> bool {
        !matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div)
    }
}

/// AST nodes representing statements, expressions and statement lists.
///
/// Statement variants hold their children as full nodes rather than narrowed
/// types, so the executor still validates shapes (a declaration target must
/// be a [`AstNode::Variable`], an `If` must carry [`AstNode::Branches`]).
/// The constructors below always build the well-formed shape.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    // Expressions
    IntLiteral(i32, SourceLocation),
    Variable(VarId, SourceLocation),
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },

    // Statements
    Declaration {
        target: Box<AstNode>,
        init: Box<AstNode>,
        location: SourceLocation,
    },
    Assignment {
        target: Box<AstNode>,
        value: Box<AstNode>,
        location: SourceLocation,
    },
    Print {
        expr: Box<AstNode>,
        location: SourceLocation,
    },
    If {
        condition: Box<AstNode>,
        branches: Box<AstNode>,
        location: SourceLocation,
    },

    /// Then/else holder attached to an `If`. Both sides are statement lists;
    /// a missing `else` is an empty list.
    Branches {
        then_branch: Box<AstNode>,
        else_branch: Box<AstNode>,
        location: SourceLocation,
    },

    /// Ordered statement sequence, oldest first
    StmtList {
        statements: Vec<AstNode>,
        location: SourceLocation,
    },
}

impl AstNode {
    pub fn int_literal(value: i32, location: SourceLocation) -> Self {
        AstNode::IntLiteral(value, location)
    }

    pub fn variable(id: VarId, location: SourceLocation) -> Self {
        AstNode::Variable(id, location)
    }

    pub fn binary_op(op: BinOp, left: AstNode, right: AstNode, location: SourceLocation) -> Self {
        AstNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location,
        }
    }

    pub fn declaration(id: VarId, init: AstNode, location: SourceLocation) -> Self {
        AstNode::Declaration {
            target: Box::new(AstNode::Variable(id, location)),
            init: Box::new(init),
            location,
        }
    }

    pub fn assignment(id: VarId, value: AstNode, location: SourceLocation) -> Self {
        AstNode::Assignment {
            target: Box::new(AstNode::Variable(id, location)),
            value: Box::new(value),
            location,
        }
    }

    pub fn print(expr: AstNode, location: SourceLocation) -> Self {
        AstNode::Print {
            expr: Box::new(expr),
            location,
        }
    }

    /// Build an `If` with its branch holder. `else_branch` of `None` becomes
    /// an empty list so every `If` has the same shape.
    pub fn if_stmt(
        condition: AstNode,
        then_branch: AstNode,
        else_branch: Option<AstNode>,
        location: SourceLocation,
    ) -> Self {
        let else_branch = else_branch.unwrap_or_else(|| AstNode::stmt_list(location));
        AstNode::If {
            condition: Box::new(condition),
            branches: Box::new(AstNode::Branches {
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
                location,
            }),
            location,
        }
    }

    /// An empty statement list
    pub fn stmt_list(location: SourceLocation) -> Self {
        AstNode::StmtList {
            statements: Vec::new(),
            location,
        }
    }

    /// Append `stmt` after everything in `previous`.
    ///
    /// `previous` is normally a `StmtList`; any other node is treated as a
    /// one-statement list. A list passed as `stmt` is spliced in so a list
    /// never directly contains another list.
    pub fn append(previous: AstNode, stmt: AstNode) -> Self {
        let (mut statements, location) = match previous {
            AstNode::StmtList {
                statements,
                location,
            } => (statements, location),
            other => {
                let location = *other.location();
                (vec![other], location)
            }
        };

        match stmt {
            AstNode::StmtList {
                statements: inner, ..
            } => statements.extend(inner),
            stmt => statements.push(stmt),
        }

        AstNode::StmtList {
            statements,
            location,
        }
    }

    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::IntLiteral(_, loc) => loc,
            AstNode::Variable(_, loc) => loc,
            AstNode::BinaryOp { location, .. } => location,
            AstNode::Declaration { location, .. } => location,
            AstNode::Assignment { location, .. } => location,
            AstNode::Print { location, .. } => location,
            AstNode::If { location, .. } => location,
            AstNode::Branches { location, .. } => location,
            AstNode::StmtList { location, .. } => location,
        }
    }

    /// Label printed for this node by the tree renderer
    pub fn label(&self) -> String {
        match self {
            AstNode::IntLiteral(value, _) => format!("INTEGER({})", value),
            AstNode::Variable(id, _) => format!("VAR(id={})", id),
            AstNode::BinaryOp { op, .. } => op.symbol().to_string(),
            AstNode::Declaration { .. } => "dec".to_string(),
            AstNode::Assignment { .. } => "assign".to_string(),
            AstNode::Print { .. } => "print".to_string(),
            AstNode::If { .. } => "if".to_string(),
            AstNode::Branches { .. } => "branches".to_string(),
            AstNode::StmtList { .. } => "stmtlist".to_string(),
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            AstNode::IntLiteral(..) | AstNode::Variable(..) | AstNode::BinaryOp { .. }
        )
    }

    /// Number of statements if this is a list, `None` otherwise
    pub fn list_len(&self) -> Option<usize> {
        match self {
            AstNode::StmtList { statements, .. } => Some(statements.len()),
            _ => None,
        }
    }
}

/// A fully recognized program: the root statement list plus the names the
/// parser assigned to each variable id.
#[derive(Debug, Clone)]
pub struct Program {
    pub root: AstNode,
    pub variables: Vec<String>,
}

impl Program {
    pub fn new(root: AstNode, variables: Vec<String>) -> Self {
        Program { root, variables }
    }

    /// Number of distinct variables discovered while parsing
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of top-level statements
    pub fn len(&self) -> usize {
        self.root.list_len().unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Program {
    fn default() -> Self {
        Program::new(AstNode::stmt_list(SourceLocation::new(1, 1)), Vec::new())
    }
}
