//! The generated statement set and its rendering.

/// One emitted Rust statement.
///
/// `Let::mutable` starts out false and is decided later by
/// [`crate::analysis::infer_mutability`]; `SquareAssignMulti` only ever comes out
/// of [`crate::analysis::collapse_squarings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RustStmt {
    Comment(String),
    Let { name: String, expr: String, mutable: bool },
    MulAssign { name: String, operand: String },
    SquareAssign { name: String },
    SquareAssignMulti { name: String, count: usize },
}

impl RustStmt {
    /// The variable a statement declares or mutates. Comments have none.
    pub fn target(&self) -> Option<&str> {
        match self {
            RustStmt::Comment(_) => None,
            RustStmt::Let { name, .. }
            | RustStmt::MulAssign { name, .. }
            | RustStmt::SquareAssign { name }
            | RustStmt::SquareAssignMulti { name, .. } => Some(name),
        }
    }

    pub(crate) fn binding(name: impl Into<String>, expr: impl Into<String>) -> RustStmt {
        RustStmt::Let { name: name.into(), expr: expr.into(), mutable: false }
    }
}

/// Literal tokens used in the emitted code.
///
/// The method names match the field implementations this tool was written
/// against; rename them here if the target field type spells its helpers
/// differently.
#[derive(Debug, Clone)]
pub struct Syntax {
    pub let_kw: &'static str,
    pub mut_kw: &'static str,
    pub square_fn: &'static str,
    pub mul_assign_fn: &'static str,
    pub square_multi_fn: &'static str,
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax {
            let_kw: "let",
            mut_kw: "mut",
            square_fn: "square",
            mul_assign_fn: "mul_assign",
            square_multi_fn: "square_assign_multi",
        }
    }
}

impl Syntax {
    pub fn render_stmt(&self, stmt: &RustStmt) -> String {
        match stmt {
            RustStmt::Comment(text) => format!("//{text}"),
            RustStmt::Let { name, expr, mutable: false } => {
                format!("{} {name} = {expr};", self.let_kw)
            }
            RustStmt::Let { name, expr, mutable: true } => {
                format!("{} {} {name} = {expr};", self.let_kw, self.mut_kw)
            }
            RustStmt::MulAssign { name, operand } => {
                format!("{name}.{}(&{operand});", self.mul_assign_fn)
            }
            RustStmt::SquareAssign { name } => {
                format!("{name} = {name}.{}();", self.square_fn)
            }
            RustStmt::SquareAssignMulti { name, count } => {
                format!("{}(&mut {name}, {count});", self.square_multi_fn)
            }
        }
    }

    /// Renders the final sequence, one statement per line, in order.
    pub fn render(&self, stmts: &[RustStmt]) -> String {
        let mut out = String::new();
        for stmt in stmts {
            out.push_str(&self.render_stmt(stmt));
            out.push('\n');
        }
        out
    }
}
