use crate::chain::{ChainStatement, Rhs};
use crate::rust::{RustStmt, Syntax};

/// Lowers one chain statement to one or two output statements.
///
/// When the assignment target is literally one of its own operands the
/// operation mutates the existing binding in place. Otherwise a fresh binding
/// is introduced: in verbose mode as a separate `let` followed by the mutation
/// (for field types without `square`/`mul` helpers), in the default mode folded
/// into a single expression. The choice is purely syntactic name equality.
pub fn lower(stmt: ChainStatement, verbose: bool, syntax: &Syntax) -> Vec<RustStmt> {
    match stmt {
        ChainStatement::Comment(text) => vec![RustStmt::Comment(text)],
        ChainStatement::Assign(lhs, rhs) => lower_assign(lhs, rhs, verbose, syntax),
    }
}

fn lower_assign(lhs: String, rhs: Rhs, verbose: bool, syntax: &Syntax) -> Vec<RustStmt> {
    match rhs {
        Rhs::Alias(name) => vec![RustStmt::binding(lhs, name)],

        Rhs::Mul(left, right) if left == lhs => {
            vec![RustStmt::MulAssign { name: lhs, operand: right }]
        }
        Rhs::Mul(left, right) if right == lhs => {
            vec![RustStmt::MulAssign { name: lhs, operand: left }]
        }
        Rhs::Mul(left, right) if verbose => vec![
            RustStmt::binding(lhs.clone(), left),
            RustStmt::MulAssign { name: lhs, operand: right },
        ],
        Rhs::Mul(left, right) => vec![RustStmt::binding(lhs, format!("{left} * &{right}"))],

        Rhs::Square(operand) if operand == lhs => vec![RustStmt::SquareAssign { name: lhs }],
        Rhs::Square(operand) if verbose => vec![
            RustStmt::binding(lhs.clone(), operand),
            RustStmt::SquareAssign { name: lhs },
        ],
        Rhs::Square(operand) => {
            vec![RustStmt::binding(lhs, format!("{operand}.{}()", syntax.square_fn))]
        }
    }
}
