//! Whole-sequence rewrite passes over the emitted statements.

use crate::rust::RustStmt;

/// Marks each binding mutable when a later statement overwrites it in place.
///
/// Only the first subsequent statement with the same target matters: a
/// mutation there makes the binding `let mut`, another `let` shadows the name
/// with an independent binding and leaves the original untouched, even if that
/// rebinding is itself mutated further down.
pub fn infer_mutability(stmts: &mut [RustStmt]) {
    for i in 0..stmts.len() {
        if !matches!(stmts[i], RustStmt::Let { .. }) {
            continue;
        }
        let mut mutated = false;
        for later in &stmts[i + 1..] {
            if later.target() == stmts[i].target() {
                mutated = !matches!(later, RustStmt::Let { .. });
                break;
            }
        }
        if let RustStmt::Let { mutable, .. } = &mut stmts[i] {
            *mutable = mutated;
        }
    }
}

/// Merges runs of two or more consecutive squarings of the same variable into
/// a single repeated-squaring call. Any other statement, including a squaring
/// of a different variable, ends the run.
pub fn collapse_squarings(stmts: Vec<RustStmt>) -> Vec<RustStmt> {
    let mut out = Vec::with_capacity(stmts.len());
    let mut iter = stmts.into_iter().peekable();
    while let Some(stmt) = iter.next() {
        match stmt {
            RustStmt::SquareAssign { name } => {
                let mut count = 1;
                while matches!(iter.peek(), Some(RustStmt::SquareAssign { name: n }) if *n == name)
                {
                    iter.next();
                    count += 1;
                }
                if count > 1 {
                    out.push(RustStmt::SquareAssignMulti { name, count });
                } else {
                    out.push(RustStmt::SquareAssign { name });
                }
            }
            other => out.push(other),
        }
    }
    out
}
