//! Translates addition chain listings into Rust field arithmetic.
//!
//! The input format is the one produced by addition chain search tools: one
//! assignment per line, where the right hand side is another variable, a
//! squaring `sqr(x)`, or a product `a * b`, with `#` comments. The output is a
//! block of `let` bindings and in-place `mul_assign`/`square` calls, with
//! mutability inferred from later use and consecutive squarings of the same
//! variable merged into one `square_assign_multi` call.

pub mod analysis;
pub mod chain;
pub mod lower;
pub mod parser;
pub mod rust;

pub use crate::rust::Syntax;

use crate::rust::RustStmt;
use eyre::Result;
use tracing::debug;

/// Runs the whole pipeline on one chain listing.
///
/// Verbose mode emits a separate binding before every in-place operation
/// instead of folding trivial cases into one expression. The translation is
/// all or nothing; the first malformed line aborts the run with no output.
pub fn convert(input: &str, verbose: bool, syntax: &Syntax) -> Result<String> {
    let chain = parser::parse(input)?;

    let mut stmts: Vec<RustStmt> = chain
        .into_iter()
        .flat_map(|stmt| lower::lower(stmt, verbose, syntax))
        .collect();
    debug!(statements = stmts.len(), "lowered chain");

    analysis::infer_mutability(&mut stmts);
    let stmts = analysis::collapse_squarings(stmts);
    debug!(statements = stmts.len(), "collapsed repeated squarings");

    Ok(syntax.render(&stmts))
}
