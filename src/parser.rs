use crate::chain::{ChainStatement, Rhs};
use eyre::{eyre, Result};
use winnow::{combinator::{alt, delimited, separated_pair}, prelude::*, token::take_while};

fn identifier<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

fn rhs(input: &mut &str) -> PResult<Rhs> {
    alt((
        separated_pair(identifier, '*', identifier).map(|(l, r)| Rhs::Mul(l.into(), r.into())),
        delimited("sqr(", identifier, ')').map(|s| Rhs::Square(s.into())),
        identifier.map(|s| Rhs::Alias(s.into())),
    ))
    .parse_next(input)
}

fn assignment(input: &mut &str) -> PResult<ChainStatement> {
    separated_pair(identifier, '=', rhs)
        .map(|(lhs, rhs)| ChainStatement::Assign(lhs.into(), rhs))
        .parse_next(input)
}

/// Parses one line of chain notation.
///
/// A line whose first character is `#` is a comment. Anything else must be an
/// assignment; a trailing `# ...` annotation is dropped and whitespace is
/// insignificant everywhere, including inside identifiers.
pub fn parse_line(line: &str) -> Result<ChainStatement> {
    if let Some(text) = line.strip_prefix('#') {
        return Ok(ChainStatement::Comment(text.into()));
    }
    let code = match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    };
    let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    assignment
        .parse(compact.as_str())
        .map_err(|e| eyre!("could not parse chain line {line:?}: {e}"))
}

pub fn parse(input: &str) -> Result<Vec<ChainStatement>> {
    input.lines().map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_alias_line() {
        let stmt = parse_line("t10 = input        #    0 : 1").unwrap();
        assert_eq!(stmt, ChainStatement::Assign("t10".into(), Rhs::Alias("input".into())));
    }

    #[test]
    fn parses_square_line() {
        let stmt = parse_line("t0 = sqr(t10)      #    1 : 2").unwrap();
        assert_eq!(stmt, ChainStatement::Assign("t0".into(), Rhs::Square("t10".into())));
    }

    #[test]
    fn parses_mul_line() {
        let stmt = parse_line("t1 = t0 * t10      #    2 : 3").unwrap();
        assert_eq!(
            stmt,
            ChainStatement::Assign("t1".into(), Rhs::Mul("t0".into(), "t10".into()))
        );
    }

    #[test]
    fn parses_comment_line() {
        let stmt = parse_line("# This is a comment").unwrap();
        assert_eq!(stmt, ChainStatement::Comment(" This is a comment".into()));
    }

    #[test]
    fn sqr_prefix_alone_is_an_alias() {
        let stmt = parse_line("t = sqrt").unwrap();
        assert_eq!(stmt, ChainStatement::Assign("t".into(), Rhs::Alias("sqrt".into())));
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in ["", "t10", "= x", "t =", "t = a *", "t = x = y", "  # indented comment"] {
            assert!(parse_line(line).is_err(), "line {line:?} should not parse");
        }
    }

    #[test]
    fn parse_error_names_the_line() {
        let err = parse_line("t0 banana").unwrap_err();
        assert!(err.to_string().contains("t0 banana"));
    }

    proptest! {
        #[test]
        fn parsing_is_deterministic(
            lhs in "[a-z][a-z0-9]{0,6}",
            l in "[a-z][a-z0-9]{0,6}",
            r in "[a-z][a-z0-9]{0,6}",
        ) {
            let line = format!("{lhs} = {l} * {r}");
            let first = parse_line(&line).unwrap();
            let second = parse_line(&line).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, ChainStatement::Assign(lhs, Rhs::Mul(l, r)));
        }

        #[test]
        fn whitespace_is_insignificant(pad in " {0,3}") {
            let spaced = format!("{pad}t0{pad}={pad}sqr({pad}t1{pad}){pad}");
            prop_assert_eq!(parse_line(&spaced).unwrap(), parse_line("t0=sqr(t1)").unwrap());
        }
    }
}
