/// One line of addition chain notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainStatement {
    Comment(String),
    Assign(String, Rhs),
}

/// The right hand side of a chain assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rhs {
    Alias(String),
    Square(String),
    Mul(String, String),
}
