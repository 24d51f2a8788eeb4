//! Typed parse-time errors: malformed input is reported to the caller rather
//! than panicking, since analysis should never even start on unparseable
//! input.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unterminated multi-character variable name (missing ';') in {0:?}")]
    UnterminatedVariableName(String),

    #[error("empty variable token in clause {0:?}")]
    EmptyToken(String),

    #[error("dangling '-' with no following variable in {0:?}")]
    DanglingNegation(String),

    #[error("'=' shorthand clause {0:?} must have exactly one '=' separating two sides")]
    MalformedEquivalence(String),

    #[error("unrecognized clause syntax {0:?}")]
    UnrecognizedClause(String),
}
