use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    /// A bank line contains something other than a decimal digit.
    #[error("bank contains non-digit character {found:?}")]
    #[diagnostic(
        code(day3::malformed_input),
        help("every battery in a bank is rated with a single digit from 0 to 9")
    )]
    MalformedInput {
        found: char,
        #[source_code]
        src: String,
        #[label("not a digit")]
        span: SourceSpan,
    },

    /// The caller asked for more digits than the bank holds, or for none at all.
    #[error("cannot select {requested} digits from a bank of {available}")]
    #[diagnostic(
        code(day3::invalid_selection_length),
        help("the selection length must be between 1 and the bank length")
    )]
    InvalidSelectionLength { requested: usize, available: usize },

    #[error("a {length}-digit selection does not fit in a u64")]
    #[diagnostic(code(day3::value_overflow))]
    ValueOverflow { length: usize },

    #[error("total joltage of {banks} banks does not fit in a u64")]
    #[diagnostic(code(day3::total_overflow))]
    TotalOverflow { banks: usize },
}
