use std::fmt;

/// Errors produced when strictly parsing a formula string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The input string was empty or contained only whitespace.
    EmptyInput,
    /// An unexpected character was encountered at the given position.
    UnexpectedChar { pos: usize, ch: char },
    /// A symbol token does not name an element of the periodic table.
    UnknownElement { pos: usize, text: String },
    /// A parenthesis was opened without a matching close, or vice versa.
    UnmatchedParen { pos: usize },
    /// A multiplicity could not be parsed as a number (e.g. "1.2.3").
    InvalidCount { pos: usize, text: String },
    /// A multiplicity appeared with no element or group before it.
    LeadingCount { pos: usize },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty formula string"),
            Self::UnexpectedChar { pos, ch } => {
                write!(f, "unexpected character '{}' at position {}", ch, pos)
            }
            Self::UnknownElement { pos, text } => {
                write!(f, "unknown element '{}' at position {}", text, pos)
            }
            Self::UnmatchedParen { pos } => {
                write!(f, "unmatched parenthesis at position {}", pos)
            }
            Self::InvalidCount { pos, text } => {
                write!(f, "invalid count '{}' at position {}", text, pos)
            }
            Self::LeadingCount { pos } => {
                write!(f, "count with nothing to scale at position {}", pos)
            }
        }
    }
}

impl std::error::Error for FormulaError {}
