use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum M3uError {
    Encoding(String),
    Path(String),
    Syntax(String),
}

impl Display for M3uError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(e) => write!(f, "EncodingError: {}", e),
            Self::Path(e) => write!(f, "PathError: {}", e),
            Self::Syntax(e) => write!(f, "SyntaxError: {}", e),
        }
    }
}

impl std::error::Error for M3uError {}
