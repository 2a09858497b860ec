use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A search was requested before any dataset had been built into an index.
    IndexNotBuilt,
    InvalidFieldMode(String),
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexNotBuilt => {
                write!(f, "Index Not Built: a dataset must be built before searching")
            }
            Error::InvalidFieldMode(mode) => write!(
                f,
                "Invalid Field Mode: \"{}\" (expected one of isin, symbol, name, country, description, auto)",
                mode
            ),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(format!("CSV: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ParserError(format!("JSON: {}", err))
    }
}
