use srmcollider::SrmColliderError;

#[derive(Debug)]
pub enum CliError {
    Io {
        source: std::io::Error,
        path: Option<String>,
    },
    Csv {
        source: csv::Error,
        path: String,
    },
    ParseError {
        msg: String,
    },
    Engine(SrmColliderError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { source, path } => match path {
                Some(path) => write!(f, "io error on {}: {}", path, source),
                None => write!(f, "io error: {}", source),
            },
            Self::Csv { source, path } => write!(f, "csv error on {}: {}", path, source),
            Self::ParseError { msg } => write!(f, "parse error: {}", msg),
            Self::Engine(e) => write!(f, "{}", e),
        }
    }
}

impl From<SrmColliderError> for CliError {
    fn from(x: SrmColliderError) -> Self {
        Self::Engine(x)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(x: serde_json::Error) -> Self {
        Self::ParseError { msg: x.to_string() }
    }
}
