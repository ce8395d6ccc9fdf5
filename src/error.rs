use std::fmt;

/// Custom error types for the maze simulation
#[derive(Debug)]
pub enum MazeError {
    /// Maze layout file could not be opened or read
    FileAccess {
        path: String,
        source: std::io::Error,
    },
    /// Malformed maze layout (1-based line number)
    Parse { line: usize, message: String },
    /// Invalid direction string
    InvalidDirection(String),
    /// Coordinate not of the form `x,y`
    InvalidCoordinate(String),
    /// Simulation parameter outside its domain
    InvalidParameter(String),
}

impl MazeError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        MazeError::Parse {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::FileAccess { path, source } => {
                write!(f, "Error reading maze file {}: {}", path, source)
            }
            MazeError::Parse { line, message } => write!(f, "Invalid maze (line {}): {}", line, message),
            MazeError::InvalidDirection(dir) => write!(f, "Invalid direction: {}", dir),
            MazeError::InvalidCoordinate(coord) => write!(f, "Invalid coordinate: {}", coord),
            MazeError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::FileAccess { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, MazeError>;
