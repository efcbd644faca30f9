//! Pager Errors

/// Failure of a single round-trip with the comment store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never produced a usable response
    Transport(String),
    /// The backend answered with a non-success code
    Application(String),
}

impl StoreError {
    /// Text suitable for showing to the user
    pub fn message(&self) -> &str {
        match self {
            StoreError::Transport(msg) | StoreError::Application(msg) => msg,
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "Network error: {}", msg),
            StoreError::Application(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Why a pager operation did not complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    /// Author or body was blank after trimming
    EmptyInput,
    /// An add is already in flight
    Busy,
    Store(StoreError),
}

impl std::fmt::Display for PagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PagerError::EmptyInput => write!(f, "Name and comment must not be empty"),
            PagerError::Busy => write!(f, "A comment is already being submitted"),
            PagerError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PagerError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for PagerError {
    fn from(e: StoreError) -> Self {
        PagerError::Store(e)
    }
}

pub type PagerResult<T> = Result<T, PagerError>;
