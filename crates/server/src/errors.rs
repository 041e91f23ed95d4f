use std::fmt;

/// Error when opening a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenPageError {
    /// Maximum number of open pages reached.
    TooManyPages,
}

impl fmt::Display for OpenPageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenPageError::TooManyPages => write!(f, "maximum number of open pages reached"),
        }
    }
}

impl std::error::Error for OpenPageError {}

/// Error for operations on an open page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Page token unknown or already closed.
    NotFound,
    /// Page data has not finished loading.
    Loading,
    /// The page model refused the action.
    Rejected(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotFound => write!(f, "page not found"),
            PageError::Loading => write!(f, "page is still loading"),
            PageError::Rejected(reason) => write!(f, "action rejected: {reason}"),
        }
    }
}

impl std::error::Error for PageError {}
