use std::fmt;

/// A rejected save request.
///
/// Each variant carries a distinct human-readable message suitable for
/// returning verbatim to the settings page. A rejected request never touches
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// Caller lacks the manage-settings capability.
    Unauthorized,
    /// Request token absent or not the one issued for this session.
    InvalidToken,
    /// No option identifier in the request.
    MissingOptionId,
    /// Identifier is not on the registered allow-list.
    UnknownOption(String),
    /// No value in the request.
    MissingValue,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Unauthorized => write!(f, "you are not allowed to manage settings"),
            SaveError::InvalidToken => write!(f, "invalid request token"),
            SaveError::MissingOptionId => write!(f, "missing option identifier"),
            SaveError::UnknownOption(id) => write!(f, "unknown option: {id:?}"),
            SaveError::MissingValue => write!(f, "missing option value"),
        }
    }
}

impl std::error::Error for SaveError {}
