//! Typed errors for the core operations.
//!
//! Every variant is recoverable. The `Display` text doubles as the status
//! message shown to the user, so the shell can print an error as-is.

use thiserror::Error;

/// Broad category of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was blank or missing.
    Validation,
    /// The named user does not exist.
    NotFound,
    /// Wrong credential.
    Auth,
    /// The username is already taken.
    Conflict,
    /// The operation needs a logged-in session.
    State,
    /// A user tried to befriend themselves.
    SelfReference,
}

/// Errors returned by the directory, playlist and system operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid username!")]
    InvalidUsername,

    #[error("Invalid password!")]
    InvalidPassword,

    #[error("Invalid song name!")]
    InvalidSong,

    #[error("Username already exists!")]
    DuplicateUser(String),

    #[error("User not found!")]
    UserNotFound(String),

    #[error("Incorrect password!")]
    WrongPassword,

    #[error("Login first!")]
    NotLoggedIn,

    #[error("Cannot add yourself!")]
    SelfFriend,
}

impl CoreError {
    /// Category this error falls into.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUsername | Self::InvalidPassword | Self::InvalidSong => {
                ErrorKind::Validation
            }
            Self::DuplicateUser(_) => ErrorKind::Conflict,
            Self::UserNotFound(_) => ErrorKind::NotFound,
            Self::WrongPassword => ErrorKind::Auth,
            Self::NotLoggedIn => ErrorKind::State,
            Self::SelfFriend => ErrorKind::SelfReference,
        }
    }
}

/// Shorthand for results carrying a [`CoreError`].
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// `true` if `value` is empty or only whitespace.
///
/// Whitespace here follows Java's `Character.isWhitespace`: Unicode
/// whitespace plus the separators U+001C..=U+001F, minus NEL and the
/// no-break spaces U+00A0, U+2007 and U+202F.
pub(crate) fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}

fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}
