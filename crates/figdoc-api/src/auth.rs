//! Request authentication.

use std::fmt;

/// Credentials sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// A personal access token, sent as `X-Figma-Token`.
    PersonalToken(String),
    /// An OAuth access token, sent as a bearer token.
    OAuth(String),
}

impl Auth {
    pub fn personal(token: impl Into<String>) -> Self {
        Auth::PersonalToken(token.into())
    }

    pub fn oauth(token: impl Into<String>) -> Self {
        Auth::OAuth(token.into())
    }

    /// The header name and value to attach to a request.
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Auth::PersonalToken(token) => ("X-Figma-Token", token.clone()),
            Auth::OAuth(token) => ("Authorization", format!("Bearer {}", token)),
        }
    }
}

// Tokens are never printed.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::PersonalToken(_) => f.write_str("PersonalToken(..)"),
            Auth::OAuth(_) => f.write_str("OAuth(..)"),
        }
    }
}
