// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{Display, Formatter};

/// A convenient alias for Anyhow so consuming code doesn't need to add to `Cargo.toml`
pub type AnyhowError = anyhow::Error;

#[derive(Debug)]
/// An enum that encapsulates a variety of error types.
///
/// # Example
///
/// Error::argument("Select", "unknown field Foo")
pub enum Error {
    /// Invalid input detected before any remote call was made.
    Argument {
        /// The offending parameter name or projection expression.
        name: String,
        /// What is wrong with it.
        message: String,
    },
    /// The invocation was cancelled between pages.
    Cancelled(String),
    /// Configuration could not be read or parsed.
    Config(String),
    /// The service endpoint could not be resolved.
    NameResolution(AnyhowError, String),
    /// Pagination stopped before the marker ran out.
    Paging(String),
    /// Remote (transport or service) fault.
    Service(AnyhowError, String),
}

impl Error {
    /// Creates an argument error.
    pub fn argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Argument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the error was raised before any remote call.
    pub fn is_argument(&self) -> bool {
        matches!(self, Error::Argument { .. })
    }

    /// Returns `true` if the invocation was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled(_))
    }

    /// Returns the original remote fault, if any.
    pub fn fault(&self) -> Option<&AnyhowError> {
        match self {
            Error::NameResolution(e, _) | Error::Service(e, _) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Argument { name, message } => write!(f, "{name}: {message}"),
            Error::Cancelled(s) => write!(f, "{s}: cancelled"),
            Error::Config(s) | Error::Paging(s) => Display::fmt(s, f),
            Error::NameResolution(_, s) => Display::fmt(s, f),
            Error::Service(e, s) => write!(f, "{s}: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.fault().map(|e| {
            let source: &(dyn std::error::Error + 'static) = e.as_ref();
            source
        })
    }
}
