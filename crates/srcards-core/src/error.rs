// Copyright 2026 The srcards Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport {
            message: msg.into(),
        }
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport {
            message: format!("I/O error: {value}"),
        }
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport {
            message: format!("JSON error: {value}"),
        }
    }
}

impl From<DeckError> for ErrorReport {
    fn from(value: DeckError) -> Self {
        ErrorReport {
            message: value.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {
    fn description(&self) -> &str {
        &self.message
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: msg.into(),
    })
}

/// Errors raised while loading or saving a deck. All of them are fatal to a
/// review session.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckError {
    /// The deck location could not be read or written.
    Io(String),
    /// The raw content is not a structured document.
    Format(String),
    /// The document does not have the shape of a deck.
    Schema(String),
}

impl DeckError {
    pub fn io(msg: impl Into<String>) -> Self {
        DeckError::Io(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        DeckError::Format(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        DeckError::Schema(msg.into())
    }
}

impl Display for DeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Io(msg) => write!(f, "unable to access deck: {msg}"),
            DeckError::Format(msg) => write!(f, "deck content is invalid: {msg}"),
            DeckError::Schema(msg) => write!(f, "deck has format errors: {msg}"),
        }
    }
}

impl Error for DeckError {}
