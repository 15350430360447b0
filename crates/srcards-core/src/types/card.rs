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

use serde::Deserialize;
use serde::Serialize;

use crate::error::DeckError;
use crate::interval::DEFAULT_INTERVAL;
use crate::interval::MAX_INTERVAL;
use crate::types::timestamp::Timestamp;

/// A single flashcard and its review state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Card {
    /// The prompt shown to the user.
    pub front: String,
    /// The expected answer.
    pub back: String,
    /// When the card was last reviewed. `None` if it never was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_review: Option<Timestamp>,
    /// The current review interval in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            last_review: None,
            interval: None,
        }
    }

    #[cfg(test)]
    pub fn is_new(&self) -> bool {
        self.last_review.is_none()
    }

    /// The interval in days, falling back to the default when unset.
    pub fn interval_or_default(&self) -> f64 {
        self.interval.unwrap_or(DEFAULT_INTERVAL)
    }

    /// Checks the constraints the type system does not: non-empty text, and
    /// a positive interval no larger than [`MAX_INTERVAL`].
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.front.is_empty() {
            return Err(DeckError::schema("`front` must not be empty"));
        }
        if self.back.is_empty() {
            return Err(DeckError::schema("`back` must not be empty"));
        }
        if let Some(interval) = self.interval {
            if !interval.is_finite() || interval <= 0.0 || interval > MAX_INTERVAL {
                return Err(DeckError::schema(format!(
                    "`interval` must be a positive 32-bit float, found {interval}"
                )));
            }
        }
        Ok(())
    }
}
