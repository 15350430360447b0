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

//! srcards-core: Core library for the srcards flashcard reviewer.
//!
//! This library is free of terminal and storage I/O, and provides:
//! - The card and deck data model, with JSON document encoding and validation
//! - The interval growth model
//! - The due-selection predicate and a uniform shuffle of the due set

pub mod error;
pub mod interval;
pub mod rng;
pub mod schedule;
pub mod types;

// Re-exports for convenience
pub use error::{DeckError, ErrorReport, Fallible, fail};
pub use interval::{DEFAULT_INTERVAL, GROWTH_SCALAR, next_interval};
pub use schedule::{is_due, select_due};
pub use types::card::Card;
pub use types::deck::{Deck, parse_deck, render_deck};
pub use types::timestamp::Timestamp;
