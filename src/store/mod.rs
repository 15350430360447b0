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

pub mod document;
pub mod record;

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;
use std::path::PathBuf;

use clap::ValueEnum;
use srcards_core::DeckError;
use srcards_core::types::deck::Deck;

use crate::store::document::DocumentStore;
use crate::store::record::RecordStore;

/// Persistent storage for a single deck.
///
/// After `save` returns, the card at `index` is durably recorded. A save that
/// is interrupted never corrupts cards saved by earlier calls.
pub trait DeckStore {
    /// Reads and validates the deck.
    fn load(&mut self) -> Result<Deck, DeckError>;

    /// Persists the review state of `deck.cards[index]`. Backends may write
    /// more than that card.
    fn save(&mut self, deck: &Deck, index: usize) -> Result<(), DeckError>;
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum StoreKind {
    /// A JSON document, rewritten whole on every save.
    Json,
    /// An SQLite database, updated one card at a time.
    Sqlite,
}

impl StoreKind {
    /// Picks a backend from the deck's file extension. Unknown extensions are
    /// treated as JSON.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("db" | "sqlite" | "sqlite3") => StoreKind::Sqlite,
            _ => StoreKind::Json,
        }
    }
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::Json => write!(f, "json"),
            StoreKind::Sqlite => write!(f, "sqlite"),
        }
    }
}

pub fn open_store(kind: StoreKind, path: PathBuf) -> Box<dyn DeckStore> {
    match kind {
        StoreKind::Json => Box::new(DocumentStore::new(path)),
        StoreKind::Sqlite => Box::new(RecordStore::new(path)),
    }
}
