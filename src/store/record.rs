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

use std::path::Path;
use std::path::PathBuf;

use rusqlite::Connection;
use rusqlite::ErrorCode;
use rusqlite::OpenFlags;
use rusqlite::params;
use srcards_core::DeckError;
use srcards_core::Timestamp;
use srcards_core::types::card::Card;
use srcards_core::types::deck::Deck;

use crate::store::DeckStore;

/// Tables a deck database must contain.
#[cfg(test)]
pub const SCHEMA: &str = "
CREATE TABLE deck (
    title TEXT NOT NULL
) STRICT;
CREATE TABLE card (
    position INTEGER PRIMARY KEY NOT NULL,
    front TEXT NOT NULL,
    back TEXT NOT NULL,
    last_review TEXT,
    interval REAL
) STRICT;
";

/// A deck stored in an SQLite database, one row per card. The database is
/// opened once and each save updates a single row.
pub struct RecordStore {
    path: PathBuf,
    conn: Option<Connection>,
    /// The `position` key of each loaded card, in deck order.
    positions: Vec<i64>,
}

impl RecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            conn: None,
            positions: Vec::new(),
        }
    }

    /// Opens the database on first use. The file must already exist.
    fn connection(&mut self) -> Result<&Connection, DeckError> {
        if self.conn.is_none() {
            let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
            let conn = Connection::open_with_flags(&self.path, flags)
                .map_err(|e| classify(&self.path, e))?;
            log::debug!("Opened deck database {}", self.path.display());
            self.conn = Some(conn);
        }
        self.conn
            .as_ref()
            .ok_or_else(|| DeckError::io(format!("{}: database is not open", self.path.display())))
    }

    /// Creates a deck database at `path` holding `deck`.
    #[cfg(test)]
    pub fn create(path: &Path, deck: &Deck) -> Result<(), DeckError> {
        let mut conn = Connection::open(path).map_err(|e| classify(path, e))?;
        let tx = conn.transaction().map_err(|e| classify(path, e))?;
        tx.execute_batch(SCHEMA).map_err(|e| classify(path, e))?;
        tx.execute("INSERT INTO deck (title) VALUES (?1)", params![deck.title])
            .map_err(|e| classify(path, e))?;
        for (position, card) in deck.cards.iter().enumerate() {
            tx.execute(
                "INSERT INTO card (position, front, back, last_review, interval) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    position as i64,
                    card.front,
                    card.back,
                    card.last_review.map(String::from),
                    card.interval
                ],
            )
            .map_err(|e| classify(path, e))?;
        }
        tx.commit().map_err(|e| classify(path, e))?;
        Ok(())
    }
}

struct Row {
    position: i64,
    front: String,
    back: String,
    last_review: Option<String>,
    interval: Option<f64>,
}

impl DeckStore for RecordStore {
    fn load(&mut self) -> Result<Deck, DeckError> {
        let path = self.path.clone();
        let conn = self.connection()?;
        let decks: i64 = conn
            .query_row("SELECT COUNT(*) FROM deck", [], |row| row.get(0))
            .map_err(|e| classify(&path, e))?;
        if decks != 1 {
            return Err(DeckError::schema(format!(
                "{}: expected exactly one deck row, found {decks}",
                path.display()
            )));
        }
        let title: String = conn
            .query_row("SELECT title FROM deck", [], |row| row.get(0))
            .map_err(|e| classify(&path, e))?;
        let mut stmt = conn
            .prepare("SELECT position, front, back, last_review, interval FROM card ORDER BY position")
            .map_err(|e| classify(&path, e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Row {
                    position: row.get(0)?,
                    front: row.get(1)?,
                    back: row.get(2)?,
                    last_review: row.get(3)?,
                    interval: row.get(4)?,
                })
            })
            .map_err(|e| classify(&path, e))?;

        let mut positions = Vec::new();
        let mut cards = Vec::new();
        for row in rows {
            let row = row.map_err(|e| classify(&path, e))?;
            let last_review = match row.last_review {
                Some(text) => Some(Timestamp::try_from(text).map_err(|e| {
                    DeckError::schema(format!("card at position {}: {e}", row.position))
                })?),
                None => None,
            };
            positions.push(row.position);
            cards.push(Card {
                front: row.front,
                back: row.back,
                last_review,
                interval: row.interval,
            });
        }
        drop(stmt);

        let deck = Deck::new(title, cards);
        deck.validate()?;
        self.positions = positions;
        log::debug!("Loaded {} cards from {}", deck.cards.len(), path.display());
        Ok(deck)
    }

    fn save(&mut self, deck: &Deck, index: usize) -> Result<(), DeckError> {
        let path = self.path.clone();
        let (Some(card), Some(&position)) = (deck.cards.get(index), self.positions.get(index)) else {
            return Err(DeckError::io(format!(
                "{}: no loaded card at index {index}",
                path.display()
            )));
        };
        let conn = self.connection()?;
        let changed = conn
            .execute(
                "UPDATE card SET last_review = ?1, interval = ?2 WHERE position = ?3",
                params![card.last_review.map(String::from), card.interval, position],
            )
            .map_err(|e| classify(&path, e))?;
        if changed != 1 {
            return Err(DeckError::io(format!(
                "{}: card at position {position} has disappeared",
                path.display()
            )));
        }
        log::debug!("Saved card at position {position} to {}", path.display());
        Ok(())
    }
}

/// Sorts SQLite failures into the deck error taxonomy.
fn classify(path: &Path, err: rusqlite::Error) -> DeckError {
    let msg = format!("{}: {err}", path.display());
    if let Some(code) = err.sqlite_error_code() {
        return match code {
            ErrorCode::NotADatabase => DeckError::format(msg),
            ErrorCode::CannotOpen
            | ErrorCode::PermissionDenied
            | ErrorCode::ReadOnly
            | ErrorCode::SystemIoFailure
            | ErrorCode::DiskFull
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked => DeckError::io(msg),
            // Missing tables or columns, constraint violations.
            _ => DeckError::schema(msg),
        };
    }
    match err {
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::QueryReturnedNoRows => DeckError::schema(msg),
        _ => DeckError::io(msg),
    }
}
