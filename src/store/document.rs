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

use std::fs::canonicalize;
use std::fs::metadata;
use std::fs::read_to_string;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use srcards_core::DeckError;
use srcards_core::types::deck::Deck;
use srcards_core::types::deck::parse_deck;
use srcards_core::types::deck::render_deck;
use tempfile::NamedTempFile;

use crate::store::DeckStore;

/// A deck stored as a single JSON document. Every save rewrites the whole
/// document.
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn io_error(&self, err: std::io::Error) -> DeckError {
        DeckError::io(format!("{}: {err}", self.path.display()))
    }

    /// Writes `text` to a temporary file next to the deck, then renames it
    /// over the deck, so readers only ever see a complete document. A
    /// symlinked deck is written through to its target.
    fn write_atomically(&self, text: &str) -> Result<(), DeckError> {
        let target = canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir: &Path = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(text.as_bytes()).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        // Temporary files are created owner-only; keep the deck's own mode.
        if let Ok(meta) = metadata(&target) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| self.io_error(e))?;
        }
        tmp.persist(&target).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

impl DeckStore for DocumentStore {
    fn load(&mut self) -> Result<Deck, DeckError> {
        let text = read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let deck = parse_deck(&text)?;
        log::debug!(
            "Loaded {} cards from {}",
            deck.cards.len(),
            self.path.display()
        );
        Ok(deck)
    }

    fn save(&mut self, deck: &Deck, index: usize) -> Result<(), DeckError> {
        let text = render_deck(deck)?;
        self.write_atomically(&text)?;
        log::debug!("Saved card {index} to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::fs::write;

    use srcards_core::Fallible;
    use srcards_core::Timestamp;
    use srcards_core::types::card::Card;
    use tempfile::tempdir;

    use super::*;
    use crate::helper::sample_deck;

    #[test]
    fn test_load_missing_file() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = DocumentStore::new(dir.path().join("nope.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
        Ok(())
    }

    #[test]
    fn test_load_invalid_json() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("deck.json");
        write(&path, "title: Spanish")?;
        let err = DocumentStore::new(path).load().unwrap_err();
        assert!(matches!(err, DeckError::Format(_)));
        Ok(())
    }

    #[test]
    fn test_load_schema_error_leaves_file_alone() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("deck.json");
        let text = r#"{"title": "Spanish", "cards": [{"front": "hola"}]}"#;
        write(&path, text)?;
        let err = DocumentStore::new(path.clone()).load().unwrap_err();
        assert!(matches!(err, DeckError::Schema(_)));
        assert_eq!(read_to_string(&path)?, text);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("deck.json");
        let mut store = DocumentStore::new(path);
        let mut deck = sample_deck();
        store.save(&deck, 0)?;
        assert_eq!(store.load()?, deck);

        deck.cards[1].interval = Some(6.5);
        deck.cards[1].last_review = Some(Timestamp::try_from("2024-05-01T10:00:00.000Z".to_string())?);
        store.save(&deck, 1)?;
        let reloaded = store.load()?;
        assert_eq!(reloaded, deck);
        assert_eq!(reloaded.cards[0], Card::new("hola", "hello"));
        Ok(())
    }

    #[test]
    fn test_save_leaves_no_temporary_files() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("deck.json");
        let mut store = DocumentStore::new(path);
        let deck = sample_deck();
        store.save(&deck, 0)?;
        store.save(&deck, 1)?;
        let entries = std::fs::read_dir(dir.path())?.count();
        assert_eq!(entries, 1);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink() -> Fallible<()> {
        use std::fs::create_dir;
        use std::fs::symlink_metadata;
        use std::os::unix::fs::symlink;

        let dir = tempdir()?;
        create_dir(dir.path().join("decks"))?;
        let target = dir.path().join("decks").join("spanish.json");
        let link = dir.path().join("deck.json");
        let mut deck = sample_deck();
        write(&target, render_deck(&deck)?)?;
        symlink(&target, &link)?;

        let mut store = DocumentStore::new(link.clone());
        deck.cards[0].interval = Some(1.3);
        store.save(&deck, 0)?;

        assert!(symlink_metadata(&link)?.file_type().is_symlink());
        assert_eq!(parse_deck(&read_to_string(&target)?)?, deck);
        assert_eq!(std::fs::read_dir(dir.path().join("decks"))?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_save_into_missing_directory() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing").join("deck.json");
        let err = DocumentStore::new(path).save(&sample_deck(), 0).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
        Ok(())
    }
}
