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
use serde_json::Value;

use crate::error::DeckError;
use crate::types::card::Card;

/// A titled, ordered collection of cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deck {
    pub title: String,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            title: title.into(),
            cards,
        }
    }

    /// Validates every card, reporting the first offending card by index.
    pub fn validate(&self) -> Result<(), DeckError> {
        for (idx, card) in self.cards.iter().enumerate() {
            card.validate().map_err(|e| match e {
                DeckError::Schema(msg) => DeckError::schema(format!("cards[{idx}]: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }
}

/// Parses a deck from the text of a JSON document.
///
/// Text that is not JSON at all is a format error. JSON that does not have
/// the shape of a deck (missing or mistyped fields, unknown fields, invalid
/// values) is a schema error.
pub fn parse_deck(text: &str) -> Result<Deck, DeckError> {
    let value: Value = serde_json::from_str(text).map_err(|e| DeckError::format(e.to_string()))?;
    let deck: Deck = serde_json::from_value(value).map_err(|e| DeckError::schema(e.to_string()))?;
    deck.validate()?;
    Ok(deck)
}

/// Renders a deck as a pretty-printed JSON document.
pub fn render_deck(deck: &Deck) -> Result<String, DeckError> {
    let mut text =
        serde_json::to_string_pretty(deck).map_err(|e| DeckError::format(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;
    use crate::types::timestamp::Timestamp;

    #[test]
    fn test_parse_minimal_deck() -> Fallible<()> {
        let deck = parse_deck(r#"{"title": "Spanish", "cards": []}"#)?;
        assert_eq!(deck, Deck::new("Spanish", vec![]));
        Ok(())
    }

    #[test]
    fn test_parse_full_card() -> Fallible<()> {
        let deck = parse_deck(
            r#"{
                "title": "Spanish",
                "cards": [
                    {"front": "hola", "back": "hello"},
                    {"front": "adiós", "back": "goodbye", "lastReview": "2024-03-01T08:00:00.000Z", "interval": 5}
                ]
            }"#,
        )?;
        assert_eq!(deck.cards.len(), 2);
        assert_eq!(deck.cards[0], Card::new("hola", "hello"));
        assert_eq!(
            deck.cards[1].last_review,
            Some(Timestamp::try_from("2024-03-01T08:00:00.000Z".to_string())?)
        );
        assert_eq!(deck.cards[1].interval, Some(5.0));
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_format_error() {
        let err = parse_deck("{ this is not json").unwrap_err();
        assert!(matches!(err, DeckError::Format(_)));
    }

    #[test]
    fn test_missing_back_is_schema_error() {
        let err = parse_deck(r#"{"title": "t", "cards": [{"front": "a", "back": "b"}, {"front": "c"}]}"#)
            .unwrap_err();
        assert!(matches!(err, DeckError::Schema(_)));
        assert!(err.to_string().contains("back"));
    }

    #[test]
    fn test_missing_title_is_schema_error() {
        let err = parse_deck(r#"{"cards": []}"#).unwrap_err();
        assert!(matches!(err, DeckError::Schema(_)));
    }

    #[test]
    fn test_wrong_types_are_schema_errors() {
        let docs = [
            r#"[]"#,
            r#"{"title": 1, "cards": []}"#,
            r#"{"title": "t", "cards": {}}"#,
            r#"{"title": "t", "cards": [{"front": 1, "back": "b"}]}"#,
            r#"{"title": "t", "cards": [{"front": "a", "back": "b", "interval": "5"}]}"#,
            r#"{"title": "t", "cards": [{"front": "a", "back": "b", "lastReview": "last week"}]}"#,
        ];
        for doc in docs {
            let err = parse_deck(doc).unwrap_err();
            assert!(matches!(err, DeckError::Schema(_)), "{doc}");
        }
    }

    #[test]
    fn test_unknown_fields_are_schema_errors() {
        let docs = [
            r#"{"title": "t", "cards": [], "extra": true}"#,
            r#"{"title": "t", "cards": [{"front": "a", "back": "b", "due": 3}]}"#,
        ];
        for doc in docs {
            let err = parse_deck(doc).unwrap_err();
            assert!(matches!(err, DeckError::Schema(_)), "{doc}");
        }
    }

    #[test]
    fn test_invalid_values_name_the_card() {
        let err = parse_deck(r#"{"title": "t", "cards": [{"front": "a", "back": "b"}, {"front": "c", "back": "d", "interval": -2}]}"#)
            .unwrap_err();
        assert!(matches!(err, DeckError::Schema(_)));
        assert!(err.to_string().contains("cards[1]"));
    }

    #[test]
    fn test_render_then_parse() -> Fallible<()> {
        let mut reviewed = Card::new("adiós", "goodbye");
        reviewed.last_review = Some(Timestamp::try_from("2024-03-01T08:00:00.123Z".to_string())?);
        reviewed.interval = Some(1.3);
        let deck = Deck::new("Spanish", vec![Card::new("hola", "hello"), reviewed]);
        let text = render_deck(&deck)?;
        assert_eq!(parse_deck(&text)?, deck);
        Ok(())
    }
}
