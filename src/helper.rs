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

use srcards_core::Timestamp;
use srcards_core::types::card::Card;
use srcards_core::types::deck::Deck;

/// Parses an RFC 3339 timestamp, panicking on malformed input.
pub fn ts(s: &str) -> Timestamp {
    Timestamp::try_from(s.to_string()).unwrap()
}

/// A two-card deck: one new card, and one reviewed with a five day interval.
pub fn sample_deck() -> Deck {
    let mut reviewed = Card::new("adiós", "goodbye");
    reviewed.last_review = Some(ts("2024-03-01T08:00:00.000Z"));
    reviewed.interval = Some(5.0);
    Deck::new("Spanish", vec![Card::new("hola", "hello"), reviewed])
}
