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

use crate::rng::TinyRng;
use crate::rng::shuffle;
use crate::types::card::Card;
use crate::types::timestamp::Timestamp;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whether a card should be reviewed at `now`: it was never reviewed, or more
/// than its interval has elapsed since its last review.
pub fn is_due(card: &Card, now: Timestamp) -> bool {
    match card.last_review {
        None => true,
        Some(last_review) => {
            let elapsed_ms = now.since(last_review).num_milliseconds() as f64;
            elapsed_ms > card.interval_or_default() * MILLIS_PER_DAY
        }
    }
}

/// Returns the indices of the due cards, in random order.
pub fn select_due(cards: &[Card], now: Timestamp, rng: &mut TinyRng) -> Vec<usize> {
    let due: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| is_due(card, now))
        .map(|(idx, _)| idx)
        .collect();
    shuffle(due, rng)
}
