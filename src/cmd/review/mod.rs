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

pub mod session;

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use srcards_core::Fallible;
use srcards_core::rng::TinyRng;

use crate::cmd::review::session::Clock;
use crate::cmd::review::session::ReviewSession;
use crate::cmd::review::session::SessionSummary;
use crate::cmd::review::session::SystemClock;
use crate::store::DeckStore;
use crate::store::StoreKind;
use crate::store::open_store;

pub struct ReviewConfig {
    pub deck: PathBuf,
    pub store: StoreKind,
    /// Seed for the presentation order.
    pub seed: u64,
}

/// Reviews a deck interactively on the terminal.
pub fn review_deck(config: ReviewConfig) -> Fallible<()> {
    log::debug!(
        "Reviewing {} with the {} store",
        config.deck.display(),
        config.store
    );
    let mut store = open_store(config.store, config.deck);
    let mut rng = TinyRng::from_seed(config.seed);
    let mut input = stdin().lock();
    let mut output = stdout().lock();
    review(store.as_mut(), &SystemClock, &mut input, &mut output, &mut rng)?;
    Ok(())
}

/// Loads the deck from `store` and runs a session over it. Nothing is
/// presented if the deck fails to load.
pub fn review(
    store: &mut dyn DeckStore,
    clock: &dyn Clock,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    rng: &mut TinyRng,
) -> Fallible<SessionSummary> {
    let mut deck = store.load()?;
    ReviewSession::new(&mut deck, store, clock, input, output).run(rng)
}
