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

use std::io::BufRead;
use std::io::Write;

use srcards_core::Fallible;
use srcards_core::Timestamp;
use srcards_core::interval::next_interval;
use srcards_core::rng::TinyRng;
use srcards_core::schedule::select_due;
use srcards_core::types::deck::Deck;

use crate::store::DeckStore;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The system's wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionSummary {
    /// Cards answered and persisted.
    pub reviewed: usize,
    /// How many of those were answered correctly.
    pub correct: usize,
}

/// Positions are indices into the session's due sequence.
enum State {
    /// Start state.
    Idle,
    /// Showing a card's front and waiting for an answer.
    Presenting { pos: usize },
    /// Checking an answer and updating the interval.
    Scoring { pos: usize, response: String },
    /// Stamping the review time and saving the card.
    Persisting { pos: usize },
    /// End state.
    Done,
}

/// An interactive review of a deck's due cards, one card at a time.
pub struct ReviewSession<'a> {
    deck: &'a mut Deck,
    store: &'a mut dyn DeckStore,
    clock: &'a dyn Clock,
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
    /// Indices into `deck.cards`, in presentation order.
    due: Vec<usize>,
    summary: SessionSummary,
}

impl<'a> ReviewSession<'a> {
    pub fn new(
        deck: &'a mut Deck,
        store: &'a mut dyn DeckStore,
        clock: &'a dyn Clock,
        input: &'a mut dyn BufRead,
        output: &'a mut dyn Write,
    ) -> Self {
        Self {
            deck,
            store,
            clock,
            input,
            output,
            due: Vec::new(),
            summary: SessionSummary::default(),
        }
    }

    /// Runs the session to completion. Any save failure aborts it; cards
    /// saved before the failure stay saved.
    pub fn run(mut self, rng: &mut TinyRng) -> Fallible<SessionSummary> {
        let mut state = State::Idle;
        loop {
            state = match state {
                State::Idle => self.start(rng)?,
                State::Presenting { pos } => self.present(pos)?,
                State::Scoring { pos, response } => self.score(pos, &response)?,
                State::Persisting { pos } => self.persist(pos)?,
                State::Done => break,
            };
        }
        self.finish()?;
        Ok(self.summary)
    }

    /// Due cards are selected once, with the instant the session starts.
    fn start(&mut self, rng: &mut TinyRng) -> Fallible<State> {
        let now = self.clock.now();
        self.due = select_due(&self.deck.cards, now, rng);
        log::debug!(
            "{} of {} cards due at {now}",
            self.due.len(),
            self.deck.cards.len()
        );
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.deck.title)?;
        writeln!(self.output, "{}", "-".repeat(self.deck.title.chars().count()))?;
        writeln!(self.output, "{} cards to review", self.due.len())?;
        Ok(self.next_card(0))
    }

    fn present(&mut self, pos: usize) -> Fallible<State> {
        let card = &self.deck.cards[self.due[pos]];
        writeln!(self.output)?;
        write!(self.output, "{} ", card.front)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            log::debug!("Input closed with {} cards left", self.due.len() - pos);
            return Ok(State::Done);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(State::Scoring {
            pos,
            response: line,
        })
    }

    fn score(&mut self, pos: usize, response: &str) -> Fallible<State> {
        let card = &mut self.deck.cards[self.due[pos]];
        let correct = response == card.back;
        let interval = next_interval(card.interval, correct);
        card.interval = Some(interval);
        if correct {
            self.summary.correct += 1;
            writeln!(self.output, "right")?;
        } else {
            writeln!(self.output, "wrong: {}", card.back)?;
        }
        writeln!(self.output, "Repeating in {interval:.1} days")?;
        Ok(State::Persisting { pos })
    }

    fn persist(&mut self, pos: usize) -> Fallible<State> {
        let idx = self.due[pos];
        self.deck.cards[idx].last_review = Some(self.clock.now());
        self.store.save(self.deck, idx)?;
        self.summary.reviewed += 1;
        Ok(self.next_card(pos + 1))
    }

    fn next_card(&self, pos: usize) -> State {
        if pos < self.due.len() {
            State::Presenting { pos }
        } else {
            State::Done
        }
    }

    fn finish(&mut self) -> Fallible<()> {
        let SessionSummary { reviewed, correct } = self.summary;
        log::debug!("Session finished: {reviewed} reviewed, {correct} correct");
        writeln!(self.output)?;
        writeln!(self.output, "{reviewed} reviewed, {correct} correct")?;
        Ok(())
    }
}
