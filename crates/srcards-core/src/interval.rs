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

/// Review interval, in days.
pub type Interval = f64;

/// The interval of a card that has never been given one.
pub const DEFAULT_INTERVAL: Interval = 1.0;

/// The factor an interval grows by on a correct answer.
pub const GROWTH_SCALAR: f64 = 1.3;

/// The largest interval a deck can hold: the top of the 32-bit float range.
pub const MAX_INTERVAL: Interval = f32::MAX as f64;

/// Computes a card's next interval. Correct answers grow the interval, up to
/// [`MAX_INTERVAL`], and wrong answers hold it. The interval never shrinks.
pub fn next_interval(current: Option<Interval>, correct: bool) -> Interval {
    let current = current.unwrap_or(DEFAULT_INTERVAL);
    if correct {
        (current * GROWTH_SCALAR).min(MAX_INTERVAL).max(current)
    } else {
        current
    }
}
