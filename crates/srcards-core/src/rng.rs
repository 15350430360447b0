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

/// A minimal, zero-dependency, completely insecure PRNG to shuffle the cards.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }

    /// Generate a random number in the range [0, max), without modulo bias.
    pub fn generate(&mut self, max: u32) -> u32 {
        assert!(max > 0);
        // Draws at or above `limit` would over-represent the low residues.
        let limit = u32::MAX - (u32::MAX % max);
        loop {
            let n = self.next_u32();
            if n < limit {
                return n % max;
            }
        }
    }
}

/// Fisher-Yates shuffle: every permutation of `v` is equally likely.
pub fn shuffle<T>(v: Vec<T>, rng: &mut TinyRng) -> Vec<T> {
    let mut v = v;
    for i in (1..v.len()).rev() {
        let j = rng.generate(i as u32 + 1) as usize;
        v.swap(i, j);
    }
    v
}
