// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thought identifier generation.
//!
//! An id is the decimal millisecond clock followed by nine lowercase base36
//! characters, e.g. `1700000000000k3j9x0q2a`. The clock part is strictly
//! increasing per generator, so ids from one generator never collide even
//! within the same millisecond; the random part separates generators.

use std::sync::atomic::{AtomicI64, Ordering};

use rand::Rng;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Issues ids with a monotonic time component.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id using the wall clock.
    pub fn next_id(&self) -> String {
        self.next_id_at(chrono::Utc::now().timestamp_millis())
    }

    /// Next id for a given clock reading. A reading at or behind the last one
    /// issued is bumped to one past it.
    pub fn next_id_at(&self, now_millis: i64) -> String {
        let millis = self.reserve(now_millis);
        format!("{millis}{}", random_suffix(&mut rand::thread_rng()))
    }

    fn reserve(&self, now_millis: i64) -> i64 {
        let mut last = self.last_millis.load(Ordering::Relaxed);
        loop {
            let next = now_millis.max(last.saturating_add(1));
            match self.last_millis.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

fn random_suffix(rng: &mut impl Rng) -> String {
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}
