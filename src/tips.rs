//! Deterministic daily tip selection.
//!
//! Three distinct indices are drawn from the tip pool for each calendar day.
//! The draw is seeded from the ISO date string, so the same day always yields
//! the same tips and a new day yields a new set. "Checked" state belongs to
//! the caller and is scoped to one date through [`DailyTips`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};

pub const TIPS_PER_DAY: usize = 3;

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// FNV-1a hash of the date string.
///
/// Other implementations seeding from a different hash select different tips.
pub fn seed_for(iso_date: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325; // FNV offset basis
    for byte in iso_date.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x100000001b3); // FNV prime
    }
    hash
}

/// 64-bit linear congruential generator.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return an index below `bound` (> 0).
    fn next_below(&mut self, bound: usize) -> usize {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state % bound as u64) as usize
    }
}

/// Draw up to `count` distinct indices from `0..pool_len` without
/// replacement, returned in ascending order.
pub fn select_indices(seed: u64, pool_len: usize, count: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..pool_len).collect();
    let mut rng = Lcg::new(seed);
    let mut picked = Vec::with_capacity(count.min(pool_len));
    while picked.len() < count && !pool.is_empty() {
        let i = rng.next_below(pool.len());
        picked.push(pool.remove(i));
    }
    picked.sort_unstable();
    picked
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The tip indices for `date`.
pub fn tips_for_date(date: NaiveDate, pool_len: usize) -> Vec<usize> {
    select_indices(seed_for(&iso_date(date)), pool_len, TIPS_PER_DAY)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Today's selection plus the caller's checked marks for that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTips {
    pub date: NaiveDate,
    pub indices: Vec<usize>,
    pub checked: BTreeSet<usize>,
}

impl DailyTips {
    pub fn new(date: NaiveDate, pool_len: usize) -> Self {
        Self {
            date,
            indices: tips_for_date(date, pool_len),
            checked: BTreeSet::new(),
        }
    }

    /// Flip the checked mark of a selected tip. Returns the new state;
    /// indices outside today's selection are ignored and report `false`.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.indices.contains(&index) {
            return false;
        }
        if !self.checked.remove(&index) {
            self.checked.insert(index);
            return true;
        }
        false
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    /// Carry the state to `date`: same date keeps the checked marks, any
    /// other date starts a fresh selection.
    pub fn roll_to(self, date: NaiveDate, pool_len: usize) -> Self {
        if date == self.date {
            self
        } else {
            Self::new(date, pool_len)
        }
    }
}

#[cfg(test)]
#[path = "tips_test.rs"]
mod tests;
