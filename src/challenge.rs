//! 74-day habit challenge.
//!
//! Tracks per-day task completion, mood, energy and a journal entry, and
//! keeps a Fertility Habits Index (FHI). The index is recomputed on every
//! mutation, so reading it never triggers work.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::score::scoring::truncate_score;

pub const CHALLENGE_DAYS: usize = 74;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub completed: Vec<bool>,
    pub mood: Option<u8>,
    pub energy: Option<u8>,
    pub journal: Option<String>,
}

impl DayEntry {
    fn new(task_count: usize) -> Self {
        Self {
            completed: vec![false; task_count],
            mood: None,
            energy: None,
            journal: None,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&c| c).count()
    }

    /// A day counts toward the index once anything was recorded on it.
    pub fn has_activity(&self) -> bool {
        self.completed_count() > 0
            || self.mood.is_some()
            || self.energy.is_some()
            || self.journal.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeProgress {
    start: NaiveDate,
    task_count: usize,
    days: Vec<DayEntry>,
    fhi: u8,
}

impl ChallengeProgress {
    pub fn new(start: NaiveDate, task_count: usize) -> Self {
        Self {
            start,
            task_count,
            days: vec![DayEntry::new(task_count); CHALLENGE_DAYS],
            fhi: 0,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Fertility Habits Index, 0–100.
    pub fn fhi(&self) -> u8 {
        self.fhi
    }

    /// 1-based challenge day for `today`, clamped to the challenge length.
    pub fn day_number(&self, today: NaiveDate) -> usize {
        let elapsed = (today - self.start).num_days().max(0);
        usize::try_from(elapsed)
            .map_or(CHALLENGE_DAYS, |d| d + 1)
            .min(CHALLENGE_DAYS)
    }

    pub fn is_finished(&self, today: NaiveDate) -> bool {
        (today - self.start).num_days() >= CHALLENGE_DAYS as i64
    }

    pub fn day(&self, day: usize) -> Result<&DayEntry> {
        let idx = self.day_index(day)?;
        Ok(&self.days[idx])
    }

    /// Flip a task's completion. Returns the new state.
    pub fn toggle_task(&mut self, day: usize, task: usize) -> Result<bool> {
        let idx = self.day_index(day)?;
        if task >= self.task_count {
            return Err(Error::OutOfRange {
                what: "task",
                value: task,
                min: 0,
                max: self.task_count.saturating_sub(1),
            });
        }
        let slot = &mut self.days[idx].completed[task];
        *slot = !*slot;
        let state = *slot;
        self.recompute();
        Ok(state)
    }

    pub fn set_mood(&mut self, day: usize, mood: u8) -> Result<()> {
        let idx = self.day_index(day)?;
        self.days[idx].mood = Some(check_rating("mood", mood)?);
        self.recompute();
        Ok(())
    }

    pub fn set_energy(&mut self, day: usize, energy: u8) -> Result<()> {
        let idx = self.day_index(day)?;
        self.days[idx].energy = Some(check_rating("energy", energy)?);
        self.recompute();
        Ok(())
    }

    pub fn set_journal(&mut self, day: usize, text: impl Into<String>) -> Result<()> {
        let idx = self.day_index(day)?;
        let text = text.into();
        self.days[idx].journal = (!text.trim().is_empty()).then_some(text);
        self.recompute();
        Ok(())
    }

    /// Days on which every task was completed.
    pub fn perfect_days(&self) -> usize {
        self.days
            .iter()
            .filter(|d| self.task_count > 0 && d.completed_count() == self.task_count)
            .count()
    }

    fn day_index(&self, day: usize) -> Result<usize> {
        if (1..=CHALLENGE_DAYS).contains(&day) {
            Ok(day - 1)
        } else {
            Err(Error::OutOfRange {
                what: "day",
                value: day,
                min: 1,
                max: CHALLENGE_DAYS,
            })
        }
    }

    /// Completed tasks over the tasks available on active days.
    fn recompute(&mut self) {
        let active: Vec<&DayEntry> = self.days.iter().filter(|d| d.has_activity()).collect();
        let possible = active.len() * self.task_count;
        self.fhi = if possible == 0 {
            0
        } else {
            let done: usize = active.iter().map(|d| d.completed_count()).sum();
            truncate_score(done as f64 / possible as f64 * 100.0)
        };
    }
}

fn check_rating(what: &'static str, value: u8) -> Result<u8> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            what,
            value: usize::from(value),
            min: usize::from(MIN_RATING),
            max: usize::from(MAX_RATING),
        })
    }
}

#[cfg(test)]
#[path = "challenge_test.rs"]
mod tests;
