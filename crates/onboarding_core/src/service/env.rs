//! Side-effect inputs of the reducer: wall clock and id generation.
//!
//! Keeping these behind a trait keeps `reduce` a pure function of its
//! arguments and lets callers pin dates and ids.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use std::cell::Cell;
use uuid::Uuid;

pub trait Environment {
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
    /// Current local timestamp.
    fn now(&self) -> NaiveDateTime;
    /// Fresh unique id value for any entity kind.
    fn fresh_id(&self) -> String;
}

/// Local system clock and UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }

    fn fresh_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic environment: frozen clock, sequential `id-N` ids.
#[derive(Debug)]
pub struct FixedEnvironment {
    now: NaiveDateTime,
    next_id: Cell<u64>,
}

impl FixedEnvironment {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            next_id: Cell::new(1),
        }
    }
}

impl Environment for FixedEnvironment {
    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn fresh_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        format!("id-{id}")
    }
}
