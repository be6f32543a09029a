// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injectable time source.
//!
//! Nothing in the engine reads the wall clock directly. Services and
//! projections take a [`Clock`] and read it once per operation, so every
//! promotion in a list is evaluated against the same instant.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};

/// A source of the current instant.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock pinned to an instant that only moves when told to.
///
/// Used by tests and by callers replaying a snapshot "as of" a given time.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<OffsetDateTime>,
}

impl FixedClock {
    #[must_use]
    pub const fn at(instant: OffsetDateTime) -> Self {
        Self {
            instant: Cell::new(instant),
        }
    }

    /// Moves the clock to `instant`.
    pub fn set(&self, instant: OffsetDateTime) {
        self.instant.set(instant);
    }

    /// Moves the clock forward (or backward, for a negative duration).
    ///
    /// Stops at the earliest or latest representable instant instead of
    /// overflowing.
    pub fn advance(&self, by: Duration) {
        self.instant.set(self.instant.get().saturating_add(by));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.instant.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}
