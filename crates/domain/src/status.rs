// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Effective status derivation.
//!
//! A promotion's status is never stored. It is computed from the current
//! instant, the promotion window, the approval state and the administrative
//! override every time it is read.
//!
//! ## Rules (in priority order)
//!
//! 1. Override `Inactive` → `Inactive`
//! 2. Unapproved → `Upcoming` (pending review is never shown as running)
//! 3. `now < start_at` → `Upcoming`
//! 4. `start_at <= now <= end_at` → `Active`
//! 5. `now > end_at` → `Expired`

use crate::error::DomainError;
use crate::types::{Approval, LifecycleOverride};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Computed lifecycle state of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveStatus {
    /// Not yet running: before its window, or still awaiting approval.
    Upcoming,
    /// Approved and inside its window.
    Active,
    /// Approved and past its window.
    Expired,
    /// Forced inactive by an administrator.
    Inactive,
}

impl EffectiveStatus {
    /// All statuses, in declaration order.
    pub const ALL: [Self; 4] = [Self::Upcoming, Self::Active, Self::Expired, Self::Inactive];

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Inactive => "inactive",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns true for statuses a dealer or customer may still act on.
    #[must_use]
    pub const fn is_live_or_pending(&self) -> bool {
        matches!(self, Self::Active | Self::Upcoming)
    }
}

impl FromStr for EffectiveStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives the effective status of a promotion at `now`.
///
/// Pure and total: every input combination maps to exactly one status, and
/// the same inputs always map to the same status. The caller supplies `now`
/// (usually from a [`Clock`](crate::Clock)); this function never reads the
/// wall clock.
#[must_use]
pub fn derive_status(
    now: OffsetDateTime,
    start_at: OffsetDateTime,
    end_at: OffsetDateTime,
    approval: Approval,
    lifecycle_override: Option<LifecycleOverride>,
) -> EffectiveStatus {
    if matches!(lifecycle_override, Some(LifecycleOverride::Inactive)) {
        return EffectiveStatus::Inactive;
    }

    if !approval.is_approved() || now < start_at {
        return EffectiveStatus::Upcoming;
    }

    if now <= end_at {
        EffectiveStatus::Active
    } else {
        EffectiveStatus::Expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in EffectiveStatus::ALL {
            let s = status.as_str();
            match EffectiveStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = EffectiveStatus::parse_str("running");
        assert!(matches!(result, Err(DomainError::InvalidStatus(_))));
    }

    #[test]
    fn test_live_or_pending() {
        assert!(EffectiveStatus::Active.is_live_or_pending());
        assert!(EffectiveStatus::Upcoming.is_live_or_pending());
        assert!(!EffectiveStatus::Expired.is_live_or_pending());
        assert!(!EffectiveStatus::Inactive.is_live_or_pending());
    }
}
