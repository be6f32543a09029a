// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable view shapes handed to the presentation layer.

use crate::audience::Audience;
use promo_engine_domain::{Dealer, EffectiveStatus, Promotion, VehicleModel};
use serde::Serialize;
use time::OffsetDateTime;

/// One promotion as shown to an audience.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedEntry {
    pub promotion: Promotion,
    pub effective_status: EffectiveStatus,
    /// True if either target set could not be decoded.
    pub eligibility_degraded: bool,
    /// Dealers the promotion applies to; omitted for administrators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_dealers: Option<Vec<Dealer>>,
    /// Vehicle models the promotion applies to; omitted for administrators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_models: Option<Vec<VehicleModel>>,
}

/// Per-status totals for summary badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub active_count: usize,
    pub upcoming_count: usize,
    pub expired_count: usize,
    pub inactive_count: usize,
    pub total_count: usize,
}

impl StatusCounts {
    /// Counts the given statuses.
    #[must_use]
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = EffectiveStatus>,
    {
        let mut counts: Self = Self::default();
        for status in statuses {
            counts.record(status);
        }
        counts
    }

    const fn record(&mut self, status: EffectiveStatus) {
        match status {
            EffectiveStatus::Active => self.active_count += 1,
            EffectiveStatus::Upcoming => self.upcoming_count += 1,
            EffectiveStatus::Expired => self.expired_count += 1,
            EffectiveStatus::Inactive => self.inactive_count += 1,
        }
        self.total_count += 1;
    }

    /// Returns the count for one status.
    #[must_use]
    pub const fn get(&self, status: EffectiveStatus) -> usize {
        match status {
            EffectiveStatus::Active => self.active_count,
            EffectiveStatus::Upcoming => self.upcoming_count,
            EffectiveStatus::Expired => self.expired_count,
            EffectiveStatus::Inactive => self.inactive_count,
        }
    }
}

/// An ordered, audience-specific view of the promotion snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedView {
    pub audience: Audience,
    /// The instant every status in this view was derived at.
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub entries: Vec<ProjectedEntry>,
    pub counts: StatusCounts,
}

impl ProjectedView {
    /// Returns the ids of the listed promotions, in view order.
    #[must_use]
    pub fn promotion_ids(&self) -> Vec<u64> {
        self.entries
            .iter()
            .map(|entry| entry.promotion.id.value())
            .collect()
    }
}
