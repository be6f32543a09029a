// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Named projection presets.
//!
//! Each preset is three decisions over a [`ProjectionSnapshot`]:
//!
//! - the universe: which promotions the audience can know about at all
//!   (statuses plus an optional dealer or model scope); counts cover it
//! - the listing: which of those are shown as entries
//! - the order: a total order, so equal inputs give equal output

use crate::audience::Audience;
use crate::response::{ProjectedEntry, ProjectedView, StatusCounts};
use crate::snapshot::{ProjectionSnapshot, ResolvedPromotion};
use promo_engine_domain::{DealerId, EffectiveStatus, ModelId};
use std::cmp::{Ordering, Reverse};

/// A named view preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Every promotion, pending approvals first.
    ApprovalQueue,
    /// Active and upcoming promotions, optionally only those that apply
    /// to one dealer.
    DealerCatalog {
        /// Restrict to promotions resolving to this dealer.
        dealer: Option<DealerId>,
    },
    /// Active promotions, optionally widened to upcoming ones and
    /// restricted to one vehicle model.
    ///
    /// Unapproved promotions read as upcoming whatever their window, so the
    /// widened listing and `upcomingCount` include promotions still waiting
    /// for approval.
    CustomerDiscovery {
        /// Also list upcoming promotions, pending approvals included.
        include_upcoming: bool,
        /// Restrict to promotions resolving to this model.
        model: Option<ModelId>,
    },
}

impl Projection {
    #[must_use]
    pub const fn approval_queue() -> Self {
        Self::ApprovalQueue
    }

    #[must_use]
    pub const fn dealer_catalog() -> Self {
        Self::DealerCatalog { dealer: None }
    }

    #[must_use]
    pub const fn customer_discovery() -> Self {
        Self::CustomerDiscovery {
            include_upcoming: false,
            model: None,
        }
    }

    /// Returns the audience this preset is composed for.
    #[must_use]
    pub const fn audience(&self) -> Audience {
        match self {
            Self::ApprovalQueue => Audience::Administrator,
            Self::DealerCatalog { .. } => Audience::Dealer,
            Self::CustomerDiscovery { .. } => Audience::Customer,
        }
    }

    pub(crate) fn apply(&self, snapshot: &ProjectionSnapshot) -> ProjectedView {
        let universe: Vec<&ResolvedPromotion> = snapshot
            .entries()
            .iter()
            .filter(|entry| self.in_universe(entry))
            .collect();

        let counts: StatusCounts = StatusCounts::tally(universe.iter().map(|e| e.effective_status));

        let mut listed: Vec<&ResolvedPromotion> = universe
            .into_iter()
            .filter(|entry| self.lists(entry.effective_status))
            .collect();
        listed.sort_by(|a, b| self.compare(a, b));

        let audience: Audience = self.audience();
        let entries: Vec<ProjectedEntry> = listed
            .into_iter()
            .map(|entry| to_entry(entry, audience))
            .collect();

        tracing::debug!(
            %audience,
            listed = entries.len(),
            total = counts.total_count,
            "projected view"
        );

        ProjectedView {
            audience,
            generated_at: snapshot.generated_at(),
            entries,
            counts,
        }
    }

    fn in_universe(&self, entry: &ResolvedPromotion) -> bool {
        match self {
            Self::ApprovalQueue => true,
            Self::DealerCatalog { dealer } => {
                entry.effective_status.is_live_or_pending()
                    && dealer.is_none_or(|id| entry.dealers.includes(id))
            }
            Self::CustomerDiscovery { model, .. } => {
                entry.effective_status.is_live_or_pending()
                    && model.is_none_or(|id| entry.models.includes(id))
            }
        }
    }

    const fn lists(&self, status: EffectiveStatus) -> bool {
        match self {
            Self::ApprovalQueue | Self::DealerCatalog { .. } => true,
            Self::CustomerDiscovery {
                include_upcoming, ..
            } => match status {
                EffectiveStatus::Active => true,
                EffectiveStatus::Upcoming => *include_upcoming,
                EffectiveStatus::Expired | EffectiveStatus::Inactive => false,
            },
        }
    }

    fn compare(&self, a: &ResolvedPromotion, b: &ResolvedPromotion) -> Ordering {
        match self {
            Self::ApprovalQueue => {
                let key = |e: &ResolvedPromotion| {
                    (
                        queue_priority(e),
                        Reverse(e.promotion.start_at),
                        Reverse(e.promotion.created_at),
                        Reverse(e.promotion.id),
                    )
                };
                key(a).cmp(&key(b))
            }
            Self::DealerCatalog { .. } => {
                let key = |e: &ResolvedPromotion| {
                    (
                        e.effective_status != EffectiveStatus::Active,
                        e.promotion.start_at,
                        e.promotion.id,
                    )
                };
                key(a).cmp(&key(b))
            }
            Self::CustomerDiscovery { .. } => {
                let key = |e: &ResolvedPromotion| (e.promotion.start_at, e.promotion.id);
                key(a).cmp(&key(b))
            }
        }
    }
}

/// Ranks a promotion in the approval queue; lower sorts first.
///
/// Pending approvals lead, then approved upcoming, active, forced inactive
/// and finally expired campaigns.
#[must_use]
pub const fn queue_priority(entry: &ResolvedPromotion) -> u8 {
    match entry.effective_status {
        EffectiveStatus::Upcoming if !entry.promotion.approval.is_approved() => 0,
        EffectiveStatus::Upcoming => 1,
        EffectiveStatus::Active => 2,
        EffectiveStatus::Inactive => 3,
        EffectiveStatus::Expired => 4,
    }
}

fn to_entry(entry: &ResolvedPromotion, audience: Audience) -> ProjectedEntry {
    let resolved: bool = audience.sees_resolved_entities();
    ProjectedEntry {
        promotion: entry.promotion.clone(),
        effective_status: entry.effective_status,
        eligibility_degraded: entry.is_degraded(),
        resolved_dealers: resolved.then(|| entry.dealers.entries.clone()),
        resolved_models: resolved.then(|| entry.models.entries.clone()),
    }
}
