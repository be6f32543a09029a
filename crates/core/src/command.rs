// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_engine_domain::EncodedTargets;
use time::OffsetDateTime;

/// Input for creating a promotion.
///
/// The discount rate is a raw number here; it is validated when the
/// promotion is created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub name: String,
    pub description: String,
    pub discount_rate: f64,
    pub start_at: OffsetDateTime,
    pub end_at: OffsetDateTime,
    pub dealer_targets: EncodedTargets,
    pub model_targets: EncodedTargets,
}

/// A partial edit of a promotion. `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromotionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_rate: Option<f64>,
    pub start_at: Option<OffsetDateTime>,
    pub end_at: Option<OffsetDateTime>,
    pub dealer_targets: Option<EncodedTargets>,
    pub model_targets: Option<EncodedTargets>,
}

impl PromotionPatch {
    /// Returns true if the patch sets no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.discount_rate.is_none()
            && self.start_at.is_none()
            && self.end_at.is_none()
            && self.dealer_targets.is_none()
            && self.model_targets.is_none()
    }
}

/// A command represents an intended change to one existing promotion.
///
/// Creation and deletion are not commands: they add or remove the
/// aggregate itself rather than transform it.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move the promotion from unapproved to approved.
    Approve,
    /// Apply a partial edit.
    Update(PromotionPatch),
    /// Force the promotion inactive.
    SetInactive,
    /// Remove the inactive override.
    ClearInactive,
}
