// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use promo_engine_domain::{Promotion, PromotionId};
use time::OffsetDateTime;

/// Represents the entity performing an action.
///
/// The engine does not authenticate anyone; the caller's auth layer
/// decides who may act and passes the resulting identity in for attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "administrator", "dealer", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// An administrator acting through the manufacturer console.
    #[must_use]
    pub fn administrator(id: &str) -> Self {
        Self::new(id.to_string(), String::from("administrator"))
    }

    /// The engine itself or a scheduled job.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from("system"), String::from("system"))
    }
}

/// The lifecycle change that was performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleAction {
    /// A promotion was created (always unapproved).
    Create,
    /// A promotion moved from unapproved to approved.
    Approve,
    /// One or more editable fields changed.
    Update {
        /// Wire names of the fields that changed, in a fixed order.
        fields: Vec<&'static str>,
    },
    /// The inactive override was applied.
    SetInactive,
    /// The inactive override was removed.
    ClearInactive,
    /// The promotion was removed from future projections.
    Delete,
}

impl LifecycleAction {
    /// Returns the action name as recorded in the audit trail.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create => "CreatePromotion",
            Self::Approve => "ApprovePromotion",
            Self::Update { .. } => "UpdatePromotion",
            Self::SetInactive => "SetInactive",
            Self::ClearInactive => "ClearInactive",
            Self::Delete => "DeletePromotion",
        }
    }

    /// Returns additional detail for actions that carry any.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::Update { fields } => Some(format!("changed: {}", fields.join(", "))),
            _ => None,
        }
    }
}

/// A snapshot of a promotion at a point in time.
///
/// Deliberately a flat string: the audit trail records what a reviewer
/// needs to read, not a replayable copy of the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the promotion.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Captures the fields of a promotion that lifecycle actions can change.
    #[must_use]
    pub fn of(promotion: &Promotion) -> Self {
        Self::new(format!(
            "name={},rate={},start_at={},end_at={},approval={},inactive={},dealers={},models={}",
            promotion.name,
            promotion.discount_rate.value(),
            promotion.start_at,
            promotion.end_at,
            promotion.approval,
            promotion.is_forced_inactive(),
            promotion.dealer_targets.raw().unwrap_or("null"),
            promotion.model_targets.raw().unwrap_or("null"),
        ))
    }
}

/// An immutable audit event representing one promotion state change.
///
/// Every successful state change produces exactly one audit event; no-op
/// requests (re-approving, re-applying an override) produce none.
/// `before` is `None` for creation and `after` is `None` for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The action that was performed.
    pub action: LifecycleAction,
    /// The promotion the action applied to.
    pub promotion_id: PromotionId,
    /// The promotion before the transition.
    pub before: Option<StateSnapshot>,
    /// The promotion after the transition.
    pub after: Option<StateSnapshot>,
    /// When the transition was applied, per the engine's clock.
    pub recorded_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    #[must_use]
    pub const fn new(
        actor: Actor,
        action: LifecycleAction,
        promotion_id: PromotionId,
        before: Option<StateSnapshot>,
        after: Option<StateSnapshot>,
        recorded_at: OffsetDateTime,
    ) -> Self {
        Self {
            actor,
            action,
            promotion_id,
            before,
            after,
            recorded_at,
        }
    }

    /// Records a transition between two versions of the same promotion.
    #[must_use]
    pub fn transition(
        actor: Actor,
        action: LifecycleAction,
        before: &Promotion,
        after: &Promotion,
        recorded_at: OffsetDateTime,
    ) -> Self {
        Self::new(
            actor,
            action,
            after.id,
            Some(StateSnapshot::of(before)),
            Some(StateSnapshot::of(after)),
            recorded_at,
        )
    }
}
