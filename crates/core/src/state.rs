// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use promo_engine_audit::{Actor, AuditEvent, LifecycleAction};
use promo_engine_domain::{
    Dealer, EffectiveStatus, Promotion, PromotionId, VehicleModel, validate_promotion,
};
use serde::Serialize;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// In-memory campaign state: promotions plus the reference catalogs they
/// resolve against.
///
/// The store owns no I/O. Catalogs are supplied and refreshed by the caller
/// and are never modified by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignStore {
    promotions: BTreeMap<PromotionId, Promotion>,
    dealers: Vec<Dealer>,
    models: Vec<VehicleModel>,
    /// `None` once the id space is used up.
    next_id: Option<u64>,
}

impl CampaignStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            promotions: BTreeMap::new(),
            dealers: Vec::new(),
            models: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Loads existing promotion records and catalog snapshots.
    ///
    /// Records are taken as persisted. A record that breaks a field rule
    /// (e.g. a reversed window written by an older system) is still loaded
    /// and logged; it will fail validation on its next update.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicatePromotion` if two records share an id.
    pub fn from_records(
        promotions: Vec<Promotion>,
        dealers: Vec<Dealer>,
        models: Vec<VehicleModel>,
    ) -> Result<Self, CoreError> {
        let mut store: Self = Self::new();
        store.dealers = dealers;
        store.models = models;

        for promotion in promotions {
            if store.contains(promotion.id) {
                return Err(CoreError::DuplicatePromotion(promotion.id));
            }
            if let Err(err) = validate_promotion(&promotion) {
                tracing::warn!(promotion_id = %promotion.id, %err, "loaded promotion breaks a field rule");
            }
            store.put(promotion);
        }

        Ok(store)
    }

    /// Returns a promotion by id.
    #[must_use]
    pub fn get(&self, id: PromotionId) -> Option<&Promotion> {
        self.promotions.get(&id)
    }

    /// Iterates promotions in ascending id order.
    pub fn promotions(&self) -> impl Iterator<Item = &Promotion> {
        self.promotions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }

    #[must_use]
    pub fn dealers(&self) -> &[Dealer] {
        &self.dealers
    }

    #[must_use]
    pub fn models(&self) -> &[VehicleModel] {
        &self.models
    }

    /// Replaces the dealer catalog snapshot.
    pub fn replace_dealers(&mut self, dealers: Vec<Dealer>) {
        self.dealers = dealers;
    }

    /// Replaces the vehicle model catalog snapshot.
    pub fn replace_models(&mut self, models: Vec<VehicleModel>) {
        self.models = models;
    }

    /// Returns the id the next created promotion will receive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IdSequenceExhausted` once a promotion holds the
    /// largest possible id.
    pub const fn peek_next_id(&self) -> Result<PromotionId, CoreError> {
        match self.next_id {
            Some(next) => Ok(PromotionId::new(next)),
            None => Err(CoreError::IdSequenceExhausted),
        }
    }

    /// Returns true if a promotion with this id is stored.
    #[must_use]
    pub fn contains(&self, id: PromotionId) -> bool {
        self.promotions.contains_key(&id)
    }

    /// Inserts or replaces a promotion, keeping the id sequence ahead of it.
    pub(crate) fn put(&mut self, promotion: Promotion) {
        let after: Option<u64> = promotion.id.value().checked_add(1);
        self.next_id = match (self.next_id, after) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
        self.promotions.insert(promotion.id, promotion);
    }

    pub(crate) fn remove(&mut self, id: PromotionId) -> Option<Promotion> {
        self.promotions.remove(&id)
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A promotion together with the status derived for it at read time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedPromotion {
    pub promotion: Promotion,
    pub effective_status: EffectiveStatus,
}

impl EvaluatedPromotion {
    /// Evaluates a promotion at `now`.
    #[must_use]
    pub fn evaluate(promotion: Promotion, now: OffsetDateTime) -> Self {
        let effective_status: EffectiveStatus = promotion.effective_status(now);
        Self {
            promotion,
            effective_status,
        }
    }
}

/// The result of applying a command to one promotion.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. `audit_event` is `None` when nothing changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The promotion after the transition.
    pub promotion: Promotion,
    /// The audit event recording this transition, if anything changed.
    pub audit_event: Option<AuditEvent>,
}

impl Transition {
    pub(crate) fn unchanged(current: &Promotion) -> Self {
        Self {
            promotion: current.clone(),
            audit_event: None,
        }
    }

    pub(crate) fn changed(
        current: &Promotion,
        mut next: Promotion,
        action: LifecycleAction,
        actor: Actor,
        at: OffsetDateTime,
    ) -> Self {
        next.updated_at = Some(at);
        let audit_event: AuditEvent = AuditEvent::transition(actor, action, current, &next, at);
        Self {
            promotion: next,
            audit_event: Some(audit_event),
        }
    }

    /// Returns true if the command changed nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.audit_event.is_none()
    }
}
