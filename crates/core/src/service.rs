// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::{apply, apply_create, apply_delete};
use crate::command::{Command, NewPromotion, PromotionPatch};
use crate::error::CoreError;
use crate::state::{CampaignStore, EvaluatedPromotion, Transition};
use promo_engine_audit::{Actor, AuditEvent};
use promo_engine_domain::{Clock, Dealer, Promotion, PromotionId, VehicleModel};
use time::OffsetDateTime;

/// Orchestrates the promotion lifecycle over a [`CampaignStore`].
///
/// Every mutation goes through a pure transition, and the resulting
/// promotion and audit event are committed together. Every read derives
/// the effective status from the clock; stored status is never consulted.
#[derive(Debug)]
pub struct LifecycleService<C: Clock> {
    store: CampaignStore,
    clock: C,
    audit_log: Vec<AuditEvent>,
}

impl<C: Clock> LifecycleService<C> {
    /// Creates a service over an empty store.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self::with_store(CampaignStore::new(), clock)
    }

    /// Creates a service over previously loaded state.
    #[must_use]
    pub const fn with_store(store: CampaignStore, clock: C) -> Self {
        Self {
            store,
            clock,
            audit_log: Vec::new(),
        }
    }

    /// Creates a new, unapproved promotion.
    ///
    /// # Arguments
    ///
    /// * `input` - The promotion fields
    /// * `actor` - The actor performing this action
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name is empty, the discount
    /// rate is outside `(0, 1]`, or the window does not end after it starts.
    /// Returns `CoreError::IdSequenceExhausted` if no id is left to assign,
    /// and `CoreError::DuplicatePromotion` if the next id is already taken.
    /// The id sequence is not advanced on failure.
    pub fn create(
        &mut self,
        input: NewPromotion,
        actor: Actor,
    ) -> Result<EvaluatedPromotion, CoreError> {
        let now: OffsetDateTime = self.clock.now();
        let id: PromotionId = self.store.peek_next_id().inspect_err(|err| {
            tracing::warn!(%err, "rejected promotion creation");
        })?;
        if self.store.contains(id) {
            tracing::warn!(promotion_id = %id, "promotion id already taken");
            return Err(CoreError::DuplicatePromotion(id));
        }

        let transition: Transition = apply_create(id, input, now, actor).inspect_err(|err| {
            tracing::warn!(%err, "rejected promotion creation");
        })?;

        tracing::info!(promotion_id = %id, name = %transition.promotion.name, "created promotion");
        Ok(self.commit(transition, now))
    }

    /// Approves a promotion. Approving an approved promotion is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the promotion does not exist.
    pub fn approve(
        &mut self,
        id: PromotionId,
        actor: Actor,
    ) -> Result<EvaluatedPromotion, CoreError> {
        self.execute(id, Command::Approve, actor)
    }

    /// Applies a partial edit. Approval state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the promotion does not exist, or
    /// `CoreError::Validation` if the merged promotion breaks a field rule.
    pub fn update(
        &mut self,
        id: PromotionId,
        patch: PromotionPatch,
        actor: Actor,
    ) -> Result<EvaluatedPromotion, CoreError> {
        self.execute(id, Command::Update(patch), actor)
    }

    /// Forces a promotion inactive regardless of its window.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the promotion does not exist.
    pub fn set_inactive(
        &mut self,
        id: PromotionId,
        actor: Actor,
    ) -> Result<EvaluatedPromotion, CoreError> {
        self.execute(id, Command::SetInactive, actor)
    }

    /// Removes the inactive override. The status reverts to whatever the
    /// window gives, which may be expired.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the promotion does not exist.
    pub fn clear_inactive(
        &mut self,
        id: PromotionId,
        actor: Actor,
    ) -> Result<EvaluatedPromotion, CoreError> {
        self.execute(id, Command::ClearInactive, actor)
    }

    /// Removes a promotion from all future reads and projections.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the promotion does not exist.
    pub fn delete(&mut self, id: PromotionId, actor: Actor) -> Result<Promotion, CoreError> {
        let now: OffsetDateTime = self.clock.now();
        let current: &Promotion = self.lookup(id)?;
        let audit_event: AuditEvent = apply_delete(current, now, actor);

        let removed: Promotion = self.store.remove(id).ok_or(CoreError::NotFound(id))?;
        self.audit_log.push(audit_event);

        tracing::info!(promotion_id = %id, "deleted promotion");
        Ok(removed)
    }

    /// Returns one promotion with its status derived at the current instant.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the promotion does not exist.
    pub fn get(&self, id: PromotionId) -> Result<EvaluatedPromotion, CoreError> {
        let now: OffsetDateTime = self.clock.now();
        let promotion: &Promotion = self.lookup(id)?;
        Ok(EvaluatedPromotion::evaluate(promotion.clone(), now))
    }

    /// Returns every promotion in id order, all evaluated at one instant.
    #[must_use]
    pub fn list(&self) -> Vec<EvaluatedPromotion> {
        self.list_at(self.clock.now())
    }

    /// Returns every promotion in id order, evaluated at `now`.
    ///
    /// Lets a caller pin the instant once and reuse it, e.g. as the
    /// generation time of a projection.
    #[must_use]
    pub fn list_at(&self, now: OffsetDateTime) -> Vec<EvaluatedPromotion> {
        tracing::debug!(count = self.store.len(), %now, "listing promotions");
        self.store
            .promotions()
            .map(|promotion| EvaluatedPromotion::evaluate(promotion.clone(), now))
            .collect()
    }

    /// Returns the current instant as seen by this service.
    #[must_use]
    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Returns every audit event recorded by this service, oldest first.
    #[must_use]
    pub fn audit_log(&self) -> &[AuditEvent] {
        &self.audit_log
    }

    #[must_use]
    pub const fn store(&self) -> &CampaignStore {
        &self.store
    }

    /// Replaces the dealer catalog with a freshly fetched snapshot.
    pub fn refresh_dealers(&mut self, dealers: Vec<Dealer>) {
        tracing::debug!(count = dealers.len(), "refreshing dealer catalog");
        self.store.replace_dealers(dealers);
    }

    /// Replaces the vehicle model catalog with a freshly fetched snapshot.
    pub fn refresh_models(&mut self, models: Vec<VehicleModel>) {
        tracing::debug!(count = models.len(), "refreshing model catalog");
        self.store.replace_models(models);
    }

    fn lookup(&self, id: PromotionId) -> Result<&Promotion, CoreError> {
        self.store.get(id).ok_or_else(|| {
            tracing::warn!(promotion_id = %id, "promotion not found");
            CoreError::NotFound(id)
        })
    }

    fn execute(
        &mut self,
        id: PromotionId,
        command: Command,
        actor: Actor,
    ) -> Result<EvaluatedPromotion, CoreError> {
        let now: OffsetDateTime = self.clock.now();
        let current: &Promotion = self.lookup(id)?;

        let transition: Transition = apply(current, command, now, actor).inspect_err(|err| {
            tracing::warn!(promotion_id = %id, %err, "rejected promotion change");
        })?;

        match &transition.audit_event {
            Some(event) => tracing::info!(
                promotion_id = %id,
                action = event.action.name(),
                "applied promotion change"
            ),
            None => tracing::debug!(promotion_id = %id, "promotion change was a no-op"),
        }

        Ok(self.commit(transition, now))
    }

    fn commit(&mut self, transition: Transition, now: OffsetDateTime) -> EvaluatedPromotion {
        let Transition {
            promotion,
            audit_event,
        } = transition;

        if let Some(event) = audit_event {
            self.store.put(promotion.clone());
            self.audit_log.push(event);
        }

        EvaluatedPromotion::evaluate(promotion, now)
    }
}
