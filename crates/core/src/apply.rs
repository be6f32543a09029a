// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, NewPromotion, PromotionPatch};
use crate::error::CoreError;
use crate::state::Transition;
use promo_engine_audit::{Actor, AuditEvent, LifecycleAction, StateSnapshot};
use promo_engine_domain::{
    Approval, DiscountRate, LifecycleOverride, Promotion, PromotionId, validate_name,
    validate_promotion, validate_window,
};
use time::OffsetDateTime;

/// Builds a new promotion from creation input.
///
/// New promotions always start unapproved and without an override.
///
/// # Arguments
///
/// * `id` - The identifier reserved for the promotion
/// * `input` - The creation input
/// * `at` - The current instant; becomes `created_at`
/// * `actor` - The actor performing this action
///
/// # Errors
///
/// Returns `CoreError::Validation` if:
/// - The name is empty
/// - The discount rate is outside `(0, 1]`
/// - The window does not end after it starts
pub fn apply_create(
    id: PromotionId,
    input: NewPromotion,
    at: OffsetDateTime,
    actor: Actor,
) -> Result<Transition, CoreError> {
    validate_name(&input.name)?;
    let discount_rate: DiscountRate = DiscountRate::new(input.discount_rate)?;
    validate_window(input.start_at, input.end_at)?;

    let promotion: Promotion = Promotion {
        id,
        name: input.name,
        description: input.description,
        discount_rate,
        start_at: input.start_at,
        end_at: input.end_at,
        approval: Approval::Unapproved,
        lifecycle_override: None,
        dealer_targets: input.dealer_targets,
        model_targets: input.model_targets,
        created_at: at,
        updated_at: None,
    };

    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        LifecycleAction::Create,
        id,
        None,
        Some(StateSnapshot::of(&promotion)),
        at,
    );

    Ok(Transition {
        promotion,
        audit_event: Some(audit_event),
    })
}

/// Applies a command to a promotion, producing its next version.
///
/// The input promotion is not modified. Requests that would not change
/// anything (approving an approved promotion, setting an override that is
/// already set, an empty or identical patch) succeed without an audit event.
///
/// # Errors
///
/// Returns `CoreError::Validation` if an update would leave the promotion
/// with an empty name, an out-of-range rate, or a window that does not end
/// after it starts. Fields the patch does not touch are checked too, so a
/// loaded record that breaks a rule must be repaired by its next update.
pub fn apply(
    current: &Promotion,
    command: Command,
    at: OffsetDateTime,
    actor: Actor,
) -> Result<Transition, CoreError> {
    match command {
        Command::Approve => {
            if current.approval.is_approved() {
                return Ok(Transition::unchanged(current));
            }

            let mut next: Promotion = current.clone();
            next.approval = Approval::Approved;
            Ok(Transition::changed(current, next, LifecycleAction::Approve, actor, at))
        }
        Command::Update(patch) => apply_patch(current, patch, at, actor),
        Command::SetInactive => {
            if current.is_forced_inactive() {
                return Ok(Transition::unchanged(current));
            }

            let mut next: Promotion = current.clone();
            next.lifecycle_override = Some(LifecycleOverride::Inactive);
            Ok(Transition::changed(current, next, LifecycleAction::SetInactive, actor, at))
        }
        Command::ClearInactive => {
            // Always legal, even past the end date; status then reads as expired.
            if !current.is_forced_inactive() {
                return Ok(Transition::unchanged(current));
            }

            let mut next: Promotion = current.clone();
            next.lifecycle_override = None;
            Ok(Transition::changed(current, next, LifecycleAction::ClearInactive, actor, at))
        }
    }
}

/// Records the removal of a promotion.
#[must_use]
pub fn apply_delete(current: &Promotion, at: OffsetDateTime, actor: Actor) -> AuditEvent {
    AuditEvent::new(
        actor,
        LifecycleAction::Delete,
        current.id,
        Some(StateSnapshot::of(current)),
        None,
        at,
    )
}

fn apply_patch(
    current: &Promotion,
    patch: PromotionPatch,
    at: OffsetDateTime,
    actor: Actor,
) -> Result<Transition, CoreError> {
    if patch.is_empty() {
        return Ok(Transition::unchanged(current));
    }

    let mut next: Promotion = current.clone();
    let mut fields: Vec<&'static str> = Vec::new();

    if let Some(name) = patch.name {
        validate_name(&name)?;
        if name != next.name {
            next.name = name;
            fields.push("name");
        }
    }

    if let Some(description) = patch.description
        && description != next.description
    {
        next.description = description;
        fields.push("description");
    }

    if let Some(rate) = patch.discount_rate {
        let rate: DiscountRate = DiscountRate::new(rate)?;
        if rate != next.discount_rate {
            next.discount_rate = rate;
            fields.push("discountRate");
        }
    }

    if let Some(start_at) = patch.start_at
        && start_at != next.start_at
    {
        next.start_at = start_at;
        fields.push("startAt");
    }

    if let Some(end_at) = patch.end_at
        && end_at != next.end_at
    {
        next.end_at = end_at;
        fields.push("endAt");
    }

    if let Some(targets) = patch.dealer_targets
        && targets != next.dealer_targets
    {
        next.dealer_targets = targets;
        fields.push("dealerTargets");
    }

    if let Some(targets) = patch.model_targets
        && targets != next.model_targets
    {
        next.model_targets = targets;
        fields.push("modelTargets");
    }

    if fields.is_empty() {
        return Ok(Transition::unchanged(current));
    }

    // Rule: the merged promotion must pass every field rule, patched or not
    validate_promotion(&next)?;

    Ok(Transition::changed(
        current,
        next,
        LifecycleAction::Update { fields },
        actor,
        at,
    ))
}
