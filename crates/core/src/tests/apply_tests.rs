// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{T, create_test_actor, create_test_input, create_test_promotion};
use crate::{
    Command, CoreError, NewPromotion, PromotionPatch, Transition, apply, apply_create,
    apply_delete,
};
use promo_engine_audit::{AuditEvent, LifecycleAction};
use promo_engine_domain::{
    Approval, DomainError, EffectiveStatus, EncodedTargets, LifecycleOverride, Promotion,
    PromotionId,
};
use time::Duration;

#[test]
fn test_create_produces_unapproved_promotion() {
    let input: NewPromotion = create_test_input(Duration::days(1), Duration::days(8));

    let transition: Transition =
        apply_create(PromotionId::new(7), input, T, create_test_actor()).unwrap();

    assert_eq!(transition.promotion.id, PromotionId::new(7));
    assert_eq!(transition.promotion.approval, Approval::Unapproved);
    assert_eq!(transition.promotion.lifecycle_override, None);
    assert_eq!(transition.promotion.created_at, T);
    assert_eq!(transition.promotion.updated_at, None);
    assert!((transition.promotion.discount_rate.value() - 0.15).abs() < f64::EPSILON);
}

#[test]
fn test_create_emits_audit_event_without_before_state() {
    let input: NewPromotion = create_test_input(Duration::days(1), Duration::days(8));

    let transition: Transition =
        apply_create(PromotionId::new(7), input, T, create_test_actor()).unwrap();

    let event: AuditEvent = transition.audit_event.unwrap();
    assert_eq!(event.action, LifecycleAction::Create);
    assert_eq!(event.actor.id, "admin-123");
    assert_eq!(event.promotion_id, PromotionId::new(7));
    assert!(event.before.is_none());
    assert!(event.after.is_some());
    assert_eq!(event.recorded_at, T);
}

#[test]
fn test_create_rejects_reversed_window() {
    let input: NewPromotion = create_test_input(Duration::days(8), Duration::days(1));

    let result: Result<Transition, CoreError> =
        apply_create(PromotionId::new(1), input, T, create_test_actor());

    assert!(matches!(
        result,
        Err(CoreError::Validation(DomainError::InvalidWindow { .. }))
    ));
}

#[test]
fn test_create_rejects_zero_length_window() {
    let input: NewPromotion = create_test_input(Duration::days(1), Duration::days(1));

    let result: Result<Transition, CoreError> =
        apply_create(PromotionId::new(1), input, T, create_test_actor());

    assert!(matches!(
        result,
        Err(CoreError::Validation(DomainError::InvalidWindow { .. }))
    ));
}

#[test]
fn test_create_rejects_out_of_range_rates() {
    for rate in [0.0, -0.2, 1.01, f64::NAN] {
        let mut input: NewPromotion = create_test_input(Duration::days(1), Duration::days(8));
        input.discount_rate = rate;

        let result: Result<Transition, CoreError> =
            apply_create(PromotionId::new(1), input, T, create_test_actor());

        assert!(
            matches!(
                result,
                Err(CoreError::Validation(DomainError::InvalidDiscountRate { .. }))
            ),
            "rate {rate} should be rejected"
        );
    }
}

#[test]
fn test_create_accepts_full_discount() {
    let mut input: NewPromotion = create_test_input(Duration::days(1), Duration::days(8));
    input.discount_rate = 1.0;

    let result: Result<Transition, CoreError> =
        apply_create(PromotionId::new(1), input, T, create_test_actor());

    assert!(result.is_ok());
}

#[test]
fn test_create_rejects_blank_name() {
    let mut input: NewPromotion = create_test_input(Duration::days(1), Duration::days(8));
    input.name = String::from("   ");

    let result: Result<Transition, CoreError> =
        apply_create(PromotionId::new(1), input, T, create_test_actor());

    assert_eq!(result, Err(CoreError::Validation(DomainError::EmptyName)));
}

#[test]
fn test_approve_transitions_to_approved() {
    let current: Promotion = create_test_promotion(1, Approval::Unapproved);

    let transition: Transition =
        apply(&current, Command::Approve, T, create_test_actor()).unwrap();

    assert_eq!(transition.promotion.approval, Approval::Approved);
    assert_eq!(transition.promotion.updated_at, Some(T));
    assert_eq!(
        transition.audit_event.map(|e| e.action),
        Some(LifecycleAction::Approve)
    );
    // Input is untouched
    assert_eq!(current.approval, Approval::Unapproved);
}

#[test]
fn test_approve_twice_is_noop() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);

    let transition: Transition =
        apply(&current, Command::Approve, T, create_test_actor()).unwrap();

    assert!(transition.is_noop());
    assert_eq!(transition.promotion, current);
}

#[test]
fn test_set_inactive_then_again_is_noop() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);

    let first: Transition = apply(&current, Command::SetInactive, T, create_test_actor()).unwrap();
    assert_eq!(
        first.promotion.lifecycle_override,
        Some(LifecycleOverride::Inactive)
    );
    assert!(!first.is_noop());

    let second: Transition =
        apply(&first.promotion, Command::SetInactive, T, create_test_actor()).unwrap();
    assert!(second.is_noop());
}

#[test]
fn test_clear_inactive_without_override_is_noop() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);

    let transition: Transition =
        apply(&current, Command::ClearInactive, T, create_test_actor()).unwrap();

    assert!(transition.is_noop());
}

#[test]
fn test_update_records_changed_fields() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);
    let patch: PromotionPatch = PromotionPatch {
        name: Some(String::from("Summer EV Event")),
        end_at: Some(current.end_at + Duration::days(3)),
        ..PromotionPatch::default()
    };

    let transition: Transition =
        apply(&current, Command::Update(patch), T, create_test_actor()).unwrap();

    assert_eq!(transition.promotion.name, "Summer EV Event");
    assert_eq!(transition.promotion.end_at, current.end_at + Duration::days(3));
    assert_eq!(
        transition.audit_event.map(|e| e.action),
        Some(LifecycleAction::Update {
            fields: vec!["name", "endAt"]
        })
    );
}

#[test]
fn test_update_does_not_reset_approval() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);
    let patch: PromotionPatch = PromotionPatch {
        discount_rate: Some(0.3),
        ..PromotionPatch::default()
    };

    let transition: Transition =
        apply(&current, Command::Update(patch), T, create_test_actor()).unwrap();

    assert_eq!(transition.promotion.approval, Approval::Approved);
    assert_eq!(transition.promotion.effective_status(T), EffectiveStatus::Active);
}

#[test]
fn test_update_with_identical_values_is_noop() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);
    let patch: PromotionPatch = PromotionPatch {
        name: Some(current.name.clone()),
        start_at: Some(current.start_at),
        dealer_targets: Some(EncodedTargets::all()),
        ..PromotionPatch::default()
    };

    let transition: Transition =
        apply(&current, Command::Update(patch), T, create_test_actor()).unwrap();

    assert!(transition.is_noop());
}

#[test]
fn test_empty_patch_is_noop() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);

    let transition: Transition = apply(
        &current,
        Command::Update(PromotionPatch::default()),
        T,
        create_test_actor(),
    )
    .unwrap();

    assert!(transition.is_noop());
}

#[test]
fn test_update_validates_merged_window() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);
    // Moving only the start past the existing end breaks the window
    let patch: PromotionPatch = PromotionPatch {
        start_at: Some(current.end_at + Duration::hours(1)),
        ..PromotionPatch::default()
    };

    let result: Result<Transition, CoreError> =
        apply(&current, Command::Update(patch), T, create_test_actor());

    assert!(matches!(
        result,
        Err(CoreError::Validation(DomainError::InvalidWindow { .. }))
    ));
}

#[test]
fn test_update_revalidates_untouched_fields() {
    let mut current: Promotion = create_test_promotion(1, Approval::Approved);
    current.name = String::from("  ");
    let patch: PromotionPatch = PromotionPatch {
        description: Some(String::from("Now with free charging")),
        ..PromotionPatch::default()
    };

    let result: Result<Transition, CoreError> =
        apply(&current, Command::Update(patch), T, create_test_actor());

    assert_eq!(result, Err(CoreError::Validation(DomainError::EmptyName)));
}

#[test]
fn test_update_repairing_stored_rate_is_accepted() {
    let mut current: Promotion = create_test_promotion(1, Approval::Approved);
    current.discount_rate = serde_json::from_str("15").unwrap();

    let description_only: PromotionPatch = PromotionPatch {
        description: Some(String::from("Updated copy")),
        ..PromotionPatch::default()
    };
    let result: Result<Transition, CoreError> = apply(
        &current,
        Command::Update(description_only),
        T,
        create_test_actor(),
    );
    assert_eq!(
        result,
        Err(CoreError::Validation(DomainError::InvalidDiscountRate { value: 15.0 }))
    );

    let repair: PromotionPatch = PromotionPatch {
        discount_rate: Some(0.15),
        ..PromotionPatch::default()
    };
    let transition: Transition =
        apply(&current, Command::Update(repair), T, create_test_actor()).unwrap();
    assert!(!transition.is_noop());
}

#[test]
fn test_update_moving_both_dates_together_is_accepted() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);
    let patch: PromotionPatch = PromotionPatch {
        start_at: Some(T + Duration::days(10)),
        end_at: Some(T + Duration::days(20)),
        ..PromotionPatch::default()
    };

    let transition: Transition =
        apply(&current, Command::Update(patch), T, create_test_actor()).unwrap();

    assert_eq!(transition.promotion.effective_status(T), EffectiveStatus::Upcoming);
}

#[test]
fn test_update_rejects_blank_name() {
    let current: Promotion = create_test_promotion(1, Approval::Approved);
    let patch: PromotionPatch = PromotionPatch {
        name: Some(String::new()),
        ..PromotionPatch::default()
    };

    let result: Result<Transition, CoreError> =
        apply(&current, Command::Update(patch), T, create_test_actor());

    assert_eq!(result, Err(CoreError::Validation(DomainError::EmptyName)));
}

#[test]
fn test_delete_event_has_no_after_state() {
    let current: Promotion = create_test_promotion(4, Approval::Approved);

    let event: AuditEvent = apply_delete(&current, T, create_test_actor());

    assert_eq!(event.action, LifecycleAction::Delete);
    assert_eq!(event.promotion_id, PromotionId::new(4));
    assert!(event.before.is_some());
    assert!(event.after.is_none());
}
