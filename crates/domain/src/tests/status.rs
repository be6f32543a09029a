// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{T, create_test_promotion};
use crate::{Approval, EffectiveStatus, LifecycleOverride, derive_status};
use time::{Duration, OffsetDateTime};

fn sample_instants() -> Vec<OffsetDateTime> {
    vec![
        T - Duration::days(400),
        T - Duration::days(10),
        T - Duration::days(1),
        T - Duration::seconds(1),
        T,
        T + Duration::seconds(1),
        T + Duration::days(1),
        T + Duration::days(5),
        T + Duration::days(400),
    ]
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_a_approved_before_window_is_upcoming() {
    let promotion = create_test_promotion(Duration::days(1), Duration::days(5));
    assert_eq!(promotion.effective_status(T), EffectiveStatus::Upcoming);
}

#[test]
fn test_scenario_b_approved_inside_window_is_active() {
    let promotion = create_test_promotion(Duration::days(-1), Duration::days(5));
    assert_eq!(promotion.effective_status(T), EffectiveStatus::Active);
}

#[test]
fn test_scenario_c_approved_after_window_is_expired() {
    let promotion = create_test_promotion(Duration::days(-10), Duration::days(-1));
    assert_eq!(promotion.effective_status(T), EffectiveStatus::Expired);
}

#[test]
fn test_scenario_d_unapproved_inside_window_is_upcoming() {
    let mut promotion = create_test_promotion(Duration::days(-1), Duration::days(5));
    promotion.approval = Approval::Unapproved;
    assert_eq!(promotion.effective_status(T), EffectiveStatus::Upcoming);
}

// ============================================================================
// Window boundaries
// ============================================================================

#[test]
fn test_window_start_is_inclusive() {
    let promotion = create_test_promotion(Duration::ZERO, Duration::days(5));
    assert_eq!(promotion.effective_status(T), EffectiveStatus::Active);
}

#[test]
fn test_window_end_is_inclusive() {
    let promotion = create_test_promotion(Duration::days(-5), Duration::ZERO);
    assert_eq!(promotion.effective_status(T), EffectiveStatus::Active);
    assert_eq!(
        promotion.effective_status(T + Duration::nanoseconds(1)),
        EffectiveStatus::Expired
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_derive_status_is_deterministic() {
    let start = T - Duration::days(1);
    let end = T + Duration::days(1);

    for now in sample_instants() {
        for approval in [Approval::Unapproved, Approval::Approved] {
            for lifecycle_override in [None, Some(LifecycleOverride::Inactive)] {
                let first = derive_status(now, start, end, approval, lifecycle_override);
                let second = derive_status(now, start, end, approval, lifecycle_override);
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn test_unapproved_is_never_active() {
    let start = T - Duration::days(1);
    let end = T + Duration::days(1);

    for now in sample_instants() {
        let status = derive_status(now, start, end, Approval::Unapproved, None);
        assert_ne!(status, EffectiveStatus::Active, "unapproved active at {now}");
        assert_eq!(status, EffectiveStatus::Upcoming);
    }
}

#[test]
fn test_inactive_override_wins_everywhere() {
    let windows = [
        (T + Duration::days(1), T + Duration::days(5)),
        (T - Duration::days(1), T + Duration::days(5)),
        (T - Duration::days(10), T - Duration::days(1)),
    ];

    for now in sample_instants() {
        for (start, end) in windows {
            for approval in [Approval::Unapproved, Approval::Approved] {
                let status =
                    derive_status(now, start, end, approval, Some(LifecycleOverride::Inactive));
                assert_eq!(status, EffectiveStatus::Inactive);
            }
        }
    }
}

#[test]
fn test_approved_status_follows_clock() {
    let promotion = create_test_promotion(Duration::days(1), Duration::days(5));

    assert_eq!(promotion.effective_status(T), EffectiveStatus::Upcoming);
    assert_eq!(
        promotion.effective_status(T + Duration::days(2)),
        EffectiveStatus::Active
    );
    assert_eq!(
        promotion.effective_status(T + Duration::days(6)),
        EffectiveStatus::Expired
    );
}
