// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ProjectionSnapshot;
use promo_engine::EvaluatedPromotion;
use promo_engine_domain::{
    Approval, Dealer, DiscountRate, EncodedTargets, LifecycleOverride, Promotion, PromotionId,
    VehicleModel,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Reference instant every snapshot is generated at.
pub const T: OffsetDateTime = datetime!(2026-03-02 12:00 UTC);

pub fn create_test_dealers() -> Vec<Dealer> {
    vec![
        Dealer::new(1, "Northside Motors", "North"),
        Dealer::new(2, "Harbor EV", "Coast"),
        Dealer::new(3, "Summit Auto", "Mountain"),
    ]
}

pub fn create_test_models() -> Vec<VehicleModel> {
    vec![
        VehicleModel::new(10, "Volt S", "Ampere"),
        VehicleModel::new(20, "Volt X", "Ampere"),
    ]
}

/// Builds an approved promotion targeting everything, with its window
/// given in days relative to `T`.
pub fn create_test_promotion(id: u64, start_days: i64, end_days: i64) -> Promotion {
    Promotion {
        id: PromotionId::new(id),
        name: format!("Promotion {id}"),
        description: String::new(),
        discount_rate: DiscountRate::new(0.1).unwrap(),
        start_at: T + Duration::days(start_days),
        end_at: T + Duration::days(end_days),
        approval: Approval::Approved,
        lifecycle_override: None,
        dealer_targets: EncodedTargets::all(),
        model_targets: EncodedTargets::all(),
        created_at: T - Duration::days(30) + Duration::hours(i64::try_from(id).unwrap()),
        updated_at: None,
    }
}

pub fn unapproved(mut promotion: Promotion) -> Promotion {
    promotion.approval = Approval::Unapproved;
    promotion
}

pub fn inactive(mut promotion: Promotion) -> Promotion {
    promotion.lifecycle_override = Some(LifecycleOverride::Inactive);
    promotion
}

pub fn targeting(mut promotion: Promotion, dealers: &str, models: &str) -> Promotion {
    promotion.dealer_targets = EncodedTargets::from_raw(dealers);
    promotion.model_targets = EncodedTargets::from_raw(models);
    promotion
}

/// Evaluates the promotions at `T` and resolves them against the test
/// catalogs.
pub fn create_test_snapshot(promotions: Vec<Promotion>) -> ProjectionSnapshot {
    let evaluated: Vec<EvaluatedPromotion> = promotions
        .into_iter()
        .map(|p| EvaluatedPromotion::evaluate(p, T))
        .collect();
    ProjectionSnapshot::build(T, evaluated, &create_test_dealers(), &create_test_models())
}

/// A mix of every status:
///
/// - 1: active
/// - 2: approved upcoming
/// - 3: expired
/// - 4: pending approval
/// - 5: forced inactive inside its window
/// - 6: active, later start than 1
pub fn create_mixed_snapshot() -> ProjectionSnapshot {
    create_test_snapshot(vec![
        create_test_promotion(1, -5, 5),
        create_test_promotion(2, 3, 10),
        create_test_promotion(3, -20, -10),
        unapproved(create_test_promotion(4, 1, 8)),
        inactive(create_test_promotion(5, -1, 1)),
        create_test_promotion(6, -2, 2),
    ])
}
