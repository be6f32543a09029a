// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Approval, Dealer, DiscountRate, EncodedTargets, Promotion, PromotionId, VehicleModel,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Reference instant `T` used throughout the scenario tests.
pub const T: OffsetDateTime = datetime!(2026-03-02 12:00 UTC);

pub fn create_test_promotion(start_offset: Duration, end_offset: Duration) -> Promotion {
    Promotion {
        id: PromotionId::new(1),
        name: String::from("Spring EV Event"),
        description: String::from("Seasonal discount on selected models"),
        discount_rate: DiscountRate::new(0.1).unwrap(),
        start_at: T + start_offset,
        end_at: T + end_offset,
        approval: Approval::Approved,
        lifecycle_override: None,
        dealer_targets: EncodedTargets::all(),
        model_targets: EncodedTargets::all(),
        created_at: T - Duration::days(30),
        updated_at: None,
    }
}

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
