// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LifecycleService, NewPromotion};
use promo_engine_audit::Actor;
use promo_engine_domain::{
    Approval, Dealer, DiscountRate, EncodedTargets, FixedClock, Promotion, PromotionId,
    VehicleModel,
};
use std::rc::Rc;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Reference instant all lifecycle tests are anchored to.
pub const T: OffsetDateTime = datetime!(2026-03-02 12:00 UTC);

pub fn create_test_actor() -> Actor {
    Actor::administrator("admin-123")
}

pub fn create_test_input(start_offset: Duration, end_offset: Duration) -> NewPromotion {
    NewPromotion {
        name: String::from("Spring EV Event"),
        description: String::from("Seasonal discount on selected models"),
        discount_rate: 0.15,
        start_at: T + start_offset,
        end_at: T + end_offset,
        dealer_targets: EncodedTargets::all(),
        model_targets: EncodedTargets::from_ids([10_u64, 20]),
    }
}

pub fn create_test_promotion(id: u64, approval: Approval) -> Promotion {
    Promotion {
        id: PromotionId::new(id),
        name: format!("Promotion {id}"),
        description: String::new(),
        discount_rate: DiscountRate::new(0.1).unwrap(),
        start_at: T - Duration::days(1),
        end_at: T + Duration::days(1),
        approval,
        lifecycle_override: None,
        dealer_targets: EncodedTargets::all(),
        model_targets: EncodedTargets::all(),
        created_at: T - Duration::days(10),
        updated_at: None,
    }
}

pub fn create_test_catalogs() -> (Vec<Dealer>, Vec<VehicleModel>) {
    (
        vec![
            Dealer::new(1, "Northside Motors", "North"),
            Dealer::new(2, "Harbor EV", "Coast"),
        ],
        vec![
            VehicleModel::new(10, "Volt S", "Ampere"),
            VehicleModel::new(20, "Volt X", "Ampere"),
        ],
    )
}

/// A service whose clock the test can still move after handing it over.
pub fn create_test_service() -> (LifecycleService<Rc<FixedClock>>, Rc<FixedClock>) {
    let clock: Rc<FixedClock> = Rc::new(FixedClock::at(T));
    let service: LifecycleService<Rc<FixedClock>> = LifecycleService::new(Rc::clone(&clock));
    (service, clock)
}
