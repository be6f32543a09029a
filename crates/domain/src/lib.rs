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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod eligibility;
mod error;
mod status;
mod targets;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use eligibility::{CatalogEntry, Resolution, resolve_dealers, resolve_models, resolve_targets};
pub use error::DomainError;
pub use status::{EffectiveStatus, derive_status};
pub use targets::{ALL_SENTINEL, EncodedTargets, TargetDecodeError, TargetSet};

// Re-export public types
pub use types::{
    Approval, Dealer, DealerId, DiscountRate, LifecycleOverride, ModelId, Promotion, PromotionId,
    VehicleModel,
};
pub use validation::{validate_discount_rate, validate_name, validate_promotion, validate_window};
