// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::{EffectiveStatus, derive_status};
use crate::targets::{EncodedTargets, TargetSet};
use crate::validation::validate_discount_rate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Opaque promotion identifier, assigned by the campaign store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromotionId(u64);

impl PromotionId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PromotionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dealer identifier as issued by the external dealer catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealerId(u64);

impl DealerId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DealerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<DealerId> for u64 {
    fn from(id: DealerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for DealerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vehicle model identifier as issued by the external model catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(u64);

impl ModelId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ModelId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ModelId> for u64 {
    fn from(id: ModelId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dealership from the external dealer catalog.
///
/// Read-only from the engine's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: DealerId,
    pub name: String,
    /// Region or address line, whichever the catalog provides.
    #[serde(default, alias = "address")]
    pub region: String,
}

impl Dealer {
    #[must_use]
    pub fn new(id: u64, name: &str, region: &str) -> Self {
        Self {
            id: DealerId::new(id),
            name: name.to_string(),
            region: region.to_string(),
        }
    }
}

/// A vehicle model from the external model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: ModelId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
}

impl VehicleModel {
    #[must_use]
    pub fn new(id: u64, name: &str, brand: &str) -> Self {
        Self {
            id: ModelId::new(id),
            name: name.to_string(),
            brand: brand.to_string(),
        }
    }
}

/// Review state of a promotion.
///
/// Approval is monotonic: once approved, a promotion never returns to
/// unapproved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Approval {
    /// Awaiting administrator review.
    #[default]
    Unapproved,
    /// Reviewed and released.
    Approved,
}

impl Approval {
    /// Returns the string representation used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unapproved => "unapproved",
            Self::Approved => "approved",
        }
    }

    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl FromStr for Approval {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unapproved" => Ok(Self::Unapproved),
            "approved" => Ok(Self::Approved),
            _ => Err(DomainError::InvalidApproval(s.to_string())),
        }
    }
}

impl std::fmt::Display for Approval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Administrative override applied on top of the computed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleOverride {
    /// Forced inactive regardless of the time window.
    Inactive,
}

/// Fractional discount in `(0, 1]`.
///
/// [`DiscountRate::new`] only accepts values in range. Stored records are
/// read as written so that one bad rate cannot block loading the rest;
/// [`validate_promotion`](crate::validate_promotion) reports such values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// Creates a validated discount rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDiscountRate` if the value is not finite
    /// or is outside `(0, 1]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        validate_discount_rate(value)?;
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

/// A promotional campaign.
///
/// Status is deliberately absent: it is derived on every read from the
/// window, approval and override (see [`Promotion::effective_status`]).
/// Incoming records that still carry a persisted `status` field have it
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub discount_rate: DiscountRate,
    #[serde(with = "time::serde::rfc3339")]
    pub start_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_at: OffsetDateTime,
    #[serde(default)]
    pub approval: Approval,
    #[serde(default)]
    pub lifecycle_override: Option<LifecycleOverride>,
    #[serde(default)]
    pub dealer_targets: EncodedTargets,
    #[serde(default)]
    pub model_targets: EncodedTargets,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Time of the last successful mutation, `None` if never modified.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Promotion {
    /// Derives the effective status at `now`.
    #[must_use]
    pub fn effective_status(&self, now: OffsetDateTime) -> EffectiveStatus {
        derive_status(
            now,
            self.start_at,
            self.end_at,
            self.approval,
            self.lifecycle_override,
        )
    }

    /// Decodes the dealer target set, treating undecodable data as empty.
    #[must_use]
    pub fn dealer_target_set(&self) -> TargetSet<DealerId> {
        self.dealer_targets.decode_or_empty()
    }

    /// Decodes the model target set, treating undecodable data as empty.
    #[must_use]
    pub fn model_target_set(&self) -> TargetSet<ModelId> {
        self.model_targets.decode_or_empty()
    }

    /// Returns true if an administrator has forced this promotion inactive.
    #[must_use]
    pub const fn is_forced_inactive(&self) -> bool {
        matches!(self.lifecycle_override, Some(LifecycleOverride::Inactive))
    }
}
