// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility resolution against caller-supplied catalogs.
//!
//! Resolution maps a promotion's encoded target set onto a catalog snapshot
//! that the caller has already fetched. It performs no I/O and never fails:
//!
//! - `ALL` resolves to the whole catalog, in catalog order
//! - an explicit set resolves to the matching entries, in catalog order
//! - identifiers with no catalog entry are dropped (stale references)
//! - undecodable target data resolves to nothing (degraded eligibility)

use crate::targets::{EncodedTargets, TargetSet};
use crate::types::{Dealer, DealerId, ModelId, Promotion, VehicleModel};
use std::collections::BTreeSet;

/// An entry of a reference catalog that promotions can target.
pub trait CatalogEntry: Clone {
    /// Identifier type used in encoded target sets.
    type Id: Copy + Ord + std::fmt::Debug + From<u64>;

    /// Returns this entry's identifier.
    fn id(&self) -> Self::Id;
}

impl CatalogEntry for Dealer {
    type Id = DealerId;

    fn id(&self) -> DealerId {
        self.id
    }
}

impl CatalogEntry for VehicleModel {
    type Id = ModelId;

    fn id(&self) -> ModelId {
        self.id
    }
}

/// Outcome of resolving one target set against one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T: CatalogEntry> {
    /// Matching catalog entries, in catalog order.
    pub entries: Vec<T>,
    /// True if the target data could not be decoded and resolved to nothing.
    pub degraded: bool,
    /// Targeted identifiers with no catalog entry, ascending.
    pub stale_references: Vec<T::Id>,
}

impl<T: CatalogEntry> Resolution<T> {
    const fn degraded() -> Self {
        Self {
            entries: Vec::new(),
            degraded: true,
            stale_references: Vec::new(),
        }
    }

    /// Returns true if `id` is among the resolved entries.
    #[must_use]
    pub fn includes(&self, id: T::Id) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }
}

/// Resolves an encoded target set against a catalog snapshot.
///
/// The catalog is only read; `ALL` yields a copy of it.
#[must_use]
pub fn resolve_targets<T: CatalogEntry>(targets: &EncodedTargets, catalog: &[T]) -> Resolution<T> {
    match targets.decode::<T::Id>() {
        Ok(TargetSet::All) => Resolution {
            entries: catalog.to_vec(),
            degraded: false,
            stale_references: Vec::new(),
        },
        Ok(TargetSet::Only(ids)) => {
            let entries: Vec<T> = catalog
                .iter()
                .filter(|entry| ids.contains(&entry.id()))
                .cloned()
                .collect();

            let known: BTreeSet<T::Id> = catalog.iter().map(CatalogEntry::id).collect();
            let stale_references: Vec<T::Id> =
                ids.iter().filter(|id| !known.contains(id)).copied().collect();

            Resolution {
                entries,
                degraded: false,
                stale_references,
            }
        }
        Err(err) => {
            tracing::debug!(raw = ?targets.raw(), %err, "target set resolves to no entries");
            Resolution::degraded()
        }
    }
}

/// Resolves the dealers a promotion applies to.
#[must_use]
pub fn resolve_dealers(promotion: &Promotion, dealers: &[Dealer]) -> Vec<Dealer> {
    resolve_targets(&promotion.dealer_targets, dealers).entries
}

/// Resolves the vehicle models a promotion applies to.
#[must_use]
pub fn resolve_models(promotion: &Promotion, models: &[VehicleModel]) -> Vec<VehicleModel> {
    resolve_targets(&promotion.model_targets, models).entries
}
