// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::projection::Projection;
use crate::response::ProjectedView;
use promo_engine::{EvaluatedPromotion, LifecycleService};
use promo_engine_domain::{
    Clock, Dealer, EffectiveStatus, Promotion, Resolution, VehicleModel, resolve_targets,
};
use time::OffsetDateTime;

/// A promotion with its status and eligibility already worked out.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPromotion {
    pub promotion: Promotion,
    pub effective_status: EffectiveStatus,
    pub dealers: Resolution<Dealer>,
    pub models: Resolution<VehicleModel>,
}

impl ResolvedPromotion {
    /// Resolves an evaluated promotion against both catalogs.
    #[must_use]
    pub fn resolve(
        evaluated: EvaluatedPromotion,
        dealers: &[Dealer],
        models: &[VehicleModel],
    ) -> Self {
        let EvaluatedPromotion {
            promotion,
            effective_status,
        } = evaluated;
        let dealers: Resolution<Dealer> = resolve_targets(&promotion.dealer_targets, dealers);
        let models: Resolution<VehicleModel> = resolve_targets(&promotion.model_targets, models);

        Self {
            promotion,
            effective_status,
            dealers,
            models,
        }
    }

    /// Returns true if either target set failed to decode.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.dealers.degraded || self.models.degraded
    }
}

/// The single input every projection is computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSnapshot {
    generated_at: OffsetDateTime,
    entries: Vec<ResolvedPromotion>,
}

impl ProjectionSnapshot {
    /// Builds a snapshot from promotions evaluated at `generated_at`.
    ///
    /// # Arguments
    ///
    /// * `generated_at` - The instant the statuses were derived at
    /// * `promotions` - Evaluated promotions, as returned by the lifecycle service
    /// * `dealers` - The dealer catalog snapshot
    /// * `models` - The vehicle model catalog snapshot
    #[must_use]
    pub fn build(
        generated_at: OffsetDateTime,
        promotions: Vec<EvaluatedPromotion>,
        dealers: &[Dealer],
        models: &[VehicleModel],
    ) -> Self {
        let entries: Vec<ResolvedPromotion> = promotions
            .into_iter()
            .map(|evaluated| ResolvedPromotion::resolve(evaluated, dealers, models))
            .collect();

        let degraded: usize = entries.iter().filter(|e| e.is_degraded()).count();
        let stale: usize = entries
            .iter()
            .map(|e| e.dealers.stale_references.len() + e.models.stale_references.len())
            .sum();
        tracing::debug!(
            promotions = entries.len(),
            degraded,
            stale_references = stale,
            "built projection snapshot"
        );

        Self {
            generated_at,
            entries,
        }
    }

    /// Builds a snapshot from the service's current state, reading its
    /// clock once.
    #[must_use]
    pub fn from_service<C: Clock>(service: &LifecycleService<C>) -> Self {
        let now: OffsetDateTime = service.now();
        Self::build(
            now,
            service.list_at(now),
            service.store().dealers(),
            service.store().models(),
        )
    }

    #[must_use]
    pub const fn generated_at(&self) -> OffsetDateTime {
        self.generated_at
    }

    #[must_use]
    pub fn entries(&self) -> &[ResolvedPromotion] {
        &self.entries
    }

    /// Computes one projection of this snapshot.
    #[must_use]
    pub fn project(&self, projection: Projection) -> ProjectedView {
        projection.apply(self)
    }
}
