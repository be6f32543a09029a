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

//! Audience-aware views over promotion lifecycle state.
//!
//! Every view is computed from one [`ProjectionSnapshot`]: promotions whose
//! status was derived at a single instant and whose eligibility was resolved
//! once against the catalogs. Projections only filter, sort and count that
//! snapshot; they never derive status or resolve targets themselves.

mod audience;
mod projection;
mod response;
mod snapshot;

#[cfg(test)]
mod tests;

pub use audience::Audience;
pub use projection::{Projection, queue_priority};
pub use response::{ProjectedEntry, ProjectedView, StatusCounts};
pub use snapshot::{ProjectionSnapshot, ResolvedPromotion};
