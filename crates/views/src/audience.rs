// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;

/// The consumer a view is composed for.
///
/// Audiences only select a projection preset. Deciding who may request
/// which audience belongs to the caller's auth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Manufacturer staff reviewing and managing campaigns.
    Administrator,
    /// A dealership browsing the campaigns it can honor.
    Dealer,
    /// A shopper discovering current offers.
    Customer,
}

impl Audience {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Dealer => "dealer",
            Self::Customer => "customer",
        }
    }

    /// Returns true if this audience sees resolved dealer and model lists.
    ///
    /// Administrators work with the raw targets and only need to know
    /// whether they decode.
    #[must_use]
    pub const fn sees_resolved_entities(&self) -> bool {
        !matches!(self, Self::Administrator)
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
