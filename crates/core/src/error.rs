// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_engine_domain::{DomainError, PromotionId};

/// Errors that can occur during lifecycle operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Caller-supplied input violated a domain rule.
    Validation(DomainError),
    /// The referenced promotion does not exist.
    NotFound(PromotionId),
    /// A promotion id is already taken, either twice in a bulk load or by
    /// an existing promotion.
    DuplicatePromotion(PromotionId),
    /// Every promotion id has been handed out.
    IdSequenceExhausted,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation error: {err}"),
            Self::NotFound(id) => write!(f, "Promotion {id} not found"),
            Self::DuplicatePromotion(id) => write!(f, "Promotion {id} already exists"),
            Self::IdSequenceExhausted => write!(f, "No promotion ids left to assign"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicatePromotion(_) | Self::IdSequenceExhausted => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}
