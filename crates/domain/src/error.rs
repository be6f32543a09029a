// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Promotion name is empty or whitespace only.
    EmptyName,
    /// Discount rate is outside `(0, 1]` or not a finite number.
    InvalidDiscountRate {
        /// The rejected value.
        value: f64,
    },
    /// Promotion window does not end strictly after it starts.
    InvalidWindow {
        /// The requested start of the window.
        start_at: OffsetDateTime,
        /// The requested end of the window.
        end_at: OffsetDateTime,
    },
    /// An effective status string could not be parsed.
    InvalidStatus(String),
    /// An approval state string could not be parsed.
    InvalidApproval(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Promotion name cannot be empty"),
            Self::InvalidDiscountRate { value } => {
                write!(
                    f,
                    "Invalid discount rate: {value}. Must be greater than 0 and at most 1"
                )
            }
            Self::InvalidWindow { start_at, end_at } => {
                write!(
                    f,
                    "Promotion must end after it starts, but {end_at} is not after {start_at}"
                )
            }
            Self::InvalidStatus(s) => write!(f, "Invalid promotion status: {s}"),
            Self::InvalidApproval(s) => write!(f, "Invalid approval state: {s}"),
        }
    }
}

impl std::error::Error for DomainError {}
