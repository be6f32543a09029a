// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dealer and model target sets.
//!
//! Upstream records carry targets as loosely-typed text: a JSON array of
//! identifiers, the literal sentinel `ALL`, `null`, or occasionally
//! something unparsable. [`EncodedTargets`] keeps the raw text as received
//! and decodes it on demand into a [`TargetSet`].
//!
//! ## Accepted encodings
//!
//! - `ALL` / `"ALL"` / `["ALL"]` (case-insensitive) → [`TargetSet::All`]
//! - `[1, 2, "3"]` → explicit set of 1, 2 and 3
//! - `[]` → explicit empty set ("applies nowhere")
//! - `"[1,2]"` (a JSON string holding an encoded array) → decoded once more
//!
//! Anything else fails with [`TargetDecodeError`]. Callers on the read path
//! use [`EncodedTargets::decode_or_empty`], so a bad record degrades to
//! "applies nowhere" instead of failing a whole view.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;

/// Sentinel meaning "every entry in the catalog".
pub const ALL_SENTINEL: &str = "ALL";

/// Decoded target set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSet<I> {
    /// Unrestricted: applies to every catalog entry.
    All,
    /// Applies only to the listed identifiers. An empty set applies nowhere.
    Only(BTreeSet<I>),
}

impl<I: Ord> TargetSet<I> {
    /// The explicit empty set.
    #[must_use]
    pub const fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns true if `id` is targeted.
    #[must_use]
    pub fn contains(&self, id: &I) -> bool {
        match self {
            Self::All => true,
            Self::Only(ids) => ids.contains(id),
        }
    }
}

/// Why a target set could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDecodeError {
    /// No target data (absent, blank or JSON `null`).
    Missing,
    /// Target data present but not a recognized encoding.
    Malformed {
        /// Description of what was wrong.
        reason: String,
    },
}

impl std::fmt::Display for TargetDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "Target set is missing"),
            Self::Malformed { reason } => write!(f, "Target set is malformed: {reason}"),
        }
    }
}

impl std::error::Error for TargetDecodeError {}

/// Target set in its encoded, as-received form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedTargets {
    raw: Option<String>,
}

impl EncodedTargets {
    /// Wraps raw text exactly as received.
    #[must_use]
    pub const fn new(raw: Option<String>) -> Self {
        Self { raw }
    }

    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self {
            raw: Some(raw.to_string()),
        }
    }

    /// Canonical encoding of the unrestricted sentinel.
    #[must_use]
    pub fn all() -> Self {
        Self::from_raw(ALL_SENTINEL)
    }

    /// Canonical encoding of an explicit identifier list.
    #[must_use]
    pub fn from_ids<I, T>(ids: T) -> Self
    where
        I: Into<u64>,
        T: IntoIterator<Item = I>,
    {
        let ids: BTreeSet<u64> = ids.into_iter().map(Into::into).collect();
        let body: Vec<String> = ids.iter().map(u64::to_string).collect();
        Self {
            raw: Some(format!("[{}]", body.join(","))),
        }
    }

    /// Canonical encoding of a decoded target set.
    #[must_use]
    pub fn from_set<I>(set: &TargetSet<I>) -> Self
    where
        I: Copy + Into<u64>,
    {
        match set {
            TargetSet::All => Self::all(),
            TargetSet::Only(ids) => Self::from_ids(ids.iter().copied()),
        }
    }

    /// Returns the raw text, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Decodes the target set.
    ///
    /// # Errors
    ///
    /// Returns `TargetDecodeError::Missing` when there is no data and
    /// `TargetDecodeError::Malformed` when the data is not a recognized
    /// encoding.
    pub fn decode<I>(&self) -> Result<TargetSet<I>, TargetDecodeError>
    where
        I: From<u64> + Ord,
    {
        match self.raw.as_deref().map(str::trim) {
            None | Some("") => Err(TargetDecodeError::Missing),
            Some(text) => decode_text(text, true),
        }
    }

    /// Decodes the target set, mapping any failure to the explicit empty set.
    #[must_use]
    pub fn decode_or_empty<I>(&self) -> TargetSet<I>
    where
        I: From<u64> + Ord,
    {
        self.decode().unwrap_or_else(|_| TargetSet::none())
    }
}

fn is_sentinel(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(ALL_SENTINEL)
}

fn decode_text<I>(text: &str, allow_nested: bool) -> Result<TargetSet<I>, TargetDecodeError>
where
    I: From<u64> + Ord,
{
    if is_sentinel(text) {
        return Ok(TargetSet::All);
    }

    let value: Value =
        serde_json::from_str(text).map_err(|e| TargetDecodeError::Malformed {
            reason: e.to_string(),
        })?;

    match value {
        Value::Null => Err(TargetDecodeError::Missing),
        Value::String(inner) if is_sentinel(&inner) => Ok(TargetSet::All),
        // Double-encoded arrays show up in older records; unwrap one level only.
        Value::String(inner) if allow_nested => decode_text(inner.trim(), false),
        Value::Array(items) => decode_items(&items),
        other => Err(TargetDecodeError::Malformed {
            reason: format!("expected an identifier array, found {}", json_kind(&other)),
        }),
    }
}

fn decode_items<I>(items: &[Value]) -> Result<TargetSet<I>, TargetDecodeError>
where
    I: From<u64> + Ord,
{
    let sentinel_only: bool = !items.is_empty()
        && items
            .iter()
            .all(|item| matches!(item, Value::String(s) if is_sentinel(s)));
    if sentinel_only {
        return Ok(TargetSet::All);
    }

    let mut ids: BTreeSet<I> = BTreeSet::new();
    for item in items {
        ids.insert(I::from(parse_id(item)?));
    }
    Ok(TargetSet::Only(ids))
}

fn parse_id(item: &Value) -> Result<u64, TargetDecodeError> {
    match item {
        Value::Number(n) => n.as_u64().ok_or_else(|| TargetDecodeError::Malformed {
            reason: format!("identifier {n} is not a non-negative integer"),
        }),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| TargetDecodeError::Malformed {
                reason: format!("identifier '{s}' is not numeric: {e}"),
            }),
        other => Err(TargetDecodeError::Malformed {
            reason: format!("unexpected {} in identifier array", json_kind(other)),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for EncodedTargets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Accepts a string, `null`, or any inline JSON value.
///
/// Inline values (e.g. an array that was never string-encoded) are kept as
/// their JSON text, so loading a record never fails on its target fields.
impl<'de> Deserialize<'de> for EncodedTargets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Option<Value> = Option::deserialize(deserializer)?;
        let raw: Option<String> = match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };
        Ok(Self { raw })
    }
}
