// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use promo_engine::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the command-line caller.
#[derive(Debug, Error)]
pub enum CliError {
    /// The snapshot file could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot or the output could not be (de)serialized.
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `--now` was not an RFC 3339 timestamp.
    #[error("Invalid --now value: {0}")]
    Time(#[from] time::error::Parse),

    /// The snapshot records could not be loaded.
    #[error(transparent)]
    Core(#[from] CoreError),
}
