// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot files: promotion records plus the catalogs they resolve against.

use crate::error::CliError;
use promo_engine::CampaignStore;
use promo_engine_domain::{Dealer, Promotion, VehicleModel};
use serde::Deserialize;
use std::path::Path;

/// The on-disk snapshot shape.
///
/// Missing catalogs are treated as empty, which resolves every explicit
/// target to nothing and `ALL` to nothing as well.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotFile {
    pub promotions: Vec<Promotion>,
    #[serde(default)]
    pub dealers: Vec<Dealer>,
    #[serde(default)]
    pub models: Vec<VehicleModel>,
}

impl SnapshotFile {
    /// Loads the records into a campaign store.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Core` if two promotions share an id.
    pub fn into_store(self) -> Result<CampaignStore, CliError> {
        Ok(CampaignStore::from_records(
            self.promotions,
            self.dealers,
            self.models,
        )?)
    }
}

/// Parses snapshot JSON.
///
/// # Errors
///
/// Returns `CliError::Json` if the text is not a valid snapshot.
pub fn parse_snapshot(text: &str) -> Result<SnapshotFile, CliError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a snapshot file.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read and `CliError::Json`
/// if it is not a valid snapshot.
pub fn load_snapshot(path: &Path) -> Result<SnapshotFile, CliError> {
    let text: String = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: SnapshotFile = parse_snapshot(&text)?;
    tracing::info!(
        path = %path.display(),
        promotions = snapshot.promotions.len(),
        dealers = snapshot.dealers.len(),
        models = snapshot.models.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}
