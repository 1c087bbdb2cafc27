//! Seed collection loading.
//!
//! The seed is an ordered JSON array of assets supplied by an external data
//! source at startup. Loading rejects records whose geometry diverges from
//! the fixed type mapping before they can reach the store.

use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::Asset;

/// Read and check the seed file
pub fn load(path: impl AsRef<Path>) -> AppResult<Vec<Asset>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let assets: Vec<Asset> = serde_json::from_str(&raw)?;
    for asset in &assets {
        if !asset.geometry_consistent() {
            return Err(AppError::Seed(format!(
                "Asset {} ({}): geometry does not match the {} type mapping",
                asset.id,
                asset.code,
                asset.asset_type,
            )));
        }
    }
    tracing::info!(count = assets.len(), path = %path.display(), "seed collection loaded");
    Ok(assets)
}
