//! On-disk layout of the collection files
//!
//! ```text
//! <root>/data/master/{racks,drawers,parts,categories,manufacturers,tags,locations}.json
//! <root>/data/movements/stock_movements_<period>.json
//! <root>/data/movements/adjustments_<period>.json
//! <root>/data/movements/reservations.json
//! <root>/data/indexes/parts_by_{tag,category,drawer}.json
//! ```

use rackstore_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Directory under the repository root holding all collections
pub const DATA_DIR: &str = "data";
/// Master data subdirectory
pub const MASTER_DIR: &str = "master";
/// Movement ledger subdirectory
pub const MOVEMENTS_DIR: &str = "movements";
/// Derived index subdirectory
pub const INDEXES_DIR: &str = "indexes";

/// Paths of the master data collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterDataPaths {
    pub racks: PathBuf,
    pub drawers: PathBuf,
    pub parts: PathBuf,
    pub categories: PathBuf,
    pub manufacturers: PathBuf,
    pub tags: PathBuf,
    pub locations: PathBuf,
}

impl MasterDataPaths {
    /// Resolve against a repository root
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let dir = root.as_ref().join(DATA_DIR).join(MASTER_DIR);
        MasterDataPaths {
            racks: dir.join("racks.json"),
            drawers: dir.join("drawers.json"),
            parts: dir.join("parts.json"),
            categories: dir.join("categories.json"),
            manufacturers: dir.join("manufacturers.json"),
            tags: dir.join("tags.json"),
            locations: dir.join("locations.json"),
        }
    }
}

/// Paths of the movement ledgers
///
/// Stock movements and adjustments are partitioned by period, one file per
/// period. Reservations are a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementDataPaths {
    dir: PathBuf,
}

impl MovementDataPaths {
    /// Resolve against a repository root
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        MovementDataPaths {
            dir: root.as_ref().join(DATA_DIR).join(MOVEMENTS_DIR),
        }
    }

    /// Directory holding every movement file
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `stock_movements_<period>.json`
    pub fn stock_movements(&self, period: &str) -> Result<PathBuf> {
        validate_period(period)?;
        Ok(self.dir.join(format!("stock_movements_{}.json", period)))
    }

    /// `adjustments_<period>.json`
    pub fn adjustments(&self, period: &str) -> Result<PathBuf> {
        validate_period(period)?;
        Ok(self.dir.join(format!("adjustments_{}.json", period)))
    }

    /// `reservations.json`
    pub fn reservations(&self) -> PathBuf {
        self.dir.join("reservations.json")
    }
}

/// Paths of the derived indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDataPaths {
    pub parts_by_tag: PathBuf,
    pub parts_by_category: PathBuf,
    pub parts_by_drawer: PathBuf,
}

impl IndexDataPaths {
    /// Resolve against a repository root
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let dir = root.as_ref().join(DATA_DIR).join(INDEXES_DIR);
        IndexDataPaths {
            parts_by_tag: dir.join("parts_by_tag.json"),
            parts_by_category: dir.join("parts_by_category.json"),
            parts_by_drawer: dir.join("parts_by_drawer.json"),
        }
    }
}

/// Check that a period can be spliced into a file name
///
/// Periods must be non-empty and use only ASCII letters, digits, `-` and `_`
/// (`"202401"`, `"2024-Q1"`). Anything else could name a file outside the
/// movements directory.
pub fn validate_period(period: &str) -> Result<()> {
    if period.is_empty() {
        return Err(Error::InvalidPeriod {
            period: period.to_string(),
            reason: "period cannot be empty".to_string(),
        });
    }
    if let Some((position, c)) = period
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(Error::InvalidPeriod {
            period: period.to_string(),
            reason: format!(
                "invalid character '{}' at position {} (only ASCII letters, digits, '-' and '_' allowed)",
                c, position
            ),
        });
    }
    Ok(())
}
