//! # File I/O Module
//!
//! Design and report files:
//! - **Design files**: JSON `{ "version": "0.1.0", "design": { "tier": ... } }`
//! - **Report files**: a serialized [`CostReport`], written atomically
//! - **Version validation**: the file's schema version must be compatible
//!
//! ## Example
//!
//! ```rust,no_run
//! use mooring_core::file_io::{load_design, save_report};
//! use mooring_core::materials::PropertyDatabase;
//! use mooring_core::system::System;
//! use std::path::Path;
//!
//! let design = load_design(Path::new("site_a.json"))?;
//! let db = PropertyDatabase::builtin()?;
//!
//! let mut system = System::default();
//! system.set_params(db, &design.design)?;
//! save_report(&system.calc_cost()?, Path::new("site_a_report.json"))?;
//! # Ok::<(), mooring_core::errors::MooringError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{MooringError, MooringResult};
use crate::inputs::DesignInput;
use crate::report::{CostReport, SCHEMA_VERSION};

/// A versioned design input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFile {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub design: DesignInput,
}

impl DesignFile {
    pub fn new(design: DesignInput) -> Self {
        DesignFile {
            version: SCHEMA_VERSION.to_string(),
            design,
        }
    }
}

/// Write `contents` to `path` via a temporary sibling file and a rename.
fn write_atomic(path: &Path, contents: &str) -> MooringResult<()> {
    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        MooringError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        MooringError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        MooringError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        MooringError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

fn read_to_string(path: &Path) -> MooringResult<String> {
    let mut file = File::open(path)
        .map_err(|e| MooringError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| MooringError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Save a design input file atomically.
pub fn save_design(design: &DesignFile, path: &Path) -> MooringResult<()> {
    let json = serde_json::to_string_pretty(design).map_err(|e| MooringError::serialization(e.to_string()))?;
    write_atomic(path, &json)?;
    tracing::info!("Saved {} design to {}", design.design.tier_name(), path.display());
    Ok(())
}

/// Load and version-check a design input file.
///
/// # Returns
///
/// * `Ok(DesignFile)` - Successfully loaded design
/// * `Err(MooringError::VersionMismatch)` - File version is incompatible
/// * `Err(MooringError::SerializationError)` - Invalid JSON or unknown keyword
/// * `Err(MooringError::FileError)` - I/O error
pub fn load_design(path: &Path) -> MooringResult<DesignFile> {
    let contents = read_to_string(path)?;
    let design = parse_design(&contents)
        .map_err(|e| match e {
            MooringError::SerializationError { reason } => {
                MooringError::serialization(format!("Invalid design in {}: {}", path.display(), reason))
            }
            other => other,
        })?;
    tracing::info!("Loaded {} design from {}", design.design.tier_name(), path.display());
    Ok(design)
}

/// Parse and version-check design JSON.
pub fn parse_design(json: &str) -> MooringResult<DesignFile> {
    // Check the version before the body so an incompatible file reports a
    // version mismatch rather than a shape error.
    #[derive(Deserialize)]
    struct Header {
        version: String,
    }
    let header: Header = serde_json::from_str(json).map_err(|e| MooringError::serialization(e.to_string()))?;
    validate_version(&header.version)?;

    serde_json::from_str(json).map_err(|e| MooringError::serialization(e.to_string()))
}

/// Save a cost report as pretty JSON with atomic write semantics.
///
/// 1. Serialize the report to JSON
/// 2. Write to a temporary file (.json.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename over the destination (atomic on most filesystems)
pub fn save_report(report: &CostReport, path: &Path) -> MooringResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| MooringError::serialization(e.to_string()))?;
    write_atomic(path, &json)?;
    tracing::info!("Saved cost report {} to {}", report.meta.id, path.display());
    Ok(())
}

/// Load a previously saved cost report.
pub fn load_report(path: &Path) -> MooringResult<CostReport> {
    let contents = read_to_string(path)?;
    let report: CostReport = serde_json::from_str(&contents).map_err(|e| {
        MooringError::serialization(format!("Invalid report in {}: {}", path.display(), e))
    })?;
    validate_version(&report.meta.version)?;
    Ok(report)
}

/// Validate that a file version is compatible with the current schema.
pub fn validate_version(file_version: &str) -> MooringResult<()> {
    let mismatch = || MooringError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };

    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);
    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // In 0.x a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
