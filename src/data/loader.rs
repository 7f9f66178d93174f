use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::model::{AwardDataset, Laureate, Prize};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Wire envelopes
// ---------------------------------------------------------------------------

/// The laureates file wraps its records: `{ "laureates": [...] }`.
#[derive(Deserialize)]
struct LaureatesFile {
    laureates: Vec<Laureate>,
}

/// The prizes file wraps its records: `{ "prizes": [...] }`.
#[derive(Deserialize)]
struct PrizesFile {
    prizes: Vec<Prize>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the dataset from its two JSON documents.
///
/// Prize records without any laureate reference (years where the award
/// was withheld) are dropped here with a warning: every prize the engine
/// sees references at least one laureate.
pub fn load_dataset(
    laureates_path: &Path,
    prizes_path: &Path,
) -> Result<AwardDataset, LoadError> {
    let laureates: LaureatesFile = read_json(laureates_path)?;
    let prizes: PrizesFile = read_json(prizes_path)?;

    let total = prizes.prizes.len();
    let prizes: Vec<Prize> = prizes
        .prizes
        .into_iter()
        .filter(|p| !p.laureates.is_empty())
        .collect();
    let skipped = total - prizes.len();
    if skipped > 0 {
        log::warn!("Skipped {skipped} prize record(s) without laureate references");
    }

    log::info!(
        "Loaded {} laureates and {} prizes",
        laureates.laureates.len(),
        prizes.len()
    );

    Ok(AwardDataset::from_records(laureates.laureates, prizes))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
