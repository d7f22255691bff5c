use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::errors::LoadError;
use crate::state::promotions::{Promotion, PromotionStore};

/// Number of fields every promotions row must carry: id, price, expiration date.
const FIELDS_PER_ROW: usize = 3;

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Load promotions from the CSV file at `path` into `store`.
///
/// Only failing to open the file is an error. Malformed rows are logged and
/// skipped, see [`load_from_reader`].
pub fn load_promotions(path: &Path, store: &PromotionStore) -> Result<LoadSummary, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("Loading promotions from {}", path.display());
    let summary = load_from_reader(file, store);

    tracing::info!(
        "Loaded promotions: {} stored, {} rows skipped ({} in store)",
        summary.loaded,
        summary.skipped,
        store.len()
    );

    Ok(summary)
}

/// Read `id,price,expiration_date` rows (no header) and insert each one.
///
/// - rows with a field count other than 3 are skipped
/// - rows that are not valid UTF-8 are skipped
/// - rows with an empty id are skipped, they could never be looked up
/// - an I/O error ends the read; rows read so far stay in the store
pub fn load_from_reader<R: Read>(reader: R, store: &PromotionStore) -> LoadSummary {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut summary = LoadSummary::default();

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                tracing::warn!("Stopped reading promotions: {e}");
                break;
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable row: {e}");
                summary.skipped += 1;
                continue;
            }
        };

        match parse_row(&record) {
            Ok(promotion) => {
                store.put(promotion);
                summary.loaded += 1;
            }
            Err(reason) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                tracing::warn!("Skipping row at line {line}: {reason}");
                summary.skipped += 1;
            }
        }
    }

    summary
}

fn parse_row(record: &StringRecord) -> Result<Promotion, String> {
    if record.len() != FIELDS_PER_ROW {
        return Err(format!(
            "expected {FIELDS_PER_ROW} fields, found {}",
            record.len()
        ));
    }

    let id = &record[0];
    if id.is_empty() {
        return Err("empty id".to_string());
    }

    Ok(Promotion {
        id: id.to_string(),
        price: record[1].to_string(),
        expiration_date: record[2].to_string(),
    })
}
