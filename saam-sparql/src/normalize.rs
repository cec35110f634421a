//! Normalization of raw bindings into complete artwork records.
//!
//! Required variables (`artist`, `sampleLabel`, `workRepresentation`,
//! `work`) must be present; a binding missing any of them cannot be
//! displayed and is skipped with a warning. Optional variables fall back to
//! a fixed default so every [`ArtworkRecord`] field is always populated.

use crate::error::SparqlError;
use crate::markup::strip_markup;
use crate::types::{ArtworkCollection, ArtworkRecord, RawBinding, SparqlResponse, Term};

/// Portrait shown when an artist has no main representation.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://americanart.si.edu/sites/default/files/images/placeholder.png";

/// Value of a required variable, or the field name for error reporting.
fn required(term: Option<&Term>, field: &'static str) -> Result<String, SparqlError> {
    term.map(|t| t.value.clone())
        .ok_or(SparqlError::MissingField(field))
}

/// Value of an optional variable, or `default` when absent.
fn optional_or(term: Option<&Term>, default: &str) -> String {
    term.map_or_else(|| default.to_owned(), |t| t.value.clone())
}

/// Convert one binding into a record.
///
/// # Errors
///
/// Returns [`SparqlError::MissingField`] naming the first absent required
/// variable, checked in the order `workRepresentation`, `work`,
/// `sampleLabel`, `artist`.
pub fn normalize_binding(binding: &RawBinding) -> Result<ArtworkRecord, SparqlError> {
    let work_representation = required(binding.work_representation.as_ref(), "workRepresentation")?;
    let work = required(binding.work.as_ref(), "work")?;
    let label = required(binding.sample_label.as_ref(), "sampleLabel")?;
    let uri = required(binding.artist.as_ref(), "artist")?;

    let short_bio = strip_markup(&optional_or(binding.short_bio.as_ref(), ""));

    Ok(ArtworkRecord {
        uri,
        label,
        image: optional_or(binding.image.as_ref(), PLACEHOLDER_IMAGE_URL),
        birth_date: optional_or(binding.birth_date.as_ref(), ""),
        death_date: optional_or(binding.death_date.as_ref(), ""),
        short_bio,
        nationality_label: optional_or(binding.nationality_label.as_ref(), ""),
        work_representation,
        work,
    })
}

/// Convert every binding, in order, skipping those missing a required variable.
///
/// An empty slice yields an empty collection.
pub fn normalize_bindings(bindings: &[RawBinding]) -> ArtworkCollection {
    let mut skipped = 0usize;
    let records: ArtworkCollection = bindings
        .iter()
        .enumerate()
        .filter_map(|(index, binding)| match normalize_binding(binding) {
            Ok(record) => Some(record),
            Err(err) => {
                skipped += 1;
                let artist = binding.artist.as_ref().map(|t| t.value.as_str());
                tracing::warn!(index, ?artist, error = %err, "skipping unusable binding");
                None
            }
        })
        .collect();

    tracing::debug!(
        total = bindings.len(),
        kept = records.len(),
        skipped,
        "bindings normalized"
    );
    records
}

/// Normalize a full response envelope.
///
/// An envelope missing `results` or `results.bindings` is logged and
/// treated as an empty result set rather than an error.
pub fn normalize_response(response: &SparqlResponse) -> ArtworkCollection {
    if !response.is_well_formed() {
        tracing::warn!("response envelope has no results.bindings, treating as empty");
    }
    normalize_bindings(response.bindings())
}
