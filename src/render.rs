//! Terminal rendering of artwork cards and collections.

use saam_sparql::ArtworkCollection;

use crate::card::ArtworkCard;
use crate::config::OutputFormat;
use crate::error::{ArtError, Result};

/// Render one card as a plain text block.
///
/// The biography block is omitted when the biography is empty.
pub fn render_card_text(card: &ArtworkCard) -> String {
    let mut lines = vec![
        card.artist_name.clone(),
        card.details.clone(),
        String::new(),
        format!("Artwork:  {}", card.artwork_image_url),
        format!("Portrait: {}", card.portrait_url),
    ];

    if !card.biography.is_empty() {
        lines.push(String::new());
        lines.push(card.biography.clone());
    }

    lines.extend([
        String::new(),
        format!("Linked open data about this work:   {}", card.work_linked_data_url),
        format!("Search the catalog for this work:   {}", card.work_catalog_url),
        format!("Linked open data about this artist: {}", card.artist_linked_data_url),
        format!("Search the catalog for this artist: {}", card.artist_catalog_url),
    ]);

    lines.join("\n")
}

/// Render cards in the requested format.
///
/// Text cards are separated by a horizontal rule; JSON is a single
/// pretty-printed array.
///
/// # Errors
///
/// Returns [`ArtError::Render`] if JSON encoding fails.
pub fn render_cards(cards: &[ArtworkCard], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(cards
            .iter()
            .map(render_card_text)
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", "-".repeat(40)))),
        OutputFormat::Json => serde_json::to_string_pretty(cards)
            .map_err(|e| ArtError::Render(format!("failed to encode cards: {e}"))),
    }
}

/// Render a whole collection: one summary line per record as text, or the
/// records themselves as JSON.
///
/// # Errors
///
/// Returns [`ArtError::Render`] if JSON encoding fails.
pub fn render_collection(collection: &ArtworkCollection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(collection
            .iter()
            .map(|record| {
                let card = ArtworkCard::from_record(record);
                format!("{}\t{}\t{}", card.artist_name, card.life_range, card.work_linked_data_url)
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(collection)
            .map_err(|e| ArtError::Render(format!("failed to encode collection: {e}"))),
    }
}
