//! Display cards: the view of one artwork record that the renderer prints.
//!
//! Everything here is derived from an [`ArtworkRecord`] without further
//! lookups, so a card can be rebuilt from a cached record at any time.

use saam_sparql::ArtworkRecord;
use serde::Serialize;

/// Prefix shared by every SAAM object URI.
pub const OBJECT_URI_PREFIX: &str = "http://edan.si.edu/saam/id/object/";

/// SAAM public catalog search. The search term is appended URL-encoded.
pub const CATALOG_SEARCH_URL: &str = "https://americanart.si.edu/search?query=";

/// Separator between the life range and the nationality in the details line.
const DETAILS_SEPARATOR: &str = "   *   ";

/// Everything the renderer needs to show one artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkCard {
    pub artist_name: String,
    /// `"<birth year> - <death date>"`, or the nationality alone when the
    /// birth date is unknown.
    pub life_range: String,
    /// Life range plus nationality, as shown under the artist name.
    pub details: String,
    pub portrait_url: String,
    pub artwork_image_url: String,
    pub biography: String,
    pub work_linked_data_url: String,
    pub work_catalog_url: String,
    pub artist_linked_data_url: String,
    pub artist_catalog_url: String,
}

impl ArtworkCard {
    pub fn from_record(record: &ArtworkRecord) -> Self {
        Self {
            artist_name: record.label.clone(),
            life_range: life_range(record),
            details: details(record),
            portrait_url: record.image.clone(),
            artwork_image_url: record.work_representation.clone(),
            biography: record.short_bio.clone(),
            work_linked_data_url: record.work.clone(),
            work_catalog_url: catalog_search_url(object_id(&record.work)),
            artist_linked_data_url: record.uri.clone(),
            artist_catalog_url: catalog_search_url(&record.label),
        }
    }
}

impl From<&ArtworkRecord> for ArtworkCard {
    fn from(record: &ArtworkRecord) -> Self {
        Self::from_record(record)
    }
}

/// Life range for display.
///
/// With a birth date: its first four characters (the year), a dash, and the
/// death date as given (possibly empty). Without one: the nationality label.
pub fn life_range(record: &ArtworkRecord) -> String {
    if record.birth_date.is_empty() {
        return record.nationality_label.clone();
    }
    let birth_year: String = record.birth_date.chars().take(4).collect();
    format!("{birth_year} - {}", record.death_date)
}

/// Life range followed by the nationality, when both are known.
///
/// Without a birth date the life range already is the nationality, so it is
/// not repeated.
pub fn details(record: &ArtworkRecord) -> String {
    let range = life_range(record);
    if record.birth_date.is_empty() || record.nationality_label.is_empty() {
        range
    } else {
        format!("{range}{DETAILS_SEPARATOR}{}", record.nationality_label)
    }
}

/// Catalog object id of a work URI.
///
/// Canonical URIs carry the id after [`OBJECT_URI_PREFIX`]. For any other
/// shape the last non-empty path segment is used.
pub fn object_id(work: &str) -> &str {
    if let Some(id) = work.strip_prefix(OBJECT_URI_PREFIX) {
        return id;
    }
    work.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(work)
}

/// Catalog search link for a free-text term.
pub fn catalog_search_url(term: &str) -> String {
    format!("{CATALOG_SEARCH_URL}{}", urlencoding::encode(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ArtworkRecord {
        ArtworkRecord {
            uri: "http://edan.si.edu/saam/id/person-institution/795".into(),
            label: "Mary Cassatt".into(),
            image: "https://example.org/cassatt.jpg".into(),
            birth_date: "1844-05-22".into(),
            death_date: "1926".into(),
            short_bio: "Painter and printmaker.".into(),
            nationality_label: "American".into(),
            work_representation: "https://example.org/work.jpg".into(),
            work: "http://edan.si.edu/saam/id/object/1234".into(),
        }
    }

    #[test]
    fn life_range_uses_birth_year_and_death_date() {
        assert_eq!(life_range(&record()), "1844 - 1926");
    }

    #[test]
    fn life_range_without_birth_date_is_nationality_only() {
        let mut r = record();
        r.birth_date.clear();
        assert_eq!(life_range(&r), "American");
        assert_eq!(details(&r), "American");
    }

    #[test]
    fn life_range_keeps_empty_death_date() {
        let mut r = record();
        r.death_date.clear();
        assert_eq!(life_range(&r), "1844 - ");
    }

    #[test]
    fn life_range_short_birth_date_is_taken_whole() {
        let mut r = record();
        r.birth_date = "c.".into();
        assert_eq!(life_range(&r), "c. - 1926");
    }

    #[test]
    fn life_range_counts_characters_not_bytes() {
        let mut r = record();
        r.birth_date = "ca. 1900".into();
        assert_eq!(life_range(&r), "ca.  - 1926");
        r.birth_date = "été 1900".into();
        assert_eq!(life_range(&r), "été  - 1926");
    }

    #[test]
    fn details_appends_nationality() {
        assert_eq!(details(&record()), "1844 - 1926   *   American");
    }

    #[test]
    fn details_without_nationality_is_life_range() {
        let mut r = record();
        r.nationality_label.clear();
        assert_eq!(details(&r), "1844 - 1926");
    }

    #[test]
    fn object_id_from_canonical_uri() {
        assert_eq!(object_id("http://edan.si.edu/saam/id/object/1234"), "1234");
        assert_eq!(
            object_id("http://edan.si.edu/saam/id/object/1929.6.5"),
            "1929.6.5"
        );
    }

    #[test]
    fn object_id_from_other_uri_uses_last_segment() {
        assert_eq!(object_id("https://example.org/objects/77/"), "77");
        assert_eq!(object_id("no-slashes"), "no-slashes");
    }

    #[test]
    fn work_catalog_link_carries_object_id() {
        let card = ArtworkCard::from_record(&record());
        assert_eq!(
            card.work_catalog_url,
            "https://americanart.si.edu/search?query=1234"
        );
        let id = card
            .work_catalog_url
            .strip_prefix(CATALOG_SEARCH_URL)
            .expect("catalog prefix");
        assert_eq!(id, "1234");
    }

    #[test]
    fn artist_catalog_link_encodes_name() {
        let card = ArtworkCard::from_record(&record());
        assert_eq!(
            card.artist_catalog_url,
            "https://americanart.si.edu/search?query=Mary%20Cassatt"
        );
    }

    #[test]
    fn linked_data_links_are_verbatim() {
        let r = record();
        let card = ArtworkCard::from(&r);
        assert_eq!(card.work_linked_data_url, r.work);
        assert_eq!(card.artist_linked_data_url, r.uri);
    }

    #[test]
    fn card_passes_through_images_and_biography() {
        let card = ArtworkCard::from_record(&record());
        assert_eq!(card.artist_name, "Mary Cassatt");
        assert_eq!(card.portrait_url, "https://example.org/cassatt.jpg");
        assert_eq!(card.artwork_image_url, "https://example.org/work.jpg");
        assert_eq!(card.biography, "Painter and printmaker.");
    }
}
