//! Wire types for SPARQL JSON results and the normalized artwork record.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SparqlError;

/// One RDF term in a SPARQL JSON binding.
///
/// Only `value` is used. The term `type` is kept for logging; `datatype`
/// and `xml:lang` are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Lexical value of the term.
    pub value: String,
    /// Term kind: `uri`, `literal`, `typed-literal` or `bnode`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Term {
    /// Build a plain literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: Some("literal".into()),
        }
    }

    /// Build a URI term.
    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: Some("uri".into()),
        }
    }
}

/// One row of the artwork query result.
///
/// Every variable is optional at the wire level. Which absences are
/// tolerated is decided by the normalizer, not here. Unknown variables
/// are ignored. An explicit `null`, or a term without a string `value`,
/// counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBinding {
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub artist: Option<Term>,
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub sample_label: Option<Term>,
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub image: Option<Term>,
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub short_bio: Option<Term>,
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub death_date: Option<Term>,
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Term>,
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub nationality_label: Option<Term>,
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub work_representation: Option<Term>,
    #[serde(default, deserialize_with = "lenient_term", skip_serializing_if = "Option::is_none")]
    pub work: Option<Term>,
}

/// Top-level SPARQL JSON results document.
///
/// `head` is not needed and is ignored. A document without `results`
/// deserializes successfully and yields no bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlResponse {
    #[serde(default)]
    pub results: Option<SparqlResults>,
}

/// The `results` member of a SPARQL JSON document.
///
/// `bindings` must be an array, but a row that is not an object is dropped
/// on its own rather than failing the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlResults {
    #[serde(default, deserialize_with = "lenient_bindings")]
    pub bindings: Option<Vec<RawBinding>>,
}

fn lenient_term<'de, D>(deserializer: D) -> Result<Option<Term>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value::<Term>(raw) {
        Ok(term) => Ok(Some(term)),
        Err(e) => {
            tracing::debug!(error = %e, "malformed SPARQL term treated as absent");
            Ok(None)
        }
    }
}

fn lenient_bindings<'de, D>(deserializer: D) -> Result<Option<Vec<RawBinding>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(rows) = Option::<Vec<serde_json::Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let bindings = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<RawBinding>(row) {
            Ok(binding) => Some(binding),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed SPARQL binding");
                None
            }
        })
        .collect();
    Ok(Some(bindings))
}

impl SparqlResponse {
    /// Build an envelope around the given bindings.
    pub fn from_bindings(bindings: Vec<RawBinding>) -> Self {
        Self {
            results: Some(SparqlResults {
                bindings: Some(bindings),
            }),
        }
    }

    /// Borrow the bindings, or an empty slice when the envelope lacks them.
    pub fn bindings(&self) -> &[RawBinding] {
        self.results
            .as_ref()
            .and_then(|r| r.bindings.as_deref())
            .unwrap_or(&[])
    }

    /// Whether both `results` and `results.bindings` were present.
    pub fn is_well_formed(&self) -> bool {
        self.results.as_ref().is_some_and(|r| r.bindings.is_some())
    }
}

/// A normalized artwork: every field present, optional ones defaulted.
///
/// Serializes to exactly nine keys in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRecord {
    /// Artist URI.
    pub uri: String,
    /// Artist display name.
    pub label: String,
    /// Artist portrait URL, or [`crate::PLACEHOLDER_IMAGE_URL`].
    pub image: String,
    pub birth_date: String,
    pub death_date: String,
    /// Biography with markup tags removed.
    pub short_bio: String,
    pub nationality_label: String,
    /// Image URL of the work itself.
    pub work_representation: String,
    /// Linked-data URI of the work.
    pub work: String,
}

/// Ordered artwork records, in the order the endpoint returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkCollection(Vec<ArtworkRecord>);

impl ArtworkCollection {
    pub fn new(records: Vec<ArtworkRecord>) -> Self {
        Self(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[ArtworkRecord] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArtworkRecord> {
        self.0.iter()
    }

    /// Pick one record uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`SparqlError::NoData`] when the collection is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&ArtworkRecord, SparqlError> {
        self.0.choose(rng).ok_or(SparqlError::NoData)
    }
}

impl From<Vec<ArtworkRecord>> for ArtworkCollection {
    fn from(records: Vec<ArtworkRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<ArtworkRecord> for ArtworkCollection {
    fn from_iter<I: IntoIterator<Item = ArtworkRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ArtworkCollection {
    type Item = ArtworkRecord;
    type IntoIter = std::vec::IntoIter<ArtworkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArtworkCollection {
    type Item = &'a ArtworkRecord;
    type IntoIter = std::slice::Iter<'a, ArtworkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(label: &str) -> ArtworkRecord {
        ArtworkRecord {
            uri: format!("http://edan.si.edu/saam/id/person-institution/{label}"),
            label: label.into(),
            image: "https://example.org/portrait.jpg".into(),
            birth_date: "1848-01-01".into(),
            death_date: "1907".into(),
            short_bio: "Painter.".into(),
            nationality_label: "American".into(),
            work_representation: "https://example.org/work.jpg".into(),
            work: "http://edan.si.edu/saam/id/object/1".into(),
        }
    }

    #[test]
    fn binding_deserializes_camel_case_variables() {
        let json = r#"{
            "artist": {"type": "uri", "value": "http://edan.si.edu/saam/id/person-institution/1"},
            "sampleLabel": {"type": "literal", "value": "Mary Cassatt"},
            "nationalityLabel": {"type": "literal", "xml:lang": "en", "value": "American"},
            "workRepresentation": {"type": "uri", "value": "https://example.org/w.jpg"},
            "work": {"type": "uri", "value": "http://edan.si.edu/saam/id/object/1"}
        }"#;
        let binding: RawBinding = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            binding.sample_label.as_ref().map(|t| t.value.as_str()),
            Some("Mary Cassatt")
        );
        assert_eq!(binding.artist.as_ref().and_then(|t| t.kind.as_deref()), Some("uri"));
        assert_eq!(
            binding.nationality_label.map(|t| t.value),
            Some("American".to_string())
        );
        assert!(binding.image.is_none());
        assert!(binding.birth_date.is_none());
    }

    #[test]
    fn binding_treats_null_as_absent_and_ignores_unknown_variables() {
        let json = r#"{"image": null, "somethingElse": {"value": "x"}}"#;
        let binding: RawBinding = serde_json::from_str(json).expect("deserialize");
        assert_eq!(binding, RawBinding::default());
    }

    #[test]
    fn typed_literal_with_datatype_is_accepted() {
        let json = r#"{"birthDate": {"type": "typed-literal",
            "datatype": "http://www.w3.org/2001/XMLSchema#date", "value": "1844-05-22"}}"#;
        let binding: RawBinding = serde_json::from_str(json).expect("deserialize");
        assert_eq!(binding.birth_date.map(|t| t.value), Some("1844-05-22".into()));
    }

    #[test]
    fn malformed_terms_are_absent() {
        let json = r#"{
            "work": {"type": "uri"},
            "image": {"value": 5},
            "shortBio": "bare string",
            "sampleLabel": {"type": "literal", "value": "Mary Cassatt"}
        }"#;
        let binding: RawBinding = serde_json::from_str(json).expect("deserialize");
        assert!(binding.work.is_none());
        assert!(binding.image.is_none());
        assert!(binding.short_bio.is_none());
        assert_eq!(binding.sample_label.map(|t| t.value), Some("Mary Cassatt".into()));
    }

    #[test]
    fn non_object_rows_are_dropped_individually() {
        let json = r#"{"results": {"bindings": [
            {"sampleLabel": {"value": "First"}},
            42,
            {"sampleLabel": {"value": "Second"}}
        ]}}"#;
        let response: SparqlResponse = serde_json::from_str(json).expect("deserialize");
        let labels: Vec<&str> = response
            .bindings()
            .iter()
            .filter_map(|b| b.sample_label.as_ref().map(|t| t.value.as_str()))
            .collect();
        assert_eq!(labels, ["First", "Second"]);
    }

    #[test]
    fn bindings_that_are_not_an_array_fail() {
        let result: Result<SparqlResponse, _> =
            serde_json::from_str(r#"{"results": {"bindings": {"artist": {}}}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn envelope_with_bindings_is_well_formed() {
        let json = r#"{"head": {"vars": ["artist"]}, "results": {"bindings": [{}]}}"#;
        let response: SparqlResponse = serde_json::from_str(json).expect("deserialize");
        assert!(response.is_well_formed());
        assert_eq!(response.bindings().len(), 1);
    }

    #[test]
    fn envelope_without_results_yields_no_bindings() {
        let response: SparqlResponse = serde_json::from_str("{}").expect("deserialize");
        assert!(!response.is_well_formed());
        assert!(response.bindings().is_empty());
    }

    #[test]
    fn envelope_without_bindings_yields_no_bindings() {
        let response: SparqlResponse =
            serde_json::from_str(r#"{"results": {}}"#).expect("deserialize");
        assert!(!response.is_well_formed());
        assert!(response.bindings().is_empty());
    }

    #[test]
    fn record_serializes_nine_keys_in_stable_order() {
        let json = serde_json::to_string(&record("Cassatt")).expect("serialize");
        let keys = [
            "\"uri\"",
            "\"label\"",
            "\"image\"",
            "\"birthDate\"",
            "\"deathDate\"",
            "\"shortBio\"",
            "\"nationalityLabel\"",
            "\"workRepresentation\"",
            "\"work\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(k).unwrap_or_else(|| panic!("missing key {k}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order: {json}");

        let value: serde_json::Value = serde_json::from_str(&json).expect("reparse");
        assert_eq!(value.as_object().map(|o| o.len()), Some(9));
    }

    #[test]
    fn collection_preserves_order() {
        let collection: ArtworkCollection =
            ["A", "B", "C"].into_iter().map(record).collect();
        let labels: Vec<&str> = collection.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn choose_from_empty_collection_is_no_data() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = ArtworkCollection::default().choose(&mut rng).unwrap_err();
        assert!(matches!(err, SparqlError::NoData));
        assert_eq!(err.to_string(), "no data available");
    }

    #[test]
    fn choose_returns_a_member() {
        let mut rng = StdRng::seed_from_u64(7);
        let collection = ArtworkCollection::new(vec![record("A"), record("B")]);
        for _ in 0..10 {
            let picked = collection.choose(&mut rng).expect("non-empty");
            assert!(collection.records().contains(picked));
        }
    }

    #[test]
    fn collection_serializes_as_plain_array() {
        let collection = ArtworkCollection::new(vec![record("A")]);
        let value = serde_json::to_value(&collection).expect("serialize");
        assert!(value.is_array());
        assert_eq!(value[0]["label"], "A");
    }
}
