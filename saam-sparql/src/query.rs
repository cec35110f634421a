//! Fixed SPARQL query text for the SAAM linked-data endpoint.
//!
//! Queries are compile-time constants. Callers choose between variants but
//! never supply free text, so the same build always sends the same query.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Artist, label, and work query with optional biographical clauses.
///
/// Rows are shuffled server-side and capped at 100, so each fetch yields a
/// fresh random sample.
pub const SAMPLED_QUERY: &str = r#"
PREFIX edan: <http://edan.si.edu/saam/id/ontologies/>
PREFIX cidoc: <http://www.cidoc-crm.org/cidoc-crm/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX skos: <http://www.w3.org/2004/02/skos/core#>

SELECT ?artist (SAMPLE(?label) as ?sampleLabel) ?image ?shortBio ?deathDate ?birthDate ?nationalityLabel ?workRepresentation ?work
WHERE {
?artist cidoc:P1_is_identified_by ?displayName .
?displayName rdfs:label ?label .
OPTIONAL { ?artist edan:PE_has_main_representation ?image . }
OPTIONAL { ?artist edan:PE_has_note_luceartistbio ?shortBio . }

OPTIONAL { ?artist cidoc:P100i_died_in ?P100i_died_in .
?P100i_died_in cidoc:P4_has_time-span ?deathSpan .
?deathSpan cidoc:P82_at_some_time_within ?deathDate } .

OPTIONAL { ?artist cidoc:P98i_was_born ?P98i_was_born .
?P98i_was_born cidoc:P4_has_time-span ?birthSpan .
?birthSpan cidoc:P82_at_some_time_within ?birthDate } .

OPTIONAL { ?artist cidoc:P107i_is_current_or_former_member_of ?nationality .
?nationality skos:prefLabel ?nationalityLabel } .

?production cidoc:P14_carried_out_by ?artist .
?production cidoc:P108_has_produced ?work .
?work cidoc:P138i_has_representation ?workRepresentation
}
GROUP BY ?artist ?image ?shortBio ?deathDate ?birthDate ?nationalityLabel ?workRepresentation ?work
ORDER BY RAND()
LIMIT 100
"#;

/// Strict query: only artists with every biographical field populated.
///
/// No server-side shuffle; the result set is large and stable.
pub const COMPLETE_QUERY: &str = r#"
PREFIX edan: <http://edan.si.edu/saam/id/ontologies/>
PREFIX cidoc: <http://www.cidoc-crm.org/cidoc-crm/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX skos: <http://www.w3.org/2004/02/skos/core#>

SELECT ?artist (SAMPLE(?label) as ?sampleLabel) ?image ?shortBio ?deathDate ?birthDate ?nationalityLabel ?workRepresentation ?work
WHERE {
?artist edan:PE_has_main_representation ?image ;
        edan:PE_has_note_artistbio ?shortBio ;
        cidoc:P1_is_identified_by ?displayName .
?displayName rdfs:label ?label .

?artist cidoc:P100i_died_in ?P100i_died_in .
?P100i_died_in cidoc:P4_has_time-span ?deathSpan .
?deathSpan cidoc:P82_at_some_time_within ?deathDate .

?artist cidoc:P98i_was_born ?P98i_was_born .
?P98i_was_born cidoc:P4_has_time-span ?birthSpan .
?birthSpan cidoc:P82_at_some_time_within ?birthDate .

?artist cidoc:P107i_is_current_or_former_member_of ?nationality .
?nationality skos:prefLabel ?nationalityLabel .

?production cidoc:P14_carried_out_by ?artist .
?production cidoc:P108_has_produced ?work .
?work cidoc:P138i_has_representation ?workRepresentation
}
GROUP BY ?artist ?image ?shortBio ?deathDate ?birthDate ?nationalityLabel ?workRepresentation ?work
LIMIT 5000
"#;

/// Which fixed query the provider sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryVariant {
    /// Random sample of up to 100 works, biographical fields optional.
    #[default]
    Sampled,
    /// Every biographical field required, up to 5000 rows.
    Complete,
}

impl QueryVariant {
    /// Returns the SPARQL text for this variant.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Sampled => SAMPLED_QUERY,
            Self::Complete => COMPLETE_QUERY,
        }
    }

    /// Returns the short name used in config files and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sampled => "sampled",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for QueryVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
