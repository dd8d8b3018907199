use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// Label vocabularies
// ---------------------------------------------------------------------------

pub const N_CHROMOSOMES: usize = 24;

pub const N_MUTATION_TYPES: usize = 4;

/// Chromosome labels in display / count order.
pub const CHROMOSOME_LABELS: [&str; N_CHROMOSOMES] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y",
];

/// Mutation type labels as reported by the ICGC API.
pub const MUTATION_TYPE_LABELS: [&str; N_MUTATION_TYPES] = [
    "single base substitution",
    "deletion of <=200bp",
    "insertion of <=200bp",
    "multiple base substitution (>=2bp and <=200bp)",
];

const TYPE_LABEL_NOISE: &str = "(>=2bp and <=200bp)";

/// Shortened type label for the chart axis.
pub fn display_type_label(label: &str) -> &str {
    match label.find(TYPE_LABEL_NOISE) {
        Some(pos) => label[..pos].trim_end(),
        None => label,
    }
}

// ---------------------------------------------------------------------------
// MutationRecord – one hit of the mutation API
// ---------------------------------------------------------------------------

/// A single mutation observation.
///
/// Only `chromosome` and `mutation_type` take part in aggregation; the other
/// fields are carried through for the record table.  Every field defaults so
/// that a sparse or malformed record still loads and simply matches no label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub chromosome: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub mutation_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub mutation: String,
    #[serde(deserialize_with = "lenient_position")]
    pub start: Option<i64>,
    #[serde(deserialize_with = "lenient_position")]
    pub end: Option<i64>,
    #[serde(deserialize_with = "lenient_study")]
    pub study: Vec<String>,
}

impl MutationRecord {
    /// Minimal record with just the two bucketed fields set.
    pub fn new(chromosome: impl Into<String>, mutation_type: impl Into<String>) -> Self {
        Self {
            chromosome: chromosome.into(),
            mutation_type: mutation_type.into(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Payload shapes
// ---------------------------------------------------------------------------

/// Paged API response: `{ "facets": ..., "hits": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationEnvelope {
    #[serde(default)]
    pub facets: serde_json::Value,
    #[serde(deserialize_with = "lenient_records")]
    pub hits: Vec<MutationRecord>,
}

/// The two input shapes the aggregator accepts.
#[derive(Debug, Clone)]
pub enum MutationPayload {
    Envelope(MutationEnvelope),
    Records(Vec<MutationRecord>),
}

// ---------------------------------------------------------------------------
// Lenient field decoding
// ---------------------------------------------------------------------------
//
// A wrongly typed value never fails the payload.  Non-string labels become
// `""` and so land in no bucket; non-integer positions become `None`.

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match JsonValue::deserialize(de)? {
        JsonValue::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_position<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    Ok(JsonValue::deserialize(de)?.as_i64())
}

fn lenient_study<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    Ok(match JsonValue::deserialize(de)? {
        JsonValue::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                JsonValue::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        JsonValue::String(s) => vec![s],
        _ => Vec::new(),
    })
}

/// Record list where any entry that is not an object decodes as an empty
/// record.  A non-array value yields no records.
pub fn records_from_value(value: JsonValue) -> Vec<MutationRecord> {
    match value {
        JsonValue::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}

fn lenient_records<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<MutationRecord>, D::Error> {
    Ok(records_from_value(JsonValue::deserialize(de)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(CHROMOSOME_LABELS.len(), 24);
        assert_eq!(MUTATION_TYPE_LABELS.len(), 4);
        assert_eq!(CHROMOSOME_LABELS[22], "X");
        assert_eq!(CHROMOSOME_LABELS[23], "Y");
    }

    #[test]
    fn test_display_type_label_strips_size_range() {
        assert_eq!(
            display_type_label(MUTATION_TYPE_LABELS[3]),
            "multiple base substitution"
        );
        assert_eq!(display_type_label(MUTATION_TYPE_LABELS[1]), "deletion of <=200bp");
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let rec: MutationRecord = serde_json::from_str(r#"{"chromosome":"7"}"#).unwrap();
        assert_eq!(rec.chromosome, "7");
        assert_eq!(rec.mutation_type, "");
        assert!(rec.study.is_empty());
        assert_eq!(rec.start, None);
    }

    #[test]
    fn test_record_reads_type_field() {
        let rec: MutationRecord = serde_json::from_str(
            r#"{"id":"MU1","chromosome":"X","type":"insertion of <=200bp","start":10,"end":11,"study":["PCAWG"]}"#,
        )
        .unwrap();
        assert_eq!(rec.mutation_type, "insertion of <=200bp");
        assert_eq!(rec.start, Some(10));
        assert_eq!(rec.study, vec!["PCAWG".to_string()]);
    }

    #[test]
    fn test_record_with_wrong_field_types_still_loads() {
        let rec: MutationRecord = serde_json::from_str(
            r#"{"id":null,"chromosome":7,"type":"deletion of <=200bp","start":"12345","end":3.5,"study":null}"#,
        )
        .unwrap();
        assert_eq!(rec.id, "");
        assert_eq!(rec.chromosome, "");
        assert_eq!(rec.mutation_type, "deletion of <=200bp");
        assert_eq!(rec.start, None);
        assert_eq!(rec.end, None);
        assert!(rec.study.is_empty());
    }

    #[test]
    fn test_non_object_entries_become_empty_records() {
        let records = records_from_value(serde_json::json!([
            {"chromosome": "1"},
            42,
            "text"
        ]));
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].chromosome, "1");
        assert_eq!(records[1], MutationRecord::default());
        assert!(records_from_value(JsonValue::Null).is_empty());
    }
}
