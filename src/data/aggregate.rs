use super::filter::MutationFilter;
use super::model::{
    MutationEnvelope, MutationPayload, MutationRecord, CHROMOSOME_LABELS, MUTATION_TYPE_LABELS,
    N_CHROMOSOMES, N_MUTATION_TYPES,
};

// ---------------------------------------------------------------------------
// MutationData – immutable record set with per-label counts
// ---------------------------------------------------------------------------

/// An immutable list of mutation records.
///
/// Counting always yields one entry per vocabulary label, in vocabulary
/// order.  Records whose chromosome or type matches no label are kept in the
/// set but land in no bucket.  [`MutationData::filter`] returns a new value
/// and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationData {
    records: Vec<MutationRecord>,
}

impl MutationData {
    pub fn from_records(records: Vec<MutationRecord>) -> Self {
        Self { records }
    }

    pub fn from_envelope(envelope: MutationEnvelope) -> Self {
        Self::from_records(envelope.hits)
    }

    pub fn records(&self) -> &[MutationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records per chromosome label.
    pub fn chromosome_counts(&self) -> [usize; N_CHROMOSOMES] {
        count_by_label(
            &CHROMOSOME_LABELS,
            self.records.iter().map(|r| r.chromosome.as_str()),
        )
    }

    /// Number of records per mutation type label.
    pub fn type_counts(&self) -> [usize; N_MUTATION_TYPES] {
        count_by_label(
            &MUTATION_TYPE_LABELS,
            self.records.iter().map(|r| r.mutation_type.as_str()),
        )
    }

    pub fn max_chromosome_count(&self) -> usize {
        self.chromosome_counts().into_iter().max().unwrap_or(0)
    }

    pub fn max_type_count(&self) -> usize {
        self.type_counts().into_iter().max().unwrap_or(0)
    }

    /// Records passing `filter`, as a new `MutationData`.
    pub fn filter(&self, filter: &MutationFilter) -> MutationData {
        if filter.is_empty() {
            return self.clone();
        }
        let records = self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        MutationData { records }
    }
}

impl From<MutationPayload> for MutationData {
    fn from(payload: MutationPayload) -> Self {
        match payload {
            MutationPayload::Envelope(env) => Self::from_envelope(env),
            MutationPayload::Records(records) => Self::from_records(records),
        }
    }
}

/// Bucket `values` by exact match against `labels`.
fn count_by_label<'a, const N: usize>(
    labels: &[&str; N],
    values: impl Iterator<Item = &'a str>,
) -> [usize; N] {
    let mut counts = [0usize; N];
    for value in values {
        if let Some(idx) = labels.iter().position(|l| *l == value) {
            counts[idx] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    const SBS: &str = MUTATION_TYPE_LABELS[0];
    const DEL: &str = MUTATION_TYPE_LABELS[1];

    fn sample() -> MutationData {
        MutationData::from_records(vec![
            MutationRecord::new("1", SBS),
            MutationRecord::new("1", DEL),
            MutationRecord::new("2", SBS),
            MutationRecord::new("X", SBS),
            MutationRecord::new("chr1", SBS),
            MutationRecord::new("MT", "unknown"),
        ])
    }

    #[test]
    fn test_empty_data_yields_zero_vectors() {
        let data = MutationData::default();
        assert_eq!(data.chromosome_counts(), [0; 24]);
        assert_eq!(data.type_counts(), [0; 4]);
        assert_eq!(data.max_chromosome_count(), 0);
    }

    #[test]
    fn test_chromosome_counts_skip_unknown_labels() {
        let data = sample();
        let counts = data.chromosome_counts();
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[22], 1);
        // "chr1" and "MT" are not in the vocabulary
        assert_eq!(counts.iter().sum::<usize>(), 4);
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn test_type_counts() {
        let counts = sample().type_counts();
        assert_eq!(counts, [4, 1, 0, 0]);
    }

    #[test]
    fn test_identity_filter_keeps_counts() {
        let data = sample();
        let same = data.filter(&MutationFilter::none());
        assert_eq!(same, data);
        assert_eq!(same.chromosome_counts(), data.chromosome_counts());
        assert_eq!(same.type_counts(), data.type_counts());
    }

    #[test]
    fn test_chromosome_filter_has_single_nonzero_entry() {
        let data = sample();
        let filtered = data.filter(&MutationFilter::chromosome("1"));
        let counts = filtered.chromosome_counts();
        assert_eq!(counts[0], 2);
        assert_eq!(counts.iter().filter(|&&c| c != 0).count(), 1);
        assert_eq!(filtered.type_counts(), [1, 1, 0, 0]);
    }

    #[test]
    fn test_combined_filter_equals_chained_filters() {
        let data = sample();
        let combined = data.filter(&MutationFilter::both("1", SBS));
        let chained = data
            .filter(&MutationFilter::chromosome("1"))
            .filter(&MutationFilter::mutation_type(SBS));
        assert_eq!(combined, chained);

        let mut expected_chrom = [0; 24];
        expected_chrom[0] = 1;
        assert_eq!(combined.chromosome_counts(), expected_chrom);
        assert_eq!(combined.type_counts(), [1, 0, 0, 0]);
    }

    #[test]
    fn test_type_filter_has_single_nonzero_entry() {
        let data = sample();
        let filtered = data.filter(&MutationFilter::mutation_type(SBS));
        assert_eq!(filtered.type_counts(), [4, 0, 0, 0]);

        // only SBS records on chromosomes 1, 2 and X; "chr1" is unbucketed
        let counts = filtered.chromosome_counts();
        assert_eq!(counts[0], 1);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[22], 1);
        assert_eq!(counts.iter().sum::<usize>(), 3);

        let deletions = data.filter(&MutationFilter::mutation_type(DEL));
        assert_eq!(deletions.type_counts(), [0, 1, 0, 0]);
        assert_eq!(deletions.chromosome_counts().iter().sum::<usize>(), 1);
        assert_eq!(deletions.chromosome_counts()[0], 1);
    }

    #[test]
    fn test_type_then_chromosome_equals_combined_filter() {
        let data = sample();
        let chained = data
            .filter(&MutationFilter::mutation_type(SBS))
            .filter(&MutationFilter::chromosome("1"));
        assert_eq!(chained, data.filter(&MutationFilter::both("1", SBS)));
        assert_eq!(chained.len(), 1);
    }

    #[test]
    fn test_unmatched_filter_yields_empty() {
        let data = sample();
        let filtered = data.filter(&MutationFilter::chromosome("Z"));
        assert!(filtered.is_empty());
        assert_eq!(filtered.type_counts(), [0; 4]);
    }

    #[test]
    fn test_filter_leaves_original_untouched() {
        let data = sample();
        let before = data.clone();
        let _ = data.filter(&MutationFilter::both("2", DEL));
        assert_eq!(data, before);
    }

    #[test]
    fn test_counts_are_idempotent() {
        let data = sample();
        assert_eq!(data.chromosome_counts(), data.chromosome_counts());
        assert_eq!(data.type_counts(), data.type_counts());
    }

    #[test]
    fn test_from_payload_variants() {
        let records = vec![MutationRecord::new("3", SBS)];
        let a = MutationData::from(MutationPayload::Records(records.clone()));
        let b = MutationData::from(MutationPayload::Envelope(MutationEnvelope {
            facets: serde_json::Value::Null,
            hits: records,
        }));
        assert_eq!(a, b);
        assert_eq!(a.chromosome_counts()[2], 1);
    }
}
