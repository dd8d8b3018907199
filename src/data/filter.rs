use super::model::MutationRecord;

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// Optional chromosome / mutation-type constraint.
///
/// A `None` field places no constraint on that column.  When both are set a
/// record must match both (logical AND).  Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationFilter {
    pub chromosome: Option<String>,
    pub mutation_type: Option<String>,
}

impl MutationFilter {
    /// No constraint at all; filtering with it keeps every record.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn chromosome(label: impl Into<String>) -> Self {
        Self {
            chromosome: Some(label.into()),
            mutation_type: None,
        }
    }

    pub fn mutation_type(label: impl Into<String>) -> Self {
        Self {
            chromosome: None,
            mutation_type: Some(label.into()),
        }
    }

    pub fn both(chromosome: impl Into<String>, mutation_type: impl Into<String>) -> Self {
        Self {
            chromosome: Some(chromosome.into()),
            mutation_type: Some(mutation_type.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_none() && self.mutation_type.is_none()
    }

    /// Whether `record` passes every active constraint.
    pub fn matches(&self, record: &MutationRecord) -> bool {
        let chrom_ok = self
            .chromosome
            .as_deref()
            .map_or(true, |c| record.chromosome == c);
        let type_ok = self
            .mutation_type
            .as_deref()
            .map_or(true, |t| record.mutation_type == t);
        chrom_ok && type_ok
    }
}
