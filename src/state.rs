use crate::data::aggregate::MutationData;
use crate::data::filter::MutationFilter;
use crate::data::model::{CHROMOSOME_LABELS, MUTATION_TYPE_LABELS};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Currently highlighted labels, as indices into the label vocabularies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub chromosome: Option<usize>,
    pub mutation_type: Option<usize>,
}

impl Selection {
    pub fn to_filter(self) -> MutationFilter {
        MutationFilter {
            chromosome: self
                .chromosome
                .and_then(|i| CHROMOSOME_LABELS.get(i))
                .map(|s| s.to_string()),
            mutation_type: self
                .mutation_type
                .and_then(|i| MUTATION_TYPE_LABELS.get(i))
                .map(|s| s.to_string()),
        }
    }
}

/// A user interaction that changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    SelectChromosome(usize),
    SelectType(usize),
    ClearChromosome,
    ClearType,
    ClearAll,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Every loaded record.
    pub data: MutationData,

    pub selection: Selection,

    /// `data` filtered by `selection` (cached).
    pub view: MutationData,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(data: MutationData) -> Self {
        let mut state = Self::default();
        state.set_data(data);
        state
    }

    /// Replace the loaded records and drop any selection.
    pub fn set_data(&mut self, data: MutationData) {
        self.view = data.clone();
        self.data = data;
        self.selection = Selection::default();
        self.status_message = None;
    }

    /// Apply a selection change and recompute the filtered view.
    ///
    /// Out-of-range label indices are ignored.
    pub fn apply(&mut self, action: SelectionAction) {
        let mut next = self.selection;
        match action {
            SelectionAction::SelectChromosome(i) if i < CHROMOSOME_LABELS.len() => {
                next.chromosome = Some(i)
            }
            SelectionAction::SelectType(i) if i < MUTATION_TYPE_LABELS.len() => {
                next.mutation_type = Some(i)
            }
            SelectionAction::SelectChromosome(_) | SelectionAction::SelectType(_) => return,
            SelectionAction::ClearChromosome => next.chromosome = None,
            SelectionAction::ClearType => next.mutation_type = None,
            SelectionAction::ClearAll => next = Selection::default(),
        }
        if next == self.selection {
            return;
        }
        self.selection = next;
        self.refilter();
        log::debug!(
            "selection {:?} -> {} of {} mutations",
            self.selection,
            self.view.len(),
            self.data.len()
        );
    }

    /// Recompute `view` after a selection change.
    pub fn refilter(&mut self) {
        self.view = self.data.filter(&self.selection.to_filter());
    }

    /// Upper bound of the chromosome chart; fixed by the unfiltered data.
    pub fn chromosome_axis_max(&self) -> usize {
        self.data.max_chromosome_count()
    }

    /// Upper bound of the type chart; fixed by the unfiltered data.
    pub fn type_axis_max(&self) -> usize {
        self.data.max_type_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MutationRecord;

    fn state() -> AppState {
        AppState::new(MutationData::from_records(vec![
            MutationRecord::new("1", MUTATION_TYPE_LABELS[0]),
            MutationRecord::new("1", MUTATION_TYPE_LABELS[1]),
            MutationRecord::new("1", MUTATION_TYPE_LABELS[1]),
            MutationRecord::new("2", MUTATION_TYPE_LABELS[0]),
            MutationRecord::new("Y", MUTATION_TYPE_LABELS[2]),
        ]))
    }

    #[test]
    fn test_new_state_shows_everything() {
        let s = state();
        assert_eq!(s.selection, Selection::default());
        assert_eq!(s.view, s.data);
        assert_eq!(s.chromosome_axis_max(), 3);
        assert_eq!(s.type_axis_max(), 2);
    }

    #[test]
    fn test_select_chromosome_then_type() {
        let mut s = state();
        s.apply(SelectionAction::SelectChromosome(0));
        assert_eq!(s.view.len(), 3);
        s.apply(SelectionAction::SelectType(1));
        assert_eq!(s.view.len(), 2);
        assert_eq!(s.view.type_counts(), [0, 2, 0, 0]);
        // axis bounds do not follow the filter
        assert_eq!(s.chromosome_axis_max(), 3);
    }

    #[test]
    fn test_reselect_replaces_previous_label() {
        let mut s = state();
        s.apply(SelectionAction::SelectChromosome(0));
        s.apply(SelectionAction::SelectChromosome(23));
        assert_eq!(s.selection.chromosome, Some(23));
        assert_eq!(s.view.len(), 1);
    }

    #[test]
    fn test_clear_actions() {
        let mut s = state();
        s.apply(SelectionAction::SelectChromosome(0));
        s.apply(SelectionAction::SelectType(0));
        assert_eq!(s.view.len(), 1);

        s.apply(SelectionAction::ClearChromosome);
        assert_eq!(s.selection.chromosome, None);
        assert_eq!(s.view.len(), 2);

        s.apply(SelectionAction::SelectChromosome(1));
        s.apply(SelectionAction::ClearType);
        assert_eq!(s.view.len(), 1);

        s.apply(SelectionAction::ClearAll);
        assert_eq!(s.view, s.data);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut s = state();
        s.apply(SelectionAction::SelectChromosome(24));
        s.apply(SelectionAction::SelectType(4));
        assert_eq!(s.selection, Selection::default());
        assert_eq!(s.view.len(), 5);
    }

    #[test]
    fn test_set_data_resets_selection() {
        let mut s = state();
        s.apply(SelectionAction::SelectChromosome(0));
        s.status_message = Some("Error".to_string());
        s.set_data(MutationData::default());
        assert_eq!(s.selection, Selection::default());
        assert!(s.view.is_empty());
        assert!(s.status_message.is_none());
    }
}
