//! View row ordering (sort and filter)

use crate::binding::TableBinding;
use crate::model::BeanRecord;

/// Current sort state: model column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub ascending: bool,
}

/// The permutation between view rows and model rows.
///
/// The binding's rows never move; sorting and filtering only change this
/// mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowOrder {
    view_to_model: Vec<usize>,
    model_to_view: Vec<Option<usize>>,
    sort: Option<SortKey>,
}

impl RowOrder {
    /// Identity mapping over `rows` rows.
    pub fn identity(rows: usize) -> Self {
        Self::from_view((0..rows).collect(), rows, None)
    }

    fn from_view(view_to_model: Vec<usize>, rows: usize, sort: Option<SortKey>) -> Self {
        let mut model_to_view = vec![None; rows];
        for (view, &model) in view_to_model.iter().enumerate() {
            if let Some(slot) = model_to_view.get_mut(model) {
                *slot = Some(view);
            }
        }
        Self {
            view_to_model,
            model_to_view,
            sort,
        }
    }

    /// Orders rows by a model column. Stable, nulls first when ascending.
    pub fn sorted<R: BeanRecord>(binding: &TableBinding<R>, key: SortKey) -> Self {
        Self::sorted_filtered(binding, Some(key), |_| true)
    }

    /// Keeps only rows whose record matches `keep`, optionally sorted.
    pub fn sorted_filtered<R: BeanRecord>(
        binding: &TableBinding<R>,
        sort: Option<SortKey>,
        keep: impl Fn(&R) -> bool,
    ) -> Self {
        let rows = binding.row_count();
        let mut view: Vec<usize> = (0..rows)
            .filter(|&row| binding.record(row).is_some_and(&keep))
            .collect();

        if let Some(key) = sort {
            let values: Vec<_> = (0..rows).map(|row| binding.value_at(row, key.column)).collect();
            view.sort_by(|&a, &b| {
                let ord = values[a].sort_cmp(&values[b]);
                if key.ascending { ord } else { ord.reverse() }
            });
        }

        Self::from_view(view, rows, sort)
    }

    /// The sort this order was built with.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    /// Number of view rows.
    pub fn len(&self) -> usize {
        self.view_to_model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view_to_model.is_empty()
    }

    /// Model row shown at `view`, or `None` if out of range.
    pub fn to_model(&self, view: usize) -> Option<usize> {
        self.view_to_model.get(view).copied()
    }

    /// View row showing `model`, or `None` if it is filtered out or out of
    /// range.
    pub fn to_view(&self, model: usize) -> Option<usize> {
        self.model_to_view.get(model).copied().flatten()
    }
}
