//! Table change notifications

use std::fmt;
use std::ops::RangeInclusive;

/// A change to the bound record collection or one of its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Rows were appended or inserted.
    RowsInserted(RangeInclusive<usize>),
    /// Rows changed in place.
    RowsUpdated(RangeInclusive<usize>),
    /// Rows were removed. Indices refer to positions before removal.
    RowsDeleted(RangeInclusive<usize>),
    /// A single cell was written.
    CellUpdated { row: usize, column: usize },
    /// The whole collection was replaced.
    DataChanged,
}

impl TableEvent {
    /// Returns `true` if row indices may have shifted.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TableEvent::RowsInserted(_) | TableEvent::RowsDeleted(_) | TableEvent::DataChanged
        )
    }
}

/// Identifies a subscription so it can be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&TableEvent)>;

/// Registered observers of a binding.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: usize,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn add(&mut self, listener: impl FnMut(&TableEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    /// Notifies listeners, most recently added first.
    pub fn fire(&mut self, event: &TableEvent) {
        for (_, listener) in self.entries.iter_mut().rev() {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
