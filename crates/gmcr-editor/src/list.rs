//! Ordered list with a single movable selection.
//!
//! [`SelectableList`] holds only the selection. The entries live in the
//! conflict model and are passed in for each call, so the list never keeps a
//! borrow of the model between input events.
//!
//! Every structural operation comes in two layers:
//!
//! - `shift` / `remove_selected` mutate the entries and move the selection,
//!   without notifying anyone;
//! - `move_up` / `move_down` / `delete` do the same and then emit
//!   [`EditorEvent::StructureChanged`] followed by
//!   [`EditorEvent::SelectionChanged`].
//!
//! Consumers that must run work between the two notifications (the
//! infeasible view recalculates feasibility there) use the first layer and
//! call [`notify_structure`](SelectableList::notify_structure) and
//! [`notify_selection`](SelectableList::notify_selection) themselves.

use gmcr_model::{OrderedCollection, Result};
use tracing::debug;

use crate::event::{EditorEvent, EventSink, ListKind, Selected};

/// Current selection of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    /// An entry at this index.
    Entry(usize),
    /// The trailing "add new" slot. Counts as no selection for editing.
    AddNew,
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Entry(index) => Some(index),
            Self::Unselected | Self::AddNew => None,
        }
    }
}

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableList {
    kind: ListKind,
    selection: Selection,
    add_slot: bool,
}

impl SelectableList {
    /// A list without an add-new slot.
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            selection: Selection::Unselected,
            add_slot: false,
        }
    }

    /// A list whose position `len` is the "add new" slot.
    pub fn with_add_slot(kind: ListKind) -> Self {
        Self {
            add_slot: true,
            ..Self::new(kind)
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected entry, if the selection points at one that exists.
    pub fn selected<C>(&self, entries: &C) -> Option<Selected>
    where
        C: OrderedCollection + ?Sized,
    {
        let index = self.entry_index(entries.len())?;
        entries.id_at(index).map(|id| Selected { index, id })
    }

    /// Set the active selection and emit [`EditorEvent::SelectionChanged`].
    ///
    /// `Some(len)` selects the add-new slot when the list has one. Any other
    /// out-of-range index, and `None`, clear the selection.
    pub fn select<C, S>(
        &mut self,
        entries: &C,
        index: Option<usize>,
        sink: &mut S,
    ) -> Selection
    where
        C: OrderedCollection + ?Sized,
        S: EventSink + ?Sized,
    {
        let len = entries.len();
        self.selection = match index {
            Some(index) if index < len => Selection::Entry(index),
            Some(index) if index == len && self.add_slot => Selection::AddNew,
            _ => Selection::Unselected,
        };
        debug!(list = ?self.kind, selection = ?self.selection, "selection changed");
        self.notify_selection(entries, sink);
        self.selection
    }

    pub fn move_up<C, S>(&mut self, entries: &mut C, sink: &mut S) -> Result<bool>
    where
        C: OrderedCollection + ?Sized,
        S: EventSink + ?Sized,
    {
        self.move_and_notify(entries, Direction::Up, sink)
    }

    pub fn move_down<C, S>(&mut self, entries: &mut C, sink: &mut S) -> Result<bool>
    where
        C: OrderedCollection + ?Sized,
        S: EventSink + ?Sized,
    {
        self.move_and_notify(entries, Direction::Down, sink)
    }

    /// Remove the selected entry and emit the structural and selection
    /// notifications. Returns `false` when nothing was removed.
    pub fn delete<C, S>(&mut self, entries: &mut C, sink: &mut S) -> Result<bool>
    where
        C: OrderedCollection + ?Sized,
        S: EventSink + ?Sized,
    {
        if !self.remove_selected(entries)? {
            return Ok(false);
        }
        self.notify_structure(sink);
        self.notify_selection(entries, sink);
        Ok(true)
    }

    /// Emit [`EditorEvent::EditRequested`] for the current selection.
    pub fn request_edit<C, S>(&self, entries: &C, sink: &mut S)
    where
        C: OrderedCollection + ?Sized,
        S: EventSink + ?Sized,
    {
        sink.emit(EditorEvent::EditRequested {
            list: self.kind,
            selected: self.selected(entries),
        });
    }

    /// Move the selected entry one step; the selection follows it.
    ///
    /// No-op (returns `false`) when nothing is selected, the add-new slot is
    /// selected, or the entry already sits at the boundary.
    pub fn shift<C>(&mut self, entries: &mut C, direction: Direction) -> Result<bool>
    where
        C: OrderedCollection + ?Sized,
    {
        let len = entries.len();
        let Some(from) = self.entry_index(len) else {
            return Ok(false);
        };
        let to = match direction {
            Direction::Up if from > 0 => from - 1,
            Direction::Down if from + 1 < len => from + 1,
            _ => return Ok(false),
        };
        entries.move_entry(from, to)?;
        self.selection = Selection::Entry(to);
        debug!(list = ?self.kind, from, to, "moved entry");
        Ok(true)
    }

    /// Remove the selected entry and re-home the selection on a neighbour.
    pub fn remove_selected<C>(&mut self, entries: &mut C) -> Result<bool>
    where
        C: OrderedCollection + ?Sized,
    {
        let Some(index) = self.entry_index(entries.len()) else {
            return Ok(false);
        };
        entries.remove_entry(index)?;
        self.note_removed(index, entries.len());
        debug!(list = ?self.kind, index, selection = ?self.selection, "removed entry");
        Ok(true)
    }

    /// Adjust the selection after the entry at `removed` left the list.
    ///
    /// A selection on the removed entry stays at the same index when that is
    /// still valid and falls back to the previous index otherwise; selections
    /// after it shift down to keep pointing at the same entry. Returns whether
    /// the selection changed.
    pub fn note_removed(&mut self, removed: usize, new_len: usize) -> bool {
        let previous = self.selection;
        if let Selection::Entry(index) = self.selection {
            self.selection = if index == removed {
                if new_len == 0 {
                    Selection::Unselected
                } else if index < new_len {
                    Selection::Entry(index)
                } else {
                    Selection::Entry(new_len - 1)
                }
            } else if index > removed {
                Selection::Entry(index - 1)
            } else {
                Selection::Entry(index)
            };
        }
        previous != self.selection
    }

    /// Repair a selection left dangling by a mutation made elsewhere.
    pub fn revalidate<C>(&mut self, entries: &C) -> bool
    where
        C: OrderedCollection + ?Sized,
    {
        let len = entries.len();
        let repaired = match self.selection {
            Selection::Entry(_) if len == 0 => Selection::Unselected,
            Selection::Entry(index) if index >= len => Selection::Entry(len - 1),
            other => other,
        };
        let changed = repaired != self.selection;
        if changed {
            debug!(
                list = ?self.kind,
                from = ?self.selection,
                to = ?repaired,
                "selection repaired"
            );
            self.selection = repaired;
        }
        changed
    }

    pub fn notify_structure<S>(&self, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        sink.emit(EditorEvent::StructureChanged { list: self.kind });
    }

    pub fn notify_selection<C, S>(&self, entries: &C, sink: &mut S)
    where
        C: OrderedCollection + ?Sized,
        S: EventSink + ?Sized,
    {
        sink.emit(EditorEvent::SelectionChanged {
            list: self.kind,
            selected: self.selected(entries),
        });
    }

    fn move_and_notify<C, S>(
        &mut self,
        entries: &mut C,
        direction: Direction,
        sink: &mut S,
    ) -> Result<bool>
    where
        C: OrderedCollection + ?Sized,
        S: EventSink + ?Sized,
    {
        if !self.shift(entries, direction)? {
            return Ok(false);
        }
        self.notify_structure(sink);
        self.notify_selection(entries, sink);
        Ok(true)
    }

    fn entry_index(&self, len: usize) -> Option<usize> {
        self.selection.index().filter(|&index| index < len)
    }
}
