//! Notifications emitted by the editing core.
//!
//! Views never call back into each other. Every list mutation or selection
//! change is reported as an [`EditorEvent`] pushed into an [`EventSink`],
//! and the host decides who reacts (recomputing derived data, refreshing a
//! sibling view, moving keyboard focus).

use crossbeam_channel::Sender;
use gmcr_model::EntryId;
use serde::Serialize;

/// Which list an event originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    DecisionMakers,
    /// Options of the decision maker with this id.
    Options(EntryId),
    Infeasibles,
}

/// A selected entry: where it currently sits and who it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selected {
    pub index: usize,
    pub id: EntryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// The list changed shape (move, insert, remove). Anything derived from
    /// it elsewhere is stale.
    StructureChanged { list: ListKind },

    /// The active selection changed. `None` covers both "nothing selected"
    /// and the trailing add-new slot.
    SelectionChanged {
        list: ListKind,
        selected: Option<Selected>,
    },

    /// The user asked to edit the selection (double click or Enter).
    EditRequested {
        list: ListKind,
        selected: Option<Selected>,
    },

    /// An entry was renamed; sent on every keystroke.
    Renamed {
        list: ListKind,
        id: EntryId,
        name: String,
    },

    /// The view wants keyboard focus on an entry's text field.
    FocusRequested {
        list: ListKind,
        id: EntryId,
        select_all: bool,
    },
}

impl EditorEvent {
    pub fn list(&self) -> ListKind {
        match self {
            Self::StructureChanged { list }
            | Self::SelectionChanged { list, .. }
            | Self::EditRequested { list, .. }
            | Self::Renamed { list, .. }
            | Self::FocusRequested { list, .. } => *list,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::StructureChanged { .. })
    }
}

/// Receiver of editor events.
pub trait EventSink {
    fn emit(&mut self, event: EditorEvent);
}

/// Collects events in order; handy for hosts that drain after each input.
impl EventSink for Vec<EditorEvent> {
    fn emit(&mut self, event: EditorEvent) {
        self.push(event);
    }
}

/// Hands events to another loop. A dropped receiver only loses the event.
impl EventSink for Sender<EditorEvent> {
    fn emit(&mut self, event: EditorEvent) {
        if let Err(error) = self.send(event) {
            tracing::warn!(event = ?error.0, "event receiver disconnected, dropping event");
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: EditorEvent) {
        (**self).emit(event);
    }
}
