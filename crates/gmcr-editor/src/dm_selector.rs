//! Decision maker list: creation, selection and ordering.

use gmcr_model::{ConflictModel, DecisionMaker, Entry, EntryId};
use tracing::debug;

use crate::error::Result;
use crate::event::{EventSink, ListKind};
use crate::list::{SelectableList, Selection};
use crate::settings::LabelSettings;

/// One rendered row of a plain list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub index: usize,
    /// `None` for the add-new placeholder.
    pub id: Option<EntryId>,
    pub label: String,
    /// Render dimmed; the row is the add-new slot, not an entry.
    pub placeholder: bool,
    pub selected: bool,
}

/// Selector over the conflict's decision makers.
///
/// The last row is always the add-new placeholder. Selecting it reports "no
/// decision maker" to listeners; requesting an edit on it is how a host
/// learns the user wants a new entry.
#[derive(Debug, Clone)]
pub struct DmSelector {
    list: SelectableList,
    add_item_label: String,
    new_dm_name: String,
}

impl DmSelector {
    pub fn new(labels: &LabelSettings) -> Self {
        Self {
            list: SelectableList::with_add_slot(ListKind::DecisionMakers),
            add_item_label: labels.add_item.clone(),
            new_dm_name: labels.new_decision_maker.clone(),
        }
    }

    pub fn selection(&self) -> Selection {
        self.list.selection()
    }

    /// Rows in display order, placeholder last.
    pub fn rows<M: ConflictModel + ?Sized>(&self, model: &M) -> Vec<ListRow> {
        let dms = model.decision_makers();
        let selection = self.list.selection();
        let mut rows: Vec<ListRow> = dms
            .iter()
            .enumerate()
            .map(|(index, dm)| ListRow {
                index,
                id: Some(dm.id()),
                label: dm.name.clone(),
                placeholder: false,
                selected: selection == Selection::Entry(index),
            })
            .collect();
        rows.push(ListRow {
            index: dms.len(),
            id: None,
            label: self.add_item_label.clone(),
            placeholder: true,
            selected: selection == Selection::AddNew,
        });
        rows
    }

    /// The decision maker behind the selection, `None` for the placeholder.
    pub fn selected_dm<'m, M: ConflictModel + ?Sized>(
        &self,
        model: &'m M,
    ) -> Option<&'m DecisionMaker> {
        let selected = self.list.selected(model.decision_makers())?;
        model.decision_makers().get(selected.index)
    }

    pub fn select<M, S>(&mut self, model: &M, index: Option<usize>, sink: &mut S) -> Selection
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        self.list.select(model.decision_makers(), index, sink)
    }

    pub fn move_up<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        Ok(self.list.move_up(model.decision_makers_mut(), sink)?)
    }

    pub fn move_down<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        Ok(self.list.move_down(model.decision_makers_mut(), sink)?)
    }

    pub fn delete<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        Ok(self.list.delete(model.decision_makers_mut(), sink)?)
    }

    pub fn request_edit<M, S>(&self, model: &M, sink: &mut S)
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        self.list.request_edit(model.decision_makers(), sink);
    }

    /// Append a decision maker with the default name and select it.
    pub fn add<M, S>(&mut self, model: &mut M, sink: &mut S) -> EntryId
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        let dms = model.decision_makers_mut();
        let id = dms.push_new(self.new_dm_name.clone());
        let index = dms.len() - 1;
        debug!(%id, index, "added decision maker");
        self.list.notify_structure(sink);
        self.list.select(&*dms, Some(index), sink);
        id
    }

    /// Re-check the selection after the host changed the list directly.
    pub fn revalidate<M: ConflictModel + ?Sized>(&mut self, model: &M) -> bool {
        self.list.revalidate(model.decision_makers())
    }
}
