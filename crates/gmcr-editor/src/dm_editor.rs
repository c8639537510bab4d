//! Editor for one decision maker: its name and its option list.
//!
//! Text edits apply on every keystroke. There is no confirm step and nothing
//! is rejected; [`NameCheck`] only reports names that deserve attention.
//!
//! Option rows are addressed by [`EntryId`], never by captured state, and any
//! structural change rebuilds every row from the model.

use gmcr_model::{ConflictModel, DecisionMaker, Entry, EntryId, Options};
use tracing::{debug, trace};

use crate::error::{EditorError, Result};
use crate::event::{EditorEvent, EventSink, ListKind};
use crate::list::{SelectableList, Selection};
use crate::settings::{EditorSettings, LabelSettings};

/// Outcome of a rename. The text has been applied either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCheck {
    Valid,
    /// Blank or whitespace-only name.
    Empty,
}

impl NameCheck {
    /// Renames are never rejected.
    pub fn is_accepted(self) -> bool {
        true
    }
}

/// One rendered option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize,
    pub id: EntryId,
    pub text: String,
    pub selected: bool,
}

/// Pending keyboard focus for an option's text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub id: EntryId,
    pub select_all: bool,
}

#[derive(Debug, Clone)]
pub struct DmEditor {
    labels: LabelSettings,
    flag_empty_names: bool,
    dm: Option<EntryId>,
    header: String,
    name_field: String,
    options: Vec<OptionRow>,
    option_list: Option<SelectableList>,
    focus: Option<FocusRequest>,
}

impl DmEditor {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            labels: settings.labels.clone(),
            flag_empty_names: settings.validation.flag_empty_names,
            dm: None,
            header: settings.labels.no_selection_header.clone(),
            name_field: settings.labels.no_selection_name.clone(),
            options: Vec::new(),
            option_list: None,
            focus: None,
        }
    }

    pub fn loaded(&self) -> Option<EntryId> {
        self.dm
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn name_field(&self) -> &str {
        &self.name_field
    }

    /// Whether the name field and the "new option" action accept input.
    pub fn is_enabled(&self) -> bool {
        self.dm.is_some()
    }

    pub fn option_rows(&self) -> &[OptionRow] {
        &self.options
    }

    pub fn focus(&self) -> Option<FocusRequest> {
        self.focus
    }

    pub fn option_selection(&self) -> Selection {
        self.option_list
            .as_ref()
            .map_or(Selection::Unselected, SelectableList::selection)
    }

    /// Show `dm`, or the empty state for `None` or an id the model no longer
    /// holds. Always re-renders every option row.
    pub fn load<M: ConflictModel + ?Sized>(&mut self, model: &M, dm: Option<EntryId>) {
        let found = dm.and_then(|id| model.decision_makers().get_by_id(id));
        debug!(requested = ?dm, found = found.is_some(), "loading decision maker");
        self.focus = None;

        let Some(found) = found else {
            self.dm = None;
            self.header = self.labels.no_selection_header.clone();
            self.name_field = self.labels.no_selection_name.clone();
            self.options.clear();
            self.option_list = None;
            return;
        };

        let id = found.id();
        if self.dm != Some(id) {
            self.option_list = Some(SelectableList::new(ListKind::Options(id)));
        }
        self.dm = Some(id);
        self.header = self.labels.editing_header(&found.name);
        self.name_field = found.name.clone();
        self.render_options(found);
    }

    /// Apply a keystroke-level edit of the decision maker's name.
    pub fn rename_dm<M, S>(
        &mut self,
        model: &mut M,
        text: &str,
        sink: &mut S,
    ) -> Result<NameCheck>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        let dm = self.loaded_dm_mut(model)?;
        dm.set_name(text.to_string());
        let id = dm.id();
        trace!(%id, name = text, "decision maker renamed");

        self.header = self.labels.editing_header(text);
        self.name_field = text.to_string();
        sink.emit(EditorEvent::Renamed {
            list: ListKind::DecisionMakers,
            id,
            name: text.to_string(),
        });
        Ok(self.check_name(text))
    }

    /// Apply a keystroke-level edit of one option's name.
    pub fn rename_option<M, S>(
        &mut self,
        model: &mut M,
        option: EntryId,
        text: &str,
        sink: &mut S,
    ) -> Result<NameCheck>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        let dm = self.loaded_dm_mut(model)?;
        let dm_id = dm.id();
        let entry = dm
            .options
            .get_by_id_mut(option)
            .ok_or(gmcr_model::ModelError::UnknownEntry(option))?;
        entry.set_name(text.to_string());
        trace!(%option, name = text, "option renamed");

        if let Some(row) = self.options.iter_mut().find(|row| row.id == option) {
            row.text = text.to_string();
        }
        sink.emit(EditorEvent::Renamed {
            list: ListKind::Options(dm_id),
            id: option,
            name: text.to_string(),
        });
        Ok(self.check_name(text))
    }

    /// Append an option with the default name, then ask for focus on it with
    /// the whole text selected so typing replaces the default.
    pub fn new_option<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<EntryId>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        let name = self.labels.new_option.clone();
        let dm = self.loaded_dm_mut(model)?;
        let dm_id = dm.id();
        let option = dm.options.push_new(name);
        debug!(dm = %dm_id, %option, "added option");

        self.rerender(model);
        sink.emit(EditorEvent::StructureChanged {
            list: ListKind::Options(dm_id),
        });

        let focus = FocusRequest {
            id: option,
            select_all: true,
        };
        self.focus = Some(focus);
        sink.emit(EditorEvent::FocusRequested {
            list: ListKind::Options(dm_id),
            id: focus.id,
            select_all: focus.select_all,
        });
        Ok(option)
    }

    /// Remove one option by id. Unknown ids are ignored.
    pub fn delete_option<M, S>(
        &mut self,
        model: &mut M,
        option: EntryId,
        sink: &mut S,
    ) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        let dm = self.loaded_dm_mut(model)?;
        let dm_id = dm.id();
        let Some(index) = dm.options.position(option) else {
            return Ok(false);
        };
        let before = self
            .option_list
            .as_ref()
            .and_then(|list| list.selected(&dm.options));
        dm.options.remove(index)?;
        let remaining = dm.options.len();
        debug!(dm = %dm_id, %option, index, "deleted option");

        let after = self.option_list.as_mut().and_then(|list| {
            list.note_removed(index, remaining);
            list.selected(&dm.options)
        });
        self.rerender(model);
        sink.emit(EditorEvent::StructureChanged {
            list: ListKind::Options(dm_id),
        });
        // Index or identity may change even when the other stays put
        if before != after {
            self.notify_option_selection(model, sink);
        }
        Ok(true)
    }

    pub fn select_option<M, S>(
        &mut self,
        model: &M,
        index: Option<usize>,
        sink: &mut S,
    ) -> Result<Selection>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        let options = &self.loaded_dm(model)?.options;
        let list = self.option_list.as_mut().ok_or(EditorError::NothingLoaded)?;
        let selection = list.select(options, index, sink);
        self.mark_selected_row();
        Ok(selection)
    }

    pub fn move_option_up<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        self.with_option_list(model, |list, options| list.move_up(options, sink))
    }

    pub fn move_option_down<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        self.with_option_list(model, |list, options| list.move_down(options, sink))
    }

    pub fn delete_selected_option<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        self.with_option_list(model, |list, options| list.delete(options, sink))
    }

    fn with_option_list<M, F>(&mut self, model: &mut M, op: F) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        F: FnOnce(&mut SelectableList, &mut Options) -> gmcr_model::Result<bool>,
    {
        let id = self.dm.ok_or(EditorError::NothingLoaded)?;
        let dm = model
            .decision_makers_mut()
            .get_by_id_mut(id)
            .ok_or(gmcr_model::ModelError::UnknownEntry(id))?;
        let list = self.option_list.as_mut().ok_or(EditorError::NothingLoaded)?;
        let changed = op(list, &mut dm.options)?;
        if changed {
            self.rerender(model);
        }
        Ok(changed)
    }

    fn notify_option_selection<M, S>(&self, model: &M, sink: &mut S)
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        if let (Some(list), Ok(dm)) = (self.option_list.as_ref(), self.loaded_dm(model)) {
            list.notify_selection(&dm.options, sink);
        }
    }

    fn rerender<M: ConflictModel + ?Sized>(&mut self, model: &M) {
        let focus = self.focus;
        self.load(model, self.dm);
        self.focus = focus;
    }

    fn render_options(&mut self, dm: &DecisionMaker) {
        if let Some(list) = self.option_list.as_mut() {
            list.revalidate(&dm.options);
        }
        self.options = dm
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionRow {
                index,
                id: option.id(),
                text: option.name.clone(),
                selected: false,
            })
            .collect();
        self.mark_selected_row();
    }

    fn mark_selected_row(&mut self) {
        let selected = self.option_selection().index();
        for row in &mut self.options {
            row.selected = Some(row.index) == selected;
        }
    }

    fn check_name(&self, text: &str) -> NameCheck {
        if self.flag_empty_names && text.trim().is_empty() {
            NameCheck::Empty
        } else {
            NameCheck::Valid
        }
    }

    fn loaded_dm<'m, M: ConflictModel + ?Sized>(
        &self,
        model: &'m M,
    ) -> Result<&'m DecisionMaker> {
        let id = self.dm.ok_or(EditorError::NothingLoaded)?;
        model
            .decision_makers()
            .get_by_id(id)
            .ok_or_else(|| gmcr_model::ModelError::UnknownEntry(id).into())
    }

    fn loaded_dm_mut<'m, M: ConflictModel + ?Sized>(
        &self,
        model: &'m mut M,
    ) -> Result<&'m mut DecisionMaker> {
        let id = self.dm.ok_or(EditorError::NothingLoaded)?;
        model
            .decision_makers_mut()
            .get_by_id_mut(id)
            .ok_or_else(|| gmcr_model::ModelError::UnknownEntry(id).into())
    }
}
