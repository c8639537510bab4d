//! Ordered view of the infeasible-state conditions.
//!
//! The removal counts shown per condition depend on the order of the whole
//! list, so every structural change runs, in this order:
//!
//! 1. the mutation,
//! 2. [`EditorEvent::StructureChanged`](crate::EditorEvent::StructureChanged),
//! 3. exactly one [`ConflictModel::recalculate_feasible_states`] call,
//! 4. a full rebuild of the rows from the recalculated model,
//! 5. [`EditorEvent::SelectionChanged`](crate::EditorEvent::SelectionChanged).
//!
//! A failing recalculation stops the sequence and is returned to the caller.

use gmcr_model::{ConflictModel, Entry, EntryId};
use tracing::debug;

use crate::error::Result;
use crate::event::{EventSink, ListKind, Selected};
use crate::list::{Direction, SelectableList, Selection};

/// One rendered condition row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfeasibleRow {
    pub index: usize,
    pub id: EntryId,
    /// Condition key as entered.
    pub state: String,
    /// Number of states the key pattern covers.
    pub states_described: u64,
    /// Removal count from the last recalculation.
    pub states_removed: u64,
    pub selected: bool,
}

/// Number of states a condition key covers: `2^k` for `k` wildcard (`-`)
/// positions, saturating at `u64::MAX`.
pub fn states_described(key: &str) -> u64 {
    let wildcards = key.chars().filter(|&c| c == '-').count();
    u32::try_from(wildcards)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
        .unwrap_or(u64::MAX)
}

#[derive(Debug, Clone)]
pub struct InfeasibleView {
    list: SelectableList,
    rows: Vec<InfeasibleRow>,
}

impl Default for InfeasibleView {
    fn default() -> Self {
        Self::new()
    }
}

impl InfeasibleView {
    pub fn new() -> Self {
        Self {
            list: SelectableList::new(ListKind::Infeasibles),
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[InfeasibleRow] {
        &self.rows
    }

    pub fn selection(&self) -> Selection {
        self.list.selection()
    }

    pub fn selected<M: ConflictModel + ?Sized>(&self, model: &M) -> Option<Selected> {
        self.list.selected(model.infeasibles())
    }

    /// Recalculate (when there is anything to recalculate) and rebuild every
    /// row.
    pub fn refresh<M: ConflictModel + ?Sized>(&mut self, model: &mut M) -> Result<()> {
        if !model.infeasibles().is_empty() {
            model.recalculate_feasible_states()?;
        }
        self.list.revalidate(model.infeasibles());
        self.rebuild_rows(model);
        Ok(())
    }

    pub fn select<M, S>(&mut self, model: &M, index: Option<usize>, sink: &mut S) -> Selection
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        let selection = self.list.select(model.infeasibles(), index, sink);
        self.mark_selected_row();
        selection
    }

    /// Raise the selected condition's precedence by one.
    pub fn move_up<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        self.shift(model, Direction::Up, sink)
    }

    /// Lower the selected condition's precedence by one.
    pub fn move_down<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        self.shift(model, Direction::Down, sink)
    }

    /// Remove the selected condition. The selection moves to the condition
    /// that took its place, or to the new last one.
    pub fn delete<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        if !self.list.remove_selected(model.infeasibles_mut())? {
            return Ok(false);
        }
        self.after_structural_change(model, sink)?;
        Ok(true)
    }

    fn shift<M, S>(&mut self, model: &mut M, direction: Direction, sink: &mut S) -> Result<bool>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        if !self.list.shift(model.infeasibles_mut(), direction)? {
            return Ok(false);
        }
        self.after_structural_change(model, sink)?;
        Ok(true)
    }

    fn after_structural_change<M, S>(&mut self, model: &mut M, sink: &mut S) -> Result<()>
    where
        M: ConflictModel + ?Sized,
        S: EventSink + ?Sized,
    {
        self.list.notify_structure(sink);
        debug!(conditions = model.infeasibles().len(), "recalculating feasible states");
        model.recalculate_feasible_states()?;
        self.rebuild_rows(model);
        self.list.notify_selection(model.infeasibles(), sink);
        Ok(())
    }

    fn rebuild_rows<M: ConflictModel + ?Sized>(&mut self, model: &M) {
        let selected = self.list.selection().index();
        self.rows = model
            .infeasibles()
            .iter()
            .enumerate()
            .map(|(index, condition)| InfeasibleRow {
                index,
                id: condition.id(),
                state: condition.key().to_string(),
                states_described: states_described(condition.key()),
                states_removed: condition.states_removed,
                selected: Some(index) == selected,
            })
            .collect();
    }

    fn mark_selected_row(&mut self) {
        let selected = self.list.selection().index();
        for row in &mut self.rows {
            row.selected = Some(row.index) == selected;
        }
    }
}
