//! Shared fixtures for gmcr-editor integration tests.

#![allow(dead_code)]

use crossbeam_channel::Receiver;
use gmcr_editor::EditorEvent;
use gmcr_model::{ConflictModel, DecisionMakers, Infeasibles, ModelError};

/// Event sink for tests that only care about the resulting state.
pub fn sink() -> Vec<EditorEvent> {
    Vec::new()
}

/// In-memory conflict whose recalculation is scripted.
///
/// Each recalculation sets a condition's `states_removed` to its 1-based
/// position, so rows built from stale data are easy to spot. When `observed`
/// is set, events already delivered at recalculation time are captured.
#[derive(Debug, Default)]
pub struct FakeConflict {
    pub decision_makers: DecisionMakers,
    pub infeasibles: Infeasibles,
    pub recalculations: usize,
    pub fail_with: Option<String>,
    pub observed: Option<Receiver<EditorEvent>>,
    pub events_before_recalc: Vec<Vec<EditorEvent>>,
}

impl FakeConflict {
    pub fn with_dms(names: &[&str]) -> Self {
        let mut conflict = Self::default();
        for name in names {
            conflict.decision_makers.push_new(*name);
        }
        conflict
    }

    pub fn with_infeasibles(keys: &[&str]) -> Self {
        let mut conflict = Self::default();
        for key in keys {
            conflict.infeasibles.push_new(*key);
        }
        conflict
    }

    pub fn dm_names(&self) -> Vec<String> {
        self.decision_makers.names()
    }

    pub fn infeasible_names(&self) -> Vec<String> {
        self.infeasibles.names()
    }
}

impl ConflictModel for FakeConflict {
    fn decision_makers(&self) -> &DecisionMakers {
        &self.decision_makers
    }

    fn decision_makers_mut(&mut self) -> &mut DecisionMakers {
        &mut self.decision_makers
    }

    fn infeasibles(&self) -> &Infeasibles {
        &self.infeasibles
    }

    fn infeasibles_mut(&mut self) -> &mut Infeasibles {
        &mut self.infeasibles
    }

    fn recalculate_feasible_states(&mut self) -> gmcr_model::Result<()> {
        self.recalculations += 1;
        if let Some(rx) = &self.observed {
            self.events_before_recalc.push(rx.try_iter().collect());
        }
        if let Some(message) = &self.fail_with {
            return Err(ModelError::Recalculation(message.clone()));
        }
        for index in 0..self.infeasibles.len() {
            self.infeasibles
                .set_states_removed(index, index as u64 + 1)?;
        }
        Ok(())
    }
}
