use crate::{DecisionMakers, Infeasibles, Result};

/// The conflict model collaborator consumed by the editing core.
///
/// Hosts own the model and hand it to editor operations as `&mut` for the
/// duration of a single call.
pub trait ConflictModel {
    fn decision_makers(&self) -> &DecisionMakers;

    fn decision_makers_mut(&mut self) -> &mut DecisionMakers;

    fn infeasibles(&self) -> &Infeasibles;

    fn infeasibles_mut(&mut self) -> &mut Infeasibles;

    /// Recompute every derived feasibility metric, including
    /// [`Infeasible::states_removed`](crate::Infeasible::states_removed).
    ///
    /// Must run after any structural change to the infeasible list before its
    /// metrics are read.
    fn recalculate_feasible_states(&mut self) -> Result<()>;
}
