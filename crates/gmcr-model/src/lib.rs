//! GMCR conflict model definitions.
//!
//! Decision makers, their options and the ordered infeasible-state conditions
//! that prune a conflict's state space. The feasible-state recalculation is
//! not implemented here; hosts provide it through [`ConflictModel`].

#![deny(unsafe_code)]

pub mod collection;
pub mod conflict;
pub mod decision_maker;
pub mod error;
pub mod ids;
pub mod infeasible;

pub use collection::{Entry, EntryList, OrderedCollection};
pub use conflict::ConflictModel;
pub use decision_maker::{DecisionMaker, DecisionMakers, DmOption, Options};
pub use error::{ModelError, Result};
pub use ids::EntryId;
pub use infeasible::{Infeasible, Infeasibles};
