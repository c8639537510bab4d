//! Headless editing core for GMCR conflict models.
//!
//! Front ends feed discrete input events (clicks, keystrokes, selection
//! changes) into the components here and render the row models they expose:
//!
//! - [`DmSelector`]: decision maker list with an add-new placeholder row
//! - [`DmEditor`]: a decision maker's name and its option list
//! - [`InfeasibleView`]: infeasible conditions with their derived counts
//!
//! All three share [`SelectableList`] and report through [`EventSink`].
//! The conflict model is passed into every call and never stored.

#![deny(unsafe_code)]

pub mod dm_editor;
pub mod dm_selector;
pub mod error;
pub mod event;
pub mod infeasible_view;
pub mod list;
pub mod logging;
pub mod settings;

pub use dm_editor::{DmEditor, FocusRequest, NameCheck, OptionRow};
pub use dm_selector::{DmSelector, ListRow};
pub use error::{EditorError, Result};
pub use event::{EditorEvent, EventSink, ListKind, Selected};
pub use infeasible_view::{InfeasibleRow, InfeasibleView, states_described};
pub use list::{Direction, SelectableList, Selection};
pub use settings::EditorSettings;
