use serde::{Deserialize, Serialize};

use crate::{Entry, EntryId, EntryList};

/// Decision makers of a conflict, in presentation order.
pub type DecisionMakers = EntryList<DecisionMaker>;

/// Options controlled by a single decision maker.
pub type Options = EntryList<DmOption>;

/// A boolean choice available to a decision maker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmOption {
    id: EntryId,
    pub name: String,
}

impl Entry for DmOption {
    fn create(id: EntryId, name: String) -> Self {
        Self { id, name }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A party in the conflict together with the options it controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionMaker {
    id: EntryId,
    pub name: String,
    pub options: Options,
}

impl DecisionMaker {
    /// Option names in order.
    pub fn option_names(&self) -> Vec<String> {
        self.options.names()
    }
}

impl Entry for DecisionMaker {
    fn create(id: EntryId, name: String) -> Self {
        Self {
            id,
            name,
            options: Options::new(),
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
