use std::collections::HashMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::reading::Reading;

/// Named, independently accumulated sequence of readings.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSet {
    /// Bulk data replayed by the server
    #[default]
    #[display("history")]
    History,
    /// Live readings received during this connection
    #[display("session")]
    Session,
}

/// Append-only readings, grouped by data set.
///
/// Sequences are created lazily on first append and are never removed or
/// truncated.
#[derive(Clone, Debug, Default)]
pub struct DataStore {
    sets: HashMap<DataSet, Vec<Reading>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, set: DataSet, reading: Reading) {
        self.sets.entry(set).or_default().push(reading);
    }

    /// Most recently appended reading, if the set has any.
    pub fn latest(&self, set: DataSet) -> Option<&Reading> {
        self.sets.get(&set).and_then(|readings| readings.last())
    }

    /// All readings of the set in insertion order.
    pub fn all(&self, set: DataSet) -> &[Reading] {
        self.sets.get(&set).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self, set: DataSet) -> usize {
        self.all(set).len()
    }

    pub fn is_empty(&self, set: DataSet) -> bool {
        self.all(set).is_empty()
    }
}
