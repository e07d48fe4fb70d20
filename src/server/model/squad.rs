use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cohort sub-group, loaded once at startup and passed to templates unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Squad(pub Map<String, Value>);

impl Squad {
    /// The squad's name when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name")?.as_str()
    }
}

impl From<Map<String, Value>> for Squad {
    fn from(record: Map<String, Value>) -> Self {
        Self(record)
    }
}
