use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A person record from the collection API.
///
/// The record is kept exactly as the API returned it, nulls and mixed-type values
/// included, so templates receive the full record. Accessors read the few attributes
/// this server needs without imposing a shape on the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person(pub Map<String, Value>);

impl Person {
    /// Raw attribute value, `None` when the API did not return the key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The person's name when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name")?.as_str()
    }

    /// Display name of the person's first role, if the role relation was expanded.
    ///
    /// Reads `role[0].role_id.name`; unexpanded roles are a list of junction ids.
    pub fn role_name(&self) -> Option<&str> {
        self.get("role")?
            .get(0)?
            .get("role_id")?
            .get("name")?
            .as_str()
    }
}

impl From<Map<String, Value>> for Person {
    fn from(record: Map<String, Value>) -> Self {
        Self(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(record: Value) -> Person {
        serde_json::from_value(record).unwrap()
    }

    #[test]
    fn reads_nested_role_name() {
        let person = person(json!({
            "id": 7,
            "name": "Ada",
            "role": [{ "role_id": { "name": "Student" } }, { "role_id": { "name": "Expert" } }]
        }));

        assert_eq!(person.role_name(), Some("Student"));
        assert_eq!(person.name(), Some("Ada"));
    }

    #[test]
    fn unexpanded_role_has_no_name() {
        assert_eq!(person(json!({ "id": 7, "role": [12, 13] })).role_name(), None);
        assert_eq!(person(json!({ "id": 7, "role": [] })).role_name(), None);
        assert_eq!(person(json!({ "id": 7, "role": null })).role_name(), None);
        assert_eq!(Person::default().role_name(), None);
    }

    #[test]
    fn keeps_record_verbatim() {
        let record = json!({
            "id": "3",
            "name": "Grace",
            "nickname": null,
            "fav_season": 4,
            "mugshot": "f3a1-uuid",
            "custom": { "tools": ["figma"] }
        });

        let person = person(record.clone());

        assert_eq!(person.get("nickname"), Some(&Value::Null));
        assert_eq!(person.get("fav_season"), Some(&json!(4)));
        assert_eq!(serde_json::to_value(&person).unwrap(), record);
    }

    #[test]
    fn non_string_name_is_absent() {
        assert_eq!(person(json!({ "name": 12 })).name(), None);
    }
}
