//! Person fixtures for creating in-memory collection API records.
//!
//! Provides fixture functions producing person records shaped like the collection API's
//! JSON, without registering them on a mock server.

use serde_json::{json, Map, Value};

/// Default test person id.
pub const DEFAULT_ID: u64 = 1;

/// Default test person name.
pub const DEFAULT_NAME: &str = "Test Person";

/// Default test residency.
pub const DEFAULT_RESIDENCY: &str = "Amsterdam";

/// Creates a person record with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Person"`
/// - residency: `"Amsterdam"`
/// - no role, no squads
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let person = fixture::person::entity();
/// assert_eq!(person["name"], "Test Person");
/// ```
pub fn entity() -> Value {
    entity_builder().build()
}

/// Creates a person record builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let person = fixture::person::entity_builder()
///     .id(12)
///     .name("Ada")
///     .role_name("Student")
///     .build();
/// ```
pub fn entity_builder() -> PersonEntityBuilder {
    PersonEntityBuilder::default()
}

/// Builder for customized person records.
pub struct PersonEntityBuilder {
    id: u64,
    name: String,
    residency: String,
    role_name: Option<String>,
    fields: Map<String, Value>,
}

impl Default for PersonEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            name: DEFAULT_NAME.to_string(),
            residency: DEFAULT_RESIDENCY.to_string(),
            role_name: None,
            fields: Map::new(),
        }
    }
}

impl PersonEntityBuilder {
    /// Sets the person id.
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the person name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the residency.
    pub fn residency(mut self, residency: impl Into<String>) -> Self {
        self.residency = residency.into();
        self
    }

    /// Adds an expanded role relation with the given display name.
    ///
    /// Produces `role: [{ "role_id": { "name": <role_name> } }]`, the shape returned
    /// when `role.role_id.name` is requested through the `fields` directive.
    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    /// Sets an arbitrary attribute such as `fav_property` or `custom`.
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Builds the person record.
    pub fn build(self) -> Value {
        let mut record = self.fields;
        record.insert("id".to_string(), json!(self.id));
        record.insert("name".to_string(), json!(self.name));
        record.insert("residency".to_string(), json!(self.residency));

        if let Some(role_name) = self.role_name {
            record.insert(
                "role".to_string(),
                json!([{ "role_id": { "name": role_name } }]),
            );
        }

        Value::Object(record)
    }
}
