//! Person factory for registering single-person records on the mock API.
//!
//! Where fixtures only build JSON, the factory also mounts a
//! `GET {API_PREFIX}/person/{id}` handler so the detail route can fetch the record.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    context::API_PREFIX,
    factory::helpers::next_id,
    fixture::person::{entity_builder, PersonEntityBuilder},
};

/// Factory for mounting person detail records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::person::PersonFactory;
///
/// let person = PersonFactory::new(&test.server)
///     .name("Ada")
///     .residency("Utrecht")
///     .mount()
///     .await;
/// ```
pub struct PersonFactory<'a> {
    server: &'a MockServer,
    id: u64,
    builder: PersonEntityBuilder,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new factory with a unique id and fixture defaults.
    pub fn new(server: &'a MockServer) -> Self {
        let id = next_id();
        Self {
            server,
            id,
            builder: entity_builder().id(id).name(format!("Person {}", id)),
        }
    }

    /// Sets the person id (and the path the record is served on).
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self.builder = self.builder.id(id);
        self
    }

    /// Sets the person name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.builder = self.builder.name(name);
        self
    }

    /// Sets the residency.
    pub fn residency(mut self, residency: impl Into<String>) -> Self {
        self.builder = self.builder.residency(residency);
        self
    }

    /// Sets an arbitrary attribute.
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.builder = self.builder.field(key, value);
        self
    }

    /// Mounts the record on the mock server and returns it.
    pub async fn mount(self) -> Value {
        let record = self.builder.build();

        Mock::given(method("GET"))
            .and(path(format!("{}/person/{}", API_PREFIX, self.id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": record })))
            .mount(self.server)
            .await;

        record
    }
}

/// Mounts a person detail record with default values.
pub async fn create_person(server: &MockServer) -> Value {
    PersonFactory::new(server).mount().await
}
