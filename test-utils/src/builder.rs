use std::path::{Component, Path};

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    context::{TestContext, API_PREFIX},
    error::TestError,
};

/// Builder for creating test contexts with a configured mock collection API.
///
/// Provides a fluent interface for registering collection responses and static assets,
/// then call `build()` to start the mock server and create the context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_squads(fixture::squad::roster())
///     .with_role_persons(4, vec![fixture::person::entity()])
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Records served for `GET /items/squad`, if any.
    squads: Option<Vec<Value>>,
    /// Records served for `GET /items/person` without a role filter, if any.
    persons: Option<Vec<Value>>,
    /// Records served for `GET /items/person` filtered by role id.
    role_persons: Vec<(u32, Vec<Value>)>,
    /// Raw response templates for arbitrary collection paths.
    responses: Vec<(String, ResponseTemplate)>,
    /// Files written into the public directory, relative path and contents.
    public_files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new builder with no responses configured.
    ///
    /// Without any configuration every collection request receives `404 Not Found`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `squads` from the squad collection.
    pub fn with_squads(mut self, squads: Vec<Value>) -> Self {
        self.squads = Some(squads);
        self
    }

    /// Serves `persons` from the person collection for any query.
    pub fn with_persons(mut self, persons: Vec<Value>) -> Self {
        self.persons = Some(persons);
        self
    }

    /// Serves `persons` from the person collection when filtered by `role_id`.
    ///
    /// Role-filtered responses take precedence over `with_persons`.
    pub fn with_role_persons(mut self, role_id: u32, persons: Vec<Value>) -> Self {
        self.role_persons.push((role_id, persons));
        self
    }

    /// Serves a raw response for `collection_path` (relative to `/items`).
    ///
    /// Use for failure scenarios: error statuses, malformed bodies, missing `data`.
    pub fn with_response(
        mut self,
        collection_path: impl Into<String>,
        response: ResponseTemplate,
    ) -> Self {
        self.responses.push((collection_path.into(), response));
        self
    }

    /// Writes a file into the public directory.
    ///
    /// # Arguments
    /// - `relative_path` - Path below the public directory, e.g. `"css/styles.css"`
    /// - `contents` - File contents
    pub fn with_public_file(
        mut self,
        relative_path: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        self.public_files
            .push((relative_path.into(), contents.into()));
        self
    }

    /// Starts the mock server, mounts all configured responses and writes public files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use context
    /// - `Err(TestError::Io)` - Failed to create the public directory or write a file
    /// - `Err(TestError::InvalidAssetPath)` - A public file path was absolute or used `..`
    pub async fn build(self) -> Result<TestContext, TestError> {
        let server = MockServer::start().await;

        for (collection_path, response) in self.responses {
            Mock::given(method("GET"))
                .and(path(format!(
                    "{}/{}",
                    API_PREFIX,
                    collection_path.trim_start_matches('/')
                )))
                .respond_with(response)
                .with_priority(1)
                .mount(&server)
                .await;
        }

        for (role_id, persons) in self.role_persons {
            Mock::given(method("GET"))
                .and(path(format!("{}/person", API_PREFIX)))
                .and(query_param("filter[role][role_id]", role_id.to_string()))
                .respond_with(data_response(persons))
                .with_priority(2)
                .mount(&server)
                .await;
        }

        if let Some(persons) = self.persons {
            Mock::given(method("GET"))
                .and(path(format!("{}/person", API_PREFIX)))
                .respond_with(data_response(persons))
                .mount(&server)
                .await;
        }

        if let Some(squads) = self.squads {
            Mock::given(method("GET"))
                .and(path(format!("{}/squad", API_PREFIX)))
                .respond_with(data_response(squads))
                .mount(&server)
                .await;
        }

        let public_dir = tempfile::tempdir()?;
        for (relative_path, contents) in self.public_files {
            let relative = Path::new(&relative_path);
            if !relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)))
            {
                return Err(TestError::InvalidAssetPath(relative_path));
            }

            let target = public_dir.path().join(relative);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(target, contents)?;
        }

        Ok(TestContext::new(server, public_dir))
    }
}

/// `200 OK` with `{ "data": records }`.
pub fn data_response(records: Vec<Value>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": records }))
}
