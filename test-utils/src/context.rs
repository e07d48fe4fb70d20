use std::path::Path;

use tempfile::TempDir;
use wiremock::MockServer;

/// Path prefix the mock collection API is served under.
pub const API_PREFIX: &str = "/items";

/// Test context containing the mock collection API and a public asset directory.
///
/// Both live for the lifetime of the context; dropping it shuts the mock server down
/// and removes the temporary directory.
pub struct TestContext {
    /// Mock collection API. Unmatched requests receive `404 Not Found`.
    pub server: MockServer,

    /// Temporary directory standing in for `public/`.
    pub public_dir: TempDir,
}

impl TestContext {
    /// Creates a context around an already started mock server.
    pub fn new(server: MockServer, public_dir: TempDir) -> Self {
        Self { server, public_dir }
    }

    /// Base URL to configure the collection client with.
    pub fn api_base(&self) -> String {
        format!("{}{}", self.server.uri(), API_PREFIX)
    }

    /// Path of the temporary public directory.
    pub fn public_path(&self) -> &Path {
        self.public_dir.path()
    }

    /// Decoded query pairs of every request received on `request_path`, in arrival order.
    ///
    /// # Arguments
    /// - `request_path` - Exact request path, e.g. `"/items/person"`
    ///
    /// # Returns
    /// - One `Vec<(key, value)>` per matching request
    pub async fn received_queries(&self, request_path: &str) -> Vec<Vec<(String, String)>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == request_path)
            .map(|request| request.url.query_pairs().into_owned().collect())
            .collect()
    }
}
