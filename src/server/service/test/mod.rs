use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, fixture};
use wiremock::ResponseTemplate;

use crate::server::{
    model::query::QueryParams,
    service::{
        collection::CollectionClient, person::PersonService, squad::SquadService,
    },
};

mod collection;
mod squad;

fn client_for(test: &TestContext) -> CollectionClient {
    CollectionClient::new(reqwest::Client::new(), test.api_base())
}

/// Value of `key` in a list of decoded query pairs.
fn query_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Number of times `key` appears in a list of decoded query pairs.
fn query_count(pairs: &[(String, String)], key: &str) -> usize {
    pairs.iter().filter(|(k, _)| k == key).count()
}
