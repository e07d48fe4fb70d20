use percent_encoding::utf8_percent_encode;

use crate::server::{
    model::{
        lookup::TRIBE_NAME,
        person::Person,
        query::QueryParams,
    },
    service::{
        collection::{decode_list, decode_one, CollectionClient},
        search, PATH_SEGMENT,
    },
};

const PERSON_COLLECTION: &str = "person";

/// Field directive for role listings; expands the role name and the mugshot.
pub const ROLE_FIELDS: &str = "*,role.role_id.name,mugshot,squads.*";

pub struct PersonService<'a> {
    client: &'a CollectionClient,
}

impl<'a> PersonService<'a> {
    pub fn new(client: &'a CollectionClient) -> Self {
        Self { client }
    }

    /// Lists everyone in the tribe, sorted by `sort_field`.
    pub async fn list_in_tribe(&self, sort_field: &str) -> Vec<Person> {
        let data = self
            .client
            .fetch_items(PERSON_COLLECTION, tribe_listing_params(sort_field))
            .await;

        decode_list(data)
    }

    /// Runs the OR-expanded search for `term` within the cohort.
    pub async fn search(&self, term: &str) -> Vec<Person> {
        let data = self
            .client
            .fetch_items(PERSON_COLLECTION, search::expand(term))
            .await;

        decode_list(data)
    }

    /// Lists everyone holding `role_id`, without a result limit.
    pub async fn list_by_role(&self, role_id: u32, sort_field: &str) -> Vec<Person> {
        let data = self
            .client
            .fetch_items(PERSON_COLLECTION, role_listing_params(role_id, sort_field))
            .await;

        decode_list(data)
    }

    /// Fetches one person by id, without the cohort scope.
    ///
    /// # Returns
    /// - `Some(Person)` - The API returned a record
    /// - `None` - Unknown id or the request failed
    pub async fn get_by_id(&self, id: &str) -> Option<Person> {
        // Dot segments would be resolved away by the URL parser and hit the wrong resource.
        if id.is_empty() || id == "." || id == ".." {
            return None;
        }

        let endpoint = format!(
            "{}/{}",
            PERSON_COLLECTION,
            utf8_percent_encode(id, PATH_SEGMENT)
        );

        let data = self
            .client
            .fetch_unscoped(&endpoint, &QueryParams::new())
            .await;

        decode_one(data)
    }
}

/// Overrides for the home listing.
pub fn tribe_listing_params(sort_field: &str) -> QueryParams {
    QueryParams::new()
        .with("sort", sort_field)
        .with("filter[squads][squad_id][tribe][name]", TRIBE_NAME)
}

/// Overrides for a role listing.
pub fn role_listing_params(role_id: u32, sort_field: &str) -> QueryParams {
    QueryParams::new()
        .with("filter[role][role_id]", role_id.to_string())
        .with("fields", ROLE_FIELDS)
        .with("sort", sort_field)
        .with("limit", "-1")
}
