use crate::server::{
    model::{
        lookup::{COHORT, TRIBE_NAME},
        query::QueryParams,
        squad::Squad,
    },
    service::collection::{decode_list, CollectionClient},
};

const SQUAD_COLLECTION: &str = "squad";

pub struct SquadService<'a> {
    client: &'a CollectionClient,
}

impl<'a> SquadService<'a> {
    pub fn new(client: &'a CollectionClient) -> Self {
        Self { client }
    }

    /// Lists the squads of the configured cohort and tribe.
    pub async fn list_in_scope(&self) -> Vec<Squad> {
        let data = self
            .client
            .fetch_unscoped(SQUAD_COLLECTION, &squad_scope_params())
            .await;

        decode_list(data)
    }
}

/// Filters selecting the cohort's squads. Squads are filtered on their own cohort
/// field, not through the person junction, so the default scope does not apply.
pub fn squad_scope_params() -> QueryParams {
    QueryParams::new()
        .with("filter[cohort]", COHORT)
        .with("filter[tribe][name]", TRIBE_NAME)
}
