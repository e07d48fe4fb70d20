use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
};

use crate::server::{
    controller::SortQuery,
    error::AppError,
    model::{
        lookup::sort_field,
        view::{IndexView, Template},
    },
    render::render_view,
    service::person::PersonService,
    state::AppState,
};

/// GET / - Home listing of everyone in the tribe
///
/// # Query Parameters
/// - `sort`: Sort key such as `a-z`, `z-a` or `shoe-size`; unknown keys sort by name
///
/// # Returns
/// - `200 OK`: `index` template with `persons` and `squads`
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let query = SortQuery::from_extracted(query);
    let sort = sort_field(query.sort.as_deref());

    let persons = PersonService::new(&state.client).list_in_tribe(sort).await;

    let view = IndexView {
        persons,
        squads: &state.site.squads,
    };

    render_view(state.renderer.as_ref(), Template::Index, &view)
}
