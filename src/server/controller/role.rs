use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::server::{
    controller::{not_found, SortQuery},
    error::AppError,
    model::{
        lookup::{role_id, sort_field},
        view::{RoleView, Template},
    },
    render::render_view,
    service::person::PersonService,
    state::AppState,
};

/// GET /{role_slug} - Everyone holding one role
///
/// Registered last; any single-segment path reaches it. Slugs missing from the role
/// table are handed to the not-found handler instead of rendering an empty listing.
///
/// # Query Parameters
/// - `sort`: Sort key; unknown keys sort by name
///
/// # Returns
/// - `200 OK`: `all` template with `persons`, `roleName` and `squads`
/// - `404 Not Found`: Unknown role slug
pub async fn list_by_role(
    State(state): State<AppState>,
    Path(role_slug): Path<String>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Some(id) = role_id(&role_slug) else {
        return Ok(not_found().await.into_response());
    };

    let query = SortQuery::from_extracted(query);
    let sort = sort_field(query.sort.as_deref());

    let persons = PersonService::new(&state.client)
        .list_by_role(id, sort)
        .await;

    // First record decides the display name; no canonical role record is fetched.
    let role_name = persons
        .first()
        .and_then(|person| person.role_name())
        .unwrap_or(role_slug.as_str())
        .to_string();

    let view = RoleView {
        persons,
        role_name,
        squads: &state.site.squads,
    };

    render_view(state.renderer.as_ref(), Template::All, &view)
}
