use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::server::{
    error::AppError,
    model::view::{StudentView, Template},
    render::render_view,
    service::person::PersonService,
    state::AppState,
};

/// GET /student/{id} - Detail page for one person
///
/// Fetched without the cohort scope. An unknown id is not an error: the page renders
/// with `person: null`.
///
/// # Returns
/// - `200 OK`: `student` template with `person` and `squads`
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let person = PersonService::new(&state.client).get_by_id(&id).await;

    if person.is_none() {
        tracing::debug!("No person returned for id '{}'", id);
    }

    let view = StudentView {
        person,
        squads: &state.site.squads,
    };

    render_view(state.renderer.as_ref(), Template::Student, &view)
}
