use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{GapSeverity, ProjectId};
use super::filter::GapFilter;
use super::provider::{RosterError, RosterProvider};
use super::report::views::SkillGapView;
use super::report::GapReport;
use super::service::SkillGapService;

/// Router builder exposing the analytics endpoints.
pub fn analytics_router<P>(service: Arc<SkillGapService<P>>) -> Router
where
    P: RosterProvider + 'static,
{
    Router::new()
        .route("/api/v1/analytics/skill-gaps", get(list_handler::<P>))
        .route(
            "/api/v1/analytics/skill-gaps/:project_id",
            get(project_handler::<P>),
        )
        .with_state(service)
}

/// Query parameters accepted by the listing endpoint. Empty values and
/// the legacy `all` sentinel mean "no filter".
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GapQuery {
    search: Option<String>,
    project: Option<String>,
    severity: Option<String>,
    department: Option<String>,
}

impl GapQuery {
    fn into_filter(self) -> Result<GapFilter, String> {
        let severity = match effective(self.severity) {
            Some(raw) => Some(
                raw.parse::<GapSeverity>()
                    .map_err(|err| err.to_string())?,
            ),
            None => None,
        };

        Ok(GapFilter {
            search: effective(self.search),
            project: effective(self.project).map(ProjectId),
            severity,
            department: effective(self.department),
        })
    }
}

fn effective(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && value != "all")
}

pub(crate) async fn list_handler<P>(
    State(service): State<Arc<SkillGapService<P>>>,
    Query(query): Query<GapQuery>,
) -> Response
where
    P: RosterProvider + 'static,
{
    let filter = match query.into_filter() {
        Ok(filter) => filter,
        Err(message) => {
            let payload = json!({ "error": message });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.snapshot().await {
        Ok(snapshot) => {
            let gaps = snapshot.filtered(&filter);
            let report = GapReport::new(&gaps, service.engine().config());
            let body = report.response(snapshot.generated_at);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => roster_failure(error),
    }
}

pub(crate) async fn project_handler<P>(
    State(service): State<Arc<SkillGapService<P>>>,
    Path(project_id): Path<String>,
) -> Response
where
    P: RosterProvider + 'static,
{
    let id = ProjectId(project_id);

    match service.snapshot().await {
        Ok(snapshot) => match snapshot.gaps.iter().find(|gap| gap.project_id == id) {
            Some(gap) => {
                let view = SkillGapView::build(gap, service.engine().config());
                (StatusCode::OK, axum::Json(view)).into_response()
            }
            None => {
                let payload = json!({
                    "error": format!("no project '{}' in the current roster", id.0),
                });
                (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
            }
        },
        Err(error) => roster_failure(error),
    }
}

/// A roster fetch failure means the engine never ran; surface it as an
/// upstream failure rather than a server bug.
fn roster_failure(error: RosterError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
}
