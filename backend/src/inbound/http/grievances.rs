//! Grievance handlers: the submission form and API, and the detail page.
//!
//! ```text
//! POST /submit-grievance {"name":"Ada","email":"ada@example.com","issue":"Broken streetlight"}
//! GET /grievance/1/3fa85f64-5717-4562-b3fc-2c963f66afa6
//! ```

use actix_web::{HttpResponse, get, http::StatusCode, post, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, GrievanceLookup, GrievanceSubmission, IssueText};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonOrForm, into_payload};
use crate::inbound::http::views::{
    error_page, grievance_page, html, not_found_page, submit_grievance_page,
};

/// Submission body for `POST /submit-grievance`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SubmitGrievanceRequest {
    /// Submitter's name, logged only.
    #[serde(default)]
    pub name: Option<String>,
    /// Submitter's email, logged only.
    #[serde(default)]
    pub email: Option<String>,
    /// Complaint text stored verbatim as both title and description. An
    /// absent issue is stored as an empty string.
    #[serde(default)]
    pub issue: Option<String>,
}

impl SubmitGrievanceRequest {
    fn into_submission(self) -> GrievanceSubmission {
        GrievanceSubmission {
            submitter_name: self.name,
            submitter_email: self.email,
            issue: IssueText::new(self.issue.unwrap_or_default()),
        }
    }
}

/// Acknowledgement returned after a submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitGrievanceResponse {
    #[schema(example = "Grievance submitted successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub grievance_id: i64,
}

/// Path parameters for the detail page.
#[derive(Debug, Deserialize)]
pub struct GrievancePath {
    id: String,
    user_id: String,
}

/// Render the submission form.
#[utoipa::path(
    get,
    path = "/submit-grievance",
    responses((status = 200, description = "Submission form", content_type = "text/html", body = String)),
    tags = ["grievances"],
    operation_id = "submitGrievanceForm"
)]
#[get("/submit-grievance")]
pub async fn submit_grievance_form() -> HttpResponse {
    html(StatusCode::OK, submit_grievance_page())
}

/// Record a new grievance and return its sequential identifier.
#[utoipa::path(
    post,
    path = "/submit-grievance",
    request_body(content = SubmitGrievanceRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "Grievance stored", body = SubmitGrievanceResponse),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["grievances"],
    operation_id = "submitGrievance"
)]
#[post("/submit-grievance")]
pub async fn submit_grievance(
    state: web::Data<HttpState>,
    payload: JsonOrForm<SubmitGrievanceRequest>,
) -> ApiResult<HttpResponse> {
    let submission = into_payload(payload).into_submission();
    let id = state.grievances.submit(submission).await?;
    Ok(HttpResponse::Created().json(SubmitGrievanceResponse {
        message: "Grievance submitted successfully".to_owned(),
        grievance_id: id.value(),
    }))
}

/// Render one grievance.
///
/// Failures are rendered as HTML pages. Only the not-found message is shown
/// to the client; any other failure gets a generic page.
#[utoipa::path(
    get,
    path = "/grievance/{id}/{user_id}",
    params(
        ("id" = String, Path, description = "Sequential grievance identifier"),
        ("user_id" = String, Path, description = "Viewer identifier echoed on the page")
    ),
    responses(
        (status = 200, description = "Grievance detail", content_type = "text/html", body = String),
        (status = 404, description = "Grievance not found", content_type = "text/html", body = String),
        (status = 500, description = "Something broke", content_type = "text/html", body = String)
    ),
    tags = ["grievances"],
    operation_id = "grievanceDetail"
)]
#[get("/grievance/{id}/{user_id}")]
pub async fn grievance_detail(
    state: web::Data<HttpState>,
    path: web::Path<GrievancePath>,
) -> HttpResponse {
    let GrievancePath { id, user_id } = path.into_inner();
    let lookup = GrievanceLookup {
        grievance_id: id,
        viewer_id: user_id,
    };
    match state.grievance_query.find_by_external_id(lookup).await {
        Ok(view) => html(StatusCode::OK, grievance_page(&view)),
        Err(err) => render_failure(&err),
    }
}

fn render_failure(err: &Error) -> HttpResponse {
    if err.code() == ErrorCode::NotFound {
        info!(message = err.message(), "grievance lookup missed");
        return html(StatusCode::NOT_FOUND, not_found_page(err.message()));
    }
    error!(
        code = ?err.code(),
        message = err.message(),
        trace_id = err.trace_id().unwrap_or_default(),
        "grievance lookup failed"
    );
    html(StatusCode::INTERNAL_SERVER_ERROR, error_page())
}

#[cfg(test)]
#[path = "grievances_tests.rs"]
mod tests;
