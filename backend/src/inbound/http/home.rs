//! Landing page.

use actix_web::{HttpResponse, get, http::StatusCode};

use crate::inbound::http::views::{home_page, html};

/// Render the home view.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Home page", content_type = "text/html", body = String)),
    tags = ["pages"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    html(StatusCode::OK, home_page())
}
