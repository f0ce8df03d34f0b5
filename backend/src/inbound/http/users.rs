//! Account handlers: registration, login and logout.
//!
//! ```text
//! POST /register {"Username":"Ada","Email":"ada@example.com","Password":"pw","Role":"applicant"}
//! POST /login {"Email":"ada@example.com","Password":"pw"}
//! GET /logout
//! ```

use actix_web::{HttpResponse, get, http::StatusCode, http::header, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, MissingField, Registration};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonOrForm, into_payload, missing_field_error};
use crate::inbound::http::views::{html, login_page, register_page};

/// Plain acknowledgement body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Login successful")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Registration body for `POST /register`.
///
/// Field names match the portal form; lowercase spellings are accepted too.
/// Absent fields are treated the same as empty ones.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(rename = "Username", alias = "username", default)]
    pub username: Option<String>,
    #[serde(rename = "Email", alias = "email", default)]
    pub email: Option<String>,
    #[serde(rename = "Password", alias = "password", default)]
    pub password: Option<String>,
    #[serde(rename = "Role", alias = "role", default)]
    pub role: Option<String>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = MissingField;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.username.as_deref().unwrap_or_default(),
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
            value.role.as_deref().unwrap_or_default(),
        )
    }
}

/// Login body for `POST /login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[serde(rename = "Email", alias = "email", default)]
    pub email: Option<String>,
    #[serde(rename = "Password", alias = "password", default)]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = MissingField;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
    }
}

/// Render the registration form.
#[utoipa::path(
    get,
    path = "/register",
    responses((status = 200, description = "Registration form", content_type = "text/html", body = String)),
    tags = ["users"],
    operation_id = "registerForm"
)]
#[get("/register")]
pub async fn register_form() -> HttpResponse {
    html(StatusCode::OK, register_page())
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "A field is missing", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: JsonOrForm<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let request = Registration::try_from(into_payload(payload)).map_err(missing_field_error)?;
    state.registration.register(request).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully")))
}

/// Render the login form.
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login form", content_type = "text/html", body = String)),
    tags = ["users"],
    operation_id = "loginForm"
)]
#[get("/login")]
pub async fn login_form() -> HttpResponse {
    html(StatusCode::OK, login_page())
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Login success", body = MessageResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "A field is missing", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: JsonOrForm<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(into_payload(payload)).map_err(missing_field_error)?;
    let user_id = state.login.authenticate(&credentials).await?;
    session.persist_user(&user_id)?;
    info!(%user_id, "session established");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Login successful")))
}

/// End the session and return to the home page.
#[utoipa::path(
    get,
    path = "/logout",
    responses((status = 302, description = "Session purged; redirect to /")),
    tags = ["users"],
    operation_id = "logout"
)]
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    if let Ok(Some(user_id)) = session.user_id() {
        info!(%user_id, "session ended");
    }
    session.purge();
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
