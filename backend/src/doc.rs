//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] describes the portal's pages, form endpoints and health probes.
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::grievances::{SubmitGrievanceRequest, SubmitGrievanceResponse};
use crate::inbound::http::users::{LoginRequest, MessageResponse, RegisterRequest};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the grievance portal.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Grievance portal backend",
        description = "Account registration, session login and grievance submission."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::home::home,
        crate::inbound::http::users::register_form,
        crate::inbound::http::users::register,
        crate::inbound::http::users::login_form,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::grievances::submit_grievance_form,
        crate::inbound::http::grievances::submit_grievance,
        crate::inbound::http::grievances::grievance_detail,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        MessageResponse,
        RegisterRequest,
        LoginRequest,
        SubmitGrievanceRequest,
        SubmitGrievanceResponse
    )),
    tags(
        (name = "pages", description = "Server-rendered pages"),
        (name = "users", description = "Registration and sessions"),
        (name = "grievances", description = "Grievance submission and lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
