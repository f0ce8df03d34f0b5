//! HTTP inbound adapter exposing the portal's pages and form endpoints.

pub mod error;
pub mod grievances;
pub mod health;
pub mod home;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;
pub mod views;

pub use error::ApiResult;
