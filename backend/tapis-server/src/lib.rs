pub mod api;
pub mod app_state;
pub mod error;
pub mod events;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        login::{current_user, login},
        login_request::LoginRequest,
        login_response::LoginResponse,
        session_cookie::SessionCookie,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_user::SessionUser,
};
pub use app_state::AppState;
pub use events::LoginEvents;

pub use crate::routes::build_router;
