use tapis_core::PublicUser;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Successful login: the public user plus the session cookie
pub struct LoginResponse {
    pub user: PublicUser,
    pub cookie: HeaderValue,
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::SET_COOKIE, self.cookie)],
            Json(self.user),
        )
            .into_response()
    }
}
