pub mod login;
pub mod login_request;
pub mod login_response;
pub mod session_cookie;
