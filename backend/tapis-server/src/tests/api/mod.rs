mod error;
mod login_request;
mod session_cookie;
