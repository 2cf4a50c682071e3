use crate::SessionCookie;

use http::{HeaderMap, HeaderValue, header};

#[test]
fn test_set_cookie_is_http_only_with_max_age() {
    let cookie = SessionCookie::new("tapis-bridge-auth", false, 3600);

    let value = cookie.set_cookie("abc.def.ghi").unwrap();
    let value = value.to_str().unwrap();

    assert!(value.starts_with("tapis-bridge-auth=abc.def.ghi;"));
    assert!(value.contains("HttpOnly"));
    assert!(value.contains("Max-Age=3600"));
    assert!(!value.contains("Secure"));
}

#[test]
fn test_secure_flag_added_when_configured() {
    let cookie = SessionCookie::new("tapis-bridge-auth", true, 3600);

    let value = cookie.set_cookie("token").unwrap();

    assert!(value.to_str().unwrap().ends_with("; Secure"));
}

#[test]
fn test_read_finds_named_cookie_among_others() {
    let cookie = SessionCookie::new("tapis-bridge-auth", false, 3600);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; tapis-bridge-auth=abc.def.ghi; lang=en"),
    );

    assert_eq!(cookie.read(&headers).as_deref(), Some("abc.def.ghi"));
}

#[test]
fn test_read_without_cookie_is_none() {
    let cookie = SessionCookie::new("tapis-bridge-auth", false, 3600);
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));

    assert!(cookie.read(&headers).is_none());
    assert!(cookie.read(&HeaderMap::new()).is_none());
}

#[test]
fn test_read_ignores_empty_value() {
    let cookie = SessionCookie::new("tapis-bridge-auth", false, 3600);
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("tapis-bridge-auth="));

    assert!(cookie.read(&headers).is_none());
}
