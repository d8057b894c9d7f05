use poem::Request;

use crate::api::helpers::*;

#[test]
fn test_extract_ip_from_x_forwarded_for() {
    let req = Request::builder()
        .header("X-Forwarded-For", "192.168.1.1, 10.0.0.1")
        .finish();

    let ip = extract_ip_address(&req);
    assert_eq!(ip, Some("192.168.1.1".to_string()));
}

#[test]
fn test_extract_ip_from_x_real_ip() {
    let req = Request::builder()
        .header("X-Real-IP", "192.168.1.2")
        .finish();

    let ip = extract_ip_address(&req);
    assert_eq!(ip, Some("192.168.1.2".to_string()));
}

#[test]
fn test_extract_ip_fallback_to_remote_addr() {
    // When no headers are present, remote_addr returns None in test
    let req = Request::builder().finish();

    let ip = extract_ip_address(&req);
    assert_eq!(ip, None);
}

#[test]
fn test_extract_user_agent_and_referrer() {
    let req = Request::builder()
        .header("User-Agent", "Mozilla/5.0")
        .header("Referer", "http://example.com/products")
        .finish();

    assert_eq!(extract_user_agent(&req), Some("Mozilla/5.0".to_string()));
    assert_eq!(
        extract_referrer(&req),
        Some("http://example.com/products".to_string())
    );
}

#[test]
fn test_error_response_builders() {
    let nf = not_found("Product not found");
    assert_eq!(nf.error, "not_found");
    assert_eq!(nf.status_code, 404);

    let bad = bad_request("No products selected");
    assert_eq!(bad.error, "invalid_input");
    assert_eq!(bad.message, "No products selected");
    assert_eq!(bad.status_code, 400);
}
