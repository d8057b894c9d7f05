use poem::Request;

use crate::errors::InternalError;
use crate::types::dto::common::ErrorResponse;

/// Best-effort client IP extraction for view tracking
pub fn extract_ip_address(req: &Request) -> Option<String> {
    // Check X-Forwarded-For header (proxy/load balancer)
    if let Some(forwarded) = req.header("X-Forwarded-For") {
        if let Some(ip) = forwarded.split(',').next() {
            let ip = ip.trim();
            if !ip.is_empty() {
                return Some(ip.to_string());
            }
        }
    }

    // Check X-Real-IP header (nginx)
    if let Some(real_ip) = req.header("X-Real-IP") {
        return Some(real_ip.trim().to_string());
    }

    // Fall back to remote address
    req.remote_addr()
        .as_socket_addr()
        .map(|addr| addr.ip().to_string())
}

pub fn extract_user_agent(req: &Request) -> Option<String> {
    req.header("User-Agent").map(|ua| ua.to_string())
}

pub fn extract_referrer(req: &Request) -> Option<String> {
    req.header("Referer").map(|r| r.to_string())
}

/// Log an internal error and build the opaque 500 body for it
pub fn internal_error(err: &InternalError) -> ErrorResponse {
    tracing::error!("Internal error while handling request: {err}");
    ErrorResponse {
        error: "internal_error".to_string(),
        message: "Internal server error".to_string(),
        status_code: 500,
    }
}

pub fn not_found(message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        error: "not_found".to_string(),
        message: message.into(),
        status_code: 404,
    }
}

pub fn bad_request(message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        error: "invalid_input".to_string(),
        message: message.into(),
        status_code: 400,
    }
}
