//! CORS layer construction

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsConfig;

/// Build a CORS layer from config. Returns `None` when CORS is disabled.
pub fn build_cors_layer(cfg: &CorsConfig) -> Option<CorsLayer> {
    if !cfg.enabled {
        return None;
    }

    let mut layer = CorsLayer::new();

    layer = if is_wildcard(&cfg.allowed_origins) {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = parse_list(&cfg.allowed_origins);
        layer.allow_origin(origins)
    };

    layer = if is_wildcard(&cfg.allowed_methods) {
        layer.allow_methods(Any)
    } else {
        let methods: Vec<Method> = parse_list(&cfg.allowed_methods);
        layer.allow_methods(methods)
    };

    layer = if is_wildcard(&cfg.allowed_headers) {
        layer.allow_headers(Any)
    } else {
        let headers: Vec<HeaderName> = parse_list(&cfg.allowed_headers);
        layer.allow_headers(headers)
    };

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Some(layer)
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

/// Parse each entry, dropping ones that do not parse.
fn parse_list<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values.iter().filter_map(|v| v.parse().ok()).collect()
}
