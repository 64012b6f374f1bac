//! Shared form parsing and error fragments for route handlers.

use std::str::FromStr;

use crate::render;
use crate::session::SessionError;

/// Parse URL-encoded form body into key-value pairs.
/// Handles `key=value&key2=value2` format (from HTMX POST bodies).
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let val = parts.next().unwrap_or("");
            Some((percent_decode(key), percent_decode(val)))
        })
        .collect()
}

/// Percent-decode a URL-encoded value. Multi-byte UTF-8 sequences are
/// reassembled; invalid escapes pass through literally.
pub fn percent_decode(input: &str) -> String {
    let mut bytes = Vec::with_capacity(input.len());
    let mut iter = input.bytes();
    while let Some(b) = iter.next() {
        match b {
            b'%' => {
                let hi = iter.next();
                let lo = iter.next();
                match (hi.and_then(hex_val), lo.and_then(hex_val)) {
                    (Some(h), Some(l)) => bytes.push(h << 4 | l),
                    _ => {
                        bytes.push(b'%');
                        bytes.extend(hi);
                        bytes.extend(lo);
                    }
                }
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(b),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Helper to get a value by key from a list of key-value pairs.
pub fn get_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Get and parse a param. `Err` holds a ready-to-return error fragment.
pub fn parse_param<T: FromStr>(params: &[(String, String)], key: &str) -> Result<T, String> {
    let raw = get_param(params, key).ok_or_else(|| missing_param(key))?;
    raw.trim()
        .parse()
        .map_err(|_| error_span(&format!("Invalid {} parameter: {}", key, raw)))
}

/// Red inline error fragment.
pub fn error_span(message: &str) -> String {
    format!(
        r#"<span class="text-red">{}</span>"#,
        render::escape_html(message)
    )
}

pub fn missing_param(key: &str) -> String {
    error_span(&format!("Missing {} parameter", key))
}

/// Log a session error and turn it into an error fragment.
pub fn session_error(err: &SessionError) -> String {
    tracing::warn!(error = %err, "request rejected");
    error_span(&err.to_string())
}
