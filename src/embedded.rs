use log::debug;
use serde::de::DeserializeOwned;

/// Script variable holding the player response, e.g. `var ytInitialPlayerResponse = {...};`
pub const PLAYER_RESPONSE_MARKER: &str = "ytInitialPlayerResponse";

/// Locate the object assigned to `marker` and deserialize it.
///
/// Returns `None` when the marker is missing, the object is unterminated, or
/// the bounded text does not deserialize into `T`.
pub fn extract_json<T: DeserializeOwned>(html: &str, marker: &str) -> Option<T> {
    let raw = find_object(html, marker)?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Embedded {marker} did not parse: {e}");
            None
        }
    }
}

/// Return the exact `{...}` text assigned to `marker`.
///
/// Occurrences not followed by an assignment of an object literal (such as
/// `ytInitialPlayerResponse = null`) are skipped.
pub fn find_object<'a>(html: &'a str, marker: &str) -> Option<&'a str> {
    let mut search_from = 0;
    while let Some(rel) = html[search_from..].find(marker) {
        let after_marker = search_from + rel + marker.len();
        if let Some(offset) = object_start(&html[after_marker..]) {
            let start = after_marker + offset;
            let len = balanced_len(&html[start..])?;
            return Some(&html[start..start + len]);
        }
        search_from = after_marker;
    }
    None
}

fn object_start(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;

    // tolerate `window["marker"] = {`
    while i < bytes.len() && matches!(bytes[i], b'"' | b'\'' | b']' | b' ' | b'\t' | b'\r' | b'\n') {
        i += 1;
    }
    if bytes.get(i) != Some(&b'=') {
        return None;
    }
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    (bytes.get(i) == Some(&b'{')).then_some(i)
}

/// Length of the object starting at `s[0] == '{'`, including the closing brace.
/// Braces inside string literals do not count.
fn balanced_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
