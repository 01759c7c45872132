//! The two addressable views and the URL component codec they rely on.

use serde::{Deserialize, Serialize};

const DETAIL_PREFIX: &str = "/country/";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/country/<segment>`, with the segment kept percent-encoded.
    Detail { segment: String },
}

impl Route {
    /// The detail route for a country's common name.
    pub fn detail(name: &str) -> Route {
        Route::Detail {
            segment: encode_component(name),
        }
    }

    /// Parses a location path. Query and fragment are ignored, a trailing
    /// slash is tolerated, and anything unrecognised resolves to the list.
    pub fn parse(path: &str) -> Route {
        let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
        let mut path = &path[..end];
        if path.len() > 1 {
            path = path.trim_end_matches('/');
        }

        match path.strip_prefix(DETAIL_PREFIX) {
            Some(segment) if !segment.is_empty() && !segment.contains('/') => Route::Detail {
                segment: segment.to_string(),
            },
            _ => Route::List,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail { segment } => format!("{DETAIL_PREFIX}{segment}"),
        }
    }
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encodes a path component the way `encodeURIComponent` does.
pub fn encode_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}

/// Percent-decodes a path component. Never fails: a `%` not followed by two
/// hex digits is kept as-is and invalid UTF-8 is replaced.
pub fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = from_hex_digit(bytes[i + 1]);
            let lo = from_hex_digit(bytes[i + 2]);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    match String::from_utf8(out) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

fn from_hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("Peru"), "Peru");
        assert_eq!(encode_component("United States"), "United%20States");
        assert_eq!(encode_component("Côte d'Ivoire"), "C%C3%B4te%20d'Ivoire");
        assert_eq!(encode_component("a/b?c#d&e"), "a%2Fb%3Fc%23d%26e");
        assert_eq!(encode_component("(x)*~!._-"), "(x)*~!._-");
    }

    #[test]
    fn decode_inverts_encode() {
        for name in ["São Tomé and Príncipe", "Åland Islands", "Bosnia & Herzegovina", "100%"] {
            assert_eq!(decode_component(&encode_component(name)), name);
        }
        assert_eq!(decode_component("c%c3%b4te"), "côte");
    }

    #[test]
    fn malformed_escapes_are_kept() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%4"), "%4");
        assert_eq!(decode_component("%FF"), "\u{FFFD}");
    }

    #[test]
    fn parses_routes() {
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(
            Route::parse("/country/Peru"),
            Route::Detail { segment: "Peru".into() }
        );
        assert_eq!(
            Route::parse("/country/United%20States/?tab=1#top"),
            Route::Detail { segment: "United%20States".into() }
        );
        assert_eq!(Route::parse("/country/"), Route::List);
        assert_eq!(Route::parse("/country/a/b"), Route::List);
        assert_eq!(Route::parse("/somewhere/else"), Route::List);
    }

    #[test]
    fn detail_route_path_round_trips_through_parse() {
        let r = Route::detail("Côte d'Ivoire");
        assert_eq!(r.path(), "/country/C%C3%B4te%20d'Ivoire");
        assert_eq!(Route::parse(&r.path()), r);
        assert_eq!(Route::List.path(), "/");
    }
}
