//! Percent codec for navigation path segments.
//!
//! Song titles go into URLs (`/song/<segment>`), and titles contain spaces,
//! punctuation, and sometimes slashes. The encoder escapes everything
//! outside the RFC 3986 unreserved set so any title survives a round trip;
//! the decoder is total and never fails — a malformed escape passes through
//! verbatim and routes to a not-found page downstream instead of crashing
//! the router.

use std::fmt::Write;

/// Percent-encode a title for use as a single path segment.
pub fn encode_segment(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => {
                // String's fmt::Write never errors
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// Decode a percent-encoded path segment.
pub fn decode_segment(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
