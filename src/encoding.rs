//! Character encoding detection for byte input.
//!
//! Documents read from disk or the network arrive as bytes. The encoding is
//! taken from a byte order mark, then from a `<meta>` charset declaration in
//! the first kilobyte, falling back to UTF-8. Decoding is lossy.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How many leading bytes are scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#,
    )
    .expect("META_CONTENT_TYPE regex")
});

/// Detect the encoding of an HTML document.
///
/// Order: byte order mark, `<meta charset>`, `<meta http-equiv=Content-Type>`,
/// then UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<&str> {
    META_CHARSET
        .captures(head)
        .or_else(|| META_CONTENT_TYPE.captures(head))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD. A leading BOM is stripped.
#[must_use]
pub fn decode(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    log::trace!("decoding {} bytes as {}", html.len(), encoding.name());
    let (decoded, _encoding_used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("invalid {} sequences replaced while decoding", encoding.name());
    }
    decoded
}
