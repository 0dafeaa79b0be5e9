//! # strip-tags
//!
//! Strip tags from HTML, optionally from areas identified by CSS selectors.
//!
//! The document is parsed, elements that never render (scripts, styles,
//! `<head>`, `[hidden]` ...) are dropped, images become their alt text, and the
//! regions picked by the selectors are flattened to text. Selected tags can be
//! kept as minimal markup with an attribute allow-list.
//!
//! ## Quick Start
//!
//! ```rust
//! use strip_tags::{extract, extract_with_options, Options};
//!
//! let html = "<div><h1>Title</h1><p>Hello <b>World</b></p><script>x()</script></div>";
//!
//! assert_eq!(extract(html)?, "TitleHello World");
//!
//! let options = Options::default().with_selectors(["p"]);
//! assert_eq!(extract_with_options(html, &options)?, "Hello World");
//!
//! let options = Options::default().with_selectors(["div"]).with_keep_tags(["hs"]);
//! assert_eq!(extract_with_options(html, &options)?, "<h1>Title</h1>Hello World");
//! # Ok::<(), strip_tags::Error>(())
//! ```
//!
//! ## Output rules
//!
//! - Selectors run in the given order; each match is rendered in document
//!   order. Overlapping selectors emit the shared content once per selector.
//! - A match that is a block element (`p`, `div`, `h1`, `li` ...) is followed by
//!   a newline; text right after the match is appended verbatim.
//! - `pre` content is always emitted literally.
//! - The result is trimmed; with `minify`, whitespace runs collapse to a
//!   space, a newline, or one blank line depending on how many newlines they
//!   held.

mod error;
mod extract;
mod options;
mod patterns;

/// Tree access facade: parsing, selector queries and the node arena.
pub mod dom;

/// Tag catalogs: void, block, display-suppressed, bundles, attribute allow-list.
pub mod tags;

/// Keep-tag resolution with bundle expansion.
pub mod keep;

/// Structural filtering before extraction.
pub mod filter;

/// Node rendering with optional tag reconstruction.
pub mod render;

/// Selector walking and output assembly.
pub mod walker;

/// Whitespace minification rules.
pub mod whitespace;

/// Character encoding detection for byte input.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::finish;
pub use options::Options;

/// Extracts the text of the whole document using default options.
///
/// # Example
///
/// ```rust
/// use strip_tags::extract;
///
/// assert_eq!(extract("Hello <b>World</b>")?, "Hello World");
/// # Ok::<(), strip_tags::Error>(())
/// ```
pub fn extract(html: &str) -> Result<String> {
    extract_with_options(html, &Options::default())
}

/// Extracts text from an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidSelector`] if any selector or remove selector
/// cannot be parsed. No partial output is produced.
///
/// # Example
///
/// ```rust
/// use strip_tags::{extract_with_options, Options};
///
/// let html = "Ignore<p>First</p><p>Second</p>";
/// let options = Options {
///     selectors: vec!["p".to_string()],
///     first: true,
///     ..Options::default()
/// };
/// assert_eq!(extract_with_options(html, &options)?, "First");
/// # Ok::<(), strip_tags::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<String> {
    extract::extract_text(html, options)
}

/// Extracts text from HTML bytes with automatic encoding detection.
///
/// The encoding is taken from a byte order mark, `<meta charset>` or
/// `<meta http-equiv="Content-Type">`, defaulting to UTF-8. Invalid
/// sequences are replaced with U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use strip_tags::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert_eq!(extract_bytes(html)?, "Caf\u{e9}");
/// # Ok::<(), strip_tags::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<String> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts text from HTML bytes with custom options and automatic encoding
/// detection.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<String> {
    let html = encoding::decode(html);
    extract_with_options(&html, options)
}
