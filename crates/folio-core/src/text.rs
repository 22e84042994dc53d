//! Plain-text helpers for feed markup
//!
//! Tag stripping is a pattern replace, not an HTML parse. Entity decoding runs
//! after stripping, so an entity split across a removed tag is left as-is.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum description length (in characters) before truncation
pub const DESCRIPTION_MAX_CHARS: usize = 150;

/// Marker appended to truncated descriptions
pub const ELLIPSIS: &str = "...";

/// Reading speed used by [`read_time_minutes`]
pub const WORDS_PER_MINUTE: usize = 200;

/// Entities decoded by [`decode_entities`], applied in this order
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
];

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn img_src_pattern() -> &'static Regex {
    static IMG_SRC: OnceLock<Regex> = OnceLock::new();
    IMG_SRC.get_or_init(|| {
        Regex::new(r#"<img[^>]+src="([^">]+)""#).expect("img pattern is valid")
    })
}

fn whitespace_pattern() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Remove everything that looks like a markup tag
pub fn strip_tags(html: &str) -> String {
    tag_pattern().replace_all(html, "").into_owned()
}

/// Decode the small set of entities feeds commonly emit
pub fn decode_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

/// Strip markup, decode entities, trim, and cap the length.
///
/// Text longer than [`DESCRIPTION_MAX_CHARS`] characters keeps its first
/// 150 characters followed by [`ELLIPSIS`], so the result never exceeds 153.
pub fn clean_description(html: &str) -> String {
    let stripped = strip_tags(html);
    let decoded = decode_entities(&stripped);
    let text = decoded.trim();

    match text.char_indices().nth(DESCRIPTION_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// First `src` of an `<img>` tag in the given markup
pub fn extract_first_image(html: &str) -> Option<&str> {
    img_src_pattern()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Approximate word count: the number of pieces left after splitting on
/// whitespace runs. Leading or trailing whitespace and the empty string each
/// contribute an empty piece.
pub fn word_count(text: &str) -> usize {
    whitespace_pattern().split(text).count()
}

/// Estimated minutes to read, rounded up. Never less than 1.
pub fn read_time_minutes(content: &str) -> u32 {
    let words = word_count(&strip_tags(content));
    words.div_ceil(WORDS_PER_MINUTE) as u32
}
