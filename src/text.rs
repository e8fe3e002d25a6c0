//! Text normalization for extracted string values.
//!
//! Shared-string items in the wild often carry pre-escaped HTML: entity
//! references, markup fragments, hard line breaks. The normalizer reduces
//! them to flat display text before they are stored in the table.

/// Normalize an extracted text value.
///
/// Decodes the five standard HTML entities, strips any remaining
/// angle-bracket tags, and collapses every whitespace run to a single
/// space with the ends trimmed.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Entity decode order matters: &amp; after &lt;/&gt; so that
    // double-escaped text decodes one level, matching a plain
    // sequential replace.
    let decoded = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let stripped = strip_tags(&decoded);

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove angle-bracket-delimited tags.
///
/// A tag is a `<`, at least one non-`>` character, then `>`. An empty `<>`
/// or an unterminated `<` is kept literally.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        match rest[start + 1..].find('>') {
            // "<>" is not a tag
            Some(0) => {
                out.push_str(&rest[..start + 2]);
                rest = &rest[start + 2..];
            }
            Some(gap) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + 2 + gap..];
            }
            None => {
                out.push_str(rest);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_decode() {
        assert_eq!(normalize("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(normalize("&quot;quoted&quot;"), "\"quoted\"");
        assert_eq!(normalize("it&#39;s"), "it's");
    }

    #[test]
    fn test_decoded_angle_brackets_become_tags() {
        // &lt;b&gt; decodes to <b>, which the tag stripper then removes.
        assert_eq!(normalize("&lt;b&gt;bold&lt;/b&gt;"), "bold");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(normalize("<p>Hello <em>world</em></p>"), "Hello world");
        assert_eq!(normalize("a <br/> b"), "a b");
    }

    #[test]
    fn test_non_tags_survive() {
        assert_eq!(normalize("1 <> 2"), "1 <> 2");
        assert_eq!(normalize("unterminated < here"), "unterminated < here");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("  a\t\tb\n\nc  "), "a b c");
        assert_eq!(normalize("\n\t "), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }
}
