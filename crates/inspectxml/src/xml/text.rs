//! Text content normalization

/// Entity substitutions, applied in this order. `&amp;` comes last so a
/// decoded `&` is never read as the start of another entity.
const ENTITIES: [(&str, &str); 6] = [
    ("&gt;", ">"),
    ("&lt;", "<"),
    ("&quot;", "\""),
    ("&#13;", "\r"),
    ("&#10;", "\n"),
    ("&amp;", "&"),
];

/// Normalize the raw text between an open tag and its close tag.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`. Each line is trimmed, blank lines at either end are dropped, the rest are
/// joined with `\n` and entities are decoded. Blank lines between two
/// non-blank lines are kept.
pub fn normalize_content(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n");
    let lines: Vec<&str> = unified.split(['\r', '\n']).map(str::trim).collect();
    let joined = match (
        lines.iter().position(|l| !l.is_empty()),
        lines.iter().rposition(|l| !l.is_empty()),
    ) {
        (Some(first), Some(last)) => lines.get(first..=last).unwrap_or_default().join("\n"),
        _ => String::new(),
    };
    decode_entities(&joined)
}

/// Replace the six supported entities
pub fn decode_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_lines_and_outer_blank_lines() {
        assert_eq!(
            normalize_content("\n\n   first  \n  second\n\n  \n"),
            "first\nsecond"
        );
    }

    #[test]
    fn test_keeps_interior_blank_lines() {
        assert_eq!(
            normalize_content("  line one  \n\n   \nline two  "),
            "line one\n\n\nline two"
        );
    }

    #[test]
    fn test_blank_only() {
        assert_eq!(normalize_content(""), "");
        assert_eq!(normalize_content(" \n\t\n "), "");
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(normalize_content("a \r\n b\r\n"), "a\nb");
    }

    #[test]
    fn test_lone_cr_lines() {
        assert_eq!(normalize_content("  a  \r  b  "), "a\nb");
        assert_eq!(normalize_content("\r a \r\r b \n c \r\n d \r"), "a\n\nb\nc\nd");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("a &gt; b &lt; c &quot;d&quot;&#13;&#10;"),
            "a > b < c \"d\"\r\n"
        );
    }

    #[test]
    fn test_amp_decoded_last() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_unknown_entities_untouched() {
        assert_eq!(decode_entities("&apos; &#65;"), "&apos; &#65;");
    }
}
