// src/core/sanitize.rs

/// Decode the handful of entities Scholar actually emits in titles,
/// author lists, and hrefs. `&amp;` last so it can't create new entities.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_decode_in_safe_order() {
        assert_eq!(normalize_entities("A &amp; B&#39;s &lt;paper&gt;"), "A & B's <paper>");
        // &amp;lt; must decode to the literal "&lt;", not to "<".
        assert_eq!(normalize_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  a\n\t b  c "), "a b c");
    }
}
