// src/core/html.rs
// Low-level HTML string helpers, tailored to the Scholar page structure.
// Deliberately naive: both the profile markup and the page splice are
// literal string-search contracts. Searches are ASCII-case-insensitive
// on tag and attribute names.

/// ASCII-lowercase copy used for case-insensitive searching. Non-ASCII
/// chars pass through unchanged, so byte offsets stay valid.
fn fold(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte offset of `pat` in `s` at or after `from`, case-insensitive.
pub fn find_ci(s: &str, pat: &str, from: usize) -> Option<usize> {
    let hay = fold(s.get(from..)?);
    hay.find(&fold(pat)).map(|i| i + from)
}

/// The inside of the first `open_pat … close_pat` pair: everything after
/// the `>` that ends the opening tag, up to the closing pattern.
///
/// Example:
/// ```ignore
/// let cell = slice_between_ci(row, r#"<td class="gsc_a_y""#, "</td>");
/// ```
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let o = find_ci(s, open_pat, 0)?;
    let after = s[o..].find('>')? + o + 1;
    let c = find_ci(s, close_pat, after)?;
    Some(&s[after..c])
}

/// Next complete tag block at or after `from`: from the start of the
/// opening tag to the end of the closing tag.
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_ci(s, open, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end = find_ci(s, close, open_end)? + close.len();
    Some((start, end))
}

/// Given a complete block like `<td ...>INNER</td>`, return INNER without
/// the wrapping tags (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of `name="…"` inside the opening tag of `block`. Handles
/// double-quoted, single-quoted, and bare values.
pub fn attr_value(block: &str, name: &str) -> Option<String> {
    let open_end = block.find('>')?;
    let tag = &block[..open_end];
    let needle = format!("{}=", fold(name));
    let at = find_ci(tag, &needle, 0)? + needle.len();
    let rest = &tag[at..];
    match rest.chars().next()? {
        q @ ('"' | '\'') => {
            let inner = &rest[1..];
            let end = inner.find(q)?;
            Some(inner[..end].to_string())
        }
        _ => {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(rest.len());
            Some(rest[..end].to_string())
        }
    }
}

/// Drop tags, keep text, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
