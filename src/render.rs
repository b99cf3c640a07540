// src/render.rs
// Renderer: Publication records → HTML blocks → splice into the page.
//
// The page region between OPEN_MARKER and CLOSE_MARKER is owned entirely
// by this module and fully replaced on every run; everything outside it
// is preserved byte-for-byte.

use std::{fs, path::Path};

use log::debug;

use crate::core::sanitize::normalize_ws;
use crate::error::{Error, Result};
use crate::model::Publication;
use crate::params::{CLOSE_MARKER, OPEN_MARKER, SITE_AUTHOR};

/// The fixed lookup tables the renderer needs, passed in explicitly so
/// tests can substitute fixtures.
pub struct RenderConfig {
    /// Name to wrap in `<strong>` wherever it appears in an author list.
    /// Matched with and without the middle-initial period.
    pub emphasize: String,
    /// Exact publication title → image path. No fuzzy matching: a title
    /// off by one character gets no image.
    pub images: Vec<(String, String)>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            emphasize: s!(SITE_AUTHOR),
            images: vec![
                (
                    s!("Design and control of soft biomimetic pangasius fish robot using fin ray effect and reinforcement learning"),
                    s!("images/publications/pangasius_paper.png"),
                ),
                (
                    s!("UJI-Butler: A Symbolic/Non-symbolic Robotic System that Learns Through Multi-modal Interaction"),
                    s!("images/publications/uji_butler.png"),
                ),
                (
                    s!("Interactive Simulator Framework for XAI Applications in Aquatic Environments"),
                    s!("images/publications/Interactive_Simulator_Framework.png"),
                ),
                (
                    s!("Human-Robot Collaboration System Setup for Weed Harvesting Scenarios in Aquatic Lakes"),
                    s!("images/publications/Human-Robot_Collaboration.jpg"),
                ),
            ],
        }
    }
}

impl RenderConfig {
    fn image_for(&self, title: &str) -> Option<&str> {
        self.images
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, p)| p.as_str())
    }
}

/* ---------------- Author formatting ---------------- */

/// "First M Last" → "First M. Last": single-letter tokens gain a period,
/// so both spellings of the site author match.
fn dotted(name: &str) -> String {
    name.split_whitespace()
        .map(|tok| {
            if tok.len() == 1 && tok.chars().all(|c| c.is_ascii_alphabetic()) {
                format!("{tok}.")
            } else {
                s!(tok)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split an author blob on the ` and ` token, whitespace-tolerant.
fn split_authors(blob: &str) -> Vec<String> {
    normalize_ws(blob)
        .split(" and ")
        .map(str::to_string)
        .filter(|n| !n.is_empty())
        .collect()
}

/// Comma list with a final "and": `A`, `A and B`, `A, B, and C`.
/// Any name containing `emphasize` (dotted or not) is wrapped in
/// `<strong>`.
pub fn format_authors(blob: &str, emphasize: &str) -> String {
    let dot = dotted(emphasize);
    let names: Vec<String> = split_authors(blob)
        .into_iter()
        .map(|n| {
            if n.contains(emphasize) || n.contains(&dot) {
                format!("<strong>{n}</strong>")
            } else {
                n
            }
        })
        .collect();

    match names.as_slice() {
        [] => s!(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

/* ---------------- Snippet assembly ---------------- */

/// One self-contained markup block per record. Indentation matches the
/// page's hand-written column so the spliced region reads naturally.
pub fn publication_block(p: &Publication, cfg: &RenderConfig) -> String {
    let image_html = cfg
        .image_for(&p.title)
        .map(|src| format!(r#"<img class="publication-img" src="{src}" alt="{title}">"#, title = p.title))
        .unwrap_or_default();
    let authors = format_authors(&p.authors, &cfg.emphasize);
    let year = p.year.as_deref().unwrap_or("");

    format!(
        r#"                <div class="publication fade-in">
                    <h3 class="publication-title">{title}</h3>
                    <div class="publication-details">
                        {image_html}
                        <div class="citation">
                            <p>{authors} ({year}).</p>
                            <p><i>{venue}</i></p>
                            <p><a href="{link}" target="_blank" style="color: var(--text-color); font-weight: bold;">View Publication →</a></p>
                        </div>
                    </div>
                </div>
"#,
        title = p.title,
        venue = p.venue,
        link = p.link,
    )
}

/// Concatenate blocks in input order. The record order in the data file
/// is the display order; nothing is re-sorted here.
pub fn render_fragment(pubs: &[Publication], cfg: &RenderConfig) -> String {
    pubs.iter().map(|p| publication_block(p, cfg)).collect()
}

/* ---------------- Splice ---------------- */

/// Byte range strictly between the opening marker and the next closing
/// marker after it, or None when either is missing.
pub fn locate_region(doc: &str) -> Option<(usize, usize)> {
    let start = doc.find(OPEN_MARKER)? + OPEN_MARKER.len();
    let end = doc[start..].find(CLOSE_MARKER)? + start;
    Some((start, end))
}

/// Replace the marker-delimited region with `fragment`. The opening
/// marker and everything from the closing marker onward are preserved
/// byte-for-byte; the closing marker is re-indented to its original
/// column.
pub fn splice(doc: &str, fragment: &str) -> Result<String> {
    let Some((start, end)) = locate_region(doc) else {
        let marker = if doc.contains(OPEN_MARKER) {
            CLOSE_MARKER
        } else {
            OPEN_MARKER
        };
        return Err(Error::MarkerNotFound { marker });
    };
    debug!("splice region: bytes {start}..{end}");

    let mut out = String::with_capacity(doc.len() + fragment.len());
    out.push_str(&doc[..start]);
    out.push('\n');
    out.push_str(fragment);
    out.push_str("            ");
    out.push_str(&doc[end..]);
    Ok(out)
}

/// Whole-document read–transform–write. On any error the document on
/// disk is left byte-identical; the write only happens after the splice
/// has succeeded.
pub fn update_page(page: &Path, pubs: &[Publication], cfg: &RenderConfig) -> Result<()> {
    let doc = fs::read_to_string(page)?;
    let fragment = render_fragment(pubs, cfg);
    let updated = splice(&doc, &fragment)?;
    fs::write(page, updated)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_adds_period_to_initials_only() {
        assert_eq!(dotted("Ahmed H Elsayed"), "Ahmed H. Elsayed");
        assert_eq!(dotted("Plain Name"), "Plain Name");
    }

    #[test]
    fn split_is_whitespace_tolerant() {
        assert_eq!(split_authors("A One  and  B Two"), vec!["A One", "B Two"]);
        // "and" inside a name must not split it.
        assert_eq!(split_authors("Alexander Grand"), vec!["Alexander Grand"]);
    }

    #[test]
    fn marker_absence_is_reported_not_spliced() {
        let err = splice("<html><body></body></html>", "x").unwrap_err();
        assert!(matches!(err, Error::MarkerNotFound { marker: OPEN_MARKER }));

        let doc = format!("<section>{OPEN_MARKER}\nold\n");
        let err = splice(&doc, "x").unwrap_err();
        assert!(matches!(err, Error::MarkerNotFound { marker: CLOSE_MARKER }));
    }
}
