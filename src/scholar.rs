// src/scholar.rs
// Collector: turn a Google Scholar author profile into Publication records.
//
// Two-phase fetch, same shape as the site itself: the profile listing has
// one row per publication (title, year, detail link), and the full
// bibliography only exists on the per-publication detail page.
// `ProfileSource` is the seam between the pipeline and the live site;
// tests plug in a canned profile instead.

use std::{thread, time::Duration};

use log::debug;
use reqwest::blocking::Client;

use crate::core::html::{
    attr_value, inner_after_open_tag, next_tag_block_ci, slice_between_ci, strip_tags,
};
use crate::core::net;
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::error::{Error, Result};
use crate::model::{Bib, Publication, sort_newest_first};
use crate::params::{JITTER_MS, PAGE_SIZE, SCHOLAR_HOST};
use crate::progress::Progress;

/// One row of the profile listing. `detail_path` is host-relative.
#[derive(Debug, Clone)]
pub struct PubSummary {
    pub title: String,
    pub detail_path: String,
    pub year: Option<String>,
}

/// Where publication data comes from.
pub trait ProfileSource {
    /// Resolve the author id to its full publication listing.
    /// Must fail with [`Error::Lookup`] when the id has no profile.
    fn author_profile(&self, author_id: &str) -> Result<Vec<PubSummary>>;

    /// Fetch the full bibliography behind one listing row.
    fn publication_detail(&self, summary: &PubSummary) -> Result<Bib>;
}

/// Collect every publication of `author_id`: list, expand each entry,
/// normalize, and order newest-first. Nothing is written to disk here.
pub fn collect(
    source: &dyn ProfileSource,
    author_id: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Publication>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching publications for Scholar ID: {author_id}..."));
    }

    let summaries = source.author_profile(author_id)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(summaries.len());
    }

    let mut pubs = Vec::with_capacity(summaries.len());
    for summary in &summaries {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing: {}", summary.title));
        }
        let bib = source.publication_detail(summary)?;
        pubs.push(bib.into_publication());
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&summary.title);
        }
    }

    sort_newest_first(&mut pubs);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(pubs)
}

/* ---------------- Live source ---------------- */

/// The live scholar.google.com source.
pub struct ScholarWeb {
    client: Client,
    host: String,
    pause_ms: u64,
}

impl ScholarWeb {
    pub fn new(pause_ms: u64) -> reqwest::Result<Self> {
        Ok(Self {
            client: net::client()?,
            host: s!(SCHOLAR_HOST),
            pause_ms,
        })
    }

    /// Same, but against an arbitrary host (tests point this at fixtures).
    pub fn with_host(host: &str, pause_ms: u64) -> reqwest::Result<Self> {
        Ok(Self {
            client: net::client()?,
            host: s!(host),
            pause_ms,
        })
    }

    fn listing_url(&self, author_id: &str, cstart: usize) -> String {
        format!(
            "{}/citations?user={}&hl=en&cstart={}&pagesize={}",
            self.host, author_id, cstart, PAGE_SIZE
        )
    }

    fn pause(&self, seed: u64) {
        if self.pause_ms == 0 {
            return;
        }
        let jitter = seed % JITTER_MS.max(1);
        thread::sleep(Duration::from_millis(self.pause_ms + jitter));
    }
}

impl ProfileSource for ScholarWeb {
    fn author_profile(&self, author_id: &str) -> Result<Vec<PubSummary>> {
        let mut out = Vec::new();
        let mut cstart = 0usize;

        loop {
            let url = self.listing_url(author_id, cstart);
            let doc = net::http_get(&self.client, &url).map_err(|e| Error::Lookup {
                id: s!(author_id),
                reason: e.to_string(),
            })?;

            // A real profile always carries the author-name header.
            if cstart == 0 && !doc.contains(r#"id="gsc_prf_in""#) {
                return Err(Error::Lookup {
                    id: s!(author_id),
                    reason: s!("no profile page for this id"),
                });
            }

            let rows = parse_listing(&doc);
            let page_len = rows.len();
            debug!("listing page cstart={cstart}: {page_len} rows");
            out.extend(rows);

            // A short page is the last page.
            if page_len < PAGE_SIZE {
                break;
            }
            cstart += PAGE_SIZE;
            self.pause(cstart as u64);
        }

        Ok(out)
    }

    fn publication_detail(&self, summary: &PubSummary) -> Result<Bib> {
        self.pause(summary.title.len() as u64);
        let url = format!("{}{}", self.host, summary.detail_path);
        let doc = net::http_get(&self.client, &url).map_err(|e| Error::Fetch {
            title: summary.title.clone(),
            reason: e.to_string(),
        })?;
        Ok(parse_detail(&doc, summary))
    }
}

/* ---------------- Page parsing ---------------- */

/// Listing rows: `<tr class="gsc_a_tr">`, title and detail link in the
/// first anchor, year in the `gsc_a_y` cell (may be empty).
fn parse_listing(doc: &str) -> Vec<PubSummary> {
    let mut rows = Vec::new();
    let mut pos = 0usize;

    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, r#"<tr class="gsc_a_tr""#, "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        let Some((a_s, a_e)) = next_tag_block_ci(tr, "<a", "</a>", 0) else {
            continue;
        };
        let a = &tr[a_s..a_e];
        let title = strip_tags(normalize_entities(&inner_after_open_tag(a)));
        let Some(detail_path) = attr_value(a, "href").map(|h| normalize_entities(&h)) else {
            continue;
        };
        if title.is_empty() {
            continue;
        }

        let year = slice_between_ci(tr, r#"<td class="gsc_a_y""#, "</td>")
            .map(|c| strip_tags(normalize_entities(c)))
            .filter(|y| !y.is_empty());

        rows.push(PubSummary { title, detail_path, year });
    }

    rows
}

/// Detail page: title/link in the `gsc_oci_title_link` anchor, then
/// `gsc_oci_field` / `gsc_oci_value` pairs for the bibliography.
/// Lenient by design: anything missing degrades to the listing-row data.
fn parse_detail(doc: &str, summary: &PubSummary) -> Bib {
    let mut title = s!();
    let mut link = s!();

    if let Some((a_s, a_e)) = next_tag_block_ci(doc, r#"<a class="gsc_oci_title_link""#, "</a>", 0) {
        let a = &doc[a_s..a_e];
        title = strip_tags(normalize_entities(&inner_after_open_tag(a)));
        link = attr_value(a, "href")
            .map(|h| normalize_entities(&h))
            .unwrap_or_default();
    } else if let Some(t) = slice_between_ci(doc, r#"<div id="gsc_oci_title""#, "</div>") {
        title = strip_tags(normalize_entities(t));
    }
    if title.is_empty() {
        title = summary.title.clone();
    }

    let mut bib = Bib {
        title,
        link,
        year: summary.year.clone(),
        ..Default::default()
    };

    let mut pos = 0usize;
    while let Some((f_s, f_e)) =
        next_tag_block_ci(doc, r#"<div class="gsc_oci_field""#, "</div>", pos)
    {
        let field = strip_tags(inner_after_open_tag(&doc[f_s..f_e]));
        let Some((v_s, v_e)) =
            next_tag_block_ci(doc, r#"<div class="gsc_oci_value""#, "</div>", f_e)
        else {
            break;
        };
        let value = strip_tags(normalize_entities(&inner_after_open_tag(&doc[v_s..v_e])));
        pos = v_e;

        if value.is_empty() {
            continue;
        }
        match field.to_ascii_lowercase().as_str() {
            "authors" => bib.authors = split_names(&value),
            "publication date" => {
                if let Some(y) = year_of(&value) {
                    bib.year = Some(y);
                }
            }
            "journal" => bib.journal = Some(value),
            "conference" => bib.conference = Some(value),
            "publisher" => bib.publisher = Some(value),
            _ => {}
        }
    }

    bib
}

/// "A One, B Two, C Three" → individual names.
fn split_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(normalize_ws)
        .filter(|n| !n.is_empty())
        .collect()
}

/// Year component of a publication date like "2023/5/1" or "2023".
fn year_of(value: &str) -> Option<String> {
    let y = value.split('/').next().unwrap_or("").trim();
    (!y.is_empty()).then(|| s!(y))
}
