// tests/collect.rs
// Collector pipeline against a canned profile — no live network.

use pubsite::error::{Error, Result};
use pubsite::model::Bib;
use pubsite::scholar::{ProfileSource, PubSummary, collect};

/// Canned two-phase source: a fixed listing plus one Bib per title.
struct CannedProfile {
    rows: Vec<(PubSummary, Bib)>,
    fail_detail_for: Option<String>,
}

impl CannedProfile {
    fn new(rows: Vec<(PubSummary, Bib)>) -> Self {
        Self { rows, fail_detail_for: None }
    }
}

fn summary(title: &str, year: Option<&str>) -> PubSummary {
    PubSummary {
        title: title.into(),
        detail_path: format!("/citations?view_op=view_citation&citation_for_view=X:{title}"),
        year: year.map(String::from),
    }
}

fn bib(title: &str, authors: &[&str], year: Option<&str>) -> Bib {
    Bib {
        title: title.into(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        year: year.map(String::from),
        link: format!("https://doi.example/{title}"),
        ..Default::default()
    }
}

impl ProfileSource for CannedProfile {
    fn author_profile(&self, author_id: &str) -> Result<Vec<PubSummary>> {
        if author_id == "UNKNOWN" {
            return Err(Error::Lookup {
                id: author_id.into(),
                reason: "no profile page for this id".into(),
            });
        }
        Ok(self.rows.iter().map(|(s, _)| s.clone()).collect())
    }

    fn publication_detail(&self, summary: &PubSummary) -> Result<Bib> {
        if self.fail_detail_for.as_deref() == Some(&summary.title) {
            return Err(Error::Fetch {
                title: summary.title.clone(),
                reason: "503".into(),
            });
        }
        self.rows
            .iter()
            .find(|(s, _)| s.title == summary.title)
            .map(|(_, b)| b.clone())
            .ok_or_else(|| Error::Fetch {
                title: summary.title.clone(),
                reason: "not in fixture".into(),
            })
    }
}

#[test]
fn collects_one_record_per_listing_row() {
    let source = CannedProfile::new(vec![
        (summary("P1", Some("2021")), bib("P1", &["A One"], Some("2021"))),
        (summary("P2", Some("2023")), bib("P2", &["A One", "B Two"], Some("2023"))),
        (summary("P3", None), bib("P3", &["C Three"], None)),
    ]);

    let pubs = collect(&source, "GOOD", None).unwrap();
    assert_eq!(pubs.len(), 3);
    for p in &pubs {
        // All six fields present; optional ones may be empty/null.
        assert!(!p.title.is_empty());
        assert!(!p.authors.is_empty());
        assert!(!p.venue.is_empty());
        assert!(!p.citation.is_empty());
    }
}

#[test]
fn records_come_out_newest_first() {
    let source = CannedProfile::new(vec![
        (summary("oldest", Some("2019")), bib("oldest", &["A"], Some("2019"))),
        (summary("tie-a", Some("2022")), bib("tie-a", &["A"], Some("2022"))),
        (summary("tie-b", Some("2022")), bib("tie-b", &["A"], Some("2022"))),
        (summary("newest", Some("2024")), bib("newest", &["A"], Some("2024"))),
        (summary("undated", None), bib("undated", &["A"], None)),
    ]);

    let pubs = collect(&source, "GOOD", None).unwrap();
    let titles: Vec<&str> = pubs.iter().map(|p| p.title.as_str()).collect();
    // Descending by the textual year; ties keep listing order; no year last.
    assert_eq!(titles, ["newest", "tie-a", "tie-b", "oldest", "undated"]);
}

#[test]
fn authors_blob_uses_the_and_token() {
    let source = CannedProfile::new(vec![(
        summary("P", Some("2023")),
        bib("P", &["X Y", "Ahmed H Elsayed"], Some("2023")),
    )]);

    let pubs = collect(&source, "GOOD", None).unwrap();
    assert_eq!(pubs[0].authors, "X Y and Ahmed H Elsayed");
    assert_eq!(pubs[0].citation, "X Y and Ahmed H Elsayed (2023). P. ");
}

#[test]
fn unknown_author_is_a_lookup_error() {
    let source = CannedProfile::new(vec![]);
    let err = collect(&source, "UNKNOWN", None).unwrap_err();
    assert!(matches!(err, Error::Lookup { .. }));
    assert!(err.to_string().contains("UNKNOWN"));
}

#[test]
fn one_failed_detail_fetch_aborts_the_run() {
    let mut source = CannedProfile::new(vec![
        (summary("fine", Some("2021")), bib("fine", &["A"], Some("2021"))),
        (summary("broken", Some("2020")), bib("broken", &["A"], Some("2020"))),
    ]);
    source.fail_detail_for = Some("broken".into());

    let err = collect(&source, "GOOD", None).unwrap_err();
    assert!(matches!(err, Error::Fetch { .. }));
    assert!(err.to_string().contains("broken"));
}
