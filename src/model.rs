// src/model.rs
use serde::{Deserialize, Serialize};

/// Separator token between names in the `authors` blob.
pub const AUTHOR_SEP: &str = " and ";

/// Venue placeholder when no journal, conference, or publisher is known.
pub const VENUE_PLACEHOLDER: &str = "N/A";

/// One publication record, exactly as it appears in `_data/publications.yml`.
///
/// Field order here is the YAML key order; keep it stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    /// Names joined with ` and `.
    pub authors: String,
    /// Textual year; only a sort key and display text, never validated.
    pub year: Option<String>,
    pub venue: String,
    /// Outbound URL; may be empty.
    pub link: String,
    /// Precomputed display string. Redundant with the other fields and
    /// never re-derived by the renderer.
    pub citation: String,
}

impl Publication {
    fn year_key(&self) -> &str {
        self.year.as_deref().unwrap_or("")
    }
}

/// Raw bibliographic fields pulled from one publication detail page,
/// before normalization into a [`Publication`].
#[derive(Debug, Clone, Default)]
pub struct Bib {
    pub title: String,
    pub authors: Vec<String>,
    pub year: Option<String>,
    pub journal: Option<String>,
    pub conference: Option<String>,
    pub publisher: Option<String>,
    pub link: String,
}

impl Bib {
    /// First of journal, conference, publisher that is present; all three
    /// are tried in that order and the first one wins.
    pub fn venue(&self) -> String {
        self.journal
            .as_deref()
            .or(self.conference.as_deref())
            .or(self.publisher.as_deref())
            .unwrap_or(VENUE_PLACEHOLDER)
            .to_string()
    }

    // The citation's venue slot is journal-or-conference only; the
    // publisher never appears in the citation string.
    fn citation_venue(&self) -> &str {
        self.journal
            .as_deref()
            .or(self.conference.as_deref())
            .unwrap_or("")
    }

    /// Flatten into a [`Publication`]. Missing pieces degrade to empty
    /// strings or the venue placeholder; this never fails.
    pub fn into_publication(self) -> Publication {
        let authors = self.authors.join(AUTHOR_SEP);
        let venue = self.venue();
        let citation = format!(
            "{} ({}). {}. {}",
            authors,
            self.year.as_deref().unwrap_or(""),
            self.title,
            self.citation_venue(),
        );
        Publication {
            title: self.title,
            authors,
            year: self.year,
            venue,
            link: self.link,
            citation,
        }
    }
}

/// Order records for display: descending by the *textual* year, stable
/// for ties. Lexicographic comparison is kept on purpose — it is only
/// correct for same-length numeric years, which is what the profile
/// data contains. Records without a year sort last.
pub fn sort_newest_first(pubs: &mut [Publication]) {
    pubs.sort_by(|a, b| b.year_key().cmp(a.year_key()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bib(title: &str) -> Bib {
        Bib {
            title: s!(title),
            authors: vec![s!("A One"), s!("B Two")],
            ..Default::default()
        }
    }

    #[test]
    fn venue_resolution_order() {
        let mut b = bib("t");
        b.journal = Some(s!("J"));
        b.conference = Some(s!("C"));
        b.publisher = Some(s!("P"));
        assert_eq!(b.venue(), "J");

        b.journal = None;
        assert_eq!(b.venue(), "C");

        b.conference = None;
        assert_eq!(b.venue(), "P");

        b.publisher = None;
        assert_eq!(b.venue(), VENUE_PLACEHOLDER);
    }

    #[test]
    fn citation_concatenates_with_empty_fallbacks() {
        let mut b = bib("A Paper");
        b.year = Some(s!("2023"));
        b.journal = Some(s!("Some Journal"));
        let p = b.into_publication();
        assert_eq!(p.citation, "A One and B Two (2023). A Paper. Some Journal");

        // No year, no journal/conference: empty slots, never an error.
        let p = bib("A Paper").into_publication();
        assert_eq!(p.citation, "A One and B Two (). A Paper. ");
    }

    #[test]
    fn citation_skips_publisher() {
        let mut b = bib("A Paper");
        b.publisher = Some(s!("Pub House"));
        let p = b.into_publication();
        assert_eq!(p.venue, "Pub House");
        assert!(!p.citation.contains("Pub House"));
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mk = |title: &str, year: Option<&str>| Bib {
            title: s!(title),
            year: year.map(String::from),
            ..Default::default()
        }
        .into_publication();

        let mut pubs = vec![
            mk("old", Some("2021")),
            mk("new-first", Some("2023")),
            mk("new-second", Some("2023")),
            mk("undated", None),
        ];
        sort_newest_first(&mut pubs);

        let titles: Vec<&str> = pubs.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["new-first", "new-second", "old", "undated"]);
    }
}
