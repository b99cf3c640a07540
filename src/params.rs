// src/params.rs

// Scholar profile to track.
pub const SCHOLAR_ID: &str = "JZ3FAx8AAAAJ";

// Net config
pub const SCHOLAR_HOST: &str = "https://scholar.google.com";
pub const PAGE_SIZE: usize = 100;
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 750; // be polite
pub const JITTER_MS: u64 = 250; // extra 0..250 ms

// Pipeline files
pub const DATA_FILE: &str = "_data/publications.yml";
pub const PAGE_FILE: &str = "publications.html";

// Splice region in the publications page. The renderer owns everything
// strictly between these two literal markers.
pub const OPEN_MARKER: &str = r#"<div id="publications-container">"#;
pub const CLOSE_MARKER: &str = "</section>";

// Name to emphasize in rendered author lists.
pub const SITE_AUTHOR: &str = "Ahmed H Elsayed";
