//! Fetching scripture chapters to quote in an ata.
//!
//! This is a data source for the layout engine and never fails past its own
//! boundary: any problem is logged and reported as [None].

use log::{error, info};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://openscriptureapi.org/api/v1";
pub const DEFAULT_LANGUAGE: &str = "por";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{url} answered with HTTP {status}")]
    /// The server answered, but not with a success status
    Http {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("connection error: {0}")]
    /// The request never got an answer, or the answer could not be read
    Connection(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Book {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Verse {
    pub text: String,
    #[serde(rename = "footNotes")]
    pub footnotes: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Chapter {
    /// What the book calls its chapters, e.g. "Capítulo" or "Seção"
    pub delineation: Option<String>,
    pub number: Option<u32>,
    pub summary: Option<String>,
    pub verses: Vec<Verse>,
}

/// A chapter with all of its verses
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChapterResponse {
    pub book: Book,
    pub chapter: Chapter,
}

impl ChapterResponse {
    /// Heading line, e.g. `1 Néfi, Capítulo 3`
    pub fn heading(&self, book_id: &str, chapter_number: u32) -> String {
        let title = self
            .book
            .title
            .clone()
            .unwrap_or_else(|| book_id.to_uppercase());
        let delineation = self.chapter.delineation.as_deref().unwrap_or("Capítulo");
        let number = self.chapter.number.unwrap_or(chapter_number);
        format!("{title}, {delineation} {number}")
    }

    /// The verses as numbered lines, one per verse, ready to be used as the text of
    /// an ata block. Verses are numbered by position.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (i, verse) in self.chapter.verses.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            let _ = write!(text, "V.{} - {}", i + 1, verse.text);
        }
        text
    }
}

/// A blocking client for the scripture API
#[derive(Debug, Clone)]
pub struct ScriptureClient {
    client: reqwest::blocking::Client,
    base_url: String,
    language: String,
}

impl Default for ScriptureClient {
    fn default() -> Self {
        ScriptureClient::new(DEFAULT_BASE_URL)
    }
}

impl ScriptureClient {
    pub fn new<S: ToString>(base_url: S) -> ScriptureClient {
        ScriptureClient {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.to_string().trim_end_matches('/').to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_language<S: ToString>(self, language: S) -> ScriptureClient {
        ScriptureClient {
            language: language.to_string(),
            ..self
        }
    }

    pub fn chapter_url(&self, book_id: &str, chapter_number: u32) -> String {
        format!("{}/book/{book_id}/{chapter_number}", self.base_url)
    }

    fn query(&self) -> [(&'static str, &str); 4] {
        [
            ("lang", self.language.as_str()),
            ("includeExtras.volumeInfo", "true"),
            ("includeExtras.bookInfo", "true"),
            ("includeExtras.footnotes", "true"),
        ]
    }

    /// Fetch a chapter, distinguishing error statuses from connection failures
    pub fn try_fetch_chapter(
        &self,
        book_id: &str,
        chapter_number: u32,
    ) -> Result<ChapterResponse, FetchError> {
        let url = self.chapter_url(book_id, chapter_number);
        info!(
            "fetching {} {chapter_number} in {}",
            book_id.to_uppercase(),
            self.language.to_uppercase()
        );

        let response = self.client.get(&url).query(&self.query()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: response.url().to_string(),
                status,
            });
        }
        Ok(response.json()?)
    }

    /// Fetch a chapter, e.g. `fetch_chapter("1nephi", 3)`. Failures are logged.
    pub fn fetch_chapter(&self, book_id: &str, chapter_number: u32) -> Option<ChapterResponse> {
        match self.try_fetch_chapter(book_id, chapter_number) {
            Ok(chapter) => {
                info!(
                    "fetched {} with {} verses",
                    chapter.heading(book_id, chapter_number),
                    chapter.chapter.verses.len()
                );
                Some(chapter)
            }
            Err(e @ FetchError::Http { .. }) => {
                error!("HTTP error fetching chapter: {e}");
                None
            }
            Err(e @ FetchError::Connection(_)) => {
                error!("failed to fetch chapter: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response() -> ChapterResponse {
        serde_json::from_value(json!({
            "book": {"title": "1 Néfi"},
            "chapter": {
                "delineation": "Capítulo",
                "number": 3,
                "summary": "Néfi e seus irmãos voltam a Jerusalém",
                "verses": [
                    {"text": "E aconteceu que eu, Néfi, voltei", "footNotes": []},
                    {"text": "E eis que ele me falou"}
                ]
            },
            "volume": {"title": "Livro de Mórmon"}
        }))
        .expect("chapter responses deserialize")
    }

    #[test]
    fn test_to_text_numbers_verses() {
        assert_eq!(
            response().to_text(),
            "V.1 - E aconteceu que eu, Néfi, voltei\nV.2 - E eis que ele me falou"
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(response().heading("1nephi", 3), "1 Néfi, Capítulo 3");
        assert_eq!(
            ChapterResponse::default().heading("1nephi", 3),
            "1NEPHI, Capítulo 3"
        );
    }

    #[test]
    fn test_missing_fields_are_tolerated() {
        let response: ChapterResponse =
            serde_json::from_value(json!({})).expect("empty responses deserialize");
        assert_eq!(response.to_text(), "");
    }

    #[test]
    fn test_chapter_url() {
        let client = ScriptureClient::new("https://example.org/api/v1/").with_language("eng");
        assert_eq!(
            client.chapter_url("alma", 32),
            "https://example.org/api/v1/book/alma/32"
        );
        assert_eq!(client.query()[0], ("lang", "eng"));
    }

    #[test]
    fn test_connection_failure_is_none() {
        let client = ScriptureClient::new("http://127.0.0.1:9");
        assert!(client.fetch_chapter("1nephi", 3).is_none());
    }
}
