//! Collection envelope parsing
//!
//! The [`PageParser`] is the stored strategy a paginated response keeps
//! between pages: the per-item parser plus the envelope field names.

use crate::decode::{self, Parser};
use crate::error::{Error, Result};
use crate::request::RequestDescriptor;
use crate::types::{JsonValue, OptionStringExt};
use tracing::warn;
use url::Url;

/// Field names of a collection envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Path to the item array
    pub items_path: String,
    /// Path to the next page URL
    pub next_path: String,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            items_path: "collection".to_string(),
            next_path: "next_href".to_string(),
        }
    }
}

impl Envelope {
    /// Create an envelope with custom field paths
    pub fn new(items_path: impl Into<String>, next_path: impl Into<String>) -> Self {
        Self {
            items_path: items_path.into(),
            next_path: next_path.into(),
        }
    }

    /// Locate the next page URL
    ///
    /// Absent, null, empty or unparseable values mean there is no next page.
    pub fn next_page(&self, body: &JsonValue) -> Option<Url> {
        let href = extract_path(body, &self.next_path)
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .none_if_empty()?;

        match Url::parse(&href) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Ignoring malformed next page locator '{href}': {e}");
                None
            }
        }
    }
}

/// One decoded page and the locator of the following one
#[derive(Debug)]
pub struct Page<T> {
    /// Items of this page, or the reason they could not be decoded
    pub items: Result<Vec<T>>,
    /// Next page locator
    pub next: Option<Url>,
}

/// Parses collection envelopes with a fixed item parser
pub struct PageParser<T> {
    items: Parser<Vec<T>>,
    envelope: Envelope,
}

impl<T: 'static> PageParser<T> {
    /// Create a page parser for the default envelope
    pub fn new(item: Parser<T>) -> Self {
        Self::with_envelope(item, Envelope::default())
    }

    /// Create a page parser for a custom envelope
    pub fn with_envelope(item: Parser<T>, envelope: Envelope) -> Self {
        Self {
            items: decode::items(item),
            envelope,
        }
    }

    /// Decode one envelope
    ///
    /// The envelope itself never fails to parse; a missing or malformed item
    /// array fails the page's items instead.
    pub fn parse(&self, body: &JsonValue) -> Page<T> {
        let items = match extract_path(body, &self.envelope.items_path) {
            Some(value) => self.items.parse(value),
            None => Err(Error::decode(format!(
                "missing field `{}`",
                self.envelope.items_path
            ))),
        };

        Page {
            items,
            next: self.envelope.next_page(body),
        }
    }

    /// The page parser as a descriptor parse function
    pub fn parser(&self) -> Parser<Page<T>> {
        let this = self.clone();
        Parser::new(move |body| Ok(this.parse(body)))
    }

    /// Descriptor fetching the page at `url`
    ///
    /// Next page locators already carry every query parameter the API needs.
    pub fn descriptor(&self, url: Url) -> RequestDescriptor<Page<T>> {
        RequestDescriptor::get(url, self.parser())
    }
}

impl<T> Clone for PageParser<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            envelope: self.envelope.clone(),
        }
    }
}

impl<T> std::fmt::Debug for PageParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageParser")
            .field("envelope", &self.envelope)
            .finish_non_exhaustive()
    }
}

/// Follow a simple dotted path like "$.data.collection" or "collection"
fn extract_path<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            JsonValue::Object(map) => current = map.get(part)?,
            _ => return None,
        }
    }

    Some(current)
}
