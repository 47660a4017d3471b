//! Syndication feed parsing.
//!
//! One pass over the document with `quick-xml`, collecting RSS 2.0 and
//! RSS 1.0 `<item>` elements as well as Atom `<entry>` elements. Element
//! names are compared by local name, so `dc:date` and `content:encoded` are
//! picked up without namespace bookkeeping.

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;

use crate::error::CollectError;

/// The raw fields of one feed entry, before date normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    /// Plain text; HTML tags stripped and whitespace collapsed.
    pub description: String,
    /// Unparsed timestamp from the first date-bearing element.
    pub published: Option<String>,
}

impl FeedEntry {
    /// The raw published timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::MissingField`] if the entry carried no date.
    pub fn published(&self) -> Result<&str, CollectError> {
        self.published
            .as_deref()
            .ok_or_else(|| CollectError::MissingField {
                field: "publication date",
                title: self.title.clone(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
    /// Lower rank wins: `pubDate`/`published` over `date` over `updated`.
    Published(u8),
}

impl Field {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"description" | b"summary" | b"content" | b"encoded" => Some(Field::Description),
            b"pubDate" | b"published" => Some(Field::Published(0)),
            b"date" => Some(Field::Published(1)),
            b"updated" => Some(Field::Published(2)),
            _ => None,
        }
    }
}

#[derive(Default)]
struct EntryBuilder {
    entry: FeedEntry,
    description_parts: Vec<String>,
    dates: Vec<(u8, String)>,
}

impl EntryBuilder {
    fn push_text(&mut self, field: Field, text: &str) {
        match field {
            Field::Title => self.entry.title.push_str(text),
            Field::Link => self.entry.link.push_str(text),
            Field::Description => self.description_parts.push(strip_html(text)),
            Field::Published(_) => {
                if let Some((_, value)) = self.dates.last_mut() {
                    value.push_str(text);
                }
            }
        }
    }

    fn open_field(&mut self, field: Field) {
        match field {
            // Element text replaces any href taken from an earlier `<atom:link/>`.
            Field::Link => self.entry.link.clear(),
            Field::Published(rank) => self.dates.push((rank, String::new())),
            Field::Title | Field::Description => {}
        }
    }

    fn finish(mut self) -> FeedEntry {
        self.entry.title = self.entry.title.trim().to_string();
        self.entry.link = self.entry.link.trim().to_string();
        self.entry.description = self
            .description_parts
            .iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        self.entry.published = self
            .dates
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, value)| value);
        self.entry
    }
}

/// HTML entities that feeds routinely leave undeclared.
fn resolve_html_entity(name: &str) -> Option<&'static str> {
    let value = match name {
        "nbsp" | "ensp" | "emsp" | "thinsp" => " ",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "hellip" => "\u{2026}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "laquo" => "\u{ab}",
        "raquo" => "\u{bb}",
        "middot" => "\u{b7}",
        "bull" => "\u{2022}",
        "deg" => "\u{b0}",
        "plusmn" => "\u{b1}",
        "times" => "\u{d7}",
        "micro" => "\u{b5}",
        "alpha" => "\u{3b1}",
        "beta" => "\u{3b2}",
        "gamma" => "\u{3b3}",
        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "trade" => "\u{2122}",
        _ => return resolve_predefined_entity(name),
    };
    Some(value)
}

/// Unescaped text of a node; undecodable entities keep their raw form.
fn node_text(e: &BytesText<'_>) -> String {
    match e.unescape_with(resolve_html_entity) {
        Ok(text) => text.into_owned(),
        Err(err) => {
            tracing::debug!(error = %err, "unresolved entity in feed text; keeping raw text");
            String::from_utf8_lossy(e.as_ref()).into_owned()
        }
    }
}

fn is_entry_element(name: &[u8]) -> bool {
    name == b"item" || name == b"entry"
}

fn has_href(e: &BytesStart<'_>) -> bool {
    e.attributes()
        .flatten()
        .any(|attr| attr.key.local_name().as_ref() == b"href")
}

/// The `href` of an Atom `<link>` that points at the entry itself.
///
/// Links with `rel` other than `alternate` (enclosures, replies) are ignored.
fn atom_link_href(e: &BytesStart<'_>) -> Option<String> {
    let mut href = None;
    let mut rel_ok = true;
    for attr in e.attributes().flatten() {
        match attr.key.local_name().as_ref() {
            b"href" => {
                href = attr.unescape_value().ok().map(|v| v.trim().to_string());
            }
            b"rel" => {
                rel_ok = attr.value.as_ref() == b"alternate";
            }
            _ => {}
        }
    }
    href.filter(|h| rel_ok && !h.is_empty())
}

/// Parse a feed document into its entries, in document order.
///
/// # Errors
///
/// Returns [`CollectError::Xml`] if the document is not well-formed up to the
/// point where reading stops.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>, CollectError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut builder: Option<EntryBuilder> = None;
    let mut entry_depth = 0usize;
    let mut field: Option<(Field, usize)> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                let local = e.local_name();
                let name = local.as_ref();
                if builder.is_none() && is_entry_element(name) {
                    builder = Some(EntryBuilder::default());
                    entry_depth = depth;
                } else if let Some(b) = builder.as_mut() {
                    if field.is_none() && depth == entry_depth + 1 {
                        if let Some(f) = Field::from_local_name(name) {
                            if f == Field::Link && has_href(&e) {
                                if let Some(href) = atom_link_href(&e) {
                                    if b.entry.link.is_empty() {
                                        b.entry.link = href;
                                    }
                                }
                                continue;
                            }
                            if f == Field::Description && !b.description_parts.is_empty() {
                                continue;
                            }
                            b.open_field(f);
                            field = Some((f, depth));
                        }
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if let Some(b) = builder.as_mut() {
                    if field.is_none()
                        && depth == entry_depth
                        && e.local_name().as_ref() == b"link"
                        && b.entry.link.is_empty()
                    {
                        if let Some(href) = atom_link_href(&e) {
                            b.entry.link = href;
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(b), Some((f, _))) = (builder.as_mut(), field) {
                    b.push_text(f, &node_text(&e));
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(b), Some((f, _))) = (builder.as_mut(), field) {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    b.push_text(f, &text);
                }
            }
            Ok(Event::End(e)) => {
                if field.is_some_and(|(_, field_depth)| field_depth == depth) {
                    field = None;
                }
                if depth == entry_depth && is_entry_element(e.local_name().as_ref()) {
                    if let Some(b) = builder.take() {
                        entries.push(b.finish());
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(CollectError::Xml(e)),
            _ => {}
        }
    }

    tracing::debug!(count = entries.len(), "parsed feed entries");
    Ok(entries)
}

/// Strip HTML tags from a string and normalize whitespace.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
