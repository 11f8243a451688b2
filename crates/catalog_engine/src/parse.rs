use catalog_core::{Category, Item};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Converts raw markdown into the ordered category/item structure.
///
/// Single left-to-right pass over the event stream, folding an explicit
/// "current category" accumulator:
/// - a level-2 heading closes the open category (kept even when empty) and
///   opens a new one titled with the heading's first text run;
/// - each top-level list entry whose first inline run is a link becomes an
///   item: the link text is the title, the link target the url, and text
///   following the link (minus the conventional `- ` separator) the
///   description;
/// - entries that do not start with a link are skipped silently;
/// - lists before the first level-2 heading are ignored, headings at other
///   depths leave category boundaries untouched, and lists nested inside an
///   entry contribute no items of their own.
///
/// Infallible by design: malformed input degrades to a smaller catalog, and
/// the output mirrors document order with no sorting or deduplication.
pub fn parse_catalog(text: &str) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    let mut current: Option<Category> = None;

    let mut heading: Option<HeadingCapture> = None;
    let mut item: Option<ItemCapture> = None;
    let mut list_depth = 0usize;

    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some(HeadingCapture {
                    level,
                    first_text: None,
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(capture) = heading.take() {
                    // A level-2 heading with no text run cannot name a
                    // category; it is as inert as a heading at another depth.
                    let title = capture.first_text.filter(|t| !t.is_empty());
                    if capture.level == HeadingLevel::H2 {
                        if let Some(title) = title {
                            if let Some(finished) = current.take() {
                                categories.push(finished);
                            }
                            current = Some(Category {
                                title,
                                items: Vec::new(),
                            });
                        }
                    }
                }
            }
            Event::Start(Tag::List(_)) => {
                list_depth += 1;
                // A nested list ends the inline run of the enclosing entry.
                if list_depth > 1 {
                    if let Some(capture) = item.as_mut() {
                        capture.sealed = true;
                    }
                }
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
            }
            Event::Start(Tag::Item) if list_depth == 1 && current.is_some() => {
                item = Some(ItemCapture::default());
            }
            Event::End(TagEnd::Item) if list_depth == 1 => {
                if let (Some(capture), Some(category)) = (item.take(), current.as_mut()) {
                    if let Some(parsed) = capture.finish(&category.title) {
                        category.items.push(parsed);
                    }
                }
            }
            Event::Start(Tag::Paragraph) => {
                if let Some(capture) = item.as_mut() {
                    capture.begin_paragraph();
                }
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                if let Some(capture) = item.as_mut() {
                    capture.begin_link(dest_url.to_string());
                }
            }
            Event::End(TagEnd::Link) => {
                if let Some(capture) = item.as_mut() {
                    capture.end_link();
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(capture) = heading.as_mut() {
                    if capture.first_text.is_none() {
                        capture.first_text = Some(text.to_string());
                    }
                } else if let Some(capture) = item.as_mut() {
                    capture.push_text(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(capture) = item.as_mut() {
                    capture.push_text(" ");
                }
            }
            _ => {}
        }
    }

    if let Some(finished) = current.take() {
        categories.push(finished);
    }

    categories
}

struct HeadingCapture {
    level: HeadingLevel,
    first_text: Option<String>,
}

/// Inline state for one list entry. Only the first paragraph's run sequence
/// matters: the entry is an item iff that sequence starts with a link.
#[derive(Default)]
struct ItemCapture {
    saw_inline: bool,
    in_link: bool,
    link: Option<LinkCapture>,
    trailing: String,
    paragraphs: u8,
    sealed: bool,
}

struct LinkCapture {
    url: String,
    title: String,
}

impl ItemCapture {
    fn begin_paragraph(&mut self) {
        self.paragraphs += 1;
        if self.paragraphs > 1 {
            self.sealed = true;
        }
    }

    fn begin_link(&mut self, url: String) {
        if self.sealed || self.saw_inline {
            return;
        }
        self.saw_inline = true;
        self.in_link = true;
        self.link = Some(LinkCapture {
            url,
            title: String::new(),
        });
    }

    fn end_link(&mut self) {
        self.in_link = false;
    }

    fn push_text(&mut self, text: &str) {
        if self.sealed {
            return;
        }
        if self.in_link {
            if let Some(link) = self.link.as_mut() {
                link.title.push_str(text);
            }
        } else if !self.saw_inline {
            // First run is plain text: malformed entry, yields no item.
            self.saw_inline = true;
        } else if self.link.is_some() {
            self.trailing.push_str(text);
        }
    }

    fn finish(self, category: &str) -> Option<Item> {
        let link = self.link?;
        if link.title.is_empty() {
            return None;
        }
        Some(Item {
            title: link.title,
            description: clean_description(&self.trailing),
            url: link.url,
            category: category.to_string(),
        })
    }
}

/// Strips surrounding whitespace and the `- ` separator that conventionally
/// joins a link to its description.
fn clean_description(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('–'))
        .or_else(|| trimmed.strip_prefix('—'))
        .unwrap_or(trimmed);
    trimmed.trim_start().to_string()
}
