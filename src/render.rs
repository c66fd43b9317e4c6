//! Conversion of exchanges into what the terminal shows.
//!
//! The `analysis` text comes from a remote service and may carry HTML or
//! Markdown. It is never written to the terminal as-is: markup is reduced to
//! plain text and control characters (ESC included) are removed, so a reply
//! cannot move the cursor, recolor the screen or forge prompt output.

use crate::session::Exchange;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::sync::LazyLock;

/// A tag only starts with `<` followed by a letter, `/` or `!`; a bare `<` is text.
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--[\s\S]*?-->|<![^>]*>|<(/?)([A-Za-z][A-Za-z0-9]*)\b[^>]*>")
        .expect("tag pattern is valid")
});

/// Everything the UI needs to draw one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeView {
    pub query: String,
    pub analysis_text: String,
    pub coins_display: String,
    pub timestamp_display: String,
}

impl ExchangeView {
    pub fn from_exchange(exchange: &Exchange, render_markup: bool) -> Self {
        let analysis = exchange.response.analysis.trim();
        let analysis_text = if render_markup {
            markup_to_text(analysis)
        } else {
            strip_control(analysis)
        };

        Self {
            query: strip_control(&exchange.query),
            analysis_text,
            coins_display: strip_control(&exchange.coins_display()),
            timestamp_display: exchange.timestamp_display(),
        }
    }
}

/// Remove control characters except newline and tab.
pub fn strip_control(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Reduce Markdown/HTML markup to plain terminal text.
///
/// Headings, emphasis and strong text come out unstyled, the same weight as
/// the surrounding analysis.
pub fn markup_to_text(markup: &str) -> String {
    let mut writer = TextWriter::default();

    for event in Parser::new_ext(markup, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(Tag::Paragraph) | Event::Start(Tag::Heading { .. }) => {
                writer.start_line()
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => writer.blank_line(),
            Event::Start(Tag::List(first)) => {
                writer.start_line();
                writer.lists.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                writer.lists.pop();
                if writer.lists.is_empty() {
                    writer.blank_line();
                }
            }
            Event::Start(Tag::Item) => writer.bullet(),
            Event::End(TagEnd::Item) => writer.start_line(),
            Event::Start(Tag::CodeBlock(_)) => writer.start_line(),
            Event::End(TagEnd::CodeBlock) => writer.blank_line(),
            Event::Text(text) | Event::Code(text) => writer.push_text(&text),
            Event::Html(html) | Event::InlineHtml(html) => writer.push_html(&html),
            Event::SoftBreak | Event::HardBreak => writer.push_text("\n"),
            Event::Rule => {
                writer.start_line();
                writer.push_text("───");
                writer.blank_line();
            }
            _ => {}
        }
    }

    writer.finish()
}

#[derive(Default)]
struct TextWriter {
    out: String,
    lists: Vec<Option<u64>>,
    /// Inside `<script>` or `<style>`
    skipping: bool,
}

impl TextWriter {
    fn start_line(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn blank_line(&mut self) {
        self.start_line();
        self.out.push('\n');
    }

    fn bullet(&mut self) {
        self.start_line();
        let depth = self.lists.len().saturating_sub(1);
        self.out.push_str(&"  ".repeat(depth));
        match self.lists.last_mut() {
            Some(Some(n)) => {
                self.out.push_str(&format!("{}. ", n));
                *n += 1;
            }
            _ => self.out.push_str("• "),
        }
    }

    fn push_text(&mut self, text: &str) {
        if !self.skipping {
            self.out.push_str(&strip_control(text));
        }
    }

    fn push_html(&mut self, html: &str) {
        let mut last = 0;
        for caps in HTML_TAG.captures_iter(html) {
            let Some(whole) = caps.get(0) else { continue };
            self.push_html_text(&html[last..whole.start()]);
            if let Some(name) = caps.get(2) {
                let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
                self.apply_tag(&name.as_str().to_ascii_lowercase(), closing);
            }
            last = whole.end();
        }
        self.push_html_text(&html[last..]);
    }

    /// Source newlines inside HTML are plain whitespace; only tags break lines.
    fn push_html_text(&mut self, raw: &str) {
        let text = html_escape::decode_html_entities(raw).replace(['\n', '\r'], " ");
        if self.out.is_empty() || self.out.ends_with('\n') {
            self.push_text(text.trim_start());
        } else {
            self.push_text(&text);
        }
    }

    fn apply_tag(&mut self, name: &str, closing: bool) {
        match (name, closing) {
            ("script" | "style", _) => self.skipping = !closing,
            _ if self.skipping => {}
            ("br", _) => self.out.push('\n'),
            ("li", false) => self.bullet(),
            ("ul" | "ol", false) => self.lists.push(None),
            ("ul" | "ol", true) => {
                self.lists.pop();
                self.start_line();
            }
            ("p" | "div" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "tr" | "table" | "li", _) => {
                self.start_line()
            }
            _ => {}
        }
    }

    fn finish(self) -> String {
        let mut result = String::with_capacity(self.out.len());
        let mut blank_run = 0;
        for line in self.out.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 1 {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            result.push_str(line);
            result.push('\n');
        }
        result.trim().to_string()
    }
}
