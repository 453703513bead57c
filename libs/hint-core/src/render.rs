//! Segment renderers for display layers.

use crate::types::Segment;
use serde::{Deserialize, Serialize};

/// Output format for rendered hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Html,
    Markdown,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }

    /// Renderer for this format.
    pub fn renderer(self) -> Box<dyn SegmentRenderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer),
            Self::Markdown => Box::new(MarkdownRenderer),
        }
    }
}

/// Maps annotated segments to markup.
pub trait SegmentRenderer: Send + Sync {
    /// Renderer identifier.
    fn name(&self) -> &'static str;

    /// Render segments in order.
    fn render(&self, segments: &[Segment]) -> String;
}

/// Get renderer by name.
pub fn get_renderer(name: &str) -> Option<Box<dyn SegmentRenderer>> {
    match name {
        "html" => Some(Box::new(HtmlRenderer)),
        "markdown" => Some(Box::new(MarkdownRenderer)),
        _ => None,
    }
}

/// Emphasis as `<b>` tags, text escaped for HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl SegmentRenderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for segment in segments {
            if segment.emphasized {
                out.push_str("<b>");
                escape_html_into(&segment.text, &mut out);
                out.push_str("</b>");
            } else {
                escape_html_into(&segment.text, &mut out);
            }
        }
        out
    }
}

fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Emphasis as `**bold**`, with Markdown punctuation escaped.
///
/// Whitespace at either end of an emphasized run goes outside the
/// delimiters, since `** x **` does not render as bold.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl SegmentRenderer for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for segment in segments {
            let text = segment.text.as_str();
            let core = text.trim();
            if !segment.emphasized || core.is_empty() {
                escape_markdown_into(text, &mut out);
                continue;
            }

            let lead = &text[..text.len() - text.trim_start().len()];
            let trail = &text[text.trim_end().len()..];
            out.push_str(lead);
            out.push_str("**");
            escape_markdown_into(core, &mut out);
            out.push_str("**");
            out.push_str(trail);
        }
        out
    }
}

fn escape_markdown_into(text: &str, out: &mut String) {
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
}
