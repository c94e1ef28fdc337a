//! Terminal rendering for markdown answers
//!
//! Walks `pulldown_cmark` events and styles them with `colored`. Reasoning
//! models wrap their chain of thought in `<think>` tags; those sections are
//! shown dimmed and the tags themselves are dropped.

use colored::{ColoredString, Colorize};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Renders markdown text for the console
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Render a whole answer
    pub fn render(text: &str) -> String {
        let mut state = RenderState::default();
        for event in Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH) {
            state.handle(event);
        }
        state.out.trim_end_matches('\n').to_string()
    }
}

#[derive(Default)]
struct RenderState {
    out: String,
    heading: Option<HeadingLevel>,
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    link: Option<String>,
    in_code_block: bool,
    thinking: bool,
    /// Next number for ordered lists, `None` for bullet lists
    lists: Vec<Option<u64>>,
}

impl RenderState {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    self.push_code(&text);
                } else {
                    self.push_text(&text);
                }
            }
            Event::Code(code) => {
                let styled = code.yellow().to_string();
                self.out.push_str(&styled);
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push_html(&html),
            Event::SoftBreak | Event::HardBreak => self.out.push('\n'),
            Event::Rule => {
                self.line_start();
                self.out.push_str(&"─".repeat(40).dimmed().to_string());
                self.end_block();
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.line_start();
                self.heading = Some(level);
            }
            Tag::CodeBlock(_) => {
                self.line_start();
                self.push_code_rule();
                self.in_code_block = true;
            }
            Tag::List(first) => {
                self.line_start();
                self.lists.push(first);
            }
            Tag::Item => {
                self.line_start();
                let indent = "  ".repeat(self.lists.len());
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}.", n);
                        *n += 1;
                        marker
                    }
                    _ => "*".to_string(),
                };
                self.out
                    .push_str(&format!("{}{} ", indent, marker.cyan()));
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link { dest_url, .. } => self.link = Some(dest_url.to_string()),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::HtmlBlock => self.end_block(),
            TagEnd::Heading(_) => {
                self.heading = None;
                self.end_block();
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.push_code_rule();
                self.end_block();
            }
            TagEnd::List(_) => {
                self.lists.pop();
                self.end_block();
            }
            TagEnd::Item => self.line_start(),
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            TagEnd::Link => {
                if let Some(url) = self.link.take() {
                    self.out.push_str(&format!(" ({})", url).dimmed().to_string());
                }
            }
            _ => {}
        }
    }

    fn style(&self, text: &str) -> ColoredString {
        let mut styled = text.normal();
        if self.thinking {
            styled = styled.dimmed().italic();
        }
        if let Some(level) = self.heading {
            styled = styled.cyan().bold();
            if level == HeadingLevel::H1 {
                styled = styled.underline();
            }
        }
        if self.strong > 0 {
            styled = styled.bold();
        }
        if self.emphasis > 0 {
            styled = styled.italic();
        }
        if self.strikethrough > 0 {
            styled = styled.strikethrough();
        }
        if self.link.is_some() {
            styled = styled.blue().underline();
        }
        styled
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let styled = self.style(text).to_string();
        self.out.push_str(&styled);
    }

    /// Raw HTML passes through as text, minus the `<think>` markers
    fn push_html(&mut self, html: &str) {
        let mut rest = html;
        while !rest.is_empty() {
            let next = [(THINK_OPEN, true), (THINK_CLOSE, false)]
                .into_iter()
                .filter_map(|(tag, opens)| rest.find(tag).map(|at| (at, tag, opens)))
                .min_by_key(|(at, _, _)| *at);

            let Some((at, tag, opens)) = next else {
                self.push_text(rest);
                break;
            };

            self.push_text(&rest[..at]);
            self.thinking = opens;
            rest = &rest[at + tag.len()..];
            if self.at_line_start() {
                rest = rest.strip_prefix('\n').unwrap_or(rest);
            }
        }
    }

    fn push_code(&mut self, code: &str) {
        for line in code.lines() {
            self.out.push_str(&format!("  {}\n", line.yellow()));
        }
    }

    fn push_code_rule(&mut self) {
        let rule = format!("  {}", "─".repeat(38)).dimmed().to_string();
        self.out.push_str(&rule);
        self.out.push('\n');
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    fn line_start(&mut self) {
        if !self.at_line_start() {
            self.out.push('\n');
        }
    }

    /// Close a block; top-level blocks are separated by a blank line
    fn end_block(&mut self) {
        self.line_start();
        if self.lists.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }
}
