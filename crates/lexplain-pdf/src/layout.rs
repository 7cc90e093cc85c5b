//! Page-aware block layout.
//!
//! [`PageFlow`] places blocks top-down on fixed-size pages. Coordinates are in
//! points with the origin at the top-left corner; the writer flips them into
//! PDF space.

use crate::metrics::{text_width, Font};

/// Baseline-to-baseline distance as a multiple of the font size.
const LINE_SPACING: f32 = 1.15;

/// Gap left after a paragraph.
const PARAGRAPH_GAP: f32 = 8.5;

/// Gap left after a numbered list item.
const LIST_ITEM_GAP: f32 = 11.3;

/// Left indent applied to list items.
const LIST_INDENT: f32 = 28.3;

/// Space reserved for a horizontal rule, and the advance after it.
const RULE_RESERVE: f32 = 42.5;
const RULE_ADVANCE: f32 = 28.3;

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    /// Page width.
    pub width: f32,
    /// Page height.
    pub height: f32,
    /// Margin applied on all four sides.
    pub margin: f32,
}

impl PageSetup {
    /// ISO A4 portrait with 20 mm margins.
    pub const fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin: 56.69,
        }
    }

    /// Usable width between the side margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest cursor position content may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }

    /// Usable height between the top and bottom margins.
    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}

/// Font and size for a block of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font face.
    pub font: Font,
    /// Size in points.
    pub size: f32,
}

impl TextStyle {
    /// Creates a style.
    pub const fn new(font: Font, size: f32) -> Self {
        Self { font, size }
    }

    /// Regular 12pt body text.
    pub const fn body() -> Self {
        Self::new(Font::Helvetica, 12.0)
    }

    /// Bold 14pt section heading.
    pub const fn heading() -> Self {
        Self::new(Font::HelveticaBold, 14.0)
    }

    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_SPACING
    }
}

/// A positioned drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// One line of text; `y` is the baseline measured from the top of the page.
    Text {
        /// Left edge.
        x: f32,
        /// Baseline.
        y: f32,
        /// Font face.
        font: Font,
        /// Size in points.
        size: f32,
        /// The line's text.
        text: String,
    },
    /// A horizontal line.
    Rule {
        /// Start x.
        x1: f32,
        /// End x.
        x2: f32,
        /// Vertical position from the top of the page.
        y: f32,
        /// Stroke width.
        width: f32,
    },
}

/// The drawing instructions of one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Operations in paint order.
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text lines on this page, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}

/// Wraps `text` so that no line is wider than `max_width` points.
///
/// Explicit line breaks are kept. Words wider than a whole line are split
/// between characters.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let mut current = String::new();

        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if text_width(font, size, &candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if text_width(font, size, word) <= max_width {
                current = word.to_string();
            } else {
                // Hard-break an overlong token.
                for ch in word.chars() {
                    let mut next = current.clone();
                    next.push(ch);
                    if !current.is_empty() && text_width(font, size, &next) > max_width {
                        lines.push(std::mem::take(&mut current));
                        current.push(ch);
                    } else {
                        current = next;
                    }
                }
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Places blocks on pages with a running vertical cursor.
#[derive(Debug, Clone)]
pub struct PageFlow {
    setup: PageSetup,
    pages: Vec<Page>,
    cursor: f32,
}

impl PageFlow {
    /// Starts a flow with one empty page.
    pub fn new(setup: PageSetup) -> Self {
        Self {
            setup,
            pages: vec![Page::default()],
            cursor: setup.margin,
        }
    }

    /// Current vertical position, from the top of the current page.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Number of pages started so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page geometry in use.
    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor = self.setup.margin;
    }

    /// Breaks the page if a block of `height` would overflow the bottom margin.
    fn ensure_space(&mut self, height: f32) {
        let at_top = (self.cursor - self.setup.margin).abs() < f32::EPSILON;
        if self.cursor + height > self.setup.bottom_limit() && !at_top {
            self.new_page();
        }
    }

    fn current_page(&mut self) -> &mut Page {
        // `pages` always holds at least the first page.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn place_lines(&mut self, lines: Vec<String>, style: TextStyle, x: f32, gap_after: f32) {
        let line_height = style.line_height();
        let block_height = lines.len() as f32 * line_height + gap_after;

        if block_height <= self.setup.content_height() {
            self.ensure_space(block_height);
        }

        for line in lines {
            self.ensure_space(line_height);
            let baseline = self.cursor + style.size;
            self.current_page().ops.push(DrawOp::Text {
                x,
                y: baseline,
                font: style.font,
                size: style.size,
                text: line,
            });
            self.cursor += line_height;
        }
        self.cursor += gap_after;
    }

    /// Adds wrapped text starting `indent` points from the left margin.
    pub fn paragraph(&mut self, text: &str, style: TextStyle, indent: f32) {
        let width = self.setup.content_width() - indent;
        let lines = wrap_text(text, style.font, style.size, width);
        let x = self.setup.margin + indent;
        self.place_lines(lines, style, x, PARAGRAPH_GAP);
    }

    /// Adds a numbered list entry (`"{index}. {text}"`), indented.
    pub fn list_item(&mut self, index: usize, text: &str, style: TextStyle) {
        let numbered = format!("{}. {}", index, text.trim());
        let width = self.setup.content_width() - LIST_INDENT;
        let lines = wrap_text(&numbered, style.font, style.size, width);
        let x = self.setup.margin + LIST_INDENT;
        self.place_lines(lines, style, x, LIST_ITEM_GAP);
    }

    /// Adds vertical whitespace, breaking the page if it runs past the margin.
    pub fn space(&mut self, amount: f32) {
        self.cursor += amount;
        if self.cursor > self.setup.bottom_limit() {
            self.new_page();
        }
    }

    /// Draws a full-width horizontal rule.
    pub fn rule(&mut self) {
        self.ensure_space(RULE_RESERVE);
        let y = self.cursor;
        let (x1, x2) = (self.setup.margin, self.setup.width - self.setup.margin);
        self.current_page().ops.push(DrawOp::Rule {
            x1,
            x2,
            y,
            width: 0.5,
        });
        self.cursor += RULE_ADVANCE;
    }

    /// Ends the flow and returns the laid-out pages.
    pub fn finish(self) -> Vec<Page> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let text = "The tenant shall maintain the premises in good repair and return them in the same condition.";
        let lines = wrap_text(text, Font::Helvetica, 12.0, 150.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(Font::Helvetica, 12.0, line) <= 150.0, "too wide: {line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_keeps_explicit_breaks() {
        let lines = wrap_text("first\nsecond", Font::Helvetica, 12.0, 500.0);
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, Font::Helvetica, 12.0, 100.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_line() {
        assert_eq!(wrap_text("", Font::Helvetica, 12.0, 100.0), vec![String::new()]);
    }

    #[test]
    fn test_cursor_advances_per_block() {
        let mut flow = PageFlow::new(PageSetup::a4());
        let start = flow.cursor();

        flow.paragraph("One line.", TextStyle::body(), 0.0);
        let expected = start + TextStyle::body().line_height() + PARAGRAPH_GAP;

        assert!((flow.cursor() - expected).abs() < 0.01);
        assert_eq!(flow.page_count(), 1);
    }

    #[test]
    fn test_page_breaks_before_overflow() {
        let setup = PageSetup::a4();
        let mut flow = PageFlow::new(setup);

        for i in 0..80 {
            flow.list_item(i + 1, "A clause that fits on a single line.", TextStyle::body());
        }
        let pages = flow.finish();

        assert!(pages.len() > 1);
        for page in &pages {
            for op in &page.ops {
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y <= setup.bottom_limit() + 0.01);
                    assert!(*y >= setup.margin);
                }
            }
        }
    }

    #[test]
    fn test_block_is_not_split_when_it_fits_a_page() {
        let setup = PageSetup::a4();
        let mut flow = PageFlow::new(setup);

        // Push the cursor close to the bottom margin.
        flow.space(setup.content_height() - 20.0);
        flow.paragraph("line one\nline two\nline three", TextStyle::body(), 0.0);
        let pages = flow.finish();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines().count(), 0);
        assert_eq!(
            pages[1].lines().collect::<Vec<_>>(),
            vec!["line one", "line two", "line three"]
        );
    }

    #[test]
    fn test_list_item_is_numbered_and_indented() {
        let setup = PageSetup::a4();
        let mut flow = PageFlow::new(setup);
        flow.list_item(3, "  Late fees apply.  ", TextStyle::body());
        let pages = flow.finish();

        match &pages[0].ops[0] {
            DrawOp::Text { x, text, .. } => {
                assert_eq!(text, "3. Late fees apply.");
                assert!((x - (setup.margin + LIST_INDENT)).abs() < 0.01);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_rule_spans_content_width() {
        let setup = PageSetup::a4();
        let mut flow = PageFlow::new(setup);
        flow.rule();
        let pages = flow.finish();

        assert_eq!(
            pages[0].ops[0],
            DrawOp::Rule {
                x1: setup.margin,
                x2: setup.width - setup.margin,
                y: setup.margin,
                width: 0.5,
            }
        );
    }
}
