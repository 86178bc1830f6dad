#![forbid(unsafe_code)]

//! Colors, text attributes and the table's style set.

use std::fmt::Write as _;

use bitflags::bitflags;

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Index into the 256-color xterm palette.
    Ansi256(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    fn write_sgr(self, out: &mut String, foreground: bool) {
        let base = if foreground { 38 } else { 48 };
        // Writing into a String cannot fail.
        let _ = match self {
            Color::Ansi256(n) => write!(out, "{base};5;{n}"),
            Color::Rgb(r, g, b) => write!(out, "{base};2;{r};{g};{b}"),
        };
    }
}

bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

const SGR_CODES: [(StyleFlags, u8); 5] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::ITALIC, 3),
    (StyleFlags::UNDERLINE, 4),
    (StyleFlags::REVERSE, 7),
];

/// Visual style for a span of text.
///
/// Unset colors inherit from whatever is underneath when styles are layered
/// with [`Style::patch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: StyleFlags,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::BOLD);
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::ITALIC);
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::UNDERLINE);
        self
    }

    #[must_use]
    pub const fn reverse(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::REVERSE);
        self
    }

    /// Whether this style changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    #[must_use]
    pub fn has_attr(&self, flag: StyleFlags) -> bool {
        self.attrs.contains(flag)
    }

    /// Layer `other` on top of `self`: set colors override, attributes merge.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: self.attrs | other.attrs,
        }
    }

    /// Append the SGR escape that switches to this style.
    ///
    /// Nothing is written for an empty style.
    pub fn write_sgr(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }
        out.push_str("\x1b[");
        let mut first = true;
        let mut sep = |out: &mut String| {
            if !first {
                out.push(';');
            }
            first = false;
        };
        for (flag, code) in SGR_CODES {
            if self.attrs.contains(flag) {
                sep(out);
                let _ = write!(out, "{code}");
            }
        }
        if let Some(fg) = self.fg {
            sep(out);
            fg.write_sgr(out, true);
        }
        if let Some(bg) = self.bg {
            sep(out);
            bg.write_sgr(out, false);
        }
        out.push('m');
    }
}

/// SGR reset sequence.
pub const SGR_RESET: &str = "\x1b[0m";

/// Highlight color used by the default selected styles.
pub const ACCENT: Color = Color::Ansi256(212);

/// Styles used when rendering a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub header: Style,
    pub cell: Style,
    /// Layered over every cell of the cursor row in row-select mode.
    pub selected: Style,
    /// Used for the cursor cell in cell-select mode.
    pub selected_cell: Style,
    /// Blank columns added on each side of every header and body cell.
    pub padding: u16,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(),
            cell: Style::new(),
            selected: Style::new().bold().fg(ACCENT),
            selected_cell: Style::new().bold().fg(ACCENT),
            padding: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_writes_nothing() {
        let mut out = String::new();
        Style::new().write_sgr(&mut out);
        assert!(out.is_empty());
        assert!(Style::default().is_empty());
    }

    #[test]
    fn sgr_bold_with_palette_fg() {
        let mut out = String::new();
        Style::new().bold().fg(ACCENT).write_sgr(&mut out);
        assert_eq!(out, "\x1b[1;38;5;212m");
    }

    #[test]
    fn sgr_rgb_background_only() {
        let mut out = String::new();
        Style::new().bg(Color::Rgb(1, 2, 3)).write_sgr(&mut out);
        assert_eq!(out, "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn sgr_orders_attributes() {
        let mut out = String::new();
        Style::new().underline().bold().reverse().write_sgr(&mut out);
        assert_eq!(out, "\x1b[1;4;7m");
    }

    #[test]
    fn patch_overrides_colors_and_merges_attrs() {
        let base = Style::new().fg(Color::Ansi256(1)).italic();
        let top = Style::new().fg(Color::Ansi256(2)).bold();
        let merged = base.patch(top);
        assert_eq!(merged.fg, Some(Color::Ansi256(2)));
        assert!(merged.has_attr(StyleFlags::BOLD));
        assert!(merged.has_attr(StyleFlags::ITALIC));
    }

    #[test]
    fn default_styles_highlight_selection() {
        let styles = Styles::default();
        assert!(styles.header.has_attr(StyleFlags::BOLD));
        assert!(styles.cell.is_empty());
        assert_eq!(styles.selected.fg, Some(ACCENT));
        assert_eq!(styles.selected_cell.fg, Some(ACCENT));
        assert_eq!(styles.padding, 1);
    }
}
