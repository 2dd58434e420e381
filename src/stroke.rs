//! Stroke path rendering for the stroke timer widget.
//!
//! A [`Stroke`] is the widget's owned drawable handle: a rectangular outline
//! traced through a character grid, of which only the portion between the
//! `start` and `end` endpoints is visible. The path begins at the top-center
//! of the bounds and runs around the perimeter, clockwise by default.
//!
//! # Basic Usage
//!
//! ```rust
//! use stroketimer_widgets::stroke::Stroke;
//!
//! let mut stroke = Stroke::new(12, 5);
//! stroke.set_color("#5A56E0");
//!
//! // Show the first 40% of the outline.
//! stroke.set_start(0.0);
//! stroke.set_end(0.4);
//! let frame = stroke.render();
//! assert_eq!(frame.lines().count(), 5);
//! ```
//!
//! Configuration setters rebuild the cached perimeter path immediately, so a
//! change to the bounds or the winding direction is reflected by the next
//! `render()` call.

use lipgloss_extras::lipgloss::{Color, Style};
use once_cell::sync::Lazy;
use unicode_width::UnicodeWidthChar;

/// The set of characters used to draw the outline.
///
/// Each field holds the glyph for one part of the rectangle. All glyphs must
/// occupy a single terminal cell; see [`GlyphSet::is_single_cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    /// Glyph for the top and bottom edges.
    pub horizontal: char,
    /// Glyph for the left and right edges.
    pub vertical: char,
    /// Top-left corner glyph.
    pub top_left: char,
    /// Top-right corner glyph.
    pub top_right: char,
    /// Bottom-right corner glyph.
    pub bottom_right: char,
    /// Bottom-left corner glyph.
    pub bottom_left: char,
}

impl GlyphSet {
    /// Creates a glyph set from edge and corner characters.
    pub fn new(
        horizontal: char,
        vertical: char,
        top_left: char,
        top_right: char,
        bottom_right: char,
        bottom_left: char,
    ) -> Self {
        Self {
            horizontal,
            vertical,
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Returns true when every glyph renders in exactly one terminal cell.
    ///
    /// Wide glyphs would shear the grid, so [`Stroke::set_glyphs`] rejects
    /// sets for which this returns false.
    pub fn is_single_cell(&self) -> bool {
        [
            self.horizontal,
            self.vertical,
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .iter()
        .all(|ch| UnicodeWidthChar::width(*ch) == Some(1))
    }
}

/// Light box-drawing outline. The default for thin strokes.
pub static LIGHT: Lazy<GlyphSet> = Lazy::new(|| GlyphSet::new('─', '│', '┌', '┐', '┘', '└'));

/// Heavy box-drawing outline, used for line widths of 2.0 and above.
pub static HEAVY: Lazy<GlyphSet> = Lazy::new(|| GlyphSet::new('━', '┃', '┏', '┓', '┛', '┗'));

/// Double-line box-drawing outline.
pub static DOUBLE: Lazy<GlyphSet> = Lazy::new(|| GlyphSet::new('═', '║', '╔', '╗', '╝', '╚'));

/// Plain ASCII outline for terminals without box-drawing glyphs.
pub static ASCII: Lazy<GlyphSet> = Lazy::new(|| GlyphSet::new('-', '|', '+', '+', '+', '+'));

/// Line widths at or above this render with the heavy glyph set.
const HEAVY_LINE_WIDTH: f64 = 2.0;

const MIN_WIDTH: usize = 2;
const MIN_HEIGHT: usize = 2;

/// One cell of the perimeter path.
#[derive(Debug, Clone, Copy)]
struct PathCell {
    x: usize,
    y: usize,
    glyph: char,
}

/// A rectangular outline path rendered into a character grid.
///
/// The visible portion of the outline is the slice of the perimeter between
/// the `start` and `end` endpoints, both fractions in `[0, 1]` of the total
/// path length. A fully wound stroke has `start = 0, end = 1`.
#[derive(Debug, Clone)]
pub struct Stroke {
    width: usize,
    height: usize,
    line_width: f64,
    color: String,
    style: Style,
    clockwise: bool,
    start: f64,
    end: f64,
    glyph_override: Option<GlyphSet>,
    path: Vec<PathCell>,
}

impl Stroke {
    /// Creates a stroke with the given bounds in cells.
    ///
    /// Bounds are clamped to a 2×2 minimum. The stroke starts hidden
    /// (`start = 0, end = 0`), clockwise, with a line width of 1.0 and no
    /// color applied.
    pub fn new(width: usize, height: usize) -> Self {
        let mut stroke = Self {
            width: width.max(MIN_WIDTH),
            height: height.max(MIN_HEIGHT),
            line_width: 1.0,
            color: String::new(),
            style: Style::new(),
            clockwise: true,
            start: 0.0,
            end: 0.0,
            glyph_override: None,
            path: Vec::new(),
        };
        stroke.rebuild();
        stroke
    }

    /// Returns the bounds in cells as `(width, height)`.
    pub fn bounds(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Resizes the outline and rebuilds the path.
    pub fn set_bounds(&mut self, width: usize, height: usize) {
        self.width = width.max(MIN_WIDTH);
        self.height = height.max(MIN_HEIGHT);
        self.rebuild();
    }

    /// Returns the configured line width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Sets the line width.
    ///
    /// Terminal cells have no fractional thickness, so the width selects the
    /// glyph weight instead: values at or above 2.0 use the heavy set. An
    /// explicit [`set_glyphs`](Self::set_glyphs) override wins over this.
    pub fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width.max(0.0);
        self.rebuild();
    }

    /// Returns the configured color, or an empty string when unset.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sets the stroke color (hex code or a color the terminal understands).
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.style = if self.color.is_empty() {
            Style::new()
        } else {
            Style::new().foreground(Color::from(self.color.as_str()))
        };
    }

    /// Returns whether the path runs clockwise.
    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    /// Sets the winding direction and rebuilds the path.
    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
        self.rebuild();
    }

    /// Replaces the outline glyphs.
    ///
    /// Sets containing glyphs wider than one cell are silently ignored, in
    /// keeping with the widget's no-failure contract.
    pub fn set_glyphs(&mut self, glyphs: GlyphSet) {
        if !glyphs.is_single_cell() {
            return;
        }
        self.glyph_override = Some(glyphs);
        self.rebuild();
    }

    /// Returns the `start` endpoint in `[0, 1]`.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Moves the `start` endpoint, clamped to `[0, 1]`.
    pub fn set_start(&mut self, start: f64) {
        self.start = start.clamp(0.0, 1.0);
    }

    /// Returns the `end` endpoint in `[0, 1]`.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Moves the `end` endpoint, clamped to `[0, 1]`.
    pub fn set_end(&mut self, end: f64) {
        self.end = end.clamp(0.0, 1.0);
    }

    /// Number of cells on the perimeter path.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    fn glyphs(&self) -> &GlyphSet {
        if let Some(glyphs) = &self.glyph_override {
            return glyphs;
        }
        if self.line_width >= HEAVY_LINE_WIDTH {
            &HEAVY
        } else {
            &LIGHT
        }
    }

    /// Recomputes the perimeter path for the current configuration.
    ///
    /// The path starts at the top-center cell and walks the outline: across
    /// the top to the right corner, down the right edge, across the bottom,
    /// up the left edge and back along the top. Counterclockwise strokes
    /// traverse the same cells in the opposite order, still starting at the
    /// top-center.
    fn rebuild(&mut self) {
        let (w, h) = (self.width, self.height);
        let glyphs = self.glyphs().clone();
        let mid = w / 2;

        let mut cells = Vec::with_capacity(2 * w + 2 * h - 4);
        let glyph_at = |x: usize, y: usize| -> char {
            match (x, y) {
                (0, 0) => glyphs.top_left,
                (gx, 0) if gx == w - 1 => glyphs.top_right,
                (gx, gy) if gx == w - 1 && gy == h - 1 => glyphs.bottom_right,
                (0, gy) if gy == h - 1 => glyphs.bottom_left,
                (_, gy) if gy == 0 || gy == h - 1 => glyphs.horizontal,
                _ => glyphs.vertical,
            }
        };

        for x in mid..w {
            cells.push(PathCell { x, y: 0, glyph: glyph_at(x, 0) });
        }
        for y in 1..h {
            cells.push(PathCell { x: w - 1, y, glyph: glyph_at(w - 1, y) });
        }
        for x in (0..w - 1).rev() {
            cells.push(PathCell { x, y: h - 1, glyph: glyph_at(x, h - 1) });
        }
        for y in (1..h - 1).rev() {
            cells.push(PathCell { x: 0, y, glyph: glyph_at(0, y) });
        }
        cells.push(PathCell { x: 0, y: 0, glyph: glyphs.top_left });
        for x in 1..mid {
            cells.push(PathCell { x, y: 0, glyph: glyph_at(x, 0) });
        }

        if !self.clockwise {
            cells.reverse();
            // Keep the top-center cell first so both directions share an origin.
            cells.rotate_right(1);
        }

        self.path = cells;
    }

    /// Renders the visible portion of the outline as a multi-line string.
    ///
    /// The output is always `height` lines of `width` cells; hidden path
    /// cells render as spaces. The configured color is applied to the whole
    /// frame.
    pub fn render(&self) -> String {
        let n = self.path.len();
        let lo = ((self.start * n as f64).round() as usize).min(n);
        let hi = ((self.end * n as f64).round() as usize).min(n);

        let mut grid = vec![vec![' '; self.width]; self.height];
        if lo < hi {
            for cell in &self.path[lo..hi] {
                grid[cell.y][cell.x] = cell.glyph;
            }
        }

        let frame = grid
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        if self.color.is_empty() {
            frame
        } else {
            self.style.render(&frame)
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(20, 7)
    }
}
