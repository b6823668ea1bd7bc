//! Page layout for the résumé PDF.
//!
//! Layout is a pure function from a `ResumeDocument` to pages of draw operations, in
//! millimetres measured from the top-left corner of an A4 page. `render` turns the plan
//! into PDF objects. Cells follow a simple flow model: each cell reserves a fixed height,
//! and a cell that would cross the bottom break line starts a new page.

use crate::builder::font_metrics::{pdf_safe_text, FontFace, FontMetricTable, MM_PER_PT};
use crate::builder::models::{AccentColor, LayoutVariant, RenderOptions, ResumeDocument};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 10.0;
pub const TEXT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
/// Content may not extend below `PAGE_HEIGHT_MM - BREAK_MARGIN_MM`.
pub const BREAK_MARGIN_MM: f32 = 20.0;
/// Horizontal padding inside a cell.
pub const CELL_PADDING_MM: f32 = 1.0;

const NAME_SIZE_PT: f32 = 24.0;
const CONTACT_SIZE_PT: f32 = 10.0;
const HEADING_SIZE_PT: f32 = 14.0;
const BODY_SIZE_PT: f32 = 11.0;

const NAME_CELL_MM: f32 = 15.0;
const CONTACT_CELL_MM: f32 = 5.0;
const HEADING_CELL_MM: f32 = 10.0;
const BODY_LINE_MM: f32 = 6.0;

const NAME_COLOR: Rgb8 = Rgb8(15, 23, 42);
const CONTACT_COLOR: Rgb8 = Rgb8(100, 116, 139);
const DIVIDER_COLOR: Rgb8 = Rgb8(226, 232, 240);
const BODY_COLOR: Rgb8 = Rgb8(30, 41, 59);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl From<AccentColor> for Rgb8 {
    fn from(c: AccentColor) -> Self {
        Rgb8(c.r, c.g, c.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x_mm: f32,
        /// Baseline, measured from the top of the page.
        baseline_mm: f32,
        face: FontFace,
        size_pt: f32,
        color: Rgb8,
    },
    Rule {
        x1_mm: f32,
        x2_mm: f32,
        y_mm: f32,
        color: Rgb8,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePlan {
    pub ops: Vec<DrawOp>,
}

impl LayoutVariant {
    pub fn header_align(self) -> Align {
        match self {
            LayoutVariant::Modern => Align::Center,
            LayoutVariant::Classic => Align::Left,
        }
    }

    pub fn divider_width_mm(self) -> f32 {
        match self {
            LayoutVariant::Modern => 190.0,
            LayoutVariant::Classic => 80.0,
        }
    }
}

struct Cursor {
    pages: Vec<PagePlan>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![PagePlan::default()],
            y: MARGIN_MM,
        }
    }

    fn page(&mut self) -> &mut PagePlan {
        // `pages` always holds at least one page.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn reserve(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT_MM - BREAK_MARGIN_MM {
            self.pages.push(PagePlan::default());
            self.y = MARGIN_MM;
        }
    }

    fn gap(&mut self, height: f32) {
        self.y += height;
    }

    /// One line of text in a cell spanning the text width.
    fn cell(&mut self, text: &str, height: f32, face: FontFace, size_pt: f32, color: Rgb8, align: Align) {
        self.reserve(height);
        if !text.is_empty() {
            let width = FontMetricTable::for_face(face).measure_mm(text, size_pt);
            let x_mm = match align {
                Align::Left => MARGIN_MM + CELL_PADDING_MM,
                Align::Center => MARGIN_MM + (TEXT_WIDTH_MM - width) / 2.0,
            };
            let baseline_mm = self.y + height / 2.0 + 0.3 * size_pt * MM_PER_PT;
            self.page().ops.push(DrawOp::Text {
                text: text.to_string(),
                x_mm,
                baseline_mm,
                face,
                size_pt,
                color,
            });
        }
        self.y += height;
    }

    fn rule(&mut self, width: f32, color: Rgb8) {
        let y_mm = self.y;
        self.page().ops.push(DrawOp::Rule {
            x1_mm: MARGIN_MM,
            x2_mm: MARGIN_MM + width,
            y_mm,
            color,
        });
    }
}

pub fn plan_document(doc: &ResumeDocument, options: &RenderOptions) -> Vec<PagePlan> {
    let mut cursor = Cursor::new();
    let align = options.layout.header_align();

    cursor.cell(
        &pdf_safe_text(&doc.name.to_uppercase()),
        NAME_CELL_MM,
        FontFace::HelveticaBold,
        NAME_SIZE_PT,
        NAME_COLOR,
        align,
    );
    cursor.cell(
        &pdf_safe_text(&doc.contact_line()),
        CONTACT_CELL_MM,
        FontFace::Helvetica,
        CONTACT_SIZE_PT,
        CONTACT_COLOR,
        align,
    );
    if !doc.link.trim().is_empty() {
        cursor.cell(
            &pdf_safe_text(&doc.link),
            CONTACT_CELL_MM,
            FontFace::Helvetica,
            CONTACT_SIZE_PT,
            CONTACT_COLOR,
            align,
        );
    }
    cursor.gap(10.0);

    let body_table = FontMetricTable::for_face(FontFace::Helvetica);
    for (title, body) in doc.sections() {
        cursor.cell(
            &title.to_uppercase(),
            HEADING_CELL_MM,
            FontFace::HelveticaBold,
            HEADING_SIZE_PT,
            options.accent.into(),
            Align::Left,
        );
        cursor.rule(options.layout.divider_width_mm(), DIVIDER_COLOR);
        cursor.gap(2.0);

        let wrap_width = TEXT_WIDTH_MM - 2.0 * CELL_PADDING_MM;
        for line in body_table.wrap(&pdf_safe_text(body.trim()), BODY_SIZE_PT, wrap_width) {
            cursor.cell(
                &line,
                BODY_LINE_MM,
                FontFace::Helvetica,
                BODY_SIZE_PT,
                BODY_COLOR,
                Align::Left,
            );
        }
        cursor.gap(5.0);
    }

    cursor.pages
}
