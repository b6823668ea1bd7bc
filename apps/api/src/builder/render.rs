//! PDF emission for a laid-out résumé.

use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, Point, Rgb};
use tracing::debug;

use crate::builder::font_metrics::FontFace;
use crate::builder::layout::{plan_document, DrawOp, Rgb8, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::builder::models::{RenderOptions, ResumeDocument};
use crate::builder::RenderError;

const LAYER_NAME: &str = "Layer 1";
/// 0.2 mm, in points.
const RULE_THICKNESS_PT: f32 = 0.567;

fn pdf_color(c: Rgb8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(c.0) / 255.0,
        f32::from(c.1) / 255.0,
        f32::from(c.2) / 255.0,
        None,
    ))
}

/// Validates the résumé, lays it out and returns the PDF bytes.
pub fn render_document(
    doc: &ResumeDocument,
    options: &RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    doc.validate()?;
    let pages = plan_document(doc, options);

    let title = format!("{} Resume", doc.name.trim());
    let (pdf, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
        };
        let layer = pdf.get_page(page_index).get_layer(layer_index);

        for op in &page.ops {
            match op {
                DrawOp::Text {
                    text,
                    x_mm,
                    baseline_mm,
                    face,
                    size_pt,
                    color,
                } => {
                    let font: &IndirectFontRef = match face {
                        FontFace::Helvetica => &regular,
                        FontFace::HelveticaBold => &bold,
                    };
                    layer.set_fill_color(pdf_color(*color));
                    layer.use_text(
                        text.as_str(),
                        *size_pt,
                        Mm(*x_mm),
                        Mm(PAGE_HEIGHT_MM - baseline_mm),
                        font,
                    );
                }
                DrawOp::Rule {
                    x1_mm,
                    x2_mm,
                    y_mm,
                    color,
                } => {
                    let y = Mm(PAGE_HEIGHT_MM - y_mm);
                    layer.set_outline_color(pdf_color(*color));
                    layer.set_outline_thickness(RULE_THICKNESS_PT);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(Mm(*x1_mm), y), false),
                            (Point::new(Mm(*x2_mm), y), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    let bytes = pdf
        .save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    debug!("Rendered {} page(s), {} bytes", pages.len(), bytes.len());
    Ok(bytes)
}
