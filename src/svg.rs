//! SVG renderer for schematic views
//!
//! Turns the engine's primitives into standalone SVG documents. Geometry is
//! taken as-is; this module only decides colors, stroke styles and framing.

use cabinetkit_engine::{Baseline, Label, Paint, Role, Schematic, Shape, View, LEGEND};
use cabinetkit_settings::Palette;

/// Space around each view so labels outside the outline stay visible
pub const MARGIN: f64 = 20.0;

const TITLE_HEIGHT: f64 = 24.0;
const LEGEND_ROW_HEIGHT: f64 = 18.0;
const LEGEND_SWATCH: f64 = 12.0;
const FONT_SIZE: f64 = 12.0;
const DASH_PATTERN: &str = "5,5";

/// Render one view as a standalone document
pub fn render_view(view: &View, palette: &Palette) -> String {
    let width = view.width + 2.0 * MARGIN;
    let height = view.height + 2.0 * MARGIN;

    let mut out = String::new();
    open_document(&mut out, width, height);
    push_view_group(&mut out, view, palette, MARGIN, MARGIN);
    out.push_str("</svg>\n");
    out
}

/// Render all three views side by side with titles and the color legend
pub fn render_schematic(schematic: &Schematic, palette: &Palette) -> String {
    let views = schematic.views();
    let width: f64 = views.iter().map(|view| view.width + 2.0 * MARGIN).sum();
    let tallest = views
        .iter()
        .map(|view| view.height)
        .fold(0.0_f64, f64::max);
    let legend_top = TITLE_HEIGHT + tallest + 2.0 * MARGIN;
    let height = legend_top + LEGEND_ROW_HEIGHT * LEGEND.len() as f64;

    let mut out = String::new();
    open_document(&mut out, width, height);

    let mut x = 0.0;
    for view in views {
        out.push_str(&format!(
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="{}" font-weight="bold">{}</text>"#,
            x + MARGIN + view.width / 2.0,
            TITLE_HEIGHT - 6.0,
            FONT_SIZE + 2.0,
            view.kind.title()
        ));
        out.push('\n');
        push_view_group(&mut out, view, palette, x + MARGIN, TITLE_HEIGHT + MARGIN);
        x += view.width + 2.0 * MARGIN;
    }

    push_legend(&mut out, palette, MARGIN, legend_top);
    out.push_str("</svg>\n");
    out
}

fn open_document(out: &mut String, width: f64, height: f64) {
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    ));
    out.push('\n');
}

fn push_view_group(out: &mut String, view: &View, palette: &Palette, dx: f64, dy: f64) {
    out.push_str(&format!(r#"  <g transform="translate({} {})">"#, dx, dy));
    out.push('\n');
    for shape in &view.shapes {
        out.push_str("    ");
        out.push_str(&render_shape(shape, palette));
        out.push('\n');
    }
    for label in &view.labels {
        out.push_str("    ");
        out.push_str(&render_label(label, palette));
        out.push('\n');
    }
    out.push_str("  </g>\n");
}

fn push_legend(out: &mut String, palette: &Palette, x: f64, top: f64) {
    for (row, (role, text)) in LEGEND.iter().enumerate() {
        let y = top + row as f64 * LEGEND_ROW_HEIGHT;
        out.push_str(&format!(
            r#"  <rect x="{}" y="{}" width="{s}" height="{s}" fill="{}"/>"#,
            x,
            y,
            palette.color(*role),
            s = LEGEND_SWATCH
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"  <text x="{}" y="{}" font-size="{}" dominant-baseline="middle">{}</text>"#,
            x + LEGEND_SWATCH + 6.0,
            y + LEGEND_SWATCH / 2.0,
            FONT_SIZE,
            escape_text(text)
        ));
        out.push('\n');
    }
}

/// One `<rect>` element for a shape
pub fn render_shape(shape: &Shape, palette: &Palette) -> String {
    let color = palette.color(shape.role);
    let rect = shape.rect;
    let paint = match shape.paint {
        Paint::Fill { opacity } => format!(r#"fill="{}"{}"#, color, opacity_attr(opacity)),
        Paint::Outline {
            stroke_width,
            dashed,
        } => {
            let dash = if dashed {
                format!(r#" stroke-dasharray="{}""#, DASH_PATTERN)
            } else {
                String::new()
            };
            format!(
                r#"fill="none" stroke="{}" stroke-width="{}"{}"#,
                color, stroke_width, dash
            )
        }
        Paint::FillOutline {
            opacity,
            stroke_width,
        } => format!(
            r#"fill="{c}"{} stroke="{c}" stroke-width="{}""#,
            opacity_attr(opacity),
            stroke_width,
            c = color
        ),
    };

    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
        rect.x, rect.y, rect.width, rect.height, paint
    )
}

/// One `<text>` element for a label
pub fn render_label(label: &Label, palette: &Palette) -> String {
    let baseline = match label.baseline {
        Baseline::Alphabetic => "",
        Baseline::Middle => r#" dominant-baseline="middle""#,
    };
    let rotation = if label.rotation != 0.0 {
        format!(
            r#" transform="rotate({} {} {})""#,
            label.rotation, label.x, label.y
        )
    } else {
        String::new()
    };
    let color = match label.role {
        // Door captions sit on a tinted fill; keep them in the dimension ink
        Role::SolidDoor | Role::MirrorDoor | Role::GlassDoor => palette.color(Role::Dimensions),
        role => palette.color(role),
    };

    format!(
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}"{}{}>{}</text>"#,
        label.x,
        label.y,
        FONT_SIZE,
        color,
        baseline,
        rotation,
        escape_text(&label.text)
    )
}

fn opacity_attr(opacity: f64) -> String {
    if opacity < 1.0 {
        format!(r#" fill-opacity="{}""#, opacity)
    } else {
        String::new()
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
