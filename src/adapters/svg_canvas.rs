use crate::core::{Canvas, Rgba};
use kurbo::{Point, Size};
use std::fmt::Write;

/// Records one frame of draw calls and serializes it as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    size: Size,
    background: Option<Rgba>,
    body: String,
}

impl SvgCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            body: String::new(),
        }
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn to_svg(&self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.size.width),
            h = fmt_num(self.size.height),
        );
        if let Some(bg) = self.background {
            let _ = write!(
                out,
                r#"<rect width="100%" height="100%" fill="{}"/>"#,
                css_color(bg)
            );
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas for SvgCanvas {
    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            css_color(color)
        );
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            css_color(color),
            fmt_num(width)
        );
    }
}

fn css_color(color: Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.r,
        color.g,
        color.b,
        fmt_num(color.a.clamp(0.0, 1.0))
    )
}

// 兩位小數已足夠，並去掉尾端的 0
fn fmt_num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
