//! Minimal SVG writer for [`RenderFrame`] scenes.
//!
//! The writer is dependency-free: frames carry plain pixel-space
//! primitives, so serializing them is string assembly plus the plot-area
//! clip path.

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Surface, TextHAlign};

const CLIP_ID: &str = "plot-clip";

/// Serializes a validated frame into a standalone SVG document.
pub fn frame_to_svg(frame: &RenderFrame) -> ChartResult<String> {
    frame.validate()?;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        frame.viewport.width, frame.viewport.height
    );
    let _ = writeln!(
        svg,
        r#"  <defs><clipPath id="{CLIP_ID}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
        fmt_px(frame.clip.x),
        fmt_px(frame.clip.y),
        fmt_px(frame.clip.width),
        fmt_px(frame.clip.height),
    );

    for rect in &frame.rects {
        let _ = write!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            fmt_px(rect.x),
            fmt_px(rect.y),
            fmt_px(rect.width),
            fmt_px(rect.height),
            rect.fill.to_hex(),
        );
        if rect.fill.alpha < 1.0 {
            let _ = write!(svg, r#" fill-opacity="{}""#, fmt_px(rect.fill.alpha));
        }
        if let Some(stroke) = rect.stroke {
            let _ = write!(
                svg,
                r#" stroke="{}" stroke-width="{}""#,
                stroke.color.to_hex(),
                fmt_px(stroke.width),
            );
        }
        let _ = writeln!(svg, "/>");
    }

    for line in &frame.lines {
        let _ = write!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
            fmt_px(line.x1),
            fmt_px(line.y1),
            fmt_px(line.x2),
            fmt_px(line.y2),
            line.color.to_hex(),
            fmt_px(line.stroke_width),
        );
        if line.color.alpha < 1.0 {
            let _ = write!(svg, r#" stroke-opacity="{}""#, fmt_px(line.color.alpha));
        }
        let _ = writeln!(svg, "/>");
    }

    for polyline in &frame.polylines {
        let mut points = String::new();
        for (x, y) in &polyline.points {
            if !points.is_empty() {
                points.push(' ');
            }
            let _ = write!(points, "{},{}", fmt_px(*x), fmt_px(*y));
        }
        let _ = write!(
            svg,
            r#"  <polyline points="{points}" fill="none" stroke="{}" stroke-width="{}""#,
            polyline.color.to_hex(),
            fmt_px(polyline.stroke_width),
        );
        if polyline.clipped {
            let _ = write!(svg, r#" clip-path="url(#{CLIP_ID})""#);
        }
        let _ = writeln!(svg, "/>");
    }

    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = write!(
            svg,
            r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}""#,
            fmt_px(text.x),
            fmt_px(text.y),
            fmt_px(text.font_size_px),
            text.color.to_hex(),
        );
        if text.rotation_degrees != 0.0 {
            let _ = write!(
                svg,
                r#" transform="rotate({} {} {})""#,
                fmt_px(text.rotation_degrees),
                fmt_px(text.x),
                fmt_px(text.y),
            );
        }
        let _ = writeln!(svg, ">{}</text>", escape_text(&text.text));
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Surface committing frames as per-container SVG documents.
#[derive(Debug, Default)]
pub struct SvgSurface {
    containers: IndexMap<String, Viewport>,
    documents: IndexMap<String, String>,
}

impl SvgSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_container(mut self, container_id: impl Into<String>, viewport: Viewport) -> Self {
        self.containers.insert(container_id.into(), viewport);
        self
    }

    /// Latest committed document for a container, if any frame landed yet.
    #[must_use]
    pub fn document(&self, container_id: &str) -> Option<&str> {
        self.documents.get(container_id).map(String::as_str)
    }
}

impl Surface for SvgSurface {
    fn container_size(&self, container_id: &str) -> Option<Viewport> {
        self.containers.get(container_id).copied()
    }

    fn commit(&mut self, container_id: &str, frame: &RenderFrame) -> ChartResult<()> {
        if !self.containers.contains_key(container_id) {
            return Err(ChartError::ContainerNotFound {
                container_id: container_id.to_owned(),
            });
        }

        let document = frame_to_svg(frame)?;
        self.documents.insert(container_id.to_owned(), document);
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Trims float noise out of emitted attributes (`50` instead of `50.0`,
/// `12.5` kept as-is).
fn fmt_px(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.3}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    }
}
