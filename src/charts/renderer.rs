//! Static Chart Renderer
//! Renders the benchmark bar chart to PNG or SVG with plotters.
//!
//! Layout:
//! 1. Title centered above the plot
//! 2. Bars with black error bars and capped ends
//! 3. Mean value printed above every bar
//! 4. Category tick labels and axis descriptions, with label areas sized
//!    from measured text so nothing is clipped

use crate::charts::{BarChartLayout, ChartColor};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Default figure size in pixels
pub const DEFAULT_SIZE: (u32, u32) = (640, 480);

const FONT_FAMILY: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 20;
const DESC_FONT_SIZE: u32 = 16;
const TICK_FONT_SIZE: u32 = 14;
const ANNOTATION_FONT_SIZE: u32 = 13;

const MARGIN_PX: u32 = 12;
/// Gap between tick labels, axis descriptions and the plot edge
const LABEL_PAD_PX: u32 = 10;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write chart file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported image format: '{0}' (expected png or svg)")]
    UnsupportedFormat(String),
    #[error("Pixel buffer does not match a {0}x{1} image")]
    Buffer(u32, u32),
}

fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Image formats the static renderer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(ExportFormat::Png),
            "svg" => Ok(ExportFormat::Svg),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn to_rgb(color: ChartColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Draw the complete chart onto any plotters drawing area.
    pub fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        layout: &BarChartLayout,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let tick_style: TextStyle = (FONT_FAMILY, TICK_FONT_SIZE).into_font().into();
        let desc_style: TextStyle = (FONT_FAMILY, DESC_FONT_SIZE).into_font().into();

        // Size the label areas from the text they must hold
        let (_, desc_h) = root.estimate_text_size(&layout.y_label, &desc_style)?;
        let mut y_tick_w = 0;
        for value in [layout.y_range.0, layout.y_range.1] {
            let (w, _) = root.estimate_text_size(&Self::format_y_tick(value), &tick_style)?;
            y_tick_w = y_tick_w.max(w);
        }
        let mut x_tick_h = 0;
        for (_, label) in layout.tick_labels() {
            let (_, h) = root.estimate_text_size(&label, &tick_style)?;
            x_tick_h = x_tick_h.max(h);
        }

        let y_area = y_tick_w + desc_h + 2 * LABEL_PAD_PX;
        let x_area = x_tick_h + desc_h + 2 * LABEL_PAD_PX;
        debug!(y_area, x_area, "Computed label areas");

        let mut chart = ChartBuilder::on(root)
            .caption(&layout.title, (FONT_FAMILY, TITLE_FONT_SIZE))
            .margin(MARGIN_PX)
            .x_label_area_size(x_area)
            .y_label_area_size(y_area)
            .build_cartesian_2d(
                layout.x_range.0..layout.x_range.1,
                layout.y_range.0..layout.y_range.1,
            )?;

        let x_formatter = |x: &f64| layout.label_at(*x).map(str::to_string).unwrap_or_default();
        let y_formatter = |y: &f64| Self::format_y_tick(*y);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(layout.bars.len().max(1))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .x_desc(layout.x_label.as_str())
            .y_desc(layout.y_label.as_str())
            .label_style(tick_style)
            .axis_desc_style(desc_style)
            .draw()?;

        let style = &layout.style;
        let bar_style = to_rgb(style.bar_color).mix(style.bar_alpha).filled();
        let error_style = to_rgb(style.error_color).stroke_width(1);
        let half_cap = (style.cap_width_px / 2) as i32;

        // Bars
        chart.draw_series(layout.bars.iter().map(|bar| {
            let (left, right) = layout.bar_extent(bar);
            Rectangle::new([(left, 0.0), (right, bar.height)], bar_style)
        }))?;

        // Error bars
        chart.draw_series(layout.bars.iter().map(|bar| {
            PathElement::new(
                vec![(bar.position, bar.error_low), (bar.position, bar.error_high)],
                error_style,
            )
        }))?;

        // Caps, fixed pixel width regardless of scale
        chart.draw_series(layout.bars.iter().flat_map(|bar| {
            [bar.error_low, bar.error_high].map(|y| {
                EmptyElement::at((bar.position, y))
                    + PathElement::new(vec![(-half_cap, 0), (half_cap, 0)], error_style)
            })
        }))?;

        // Mean annotations
        let annotation_style = (FONT_FAMILY, ANNOTATION_FONT_SIZE)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(layout.bars.iter().map(|bar| {
            EmptyElement::at((bar.position, bar.height))
                + Text::new(
                    bar.annotation.clone(),
                    (0, -style.annotation_offset_px),
                    annotation_style.clone(),
                )
        }))?;

        Ok(())
    }

    fn format_y_tick(value: f64) -> String {
        format!("{:.0}", value)
    }

    /// Render to PNG-encoded bytes.
    pub fn render_png_bytes(
        layout: &BarChartLayout,
        (width, height): (u32, u32),
    ) -> Result<Vec<u8>, RenderError> {
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, layout).map_err(draw_error)?;
            root.present().map_err(draw_error)?;
        }

        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(RenderError::Buffer(width, height))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        debug!(width, height, bytes = bytes.len(), "Rendered PNG");
        Ok(bytes)
    }

    /// Render to an SVG document.
    pub fn render_svg_string(
        layout: &BarChartLayout,
        size: (u32, u32),
    ) -> Result<String, RenderError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            Self::draw(&root, layout).map_err(draw_error)?;
            root.present().map_err(draw_error)?;
        }
        Ok(svg)
    }

    /// Write the chart to `path`, format chosen by extension.
    /// Returns the number of bytes written.
    pub fn save(
        layout: &BarChartLayout,
        path: &Path,
        size: (u32, u32),
    ) -> Result<usize, RenderError> {
        let bytes = match ExportFormat::from_path(path)? {
            ExportFormat::Png => Self::render_png_bytes(layout, size)?,
            ExportFormat::Svg => Self::render_svg_string(layout, size)?.into_bytes(),
        };

        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "Saved chart");
        Ok(bytes.len())
    }
}
