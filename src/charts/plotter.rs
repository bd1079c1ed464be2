//! Chart Plotter Module
//! Draws the benchmark bar chart interactively using egui_plot.

use crate::charts::{BarChartLayout, ChartColor};
use egui::{Align2, Color32, RichText};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoint, PlotPoints, Text};

const ERROR_LINE_WIDTH: f32 = 1.5;

/// Creates the interactive bar chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Convert a chart color to an egui color with the given opacity.
    pub fn to_color32(color: ChartColor, alpha: f64) -> Color32 {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, a)
    }

    /// Draw bars with error bars and mean annotations.
    /// X-axis: categories, Y-axis: time
    pub fn draw_bar_chart(ui: &mut egui::Ui, layout: &BarChartLayout) {
        let ticks = layout.tick_labels();
        let formatter_layout = layout.clone();
        let style = &layout.style;

        let bar_fill = Self::to_color32(style.bar_color, style.bar_alpha);
        let error_color = Self::to_color32(style.error_color, 1.0);

        Plot::new("benchmark_bar_chart")
            .x_axis_label(layout.x_label.clone())
            .y_axis_label(layout.y_label.clone())
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(false)
            .show_grid([false, true])
            .include_x(layout.x_range.0)
            .include_x(layout.x_range.1)
            .include_y(layout.y_range.0)
            .include_y(layout.y_range.1)
            // One tick per bar center
            .x_grid_spacer(move |_input| {
                ticks
                    .iter()
                    .map(|(position, _)| GridMark {
                        value: *position,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                formatter_layout
                    .label_at(mark.value)
                    .map(str::to_string)
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                // Plot units per screen pixel, used for fixed pixel sizes
                let [dx_per_px, dy_per_px] = plot_ui.transform().dvalue_dpos();
                let cap_half = dx_per_px.abs() * style.cap_width_px as f64 / 2.0;
                let text_lift = dy_per_px.abs() * style.annotation_offset_px as f64;

                let bars: Vec<Bar> = layout
                    .bars
                    .iter()
                    .map(|b| {
                        Bar::new(b.position, b.height)
                            .width(style.bar_width)
                            .fill(bar_fill)
                            .stroke(egui::Stroke::NONE)
                            .name(&b.label)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(bar_fill));

                for bar in &layout.bars {
                    let x = bar.position;

                    // Error bar
                    plot_ui.line(
                        Line::new(PlotPoints::from(vec![[x, bar.error_low], [x, bar.error_high]]))
                            .color(error_color)
                            .width(ERROR_LINE_WIDTH),
                    );

                    // Caps
                    for y in [bar.error_low, bar.error_high] {
                        plot_ui.line(
                            Line::new(PlotPoints::from(vec![[x - cap_half, y], [x + cap_half, y]]))
                                .color(error_color)
                                .width(ERROR_LINE_WIDTH),
                        );
                    }

                    // Mean annotation, bottom-centered just above the bar
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, bar.height + text_lift),
                            RichText::new(&bar.annotation).color(Color32::BLACK),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::layout::SKY_BLUE;

    #[test]
    fn opaque_color_keeps_channels() {
        let c = ChartPlotter::to_color32(ChartColor::rgb(10, 20, 30), 1.0);
        assert_eq!(c, Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn bar_alpha_maps_to_byte() {
        let c = ChartPlotter::to_color32(SKY_BLUE, 0.75);
        assert_eq!(c.a(), 191);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(ChartPlotter::to_color32(SKY_BLUE, 2.0).a(), 255);
        assert_eq!(ChartPlotter::to_color32(SKY_BLUE, -1.0).a(), 0);
    }
}
