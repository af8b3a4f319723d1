//! Transfer function editor embedded in the volume section of the menu.

use egui::{Color32, Id, Pos2, Rect, Sense, Stroke, Ui};
use glam::Vec3;
use molmenu_core::{OpacityChange, VolumeOptions};

use crate::panel::user_changed;

/// Height of the transfer function plot.
const PLOT_HEIGHT: f32 = 96.0;

/// Upper bound on the columns of a painted gradient.
const MAX_GRADIENT_COLUMNS: usize = 256;

/// Opacities being edited, and the input they were seeded from.
#[derive(Clone, Default)]
struct EditBuffer {
    source: Vec<f32>,
    edited: Vec<f32>,
}

/// Converts a linear RGB triple (0..1) to an egui color.
pub fn to_color32(color: Vec3) -> Color32 {
    let c = color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    Color32::from_rgb(c.x.round() as u8, c.y.round() as u8, c.z.round() as u8)
}

/// Color of the color transfer function at scalar value `x`.
///
/// Interpolates linearly between control points; clamps outside them.
pub fn color_at(options: &VolumeOptions, x: f32) -> Vec3 {
    piecewise_linear(&options.colors_scalar_value, &options.colors, x, Vec3::lerp)
        .unwrap_or(Vec3::ZERO)
}

/// Opacity of the opacity transfer function at scalar value `x`.
pub fn opacity_at(options: &VolumeOptions, x: f32) -> f32 {
    piecewise_linear(&options.opacity_scalar_value, &options.opacity, x, |a, b, t| {
        a + (b - a) * t
    })
    .unwrap_or(0.0)
}

fn piecewise_linear<T: Copy>(
    xs: &[f32],
    values: &[T],
    x: f32,
    lerp: impl Fn(T, T, f32) -> T,
) -> Option<T> {
    let n = xs.len().min(values.len());
    if n == 0 {
        return None;
    }
    if x <= xs[0] {
        return Some(values[0]);
    }
    for i in 1..n {
        if x <= xs[i] {
            let span = xs[i] - xs[i - 1];
            let t = if span > 0.0 { (x - xs[i - 1]) / span } else { 1.0 };
            return Some(lerp(values[i - 1], values[i], t));
        }
    }
    Some(values[n - 1])
}

/// Number of flat-colored columns used to draw a gradient `width` wide.
pub fn gradient_columns(width: f32) -> usize {
    (width.max(1.0) as usize).min(MAX_GRADIENT_COLUMNS)
}

/// Maps a scalar value in `range` to a horizontal position in `rect`.
fn x_to_screen(rect: Rect, range: [f32; 2], x: f32) -> f32 {
    let span = range[1] - range[0];
    let t = if span > 0.0 { (x - range[0]) / span } else { 0.0 };
    rect.left() + t.clamp(0.0, 1.0) * rect.width()
}

fn draw_plot(ui: &Ui, rect: Rect, options: &VolumeOptions, opacities: &[f32]) {
    let painter = ui.painter_at(rect);
    let [min, max] = options.range;

    let columns = gradient_columns(rect.width());
    let column_width = rect.width() / columns as f32;
    for i in 0..columns {
        let t = i as f32 / columns as f32;
        let x = min + (max - min) * t;
        let left = rect.left() + i as f32 * column_width;
        let column = Rect::from_min_max(
            Pos2::new(left, rect.top()),
            Pos2::new(left + column_width, rect.bottom()),
        );
        painter.rect_filled(column, 0.0, to_color32(color_at(options, x)));
    }

    if let Some(histogram) = options.histograms.first() {
        let bins = histogram.normalized();
        let bar_width = rect.width() / bins.len().max(1) as f32;
        for (i, h) in bins.iter().enumerate() {
            let left = rect.left() + i as f32 * bar_width;
            let bar = Rect::from_min_max(
                Pos2::new(left, rect.bottom() - h * rect.height()),
                Pos2::new(left + bar_width, rect.bottom()),
            );
            painter.rect_filled(bar, 0.0, Color32::from_black_alpha(80));
        }
    }

    let points: Vec<Pos2> = options
        .opacity_scalar_value
        .iter()
        .zip(opacities)
        .map(|(&x, &a)| {
            Pos2::new(
                x_to_screen(rect, options.range, x),
                rect.bottom() - a.clamp(0.0, 1.0) * rect.height(),
            )
        })
        .collect();
    let stroke = Stroke::new(1.5, Color32::WHITE);
    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], stroke);
    }
    for &p in &points {
        painter.circle_filled(p, 3.0, Color32::WHITE);
    }
}

/// Shows the transfer function plot and one editor per opacity point.
///
/// Returns the edited opacities when the user changed one this frame.
pub fn show_volume_controls(ui: &mut Ui, id: Id, options: &VolumeOptions) -> Option<OpacityChange> {
    let mut buffer = ui
        .data_mut(|d| d.get_temp::<EditBuffer>(id))
        .unwrap_or_default();
    if buffer.source != options.opacity {
        buffer = EditBuffer {
            source: options.opacity.clone(),
            edited: options.opacity.clone(),
        };
    }

    let width = ui.available_width();
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(width, PLOT_HEIGHT), Sense::hover());
    draw_plot(ui, rect, options, &buffer.edited);

    let mut changed = false;
    egui::CollapsingHeader::new("Opacity")
        .id_salt(id.with("opacity_points"))
        .default_open(false)
        .show(ui, |ui| {
            egui::Grid::new(id.with("opacity_grid"))
                .num_columns(2)
                .show(ui, |ui| {
                    for (x, opacity) in options
                        .opacity_scalar_value
                        .iter()
                        .zip(buffer.edited.iter_mut())
                    {
                        ui.label(format!("{x:.3}"));
                        let response =
                            ui.add(egui::DragValue::new(opacity).speed(0.01).range(0.0..=1.0));
                        if user_changed(&response) {
                            changed = true;
                        }
                        ui.end_row();
                    }
                });
        });

    let change = changed.then(|| OpacityChange {
        opacities: buffer.edited.clone(),
        opacities_x: options.opacity_scalar_value.clone(),
    });
    ui.data_mut(|d| d.insert_temp(id, buffer));
    change
}
