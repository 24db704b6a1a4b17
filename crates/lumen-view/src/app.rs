//! eframe application that paints a [`Figure`].

use egui::{Align2, Color32, ColorImage, FontId, Pos2, Rect, Stroke, TextureHandle, TextureOptions, Vec2};
use tracing::{debug, trace};

use crate::figure::{bar_heights, fit_size, grid_cell, Figure, PanelContent, COLS, ROWS, X_LABEL, Y_LABEL};

const TITLE_HEIGHT: f32 = 22.0;
const AXIS_MARGIN: f32 = 28.0;
const CELL_PADDING: f32 = 8.0;
const BAR_COLOR: Color32 = Color32::from_rgb(70, 110, 190);

/// Configuration for launching the viewer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Initial window size in points.
    pub inner_size: [f32; 2],
    /// Smallest window size in points.
    pub min_inner_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { inner_size: [1000.0, 1000.0], min_inner_size: [480.0, 480.0] }
    }
}

/// Comparison figure window.
pub struct FigureApp {
    figure: Figure,
    /// One slot per panel; `Some` for uploaded image panels.
    textures: Vec<Option<TextureHandle>>,
}

impl FigureApp {
    /// Creates the app and uploads image panels as textures.
    pub fn new(cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        let textures = figure
            .panels
            .iter()
            .enumerate()
            .map(|(i, panel)| match &panel.content {
                PanelContent::Image(image) => {
                    let size = [image.width() as usize, image.height() as usize];
                    let color = ColorImage::from_gray(size, image.as_slice());
                    debug!(panel = %panel.title, width = size[0], height = size[1], "Uploading texture");
                    Some(cc.egui_ctx.load_texture(format!("panel_{i}"), color, TextureOptions::NEAREST))
                }
                PanelContent::Histogram(_) => None,
            })
            .collect();

        Self { figure, textures }
    }

    /// Handle keyboard input. Returns true if should exit.
    fn handle_input(&self, ctx: &egui::Context) -> bool {
        ctx.input(|i| i.key_pressed(egui::Key::Escape))
    }

    fn draw_grid(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let area = ui.available_rect_before_wrap();
            let cell = Vec2::new(area.width() / COLS as f32, area.height() / ROWS as f32);
            let painter = ui.painter_at(area);
            let text_color = ui.visuals().text_color();

            for (index, panel) in self.figure.panels.iter().enumerate() {
                let (row, col) = grid_cell(index);
                let cell_rect = Rect::from_min_size(
                    area.min + Vec2::new(col as f32 * cell.x, row as f32 * cell.y),
                    cell,
                )
                .shrink(CELL_PADDING);

                painter.text(
                    Pos2::new(cell_rect.center().x, cell_rect.top()),
                    Align2::CENTER_TOP,
                    &panel.title,
                    FontId::proportional(15.0),
                    text_color,
                );

                let body = Rect::from_min_max(
                    Pos2::new(cell_rect.left(), cell_rect.top() + TITLE_HEIGHT),
                    cell_rect.max,
                );

                match (&panel.content, &self.textures[index]) {
                    (PanelContent::Image(_), Some(texture)) => draw_image(&painter, texture, body),
                    (PanelContent::Histogram(hist), _) => {
                        draw_histogram(&painter, &bar_heights(hist), hist.peak(), body, text_color)
                    }
                    (PanelContent::Image(_), None) => {}
                }
            }

            ui.allocate_rect(area, egui::Sense::hover());
        });
    }
}

fn draw_image(painter: &egui::Painter, texture: &TextureHandle, body: Rect) {
    let tex = texture.size_vec2();
    let [w, h] = fit_size([tex.x, tex.y], [body.width(), body.height()]);
    let rect = Rect::from_center_size(body.center(), Vec2::new(w, h));
    painter.image(
        texture.id(),
        rect,
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );
}

fn draw_histogram(painter: &egui::Painter, heights: &[f32], peak: u64, body: Rect, text_color: Color32) {
    let plot = Rect::from_min_max(
        Pos2::new(body.left() + AXIS_MARGIN * 2.0, body.top() + 4.0),
        Pos2::new(body.right() - 4.0, body.bottom() - AXIS_MARGIN),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let bar_width = plot.width() / heights.len() as f32;
    for (i, &h) in heights.iter().enumerate() {
        if h <= 0.0 {
            continue;
        }
        let x = plot.left() + i as f32 * bar_width;
        let bar = Rect::from_min_max(
            Pos2::new(x, plot.bottom() - h * plot.height()),
            Pos2::new(x + bar_width.max(1.0), plot.bottom()),
        );
        painter.rect_filled(bar, 0.0, BAR_COLOR);
    }

    let axis = Stroke::new(1.0, text_color);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);

    let small = FontId::proportional(11.0);
    for tick in [0u32, 64, 128, 192, 256] {
        let x = plot.left() + tick as f32 * bar_width;
        painter.text(Pos2::new(x, plot.bottom() + 2.0), Align2::CENTER_TOP, tick.to_string(), small.clone(), text_color);
    }
    painter.text(plot.left_bottom() + Vec2::new(-4.0, 0.0), Align2::RIGHT_BOTTOM, "0", small.clone(), text_color);
    painter.text(plot.left_top() + Vec2::new(-4.0, 0.0), Align2::RIGHT_TOP, peak.to_string(), small.clone(), text_color);

    painter.text(
        Pos2::new(plot.center().x, body.bottom()),
        Align2::CENTER_BOTTOM,
        X_LABEL,
        small.clone(),
        text_color,
    );
    painter.text(
        Pos2::new(body.left(), plot.center().y),
        Align2::LEFT_CENTER,
        Y_LABEL,
        small,
        text_color,
    );
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.handle_input(ctx) {
            trace!("Escape pressed, closing figure");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        self.draw_grid(ctx);
    }
}
