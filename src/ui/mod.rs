//! UI module - the landing page shell
//!
//! Rendering is a pure function of the waitlist form and the palette. User
//! input comes back as [`ShellEvent`]s for the app to apply.

pub mod components;
mod form;
mod hero;
mod phone;

use crate::theme::{self, Palette};
use crate::waitlist::WaitlistForm;
use eframe::egui;

/// User intent captured by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    EmailEdited(String),
    SubmitRequested,
}

/// Everything the shell needs for one frame
pub struct Landing<'a> {
    pub form: &'a WaitlistForm,
    pub palette: &'a Palette,
    pub copyright_year: i32,
}

pub fn show(ctx: &egui::Context, landing: &Landing<'_>) -> Vec<ShellEvent> {
    let palette = landing.palette;
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("footer")
        .exact_height(theme::FOOTER_HEIGHT)
        .frame(
            egui::Frame::new()
                .fill(palette.bg_base)
                .inner_margin(egui::Margin::symmetric(24, 0)),
        )
        .show_separator_line(false)
        .show(ctx, |ui| footer(ui, palette, landing.copyright_year));

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(palette.bg_base))
        .show(ctx, |ui| {
            paint_backdrop(ui, palette);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
                    let side = ((ui.available_width() - width) / 2.0).max(0.0);
                    ui.add_space(theme::SPACING_XL);
                    ui.horizontal(|ui| {
                        ui.add_space(side);
                        ui.vertical(|ui| {
                            ui.set_width(width - theme::SPACING_XXL);
                            hero::show(ui, landing, &mut events);
                        });
                    });
                    ui.add_space(theme::SPACING_XL);
                });
        });

    events
}

/// Ambient glows in the corners plus a faint grid
fn paint_backdrop(ui: &egui::Ui, palette: &Palette) {
    let rect = ui.max_rect();
    let painter = ui.painter();

    let spacing = 24.0;
    let stroke = egui::Stroke::new(theme::STROKE_DEFAULT, palette.grid_line);
    let mut x = rect.left();
    while x < rect.right() {
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            stroke,
        );
        x += spacing;
    }
    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            stroke,
        );
        y += spacing;
    }

    let glows = [
        (rect.right_top() + egui::vec2(-64.0, 64.0), 230.0, theme::PURPLE_GLOW),
        (rect.right_top() + egui::vec2(-160.0, 120.0), 160.0, theme::PINK_GLOW),
        (rect.left_bottom() + egui::vec2(80.0, -80.0), 210.0, theme::SKY_GLOW),
    ];
    for (center, radius, color) in glows {
        components::soft_glow(painter, center, radius, color);
    }
}

fn footer(ui: &mut egui::Ui, palette: &Palette, year: i32) {
    let rect = ui.max_rect();
    ui.painter().line_segment(
        [rect.left_top(), rect.right_top()],
        egui::Stroke::new(theme::STROKE_DEFAULT, palette.border),
    );
    ui.horizontal_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("© {} Clipzy. All rights reserved.", year))
                .size(theme::FONT_LABEL)
                .color(palette.text_dim),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("Built for streamers who create.")
                    .size(theme::FONT_LABEL)
                    .color(palette.text_muted),
            );
        });
    });
}
