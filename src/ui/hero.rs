//! Hero card: copy, platform badges, waitlist form, and the phone mock

use super::{components, form, phone, Landing, ShellEvent};
use crate::theme::{self, Palette};
use crate::types::PLATFORM_BADGES;
use eframe::egui;
use egui::text::{LayoutJob, TextFormat};

pub(super) fn show(ui: &mut egui::Ui, landing: &Landing<'_>, events: &mut Vec<ShellEvent>) {
    let palette = landing.palette;
    theme::hero_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        if ui.available_width() >= theme::TWO_COLUMN_MIN_WIDTH {
            ui.columns(2, |cols| {
                cols[0].add_space(theme::SPACING_XXL);
                copy(&mut cols[0], landing, events);
                cols[1].vertical_centered(|ui| phone::show(ui, palette));
            });
        } else {
            copy(ui, landing, events);
            ui.add_space(40.0);
            ui.vertical_centered(|ui| phone::show(ui, palette));
        }
    });
}

fn copy(ui: &mut egui::Ui, landing: &Landing<'_>, events: &mut Vec<ShellEvent>) {
    let palette = landing.palette;

    tagline(ui, palette);
    ui.add_space(theme::SPACING_XL);

    ui.label(headline(palette, ui.available_width()));
    ui.add_space(theme::SPACING_XL);

    ui.label(lead(palette, ui.available_width().min(560.0)));
    ui.add_space(24.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_LG;
        for badge in &PLATFORM_BADGES {
            components::platform_badge(ui, badge, palette);
        }
    });
    ui.add_space(theme::SPACING_XXL);

    form::show(ui, landing.form, palette, events);
}

/// "Built for Twitch creators" pill
fn tagline(ui: &mut egui::Ui, palette: &Palette) {
    theme::pill_frame(palette).show(ui, |ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.horizontal(|ui| {
            components::dot(ui, 8.0, theme::TWITCH);
            ui.add_space(theme::SPACING_MD);
            let small = |text: &str, color: egui::Color32| {
                egui::RichText::new(text)
                    .size(theme::FONT_SMALL)
                    .color(color)
            };
            ui.label(small("Built for ", palette.text_muted));
            ui.label(small("Twitch", theme::TWITCH).strong());
            ui.label(small(" creators — Kick support soon", palette.text_muted));
        });
    });
}

fn headline(palette: &Palette, wrap_width: f32) -> LayoutJob {
    let plain = TextFormat {
        font_id: egui::FontId::proportional(theme::FONT_HERO),
        color: palette.text_primary,
        ..Default::default()
    };
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;
    job.append("Manage your ", 0.0, plain.clone());
    job.append(
        "stream ",
        0.0,
        TextFormat {
            color: theme::FUCHSIA,
            ..plain.clone()
        },
    );
    job.append(
        "clips",
        0.0,
        TextFormat {
            color: theme::SKY,
            ..plain.clone()
        },
    );
    job.append(", on your phone.", 0.0, plain);
    job
}

fn lead(palette: &Palette, wrap_width: f32) -> LayoutJob {
    let body = TextFormat {
        font_id: egui::FontId::proportional(theme::FONT_LEAD),
        color: palette.text_body,
        ..Default::default()
    };
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;
    job.append("Clipzy helps ", 0.0, body.clone());
    job.append(
        "Twitch",
        0.0,
        TextFormat {
            color: theme::TWITCH,
            ..body.clone()
        },
    );
    job.append(
        " creators collect, trim, and export clips fast—so you can post more and get back to streaming.",
        0.0,
        body,
    );
    job
}
