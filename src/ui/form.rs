//! Waitlist card: email input + submit, or the confirmation once joined

use super::{components, ShellEvent};
use crate::constants::{MSG_NO_SPAM, MSG_SUCCESS_BODY, MSG_SUCCESS_TITLE};
use crate::theme::{self, Palette};
use crate::waitlist::{FormState, WaitlistForm};
use eframe::egui;
use egui_phosphor::regular as icons;

const BUTTON_WIDTH: f32 = 150.0;

pub(super) fn show(
    ui: &mut egui::Ui,
    form: &WaitlistForm,
    palette: &Palette,
    events: &mut Vec<ShellEvent>,
) {
    theme::form_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());

        if form.is_submitted() {
            confirmation(ui, palette);
        } else {
            input_row(ui, form, palette, events);
            if let Some(error) = form.error() {
                ui.add_space(theme::SPACING_XS);
                ui.label(
                    egui::RichText::new(error)
                        .size(theme::FONT_LABEL)
                        .color(palette.error),
                );
            }
        }

        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(MSG_NO_SPAM)
                .size(theme::FONT_CAPTION)
                .color(palette.text_dim),
        );
    });
}

fn input_row(
    ui: &mut egui::Ui,
    form: &WaitlistForm,
    palette: &Palette,
    events: &mut Vec<ShellEvent>,
) {
    let submitting = form.state() == FormState::Submitting;

    ui.horizontal(|ui| {
        let input_width = (ui.available_width() - BUTTON_WIDTH - theme::SPACING_MD).max(160.0);

        egui::Frame::new()
            .fill(palette.bg_input)
            .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, palette.border))
            .corner_radius(theme::RADIUS_INPUT)
            .inner_margin(egui::Margin::symmetric(12, 0))
            .show(ui, |ui| {
                ui.set_width(input_width - 24.0);
                ui.set_height(theme::INPUT_HEIGHT);
                ui.horizontal_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(icons::ENVELOPE_SIMPLE)
                                .size(16.0)
                                .color(theme::NEUTRAL_400),
                        )
                        .selectable(false),
                    );

                    // The form owns the text; edits are reported back as events.
                    let mut buffer = form.email().to_owned();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut buffer)
                            .id_salt("waitlist_email")
                            .hint_text("Email address")
                            .font(egui::FontId::proportional(theme::FONT_BODY))
                            .text_color(palette.text_primary)
                            .frame(false)
                            .desired_width(ui.available_width()),
                    );
                    if response.changed() {
                        events.push(ShellEvent::EmailEdited(buffer));
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        events.push(ShellEvent::SubmitRequested);
                    }
                });
            });

        let label = if submitting {
            "Joining…".to_string()
        } else {
            format!("Join waitlist  {}", icons::ARROW_RIGHT)
        };
        let button = theme::button_primary(
            egui::RichText::new(label)
                .size(theme::FONT_BODY)
                .strong()
                .color(palette.button_text),
            palette,
        )
        .min_size(egui::vec2(BUTTON_WIDTH, theme::INPUT_HEIGHT));

        let response = ui.add_enabled(!submitting, button);
        if submitting {
            ui.add(egui::Spinner::new().size(16.0).color(palette.text_muted));
        } else if response.clicked() {
            events.push(ShellEvent::SubmitRequested);
        }
    });
}

fn confirmation(ui: &mut egui::Ui, palette: &Palette) {
    ui.horizontal(|ui| {
        components::icon_circle(
            ui,
            icons::CHECK,
            36.0,
            theme::STATUS_SUCCESS_BG,
            theme::STATUS_SUCCESS,
        );
        ui.add_space(theme::SPACING_SM);
        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = theme::SPACING_XS;
            ui.label(
                egui::RichText::new(MSG_SUCCESS_TITLE)
                    .size(theme::FONT_BODY)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.label(
                egui::RichText::new(MSG_SUCCESS_BODY)
                    .size(theme::FONT_LABEL)
                    .color(palette.text_muted),
            );
        });
    });
}
