//! App module - contains the main application state and logic

mod submission;

use crate::settings::Settings;
use crate::theme::{self, Palette};
use crate::ui::ShellEvent;
use crate::waitlist::{WaitlistClient, WaitlistForm};
use chrono::Datelike;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

/// Failures that keep the window from opening at all
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: WaitlistForm,
    pub(crate) client: WaitlistClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) pending: Option<submission::PendingSubmission>,
    pub(crate) palette: Palette,
    pub(crate) settings: Settings,
    pub(crate) copyright_year: i32,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, InitError> {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Display mode is fixed for the session
        let palette = Palette::for_mode(settings.display_mode);
        cc.egui_ctx.set_theme(if palette.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        theme::apply_visuals(&cc.egui_ctx, &palette);

        let client = WaitlistClient::new(settings.endpoint_or_default())?;
        info!(endpoint = client.endpoint(), mode = ?settings.display_mode, "Waitlist ready");

        Ok(Self {
            form: WaitlistForm::new(),
            client,
            runtime: tokio::runtime::Runtime::new()?,
            pending: None,
            palette,
            copyright_year: chrono::Local::now().year(),
            window_pos: None,
            window_size: None,
            needs_center: settings.window_x.is_none() || settings.window_y.is_none(),
            settings,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }

    /// Apply one user event from the shell
    pub(crate) fn handle_event(&mut self, ctx: &egui::Context, event: ShellEvent) {
        match event {
            ShellEvent::EmailEdited(text) => self.form.update_email(text),
            ShellEvent::SubmitRequested => self.submit_waitlist(ctx),
        }
    }
}
