//! Background waitlist submission

use super::App;
use crate::waitlist::{SubmitError, WaitlistClient, WaitlistForm};
use eframe::egui;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, warn};

pub(crate) type PendingSubmission = oneshot::Receiver<Result<(), SubmitError>>;

/// Send one signup on the runtime and hand the result back to the UI thread.
fn spawn_submission(
    email: String,
    client: WaitlistClient,
    ctx: egui::Context,
    runtime: &tokio::runtime::Runtime,
) -> PendingSubmission {
    let (tx, rx) = oneshot::channel();
    runtime.spawn(async move {
        let result = client.submit(&email).await;
        if tx.send(result).is_err() {
            debug!("Submission finished after the UI stopped listening");
        }
        ctx.request_repaint();
    });
    rx
}

/// Apply a finished submission to the form. Leaves `pending` untouched while in flight.
fn poll_pending(pending: &mut Option<PendingSubmission>, form: &mut WaitlistForm) {
    let Some(rx) = pending.as_mut() else {
        return;
    };
    let result = match rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Closed) => {
            warn!("Submission task ended without a result");
            Err(SubmitError::Unexpected(
                "the request ended before a response arrived".into(),
            ))
        }
    };
    *pending = None;
    form.finish_submit(result);
}

impl App {
    pub fn submit_waitlist(&mut self, ctx: &egui::Context) {
        if self.pending.is_some() {
            return;
        }
        let Some(email) = self.form.begin_submit() else {
            return;
        };
        self.pending = Some(spawn_submission(
            email,
            self.client.clone(),
            ctx.clone(),
            &self.runtime,
        ));
    }

    /// Called every frame
    pub fn poll_submission(&mut self) {
        poll_pending(&mut self.pending, &mut self.form);
    }
}
