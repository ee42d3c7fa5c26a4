//! Form submission

use super::App;
use crate::types::SubmitKind;
use eframe::egui;
use tracing::{error, info};

impl App {
    /// Validate the active water report form and POST it.
    pub(crate) fn submit_water_report(&mut self, ctx: &egui::Context) {
        match self.water_form.payload() {
            Ok(payload) => {
                self.post_submission(ctx, SubmitKind::WaterReport, "water-reports", payload)
            }
            Err(e) => self.form_error = Some(e),
        }
    }

    /// Validate the active patient report form and POST it.
    pub(crate) fn submit_patient_report(&mut self, ctx: &egui::Context) {
        match self.patient_form.payload() {
            Ok(payload) => {
                self.post_submission(ctx, SubmitKind::PatientReport, "patient-reports", payload)
            }
            Err(e) => self.form_error = Some(e),
        }
    }

    /// Validate the query form and POST it.
    pub(crate) fn submit_query(&mut self, ctx: &egui::Context) {
        match self.query_form.payload() {
            Ok(payload) => self.post_submission(ctx, SubmitKind::Query, "queries", payload),
            Err(e) => self.form_error = Some(e),
        }
    }

    fn post_submission<T: serde::Serialize + Send + 'static>(
        &mut self,
        ctx: &egui::Context,
        kind: SubmitKind,
        resource: &'static str,
        payload: T,
    ) {
        self.submit_in_flight = true;

        let ctx = ctx.clone();
        let url = self.api_url(resource);
        self.runtime.spawn(async move {
            let client = reqwest::Client::new();
            let result = client.post(&url).json(&payload).send().await;
            let ok = match result {
                Ok(response) if response.status().is_success() => {
                    info!(resource, "Submission accepted");
                    true
                }
                Ok(response) => {
                    error!(resource, status = %response.status(), "Submission rejected");
                    false
                }
                Err(e) => {
                    error!(resource, error = %e, "Submission failed");
                    false
                }
            };
            let key = if ok { "submit_ok" } else { "submit_err" };
            ctx.memory_mut(|mem| mem.data.insert_temp(key.into(), kind));
            ctx.request_repaint();
        });
    }

    /// Pick up the submission outcome posted by the background task.
    pub(crate) fn poll_submit_result(&mut self, ctx: &egui::Context) {
        if let Some(kind) = ctx.memory(|mem| mem.data.get_temp::<SubmitKind>("submit_ok".into())) {
            ctx.memory_mut(|mem| mem.data.remove::<SubmitKind>("submit_ok".into()));
            self.submit_in_flight = false;
            self.submit_result = Some((kind, true));
        }
        if let Some(kind) = ctx.memory(|mem| mem.data.get_temp::<SubmitKind>("submit_err".into())) {
            ctx.memory_mut(|mem| mem.data.remove::<SubmitKind>("submit_err".into()));
            self.submit_in_flight = false;
            self.submit_result = Some((kind, false));
        }
    }
}
