//! Background data fetching

use super::App;
use crate::types::RemoteData;
use eframe::egui;
use jal_core::{ActivityEntry, District, Faq, MapLocation, ReportStats};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

async fn fetch_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

/// Spawn one fetch task. The slot is written only if the refresh has not
/// been cancelled by the time the response arrives.
#[allow(clippy::too_many_arguments)]
fn spawn_fetch<T, F>(
    runtime: &tokio::runtime::Runtime,
    client: reqwest::Client,
    url: String,
    resource: &'static str,
    token: CancellationToken,
    remote: Arc<Mutex<RemoteData>>,
    ctx: egui::Context,
    apply: F,
) where
    T: serde::de::DeserializeOwned + Send + 'static,
    F: FnOnce(&mut RemoteData, T) + Send + 'static,
{
    runtime.spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {}
            result = fetch_json::<T>(&client, &url) => {
                match result {
                    Ok(value) => {
                        debug!(resource, "Fetched");
                        apply(&mut remote.lock().unwrap(), value);
                        ctx.request_repaint();
                    }
                    Err(e) => {
                        warn!(resource, url = %url, error = %e, "Fetch failed");
                    }
                }
            }
        }
    });
}

impl App {
    /// Refresh the dashboard slots: stats, activity, map locations and FAQs
    /// run as four independent fetches. Starting a new refresh cancels any
    /// refresh still in flight.
    pub(crate) fn refresh_dashboard(&mut self, ctx: &egui::Context) {
        if let Some(old) = self.refresh_token.take() {
            old.cancel();
        }
        let token = CancellationToken::new();
        self.refresh_token = Some(token.clone());

        info!(backend = %self.backend_url, "Refreshing dashboard data");
        let client = reqwest::Client::new();

        spawn_fetch::<ReportStats, _>(
            &self.runtime,
            client.clone(),
            self.api_url("report-stats"),
            "report-stats",
            token.clone(),
            self.remote.clone(),
            ctx.clone(),
            |remote, stats| remote.stats = Some(stats),
        );
        spawn_fetch::<Vec<ActivityEntry>, _>(
            &self.runtime,
            client.clone(),
            self.api_url("recent-activity"),
            "recent-activity",
            token.clone(),
            self.remote.clone(),
            ctx.clone(),
            |remote, activity| remote.activity = Some(activity),
        );
        spawn_fetch::<Vec<MapLocation>, _>(
            &self.runtime,
            client.clone(),
            self.api_url("map-locations"),
            "map-locations",
            token.clone(),
            self.remote.clone(),
            ctx.clone(),
            |remote, locations| remote.map_locations = Some(locations),
        );
        spawn_fetch::<Vec<Faq>, _>(
            &self.runtime,
            client,
            self.api_url("faqs"),
            "faqs",
            token,
            self.remote.clone(),
            ctx.clone(),
            |remote, faqs| remote.faqs = Some(faqs),
        );
    }

    /// Fetch the district list when a report form opens and the picker is
    /// still empty. A failed fetch is retried the next time a form opens.
    pub(crate) fn ensure_districts(&mut self, ctx: &egui::Context) {
        let loaded = self
            .remote
            .lock()
            .unwrap()
            .districts
            .as_ref()
            .is_some_and(|d| !d.is_empty());
        if loaded {
            return;
        }

        let client = reqwest::Client::new();
        let url = self.api_url("districts");
        let remote = self.remote.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            match fetch_json::<Vec<District>>(&client, &url).await {
                Ok(districts) => {
                    debug!(count = districts.len(), "Districts fetched");
                    remote.lock().unwrap().districts = Some(districts);
                    ctx.request_repaint();
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "District fetch failed");
                }
            }
        });
    }

    /// One-shot connection test against `GET {base}/api/`, used by the
    /// settings dialog. Runs on a plain thread with the blocking client and
    /// reports back through temporary memory.
    pub(crate) fn check_backend(&mut self, ctx: &egui::Context) {
        self.backend_checking = true;
        self.backend_check = None;

        let ctx = ctx.clone();
        let url = self.api_url("");
        std::thread::spawn(move || {
            debug!(url = %url, "Testing backend connection");
            let ok = match reqwest::blocking::get(&url) {
                Ok(response) if response.status().is_success() => true,
                Ok(response) => {
                    warn!(status = %response.status(), "Backend responded with an error");
                    false
                }
                Err(e) => {
                    warn!(error = %e, "Backend unreachable");
                    false
                }
            };
            ctx.memory_mut(|mem| mem.data.insert_temp("backend_check".into(), ok));
            ctx.request_repaint();
        });
    }

    /// Pick up the connection test result posted by the background thread.
    pub(crate) fn poll_backend_check(&mut self, ctx: &egui::Context) {
        if let Some(ok) = ctx.memory(|mem| mem.data.get_temp::<bool>("backend_check".into())) {
            ctx.memory_mut(|mem| mem.data.remove::<bool>("backend_check".into()));
            self.backend_checking = false;
            self.backend_check = Some(ok);
        }
    }
}
