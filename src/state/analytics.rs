//! Collection analytics and legal model status.

use super::ChangeNotifier;
use crate::api::DocumentApi;
use crate::types::{AnalyticsSnapshot, ClientError, LegalModelsStatus};
use futures::future::try_join;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsState {
    pub analytics: Option<AnalyticsSnapshot>,
    pub models_status: Option<LegalModelsStatus>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Whether the backend is saying "there is nothing to aggregate yet".
pub fn is_empty_collection(err: &ClientError) -> bool {
    err.api().is_some_and(|e| e.is_not_found()) || err.message().contains("No documents")
}

/// Turns the empty-collection failure into a zeroed aggregate.
fn rescue_empty(result: Result<AnalyticsSnapshot, ClientError>) -> Result<AnalyticsSnapshot, ClientError> {
    match result {
        Err(e) if is_empty_collection(&e) => {
            debug!("no documents yet, using empty analytics");
            Ok(AnalyticsSnapshot::empty())
        }
        other => other,
    }
}

#[derive(Clone)]
pub struct AnalyticsStore {
    api: Arc<dyn DocumentApi>,
    state: Arc<RwLock<AnalyticsState>>,
    changes: ChangeNotifier,
}

impl AnalyticsStore {
    pub fn new(api: Arc<dyn DocumentApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(AnalyticsState::default())),
            changes: ChangeNotifier::new(),
        }
    }

    pub fn snapshot(&self) -> AnalyticsState {
        self.state.read().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&AnalyticsState) -> R) -> R {
        f(&self.state.read())
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    fn update(&self, f: impl FnOnce(&mut AnalyticsState)) {
        f(&mut self.state.write());
        self.changes.notify();
    }

    fn begin(&self) {
        self.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    pub async fn fetch_analytics(&self) {
        self.begin();
        let result = rescue_empty(self.api.get_analytics().await);

        self.update(|s| {
            match result {
                Ok(snapshot) => s.analytics = Some(snapshot),
                Err(e) => {
                    error!("Error fetching analytics: {}", e);
                    s.error = Some(e.message());
                }
            }
            s.loading = false;
        });
    }

    pub async fn fetch_models_status(&self) {
        self.begin();
        let result = self.api.get_models_status().await;

        self.update(|s| {
            match result {
                Ok(status) => s.models_status = Some(status),
                Err(e) => {
                    error!("Error fetching legal models status: {}", e);
                    s.error = Some(e.message());
                }
            }
            s.loading = false;
        });
    }

    /// Fetch analytics and model status together. Either both are committed
    /// or neither is.
    pub async fn refresh_all(&self) {
        self.begin();

        let analytics = async { rescue_empty(self.api.get_analytics().await) };
        let models = self.api.get_models_status();
        let result = try_join(analytics, models).await;

        self.update(|s| {
            match result {
                Ok((snapshot, status)) => {
                    s.analytics = Some(snapshot);
                    s.models_status = Some(status);
                }
                Err(e) => {
                    error!("Error refreshing analytics data: {}", e);
                    s.error = Some(e.message());
                }
            }
            s.loading = false;
        });
    }

    pub fn clear_error(&self) {
        self.update(|s| s.error = None);
    }
}
