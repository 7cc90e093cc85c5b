//! Global application state
//!
//! The `lexplain` containers own the data. Each one is mirrored into a
//! signal that follows its change channel, so components read signals and
//! call container actions; nothing else writes these signals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lexplain::state::{AnalyticsState, ChatState, DocumentsState};
use lexplain::{AnalyticsStore, ChatStore, ClientConfig, ClientContext, DocumentsStore};
use std::future::Future;
use tokio::sync::watch;

/// Base URL baked in at build time, e.g. `LEXPLAIN_API_URL=https://api.example.com trunk build`.
const BUILD_API_URL: Option<&str> = option_env!("LEXPLAIN_API_URL");

#[derive(Clone, Copy)]
pub struct AppState {
    ctx: StoredValue<ClientContext>,
    pub documents: RwSignal<DocumentsState>,
    pub chat: RwSignal<ChatState>,
    pub analytics: RwSignal<AnalyticsState>,
    /// Result of the last `/health` probe; `None` until it answers.
    pub backend_online: RwSignal<Option<bool>>,
}

impl AppState {
    pub fn new() -> lexplain::Result<Self> {
        let config = BUILD_API_URL
            .map(ClientConfig::with_base_url)
            .unwrap_or_default();
        let ctx = ClientContext::new(config)?;

        let documents = RwSignal::new(ctx.documents.snapshot());
        let chat = RwSignal::new(ctx.chat.snapshot());
        let analytics = RwSignal::new(ctx.analytics.snapshot());

        mirror(ctx.documents.subscribe(), documents, {
            let store = ctx.documents.clone();
            move || store.snapshot()
        });
        mirror(ctx.chat.subscribe(), chat, {
            let store = ctx.chat.clone();
            move || store.snapshot()
        });
        mirror(ctx.analytics.subscribe(), analytics, {
            let store = ctx.analytics.clone();
            move || store.snapshot()
        });

        tracing::info!(base_url = %ctx.config.base_url(), "client ready");

        Ok(Self {
            ctx: StoredValue::new(ctx),
            documents,
            chat,
            analytics,
            backend_online: RwSignal::new(None),
        })
    }

    pub fn context(&self) -> ClientContext {
        self.ctx.get_value()
    }

    pub fn documents_store(&self) -> DocumentsStore {
        self.ctx.with_value(|c| c.documents.clone())
    }

    pub fn chat_store(&self) -> ChatStore {
        self.ctx.with_value(|c| c.chat.clone())
    }

    pub fn analytics_store(&self) -> AnalyticsStore {
        self.ctx.with_value(|c| c.analytics.clone())
    }

    pub fn search_debounce(&self) -> std::time::Duration {
        self.ctx.with_value(|c| c.config.search_debounce())
    }

    /// Run a container action in the background.
    pub fn run<F>(&self, action: F)
    where
        F: Future<Output = ()> + 'static,
    {
        spawn_local(action);
    }

    pub fn check_backend(&self) {
        let client = self.ctx.with_value(|c| c.document_service.client().clone());
        let online = self.backend_online;
        spawn_local(async move {
            let healthy = client.health_check().await;
            if !healthy {
                tracing::warn!("backend health check failed");
            }
            online.set(Some(healthy));
        });
    }
}

/// Copy a container snapshot into `signal` on every revision.
fn mirror<T>(
    mut changes: watch::Receiver<u64>,
    signal: RwSignal<T>,
    snapshot: impl Fn() -> T + 'static,
) where
    T: Send + Sync + 'static,
{
    spawn_local(async move {
        while changes.changed().await.is_ok() {
            signal.set(snapshot());
        }
    });
}
