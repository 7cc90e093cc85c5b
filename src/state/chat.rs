//! Chat assistant state.
//!
//! Holds the transcript of the document currently being discussed plus a
//! bounded cache of transcripts for documents the user chatted about earlier
//! in this page session. Evicted or cleared transcripts start over with a
//! welcome message.

use super::ChangeNotifier;
use crate::api::chat::{default_follow_up_questions, validate_question};
use crate::api::ChatApi;
use crate::types::{ChatMessage, ChatSession};
use chrono::Utc;
use lru::LruCache;
use parking_lot::{Mutex, RwLock};
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};

pub const NO_DOCUMENT_SELECTED: &str = "No document selected. Please select a document first.";

pub const APOLOGY_MESSAGE: &str = "I apologize, but I encountered an error processing your question. Please try again or rephrase your question.";

pub const DEFAULT_SUGGESTED_QUESTIONS: [&str; 4] = [
    "What are my main obligations in this document?",
    "Are there any risks I should be aware of?",
    "Can I terminate this agreement early?",
    "What are the payment terms?",
];

pub fn welcome_message(document_name: &str) -> String {
    format!(
        "Hi! I'm your AI legal assistant. I've analyzed \"{}\" and I'm ready to answer your questions about the document. What would you like to know?",
        document_name
    )
}

pub fn cleared_message(document_name: &str) -> String {
    format!(
        "Chat cleared. I'm ready to answer more questions about \"{}\".",
        document_name
    )
}

/// Visibility of the chat panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatWindow {
    #[default]
    Closed,
    /// Open with a newly seeded transcript.
    OpenFresh,
    /// Open with a transcript restored from the session cache.
    OpenRestored,
}

impl ChatWindow {
    pub fn is_open(&self) -> bool {
        !matches!(self, ChatWindow::Closed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A question about the selected document is awaiting its answer.
    pub loading: bool,
    /// Documents with a question in flight.
    pub pending: HashSet<String>,
    pub error: Option<String>,
    pub window: ChatWindow,
    /// Kept after closing so the panel can be reopened for the same document.
    pub document: Option<SelectedDocument>,
    pub suggested_questions: Vec<String>,
}

impl ChatState {
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn document_id(&self) -> Option<&str> {
        self.document.as_ref().map(|doc| doc.id.as_str())
    }

    fn is_current(&self, document_id: &str) -> bool {
        self.document_id() == Some(document_id)
    }

    fn sync_loading(&mut self) {
        self.loading = self
            .document_id()
            .is_some_and(|id| self.pending.contains(id));
    }

    fn to_session(&self) -> Option<ChatSession> {
        let doc = self.document.as_ref()?;
        Some(ChatSession {
            document_id: doc.id.clone(),
            document_name: doc.name.clone(),
            messages: self.messages.clone(),
            is_active: false,
            last_updated: Utc::now(),
        })
    }
}

#[derive(Clone)]
pub struct ChatStore {
    api: Arc<dyn ChatApi>,
    state: Arc<RwLock<ChatState>>,
    sessions: Arc<Mutex<LruCache<String, ChatSession>>>,
    changes: ChangeNotifier,
}

impl ChatStore {
    pub fn new(api: Arc<dyn ChatApi>, session_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(session_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            api,
            state: Arc::new(RwLock::new(ChatState::default())),
            sessions: Arc::new(Mutex::new(LruCache::new(capacity))),
            changes: ChangeNotifier::new(),
        }
    }

    pub fn snapshot(&self) -> ChatState {
        self.state.read().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&ChatState) -> R) -> R {
        f(&self.state.read())
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Whether a transcript for `document_id` is cached.
    pub fn has_session(&self, document_id: &str) -> bool {
        self.sessions.lock().contains(document_id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().len()
    }

    fn update(&self, f: impl FnOnce(&mut ChatState)) {
        f(&mut self.state.write());
        self.changes.notify();
    }

    fn store_session(&self, session: ChatSession) {
        debug!(document_id = %session.document_id, messages = session.messages.len(), "storing chat session");
        self.sessions.lock().put(session.document_id.clone(), session);
    }

    /// Open the panel for a document, restoring its transcript or starting a
    /// new one, then load suggested questions for it.
    pub async fn open_chat(&self, document_id: &str, document_name: &str) {
        info!(document_id, "opening chat");

        let previous = {
            let state = self.state.read();
            match state.document_id() {
                Some(id) if state.is_open() && id != document_id => state.to_session(),
                _ => None,
            }
        };
        if let Some(session) = previous {
            self.store_session(session);
        }

        let restored = self
            .sessions
            .lock()
            .get(document_id)
            .map(|session| session.messages.clone());

        self.update(|s| {
            s.document = Some(SelectedDocument {
                id: document_id.to_string(),
                name: document_name.to_string(),
            });
            s.error = None;
            match restored {
                Some(messages) => {
                    s.messages = messages;
                    s.window = ChatWindow::OpenRestored;
                }
                None => {
                    s.messages = vec![ChatMessage::assistant(
                        document_id,
                        welcome_message(document_name),
                    )];
                    s.window = ChatWindow::OpenFresh;
                }
            }
            s.sync_loading();
        });

        self.load_suggestions_for(document_id).await;
    }

    /// Hide the panel and cache the transcript. The selected document is kept.
    pub fn close_chat(&self) {
        if let Some(session) = self.state.read().to_session() {
            self.store_session(session);
        }
        self.update(|s| {
            s.window = ChatWindow::Closed;
            s.suggested_questions.clear();
        });
    }

    async fn load_suggestions_for(&self, document_id: &str) {
        let questions = match self.api.get_suggested_questions(document_id).await {
            Ok(questions) => questions,
            Err(e) => {
                error!(document_id, "Error loading suggested questions: {}", e);
                DEFAULT_SUGGESTED_QUESTIONS
                    .iter()
                    .map(|q| q.to_string())
                    .collect()
            }
        };

        self.update(|s| {
            if s.is_open() && s.is_current(document_id) {
                s.suggested_questions = questions;
            }
        });
    }

    /// Reload suggestions for the selected document, if any.
    pub async fn load_suggested_questions(&self) {
        let current = self.read(|s| s.document_id().map(str::to_string));
        if let Some(document_id) = current {
            self.load_suggestions_for(&document_id).await;
        }
    }

    /// Ask a question about the selected document.
    ///
    /// Every accepted send appends exactly one user entry followed by exactly
    /// one assistant entry (the answer, or an apology on failure). Rejected
    /// sends only set `error`. Sends while a question about the same document
    /// is in flight are ignored. Returns whether the question was accepted.
    pub async fn send_message(&self, content: &str) -> bool {
        let document_id = {
            let mut state = self.state.write();

            let Some(document_id) = state.document_id().map(str::to_string) else {
                state.error = Some(NO_DOCUMENT_SELECTED.to_string());
                drop(state);
                self.changes.notify();
                return false;
            };

            if state.pending.contains(&document_id) {
                debug!(document_id = %document_id, "question already in flight, ignoring send");
                return false;
            }

            if let Err(e) = validate_question(content) {
                state.error = Some(e.message());
                drop(state);
                self.changes.notify();
                return false;
            }

            state
                .messages
                .push(ChatMessage::user(&document_id, content.trim()));
            state.pending.insert(document_id.clone());
            state.sync_loading();
            state.error = None;
            document_id
        };
        self.changes.notify();

        let result = self.api.ask_question(&document_id, content.trim()).await;

        let reply = match &result {
            Ok(response) => ChatMessage::answer(&document_id, response),
            Err(e) => {
                error!(document_id = %document_id, "Error during question: {}", e);
                ChatMessage::assistant(&document_id, APOLOGY_MESSAGE)
            }
        };

        let mut state = self.state.write();
        state.pending.remove(&document_id);
        state.sync_loading();

        if !state.is_current(&document_id) {
            // The user moved to another document while waiting.
            if let Some(session) = self.sessions.lock().get_mut(&document_id) {
                session.messages.push(reply);
                session.last_updated = Utc::now();
            }
            drop(state);
            self.changes.notify();
            return true;
        }

        state.messages.push(reply);
        match result {
            Ok(response) => {
                if !response.follow_up_questions.is_empty() {
                    state.suggested_questions = response.follow_up_questions;
                } else if state.suggested_questions.is_empty() {
                    state.suggested_questions = default_follow_up_questions();
                }
            }
            Err(e) => state.error = Some(e.message()),
        }
        if !state.is_open() {
            // Closed while waiting: keep the cached transcript in step.
            if let Some(session) = state.to_session() {
                self.sessions.lock().put(session.document_id.clone(), session);
            }
        }
        drop(state);
        self.changes.notify();
        true
    }

    pub async fn select_suggested_question(&self, question: &str) -> bool {
        self.send_message(question).await
    }

    /// Replace the transcript with a single notice and forget the cached session.
    pub fn clear_messages(&self) {
        let Some(doc) = self.read(|s| s.document.clone()) else {
            return;
        };

        self.sessions.lock().pop(&doc.id);
        self.update(|s| {
            s.messages = vec![ChatMessage::assistant(&doc.id, cleared_message(&doc.name))];
        });
    }

    /// Show the panel without touching the transcript.
    ///
    /// Falls back to the currently selected document when none is given.
    pub fn force_show_chat(&self, document_id: Option<&str>, document_name: Option<&str>) {
        self.update(|s| {
            let current = s.document.clone();
            let id = document_id
                .map(str::to_string)
                .or_else(|| current.as_ref().map(|d| d.id.clone()));
            let name = document_name
                .map(str::to_string)
                .or_else(|| current.as_ref().map(|d| d.name.clone()));

            if let (Some(id), Some(name)) = (id, name) {
                s.document = Some(SelectedDocument { id, name });
                if !s.window.is_open() {
                    s.window = ChatWindow::OpenRestored;
                }
                s.sync_loading();
            } else {
                debug!("force_show_chat without a document, ignoring");
            }
        });
    }

    pub fn clear_error(&self) {
        self.update(|s| s.error = None);
    }
}
