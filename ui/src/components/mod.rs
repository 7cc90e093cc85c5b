//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod chat_widget;
pub mod document_card;
pub mod feedback;
pub mod header;
pub mod layout;
pub mod loading;
pub mod modal;
pub mod risk;
pub mod sidebar;
pub mod upload;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessageView;
pub use chat_widget::ChatWidget;
pub use document_card::{DocumentCard, DocumentRow};
pub use feedback::{EmptyState, ErrorBanner};
pub use header::Header;
pub use layout::Layout;
pub use loading::{LoadingDots, LoadingSpinner, Skeleton, TypingIndicator};
pub use modal::{ConfirmModal, Modal};
pub use risk::{ConfidenceBadge, RiskBadge, RiskMeter, UrgencyCallout};
pub use sidebar::Sidebar;
pub use upload::{UploadDropzone, UploadModal};
