//! Page components, one per route

pub mod analytics;
pub mod dashboard;
pub mod document_view;
pub mod documents;
