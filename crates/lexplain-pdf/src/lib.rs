//! # lexplain-pdf
//!
//! A small pure-Rust layout engine and PDF writer used to render analysis
//! reports on the client, without a browser PDF library.
//!
//! ## Features
//!
//! - **Page-aware flow**: blocks are placed with a running vertical cursor and
//!   a page break is inserted whenever the next block would cross the bottom margin
//! - **Word wrapping**: text is wrapped to the content width using the standard
//!   Helvetica metrics
//! - **Standard fonts only**: no font embedding, output stays small
//!
//! ## Quick Start
//!
//! ```rust
//! use lexplain_pdf::{Font, PageFlow, PageSetup, ReportInfo, TextStyle};
//!
//! let mut flow = PageFlow::new(PageSetup::a4());
//! flow.paragraph("LEGAL DOCUMENT ANALYSIS REPORT", TextStyle::new(Font::HelveticaBold, 18.0), 0.0);
//! flow.rule();
//! flow.list_item(1, "Tenant pays all utilities.", TextStyle::body());
//!
//! let pages = flow.finish();
//! let bytes = lexplain_pdf::render(&pages, &PageSetup::a4(), &ReportInfo::titled("Report")).unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod layout;
pub mod metrics;
pub mod writer;

pub use error::{Error, Result};
pub use layout::{wrap_text, DrawOp, Page, PageFlow, PageSetup, TextStyle};
pub use metrics::{text_width, Font};
pub use writer::{render, ReportInfo};
