//! Client-side PDF report of a document analysis.
//!
//! The detail is fetched fresh, laid out with [`lexplain_pdf::PageFlow`] and
//! rendered to bytes; the browser build then hands the bytes to a download
//! link. Any failure along the way surfaces as [`ClientError::Export`].

use crate::api::DocumentApi;
use crate::types::{ClientError, DocumentDetail, Result};
use chrono::{DateTime, Utc};
use lexplain_pdf::{Font, Page, PageFlow, PageSetup, ReportInfo, TextStyle};
use tracing::{error, info};

pub const REPORT_TITLE: &str = "LEGAL DOCUMENT ANALYSIS REPORT";
pub const PRODUCT_LINE: &str = "Generated by AI Legal Doc Explainer v8.0.0";
pub const MODEL_LINE: &str = "Legal AI System powered by Legal-BERT and Gemini AI";

/// Whitespace after each section, and before the footer.
const SECTION_GAP: f32 = 28.3;
const FOOTER_GAP: f32 = 56.7;

const TITLE: TextStyle = TextStyle::new(Font::HelveticaBold, 18.0);
const EMPHASIS: TextStyle = TextStyle::new(Font::HelveticaBold, 12.0);
const HEADING: TextStyle = TextStyle::heading();
const BODY: TextStyle = TextStyle::body();
const FOOTER: TextStyle = TextStyle::new(Font::Helvetica, 10.0);

/// A rendered report ready for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub document_id: String,
    pub generated_at: DateTime<Utc>,
}

/// `legal_analysis_<name without .pdf>_<YYYY-MM-DD>.pdf`
pub fn report_filename(document_filename: &str, generated_at: &DateTime<Utc>) -> String {
    format!(
        "legal_analysis_{}_{}.pdf",
        document_filename.replacen(".pdf", "", 1),
        generated_at.format("%Y-%m-%d")
    )
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string()
}

fn heading(flow: &mut PageFlow, text: &str) {
    flow.paragraph(text, HEADING, 0.0);
}

fn numbered(flow: &mut PageFlow, items: &[String], empty: &str) {
    if items.is_empty() {
        flow.paragraph(empty, BODY, 0.0);
    } else {
        for (i, item) in items.iter().enumerate() {
            flow.list_item(i + 1, item, BODY);
        }
    }
    flow.space(SECTION_GAP);
}

fn joined(flow: &mut PageFlow, items: &[String], empty: &str) {
    if items.is_empty() {
        flow.paragraph(empty, BODY, 0.0);
    } else {
        flow.paragraph(&items.join(", "), BODY, 0.0);
    }
    flow.space(SECTION_GAP);
}

/// Lays out the report pages for `doc`.
pub fn layout_report(doc: &DocumentDetail, generated_at: &DateTime<Utc>) -> Vec<Page> {
    let mut flow = PageFlow::new(PageSetup::a4());
    let stamp = timestamp(generated_at);

    flow.paragraph(REPORT_TITLE, TITLE, 0.0);
    flow.rule();

    flow.paragraph(&format!("Document: {}", doc.filename), EMPHASIS, 0.0);
    flow.paragraph(&format!("Generated: {}", stamp), BODY, 0.0);
    flow.paragraph(
        &format!("Document Type : {}", doc.document_type.label()),
        BODY,
        0.0,
    );
    flow.space(SECTION_GAP);

    heading(&mut flow, "EXECUTIVE SUMMARY");
    flow.paragraph(&doc.summary, BODY, 0.0);
    flow.space(SECTION_GAP);

    heading(&mut flow, "KEY TERMS & OBLIGATIONS");
    numbered(&mut flow, &doc.key_clauses, "No key clauses identified.");

    heading(&mut flow, "RED FLAGS & CONCERNS");
    numbered(&mut flow, &doc.red_flags, "No red flags identified.");

    heading(&mut flow, "LEGAL TERMINOLOGY DETECTED");
    joined(
        &mut flow,
        &doc.legal_terminology_found,
        "No specific legal terminology detected.",
    );

    heading(&mut flow, "RISK INDICATORS FOUND");
    joined(
        &mut flow,
        &doc.risk_indicators,
        "No specific risk indicators found.",
    );

    if !doc.urgency_signals.is_empty() {
        heading(&mut flow, "URGENCY SIGNALS");
        joined(&mut flow, &doc.urgency_signals, "");
    }

    heading(&mut flow, "SUGGESTED QUESTIONS");
    numbered(
        &mut flow,
        &doc.suggested_questions,
        "No suggested questions available.",
    );

    flow.space(FOOTER_GAP);
    flow.rule();
    flow.paragraph(PRODUCT_LINE, FOOTER, 0.0);
    flow.paragraph(MODEL_LINE, FOOTER, 0.0);
    flow.paragraph(&format!("Report generated on {}", stamp), FOOTER, 0.0);

    flow.finish()
}

/// Renders an already fetched detail.
pub fn render_report(doc: &DocumentDetail, generated_at: DateTime<Utc>) -> Result<ExportedReport> {
    let pages = layout_report(doc, &generated_at);
    let info = ReportInfo::titled(format!("Legal analysis - {}", doc.filename));
    let bytes = lexplain_pdf::render(&pages, &PageSetup::a4(), &info)?;

    Ok(ExportedReport {
        bytes,
        filename: report_filename(&doc.filename, &generated_at),
        document_id: doc.id.clone(),
        generated_at,
    })
}

/// Fetches the latest analysis of `document_id` and renders it.
pub async fn export_report<A>(api: &A, document_id: &str) -> Result<ExportedReport>
where
    A: DocumentApi + ?Sized,
{
    info!(document_id, "exporting PDF report");

    let result = match api.get_document(document_id).await {
        Ok(doc) => render_report(&doc, Utc::now()),
        Err(e) => Err(ClientError::Export(e.message())),
    };

    match result {
        Ok(report) => {
            info!(filename = %report.filename, bytes = report.bytes.len(), "report ready");
            Ok(report)
        }
        Err(e) => {
            error!(document_id, "PDF report generation failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_filename() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 0).unwrap();
        assert_eq!(
            report_filename("lease.pdf", &at),
            "legal_analysis_lease_2024-03-05.pdf"
        );
        assert_eq!(
            report_filename("notes", &at),
            "legal_analysis_notes_2024-03-05.pdf"
        );
    }

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 7).unwrap();
        assert_eq!(timestamp(&at), "3/5/2024, 6:30:07 PM UTC");
    }
}
