//! Browser file plumbing: reading picked files and saving generated PDFs.

use lexplain::types::UploadFile;
use lexplain::ExportedReport;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

/// Read a picked or dropped file into memory.
pub async fn read_file(file: &File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Could not read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile::new(file.name(), bytes))
}

/// Offer the report to the user as a download.
pub fn save_report(report: &ExportedReport) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(report.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array);

    let props = BlobPropertyBag::new();
    props.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&report.filename);
    anchor.click();

    Url::revoke_object_url(&url)
}
