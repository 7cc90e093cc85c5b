//! Serializes laid-out pages into a PDF file.

use crate::error::{Error, Result};
use crate::layout::{DrawOp, Page, PageSetup};
use crate::metrics::Font;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

/// Document-level metadata written to the PDF info dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInfo {
    /// Document title.
    pub title: String,
    /// Producing application.
    pub producer: String,
}

impl ReportInfo {
    /// Info with the given title and the default producer.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            producer: "lexplain-pdf".to_string(),
        }
    }
}

/// Encodes text for a standard-font string: Latin-1 passes through, anything
/// else becomes `?`.
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => b'\'',
            '\u{201C}' | '\u{201D}' => b'"',
            '\u{2013}' | '\u{2014}' => b'-',
            c if (c as u32) <= 0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn font_dictionary(font: Font) -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(font.base_name().as_bytes().to_vec())),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ])
}

fn page_operations(page: &Page, setup: &PageSetup) -> Vec<Operation> {
    let mut operations = Vec::new();

    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                font,
                size,
                text,
            } => {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new(
                    "Tf",
                    vec![
                        Object::Name(font.resource_name().as_bytes().to_vec()),
                        Object::Real(*size),
                    ],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![Object::Real(*x), Object::Real(setup.height - *y)],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(encode_text(text), StringFormat::Literal)],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            DrawOp::Rule { x1, x2, y, width } => {
                let pdf_y = setup.height - *y;
                operations.push(Operation::new("w", vec![Object::Real(*width)]));
                operations.push(Operation::new("G", vec![Object::Integer(0)]));
                operations.push(Operation::new(
                    "m",
                    vec![Object::Real(*x1), Object::Real(pdf_y)],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![Object::Real(*x2), Object::Real(pdf_y)],
                ));
                operations.push(Operation::new("S", vec![]));
            }
        }
    }

    operations
}

/// Renders `pages` into PDF bytes.
pub fn render(pages: &[Page], setup: &PageSetup, info: &ReportInfo) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(Error::Empty);
    }

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(Font::Helvetica));
    let bold_id = doc.add_object(font_dictionary(Font::HelveticaBold));
    let fonts = Dictionary::from_iter(vec![
        (Font::Helvetica.resource_name(), Object::Reference(regular_id)),
        (Font::HelveticaBold.resource_name(), Object::Reference(bold_id)),
    ]);
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(fonts),
    )]));

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page_operations(page, setup),
        };
        let encoded = content
            .encode()
            .map_err(|e| Error::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(setup.width),
                    Object::Real(setup.height),
                ]),
            ),
            ("Resources", Object::Reference(resources_id)),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page_dict));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let info_id = doc.add_object(Dictionary::from_iter(vec![
        (
            "Title",
            Object::String(encode_text(&info.title), StringFormat::Literal),
        ),
        (
            "Producer",
            Object::String(encode_text(&info.producer), StringFormat::Literal),
        ),
    ]));
    doc.trailer.set("Info", Object::Reference(info_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    debug!(pages = page_ids.len(), bytes = buffer.len(), "rendered PDF");
    Ok(buffer)
}
