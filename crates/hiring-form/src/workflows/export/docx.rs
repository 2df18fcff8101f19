//! Minimal WordprocessingML writer for [`ExportDocument`].
//!
//! Produces a `.docx` package holding the content types, package relationships,
//! core properties and a single `word/document.xml`. Every paragraph is
//! bidirectional and every run right-to-left, set in Arial.

use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::document::{Block, ExportDocument, Table};

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const FONT: &str = "Arial";
const BODY_SIZE: u32 = 24;
const HEADING_SIZE: u32 = 28;
const HEADING_COLOR: &str = "2E74B5";
const LABEL_COLOR: &str = "444444";
const RULE_COLOR: &str = "CCCCCC";
const HEADER_FILL: &str = "EEEEEE";
const TEXT_WIDTH: usize = 9026;

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const CORE_PROPERTIES_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
const DUBLIN_CORE_NS: &str = "http://purl.org/dc/elements/1.1/";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("docx package error: {0}")]
    Package(#[from] zip::result::ZipError),
    #[error("docx write error: {0}")]
    Io(#[from] std::io::Error),
    #[error("docx markup error: {0}")]
    Markup(#[from] quick_xml::Error),
}

type XmlWriter = Writer<Vec<u8>>;

/// Serializes the document into the bytes of a `.docx` file.
pub fn render_docx(document: &ExportDocument, title: &str) -> Result<Vec<u8>, DocxError> {
    let body = document_xml(document)?;
    let core = core_properties_xml(title)?;

    let mut package = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, contents) in [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
        ("docProps/core.xml", core.as_slice()),
        ("word/document.xml", body.as_slice()),
    ] {
        package.start_file(name, options)?;
        package.write_all(contents)?;
    }

    Ok(package.finish()?.into_inner())
}

fn core_properties_xml(title: &str) -> Result<Vec<u8>, DocxError> {
    let mut xml = Writer::new(Vec::new());
    declaration(&mut xml)?;
    start(
        &mut xml,
        "cp:coreProperties",
        &[("xmlns:cp", CORE_PROPERTIES_NS), ("xmlns:dc", DUBLIN_CORE_NS)],
    )?;
    start(&mut xml, "dc:title", &[])?;
    xml.write_event(Event::Text(BytesText::new(&xml_safe(title))))?;
    end(&mut xml, "dc:title")?;
    end(&mut xml, "cp:coreProperties")?;
    Ok(xml.into_inner())
}

fn document_xml(document: &ExportDocument) -> Result<Vec<u8>, DocxError> {
    let mut xml = Writer::new(Vec::with_capacity(64 * 1024));
    declaration(&mut xml)?;
    start(&mut xml, "w:document", &[("xmlns:w", WORDPROCESSING_NS)])?;
    start(&mut xml, "w:body", &[])?;

    for block in &document.blocks {
        match block {
            Block::Title { text, size } => {
                let run = Run::new(text).bold().size(size.half_points());
                paragraph(&mut xml, &ParagraphStyle::centered(), &[run])?;
            }
            Block::Heading(title) => {
                let run = Run::new(title)
                    .bold()
                    .size(HEADING_SIZE)
                    .color(HEADING_COLOR);
                paragraph(&mut xml, &ParagraphStyle::heading(), &[run])?;
            }
            Block::LabelValue { label, value } => {
                let label = format!("{label}: ");
                let runs = [
                    Run::new(&label).bold().size(BODY_SIZE).color(LABEL_COLOR),
                    Run::new(value).size(BODY_SIZE),
                ];
                paragraph(&mut xml, &ParagraphStyle::line(), &runs)?;
            }
            Block::Caption(text) => {
                paragraph(&mut xml, &ParagraphStyle::caption(), &[Run::new(text)])?;
            }
            Block::Table(table) => table_xml(&mut xml, table)?,
            Block::Attestation(text) => {
                paragraph(&mut xml, &ParagraphStyle::attestation(), &[Run::new(text).bold()])?;
            }
        }
    }

    section_properties(&mut xml)?;
    end(&mut xml, "w:body")?;
    end(&mut xml, "w:document")?;
    Ok(xml.into_inner())
}

// A4 portrait with one-inch margins, in twentieths of a point.
fn section_properties(xml: &mut XmlWriter) -> Result<(), DocxError> {
    start(xml, "w:sectPr", &[])?;
    empty(xml, "w:pgSz", &[("w:w", "11906"), ("w:h", "16838")])?;
    empty(
        xml,
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    empty(xml, "w:bidi", &[])?;
    end(xml, "w:sectPr")
}

fn table_xml(xml: &mut XmlWriter, table: &Table) -> Result<(), DocxError> {
    let columns = table.headers.len().max(1);
    let grid_width = (TEXT_WIDTH / columns).to_string();

    start(xml, "w:tbl", &[])?;
    start(xml, "w:tblPr", &[])?;
    // Full text width is 5000 fiftieths of a percent.
    empty(xml, "w:tblW", &[("w:w", "5000"), ("w:type", "pct")])?;
    start(xml, "w:tblBorders", &[])?;
    for edge in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
        empty(
            xml,
            edge,
            &[
                ("w:val", "single"),
                ("w:sz", "4"),
                ("w:space", "0"),
                ("w:color", "auto"),
            ],
        )?;
    }
    end(xml, "w:tblBorders")?;
    empty(xml, "w:tblLook", &[("w:val", "04A0")])?;
    end(xml, "w:tblPr")?;

    start(xml, "w:tblGrid", &[])?;
    for _ in 0..columns {
        empty(xml, "w:gridCol", &[("w:w", grid_width.as_str())])?;
    }
    end(xml, "w:tblGrid")?;

    start(xml, "w:tr", &[])?;
    for header in &table.headers {
        cell_xml(xml, Run::new(header).bold(), Some(HEADER_FILL))?;
    }
    end(xml, "w:tr")?;

    for row in &table.rows {
        start(xml, "w:tr", &[])?;
        for value in row {
            cell_xml(xml, Run::new(value), None)?;
        }
        end(xml, "w:tr")?;
    }

    end(xml, "w:tbl")
}

fn cell_xml(xml: &mut XmlWriter, run: Run<'_>, fill: Option<&str>) -> Result<(), DocxError> {
    start(xml, "w:tc", &[])?;
    if let Some(fill) = fill {
        start(xml, "w:tcPr", &[])?;
        empty(
            xml,
            "w:shd",
            &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", fill)],
        )?;
        end(xml, "w:tcPr")?;
    }
    paragraph(xml, &ParagraphStyle::centered(), &[run])?;
    end(xml, "w:tc")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Justification {
    Right,
    Center,
}

impl Justification {
    const fn as_str(self) -> &'static str {
        match self {
            Justification::Right => "right",
            Justification::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ParagraphStyle {
    justification: Option<Justification>,
    before: Option<u32>,
    after: Option<u32>,
    bottom_rule: bool,
}

impl ParagraphStyle {
    const fn centered() -> Self {
        Self {
            justification: Some(Justification::Center),
            before: None,
            after: None,
            bottom_rule: false,
        }
    }

    const fn heading() -> Self {
        Self {
            justification: Some(Justification::Right),
            before: Some(300),
            after: Some(200),
            bottom_rule: true,
        }
    }

    const fn line() -> Self {
        Self {
            justification: Some(Justification::Right),
            before: None,
            after: Some(100),
            bottom_rule: false,
        }
    }

    const fn caption() -> Self {
        Self {
            justification: None,
            before: Some(100),
            after: None,
            bottom_rule: false,
        }
    }

    const fn attestation() -> Self {
        Self {
            justification: None,
            before: Some(400),
            after: None,
            bottom_rule: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Run<'a> {
    text: &'a str,
    bold: bool,
    size: Option<u32>,
    color: Option<&'static str>,
}

impl<'a> Run<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bold: false,
            size: None,
            color: None,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

fn paragraph(xml: &mut XmlWriter, style: &ParagraphStyle, runs: &[Run<'_>]) -> Result<(), DocxError> {
    // Child order of w:pPr and w:rPr is fixed by the schema.
    start(xml, "w:p", &[])?;
    start(xml, "w:pPr", &[])?;
    if style.bottom_rule {
        start(xml, "w:pBdr", &[])?;
        empty(
            xml,
            "w:bottom",
            &[
                ("w:val", "single"),
                ("w:sz", "6"),
                ("w:space", "1"),
                ("w:color", RULE_COLOR),
            ],
        )?;
        end(xml, "w:pBdr")?;
    }
    empty(xml, "w:bidi", &[])?;
    if style.before.is_some() || style.after.is_some() {
        let before = style.before.map(|value| value.to_string());
        let after = style.after.map(|value| value.to_string());
        let mut spacing = BytesStart::new("w:spacing");
        if let Some(before) = &before {
            spacing.push_attribute(("w:before", before.as_str()));
        }
        if let Some(after) = &after {
            spacing.push_attribute(("w:after", after.as_str()));
        }
        xml.write_event(Event::Empty(spacing))?;
    }
    if let Some(justification) = style.justification {
        empty(xml, "w:jc", &[("w:val", justification.as_str())])?;
    }
    end(xml, "w:pPr")?;

    for run in runs {
        start(xml, "w:r", &[])?;
        run_properties(xml, run)?;
        run_content(xml, run.text)?;
        end(xml, "w:r")?;
    }

    end(xml, "w:p")
}

fn run_properties(xml: &mut XmlWriter, run: &Run<'_>) -> Result<(), DocxError> {
    start(xml, "w:rPr", &[])?;
    empty(
        xml,
        "w:rFonts",
        &[("w:ascii", FONT), ("w:hAnsi", FONT), ("w:cs", FONT)],
    )?;
    if run.bold {
        empty(xml, "w:b", &[])?;
        empty(xml, "w:bCs", &[])?;
    }
    if let Some(color) = run.color {
        empty(xml, "w:color", &[("w:val", color)])?;
    }
    if let Some(size) = run.size {
        let size = size.to_string();
        empty(xml, "w:sz", &[("w:val", size.as_str())])?;
        empty(xml, "w:szCs", &[("w:val", size.as_str())])?;
    }
    empty(xml, "w:rtl", &[])?;
    end(xml, "w:rPr")
}

/// Writes run text, turning tabs into `w:tab` and line or page breaks into
/// `w:br`. Characters XML 1.0 cannot carry are dropped.
fn run_content(xml: &mut XmlWriter, text: &str) -> Result<(), DocxError> {
    let mut pending = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let marker = match c {
            '\t' => Some("w:tab"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                Some("w:br")
            }
            '\n' | '\u{000B}' | '\u{000C}' => Some("w:br"),
            c if is_xml_char(c) => {
                pending.push(c);
                None
            }
            _ => None,
        };

        if let Some(marker) = marker {
            flush_text(xml, &mut pending)?;
            empty(xml, marker, &[])?;
        }
    }

    flush_text(xml, &mut pending)
}

fn flush_text(xml: &mut XmlWriter, pending: &mut String) -> Result<(), DocxError> {
    if pending.is_empty() {
        return Ok(());
    }
    start(xml, "w:t", &[("xml:space", "preserve")])?;
    xml.write_event(Event::Text(BytesText::new(pending.as_str())))?;
    end(xml, "w:t")?;
    pending.clear();
    Ok(())
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn xml_safe(text: &str) -> String {
    text.chars().filter(|c| is_xml_char(*c)).collect()
}

fn declaration(xml: &mut XmlWriter) -> Result<(), DocxError> {
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(())
}

fn start(xml: &mut XmlWriter, name: &str, attributes: &[(&str, &str)]) -> Result<(), DocxError> {
    let mut element = BytesStart::new(name);
    element.extend_attributes(attributes.iter().copied());
    xml.write_event(Event::Start(element))?;
    Ok(())
}

fn empty(xml: &mut XmlWriter, name: &str, attributes: &[(&str, &str)]) -> Result<(), DocxError> {
    let mut element = BytesStart::new(name);
    element.extend_attributes(attributes.iter().copied());
    xml.write_event(Event::Empty(element))?;
    Ok(())
}

fn end(xml: &mut XmlWriter, name: &str) -> Result<(), DocxError> {
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
