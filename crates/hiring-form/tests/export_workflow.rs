use std::io::Read;

use hiring_form::workflows::application::{
    validate_for_export, ApplicantRecord, ApplicationForm, Collection, MaritalStatus,
    MISSING_NAME_NOTICE,
};
use hiring_form::workflows::export::{
    export, export_to, labels, transcribe, transcriber, DirectorySink, ExportError,
    DOCX_CONTENT_TYPE,
};
use serde_json::json;

fn document_xml(bytes: &[u8]) -> String {
    let mut archive =
        zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("export is a zip package");
    let mut part = archive
        .by_name("word/document.xml")
        .expect("document part present");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("document part is utf-8");
    xml
}

fn ali_rezai() -> ApplicantRecord {
    serde_json::from_value(json!({
        "firstName": "Ali",
        "lastName": "Rezai",
        "maritalStatus": "married",
        "criminalRecord": false,
        "educationHistory": []
    }))
    .expect("record decodes")
}

#[test]
fn named_applicant_exports_a_word_document() {
    let record = ali_rezai();

    let artifact = export(&record).expect("export succeeds");

    assert_eq!(artifact.file_name, "Ali_Rezai.docx");
    assert_eq!(artifact.content_type.as_ref(), DOCX_CONTENT_TYPE);

    let document = transcribe(&record);
    assert_eq!(
        document.value_of(transcriber::LABEL_MARITAL_STATUS),
        Some(labels::marital_status(&MaritalStatus::Married))
    );
    assert_eq!(
        document.value_of(transcriber::LABEL_CRIMINAL_RECORD),
        Some(labels::NEGATIVE)
    );
    let education = document
        .table_after(transcriber::SECTION_EDUCATION)
        .expect("education table present");
    assert_eq!(education.headers.len(), transcriber::EDUCATION_HEADERS.len());
    assert!(education.rows.is_empty());

    let xml = document_xml(&artifact.bytes);
    assert!(xml.contains("Ali Rezai"));
    assert!(xml.contains(labels::marital_status(&MaritalStatus::Married)));
    assert!(xml.contains(labels::NEGATIVE));
    assert!(xml.contains(transcriber::ATTESTATION));
}

#[test]
fn export_without_first_name_is_blocked() {
    let mut record = ali_rezai();
    record.first_name = String::new();
    let before = record.clone();
    let dir = tempfile::tempdir().expect("temp dir");
    let sink = DirectorySink::new(dir.path());

    let err = export_to(&record, &sink).expect_err("export is blocked");

    assert!(matches!(err, ExportError::Validation(_)));
    assert_eq!(err.notice(), MISSING_NAME_NOTICE);
    assert_eq!(record, before);
    assert_eq!(
        std::fs::read_dir(dir.path()).expect("listable").count(),
        0,
        "no file artifact is produced"
    );
}

#[test]
fn whitespace_names_do_not_pass_validation() {
    let mut record = ali_rezai();
    record.last_name = "   ".to_string();

    assert!(validate_for_export(&record).is_err());
    assert!(export(&record).is_err());
}

#[test]
fn sparse_education_rows_are_padded_with_placeholders() {
    let mut form = ApplicationForm::from_record(ali_rezai());
    let entry = form.add_entry(Collection::EducationHistory);
    form.update_entry(Collection::EducationHistory, &entry, "degree", json!("B.Sc."))
        .expect("degree set");

    let document = transcribe(form.record());
    let education = document
        .table_after(transcriber::SECTION_EDUCATION)
        .expect("education table present");

    assert_eq!(education.rows.len(), 1);
    let row = &education.rows[0];
    assert_eq!(row[0], "B.Sc.");
    assert_eq!(row.len(), transcriber::EDUCATION_HEADERS.len());
    assert!(row[1..].iter().all(|cell| cell == labels::EMPTY_CELL));

    let artifact = export(form.record()).expect("export succeeds");
    assert!(document_xml(&artifact.bytes).contains("B.Sc."));
}

#[test]
fn saved_exports_land_in_the_sink_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sink = DirectorySink::new(dir.path().join("applications"));

    let path = export_to(&ali_rezai(), &sink).expect("export saved");

    assert_eq!(path.file_name().and_then(|name| name.to_str()), Some("Ali_Rezai.docx"));
    let bytes = std::fs::read(&path).expect("saved file readable");
    assert!(document_xml(&bytes).contains("Ali Rezai"));
}

#[test]
fn pasted_control_characters_still_produce_a_readable_document() {
    let mut record = ali_rezai();
    record.address = "line1\u{0001}line2\u{000B}".to_string();
    record.unique_traits = "calm\u{001F}\tpatient".to_string();

    let artifact = export(&record).expect("export succeeds");
    let xml = document_xml(&artifact.bytes);

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut text = String::new();
    loop {
        match reader.read_event().expect("document part is well-formed XML") {
            quick_xml::events::Event::Eof => break,
            quick_xml::events::Event::Text(chunk) => {
                text.push_str(&chunk.unescape().expect("text unescapes"));
            }
            _ => {}
        }
    }

    assert!(text.contains("line1line2"));
    assert!(text.contains("calmpatient"));
    assert!(!xml.contains('\u{0001}'));
    assert!(!xml.contains('\u{000B}'));
    assert!(!xml.contains('\u{001F}'));
}
