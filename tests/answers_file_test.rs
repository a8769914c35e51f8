// ABOUTME: Tests for loading quiz answer sets from JSON files
// ABOUTME: Uses temporary files to cover valid, duplicated, and malformed documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use periodization_coach::errors::ErrorCode;
use periodization_coach::quiz::{load_answers_file, QuestionId};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_answers(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_loads_mixed_answer_kinds() {
    let file = write_answers(
        r#"[
            {"question_id": "name", "answer": "Joana"},
            {"question_id": "goals", "answer": ["Aumentar força", "Melhorar definição"]},
            {"question_id": "body-weight", "answer": 61.5},
            {"question_id": "session-duration", "answer": "45-60 minutos"}
        ]"#,
    );

    let answers = load_answers_file(file.path()).unwrap();
    assert_eq!(answers.len(), 4);
    assert_eq!(answers.text(QuestionId::Name), Some("Joana"));
    assert_eq!(answers.selections(QuestionId::Goals).len(), 2);
    assert_eq!(answers.number(QuestionId::BodyWeight), Some(61.5));
}

#[test]
fn test_duplicate_entries_keep_the_last() {
    let file = write_answers(
        r#"[
            {"question_id": "availability", "answer": "4 dias"},
            {"question_id": "availability", "answer": "6+ dias"}
        ]"#,
    );

    let answers = load_answers_file(file.path()).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers.text(QuestionId::Availability), Some("6+ dias"));
}

#[test]
fn test_malformed_document_is_serialization_error() {
    let file = write_answers(r#"{"question_id": "name"}"#);
    let err = load_answers_file(file.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_unknown_question_id_is_rejected() {
    let file = write_answers(r#"[{"question_id": "favorite-color", "answer": "azul"}]"#);
    assert!(load_answers_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_answers_file(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
