use recordbook_core::{parse_student_line, Grade, GradingError, StudentResultProcessor};
use std::fs;
use std::io::Cursor;
use std::path::Path;

#[test]
fn empty_name_is_missing_field() {
    let err = parse_student_line("7,,85").unwrap_err();
    assert!(matches!(err, GradingError::MissingField { field: "name", .. }));
}

#[test]
fn non_numeric_score_is_malformed() {
    let err = parse_student_line("7,Ama,xx").unwrap_err();
    assert!(matches!(err, GradingError::MalformedRecord { .. }));
    assert!(err.to_string().contains("invalid score `xx`"));
}

#[test]
fn valid_line_parses_and_grades() {
    let student = parse_student_line("7,Ama,85").unwrap();
    assert_eq!(student.id, 7);
    assert_eq!(student.full_name, "Ama");
    assert_eq!(student.grade(), Grade::A);
}

#[test]
fn parse_students_skips_blank_lines_and_stops_at_first_error() {
    let input = Cursor::new("1,Ama,85\n\n2,Kofi,64\n3,,70\n4,Esi,90\n");
    let err = recordbook_core::service::grading_service::parse_students(
        input,
        Path::new("students.txt"),
    )
    .unwrap_err();
    assert!(matches!(err, GradingError::MissingField { ref line, .. } if line == "3,,70"));

    let input = Cursor::new("1,Ama,85\n\n2,Kofi,64\n");
    let students = recordbook_core::service::grading_service::parse_students(
        input,
        Path::new("students.txt"),
    )
    .unwrap();
    assert_eq!(students.len(), 2);
}

#[test]
fn run_writes_one_report_line_per_student() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("students.txt");
    let output = dir.path().join("report.txt");
    fs::write(&input, "101,Ama Owusu,85\n102,Kofi Mensah,72\n103,Esi Boateng,48\n").unwrap();

    let count = StudentResultProcessor::new().run(&input, &output).unwrap();
    assert_eq!(count, 3);

    let report = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Ama Owusu (ID: 101): Score = 85, Grade = A",
            "Kofi Mensah (ID: 102): Score = 72, Grade = B",
            "Esi Boateng (ID: 103): Score = 48, Grade = F",
        ]
    );
}

#[test]
fn missing_input_is_input_unavailable_and_writes_no_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.txt");

    let err = StudentResultProcessor::new()
        .run(dir.path().join("students.txt"), &output)
        .unwrap_err();
    assert!(matches!(err, GradingError::InputUnavailable { .. }));
    assert!(!output.exists());
}

#[test]
fn bad_record_aborts_before_report_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("students.txt");
    let output = dir.path().join("report.txt");
    fs::write(&input, "1,Ama,85\nabc,Kofi,70\n").unwrap();

    let err = StudentResultProcessor::new().run(&input, &output).unwrap_err();
    assert!(matches!(err, GradingError::MalformedRecord { .. }));
    assert!(!output.exists());
}
