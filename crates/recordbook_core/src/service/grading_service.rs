//! Student grade report service.
//!
//! # Responsibility
//! - Parse `id,name,score` lines into `Student` records.
//! - Write one report line per student.
//!
//! # Invariants
//! - Field checks run in order: field count, id, name, score.
//! - Reading stops at the first bad line; no partial result is returned.

use crate::model::student::Student;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default input file name for the grading demo.
pub const STUDENTS_INPUT_FILE: &str = "students.txt";
/// Default report file name for the grading demo.
pub const REPORT_OUTPUT_FILE: &str = "report.txt";

pub type GradingResult<T> = Result<T, GradingError>;

#[derive(Debug)]
pub enum GradingError {
    /// Too few fields, or a non-numeric id/score.
    MalformedRecord { line: String, reason: String },
    /// A required field is present but empty.
    MissingField { line: String, field: &'static str },
    InputUnavailable { path: PathBuf, source: io::Error },
    OutputUnavailable { path: PathBuf, source: io::Error },
}

impl Display for GradingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRecord { line, reason } => {
                write!(f, "malformed record `{line}`: {reason}")
            }
            Self::MissingField { line, field } => {
                write!(f, "missing {field} in record `{line}`")
            }
            Self::InputUnavailable { path, source } => {
                write!(f, "input file `{}` unavailable: {source}", path.display())
            }
            Self::OutputUnavailable { path, source } => {
                write!(f, "report file `{}` unavailable: {source}", path.display())
            }
        }
    }
}

impl Error for GradingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputUnavailable { source, .. } | Self::OutputUnavailable { source, .. } => {
                Some(source)
            }
            Self::MalformedRecord { .. } | Self::MissingField { .. } => None,
        }
    }
}

/// Parses one `id,name,score` line. Extra trailing fields are ignored.
pub fn parse_student_line(line: &str) -> GradingResult<Student> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(malformed(line, format!("expected 3 fields, found {}", fields.len())));
    }

    let id = fields[0]
        .parse()
        .map_err(|_| malformed(line, format!("invalid id `{}`", fields[0])))?;

    let full_name = fields[1];
    if full_name.is_empty() {
        return Err(GradingError::MissingField {
            line: line.to_string(),
            field: "name",
        });
    }

    let score = fields[2]
        .parse()
        .map_err(|_| malformed(line, format!("invalid score `{}`", fields[2])))?;

    Ok(Student::new(id, full_name, score))
}

fn malformed(line: &str, reason: String) -> GradingError {
    GradingError::MalformedRecord {
        line: line.to_string(),
        reason,
    }
}

/// Reads and parses every non-blank line of `reader`.
pub fn parse_students<R: BufRead>(reader: R, path: &Path) -> GradingResult<Vec<Student>> {
    let mut students = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| GradingError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        students.push(parse_student_line(&line)?);
    }
    Ok(students)
}

/// Batch processor turning a student score file into a grade report.
#[derive(Debug, Clone, Default)]
pub struct StudentResultProcessor;

impl StudentResultProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn read_students(&self, input_path: impl AsRef<Path>) -> GradingResult<Vec<Student>> {
        let path = input_path.as_ref();
        let file = fs::File::open(path).map_err(|source| GradingError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        parse_students(BufReader::new(file), path)
    }

    pub fn write_report(
        &self,
        students: &[Student],
        output_path: impl AsRef<Path>,
    ) -> GradingResult<()> {
        let path = output_path.as_ref();
        let to_output_error = |source: io::Error| GradingError::OutputUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::create(path).map_err(to_output_error)?;
        let mut writer = BufWriter::new(file);
        for student in students {
            writeln!(writer, "{}", student.report_line()).map_err(to_output_error)?;
        }
        writer.flush().map_err(to_output_error)
    }

    /// Reads `input_path`, writes the report and returns the student count.
    pub fn run(
        &self,
        input_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> GradingResult<usize> {
        let result = self
            .read_students(input_path.as_ref())
            .and_then(|students| {
                self.write_report(&students, output_path.as_ref())?;
                Ok(students.len())
            });

        match &result {
            Ok(count) => info!("event=grade_report module=grading status=ok count={count}"),
            Err(err) => error!("event=grade_report module=grading status=error error={err}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_student_line, GradingError};

    #[test]
    fn parse_trims_fields() {
        let student = parse_student_line(" 12 , Kofi Mensah ,  71 ").unwrap();
        assert_eq!(student.id, 12);
        assert_eq!(student.full_name, "Kofi Mensah");
        assert_eq!(student.score, 71);
    }

    #[test]
    fn too_few_fields_is_malformed() {
        let err = parse_student_line("7,Ama").unwrap_err();
        assert!(matches!(err, GradingError::MalformedRecord { .. }));
    }

    #[test]
    fn bad_id_is_reported_before_missing_name() {
        let err = parse_student_line("x,,85").unwrap_err();
        assert!(matches!(err, GradingError::MalformedRecord { .. }));
    }
}
