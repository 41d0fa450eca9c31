//! Grading demo: turn `students.txt` into `report.txt`.

use recordbook_core::service::grading_service::{REPORT_OUTPUT_FILE, STUDENTS_INPUT_FILE};
use recordbook_core::{GradingError, StudentResultProcessor};

fn main() {
    let config = recordbook_cli::bootstrap("grading");
    let input = config.data_path(STUDENTS_INPUT_FILE);
    let output = config.data_path(REPORT_OUTPUT_FILE);

    match StudentResultProcessor::new().run(&input, &output) {
        Ok(_) => println!("Report generated successfully."),
        Err(err @ GradingError::InputUnavailable { .. }) => {
            println!("Error: Input file not found - {err}")
        }
        Err(err @ GradingError::MalformedRecord { .. }) => {
            println!("Error: Invalid score format - {err}")
        }
        Err(err @ GradingError::MissingField { .. }) => {
            println!("Error: Missing field in record - {err}")
        }
        Err(err) => println!("Unexpected error: {err}"),
    }
}
