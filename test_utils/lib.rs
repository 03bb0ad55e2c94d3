#![allow(dead_code)] // Not every helper is used by every test binary

use csv::Reader;
use resistor_code::calculate_resistance;
use std::error::Error;

/// Marks a case whose input is expected to be rejected.
pub const EXPECTED_INVALID: &str = "INVALID";

pub struct ColorCodeCase {
    pub input: String,
    pub expected: String,
}

/// Utility to load color code cases from a CSV file with `Input` and `Expected` columns.
pub fn load_color_code_cases(file_path: &str) -> Result<Vec<ColorCodeCase>, Box<dyn Error>> {
    let mut cases = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            cases.push(ColorCodeCase {
                input: record[0].to_string(),
                expected: record[1].to_string(),
            });
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(cases)
}

/// Runs a single case, returning a description of the mismatch (if any).
pub fn run_color_code_case(case: &ColorCodeCase) -> Option<String> {
    let result = calculate_resistance(&case.input);

    match (&result, case.expected.as_str()) {
        (Err(_), EXPECTED_INVALID) => None,
        (Ok(text), expected) if text == expected => None,
        (Ok(text), expected) => Some(format!(
            "{:?} - Expected: {:?}, but got: {:?}",
            case.input, expected, text
        )),
        (Err(err), expected) => Some(format!(
            "{:?} - Expected: {:?}, but got error: {}",
            case.input, expected, err
        )),
    }
}
