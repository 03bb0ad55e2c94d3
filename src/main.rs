use log::{error, info};
use resistor_code::{read_resistor_code, Error, DEFAULT_FORMATTER_CONFIG};
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    env_logger::init();

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = write_readings(&input) {
        error!("Error writing results: {}", e);
        std::process::exit(1);
    }
}

/// Writes one CSV record per non-blank input line.
fn write_readings(input: &str) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["Input", "Result"])?;

    let mut invalid_count = 0;
    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let reading = read_resistor_code(line);
        if !reading.is_valid() {
            invalid_count += 1;
        }

        let result = reading.display_text(DEFAULT_FORMATTER_CONFIG);
        writer.write_record([line, result.as_str()])?;
    }

    writer.flush()?;
    info!("{} invalid code(s)", invalid_count);

    Ok(())
}
