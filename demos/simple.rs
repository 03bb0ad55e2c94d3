use resistor_code::constants::{DEFAULT_TEXT, PLACEHOLDER_RESULT_TEXT};
use resistor_code::{default_band_colors, read_resistor_code, DEFAULT_FORMATTER_CONFIG};

fn main() {
    env_logger::init();

    println!("{} ({})", PLACEHOLDER_RESULT_TEXT, DEFAULT_TEXT);
    println!("default bands: {:?}", default_band_colors());

    let text = "br Black r gold";

    let reading = read_resistor_code(text);

    println!("Resistance for the given code \"{}\"", text);
    println!("{}", reading.display_text(DEFAULT_FORMATTER_CONFIG));
    for (band_index, band_color) in reading.band_colors.iter().enumerate() {
        println!("band {}: {}", band_index + 1, band_color.unwrap_or("-"));
    }
}
