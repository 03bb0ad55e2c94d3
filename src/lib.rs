#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::{DEFAULT_FORMATTER_CONFIG, HTML_FORMATTER_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    default_band_colors, resolve_band_colors, ColorResolver, Error, FormatterConfig,
    ResistorDecoder, ResistorReading, ResistorValue, Tokenizer,
};
pub mod types;
mod utils;
pub use types::{
    AliasTable, BandColors, ColorName, ColorTable, Digit, MultiplierExponent, Ohms, Token,
    TokenRef, TolerancePercent, BAND_COUNT,
};
pub use utils::resolve_color;

/// Splits raw input into lowercase color tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::color_code_parser().tokenize(text)
}

/// Decodes three or four band tokens. See [`ResistorDecoder::decode`].
pub fn decode(tokens: &[Token]) -> Result<ResistorValue, Error> {
    ResistorDecoder::new().decode(tokens)
}

/// Formats a decoded value with the default (Unicode) symbols.
pub fn format_value(resistor_value: &ResistorValue) -> String {
    resistor_value.format_with_custom_config(DEFAULT_FORMATTER_CONFIG)
}

/// Reads a resistor color code (e.g. `"br black r gold"`) and returns its resistance as text.
pub fn calculate_resistance(text: &str) -> Result<String, Error> {
    calculate_resistance_with_custom_config(DEFAULT_FORMATTER_CONFIG, text)
}

pub fn calculate_resistance_with_custom_config(
    formatter_config: &FormatterConfig,
    text: &str,
) -> Result<String, Error> {
    let tokens = tokenize(text);
    let resistor_value = decode(&tokens)?;

    Ok(resistor_value.format_with_custom_config(formatter_config))
}

/// Runs the full pipeline, keeping the per-band colors even for invalid input.
pub fn read_resistor_code(text: &str) -> ResistorReading {
    ResistorReading::from_text(text)
}
