use crate::constants::INVALID_CODE_MESSAGE;
use crate::models::{
    resolve_band_colors, Error, FormatterConfig, ResistorDecoder, ResistorValue, Tokenizer,
};
use crate::types::{BandColors, Token};

/// Everything a display needs for one piece of user input: the band colors to
/// paint and the decoded value, if any.
#[derive(Debug)]
pub struct ResistorReading {
    pub tokens: Vec<Token>,
    pub band_colors: BandColors,
    pub value: Result<ResistorValue, Error>,
}

impl ResistorReading {
    pub fn from_text(text: &str) -> Self {
        let tokens = Tokenizer::color_code_parser().tokenize(text);
        let band_colors = resolve_band_colors(&tokens);
        let value = ResistorDecoder::new().decode(&tokens);

        Self {
            tokens,
            band_colors,
            value,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_ok()
    }

    /// The formatted resistance, or the fixed hint for invalid input.
    pub fn display_text(&self, config: &FormatterConfig) -> String {
        match &self.value {
            Ok(resistor_value) => resistor_value.format_with_custom_config(config),
            Err(_) => INVALID_CODE_MESSAGE.to_string(),
        }
    }
}
