use crate::constants::{MAX_BAND_TOKENS, MIN_BAND_TOKENS, TOLERANCE_BAND_INDEX};
use crate::models::{ColorResolver, Error, ResistorValue};
use crate::types::{Digit, Token, TokenRef, TolerancePercent};
use log::debug;

pub struct ResistorDecoder {
    digit_resolver: ColorResolver<Digit>,
    tolerance_resolver: ColorResolver<TolerancePercent>,
}

impl Default for ResistorDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResistorDecoder {
    pub fn new() -> Self {
        Self {
            digit_resolver: ColorResolver::digit_band(),
            tolerance_resolver: ColorResolver::tolerance_band(),
        }
    }

    /// Decodes three or four band tokens into a resistor value.
    ///
    /// Decoding is all-or-nothing: if the band count is wrong or any band
    /// fails to resolve, the whole code is rejected.
    pub fn decode(&self, tokens: &[Token]) -> Result<ResistorValue, Error> {
        if tokens.len() < MIN_BAND_TOKENS || tokens.len() > MAX_BAND_TOKENS {
            return Err(Error::InvalidCode(format!(
                "Expected {} or {} bands, got {}",
                MIN_BAND_TOKENS,
                MAX_BAND_TOKENS,
                tokens.len()
            )));
        }

        let first_digit = self.decode_digit(0, &tokens[0])?;
        let second_digit = self.decode_digit(1, &tokens[1])?;
        let multiplier_exponent = self.decode_digit(2, &tokens[2])?;

        let tolerance_percent = match tokens.get(TOLERANCE_BAND_INDEX) {
            Some(token) => Some(self.decode_tolerance(token)?),
            None => None,
        };

        let resistor_value = ResistorValue {
            first_digit,
            second_digit,
            multiplier_exponent,
            tolerance_percent,
        };
        debug!("Decoded {:?} as {:?}", tokens, resistor_value);

        Ok(resistor_value)
    }

    fn decode_digit(&self, band_index: usize, token: &TokenRef) -> Result<Digit, Error> {
        self.digit_resolver
            .resolve_value(token)
            .map(|(_, digit)| digit)
            .ok_or_else(|| {
                Error::InvalidCode(format!(
                    "Unknown color {:?} for band {}",
                    token,
                    band_index + 1
                ))
            })
    }

    fn decode_tolerance(&self, token: &TokenRef) -> Result<TolerancePercent, Error> {
        self.tolerance_resolver
            .resolve_value(token)
            .map(|(_, tolerance_percent)| tolerance_percent)
            .ok_or_else(|| {
                Error::InvalidCode(format!("Unknown tolerance color {:?}", token))
            })
    }
}
