use crate::constants::{DEFAULT_BAND_COLORS, MAX_BAND_TOKENS, TOLERANCE_BAND_INDEX};
use crate::models::ColorResolver;
use crate::types::{BandColors, Token, BAND_COUNT};

/// Picks the color each band should be painted with.
///
/// Unlike decoding, this is computed band by band so that partially typed
/// input still lights up the bands it can. The tolerance band is only read
/// from the input when exactly four tokens are present; otherwise it shows
/// the default tolerance color.
pub fn resolve_band_colors(tokens: &[Token]) -> BandColors {
    let digit_resolver = ColorResolver::digit_band();
    let tolerance_resolver = ColorResolver::tolerance_band();

    let mut band_colors: BandColors = [None; BAND_COUNT];

    for (band_index, band_color) in band_colors.iter_mut().enumerate() {
        *band_color = if band_index == TOLERANCE_BAND_INDEX {
            if tokens.len() == MAX_BAND_TOKENS {
                tolerance_resolver.resolve(&tokens[band_index])
            } else {
                Some(DEFAULT_BAND_COLORS[TOLERANCE_BAND_INDEX])
            }
        } else {
            tokens
                .get(band_index)
                .and_then(|token| digit_resolver.resolve(token))
        };
    }

    band_colors
}

/// Bands for the placeholder resistor shown before any input.
pub fn default_band_colors() -> BandColors {
    DEFAULT_BAND_COLORS.map(Some)
}
