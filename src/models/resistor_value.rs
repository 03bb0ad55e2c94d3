use crate::config::DEFAULT_FORMATTER_CONFIG;
use crate::models::FormatterConfig;
use crate::types::{Digit, MultiplierExponent, Ohms, TolerancePercent};
use crate::utils::count_decimal_digits;
use std::fmt;

/// A successfully decoded resistor code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResistorValue {
    pub first_digit: Digit,
    pub second_digit: Digit,
    pub multiplier_exponent: MultiplierExponent,
    pub tolerance_percent: Option<TolerancePercent>,
}

impl ResistorValue {
    /// The two significant figures as a number (0-99).
    pub fn significant_value(&self) -> Ohms {
        Ohms::from(self.first_digit) * 10 + Ohms::from(self.second_digit)
    }

    pub fn ohms(&self) -> Ohms {
        self.significant_value() * 10_u64.pow(u32::from(self.multiplier_exponent))
    }

    /// Renders the resistance as text, e.g. `4.7 kΩ (with tolerance of ±5%)`.
    ///
    /// The unit is picked by the digit count of the value in ohms. Values
    /// below 1000 Ω are still divided by 1000 but get no unit prefix, so
    /// 100 Ω renders as `0.1 Ω`.
    pub fn format_with_custom_config(&self, config: &FormatterConfig) -> String {
        let ohms = self.ohms();
        let digit_count = count_decimal_digits(ohms);

        let (divisor, unit_prefix) = if digit_count > 6 {
            (1_000_000.0, "M")
        } else if digit_count > 3 {
            (1_000.0, "k")
        } else {
            (1_000.0, "")
        };

        // `f64` display is the shortest round-trip representation (`1`, `4.7`, `0.001`)
        let scaled = ohms as f64 / divisor;
        let mut text = format!("{} {}{}", scaled, unit_prefix, config.ohm_symbol);

        if let Some(tolerance_percent) = self.tolerance_percent {
            text.push_str(&format!(
                " (with tolerance of {}{}%)",
                config.plus_minus_symbol, tolerance_percent
            ));
        }

        text
    }
}

impl fmt::Display for ResistorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_custom_config(DEFAULT_FORMATTER_CONFIG))
    }
}
