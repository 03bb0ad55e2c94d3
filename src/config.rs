use crate::models::FormatterConfig;

pub const DEFAULT_FORMATTER_CONFIG: &FormatterConfig = &FormatterConfig {
    ohm_symbol: "Ω",
    plus_minus_symbol: "±",
};

/// Emits HTML entities instead of raw symbols, for embedding into markup.
pub const HTML_FORMATTER_CONFIG: &FormatterConfig = &FormatterConfig {
    ohm_symbol: "&Omega;",
    plus_minus_symbol: "&plusmn;",
};
