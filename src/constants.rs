use crate::types::{AliasTable, ColorName, ColorTable, Digit, TolerancePercent, BAND_COUNT};

/// Significant-figure and multiplier band colors, in canonical enumeration order.
pub const DIGIT_COLORS: &ColorTable<Digit> = &[
    ("black", 0),
    ("brown", 1),
    ("red", 2),
    ("orange", 3),
    ("yellow", 4),
    ("green", 5),
    ("blue", 6),
    ("purple", 7),
    ("gray", 8),
    ("white", 9),
];

/// Tolerance band colors. Values are percentages.
pub const TOLERANCE_COLORS: &ColorTable<TolerancePercent> =
    &[("brown", 1), ("red", 2), ("gold", 5), ("silver", 10)];

/// Alternate spellings accepted for the digit bands.
pub const COLOR_ALIASES: &AliasTable = &[
    ("blk", "black"),
    ("brn", "brown"),
    ("grn", "green"),
    ("grey", "gray"),
    ("violet", "purple"),
];

pub const MIN_BAND_TOKENS: usize = 3;
pub const MAX_BAND_TOKENS: usize = 4;

/// Index of the optional tolerance band.
pub const TOLERANCE_BAND_INDEX: usize = 3;

/// Bands shown before the user has typed anything (a 1 kΩ ±5% resistor).
pub const DEFAULT_BAND_COLORS: [ColorName; BAND_COUNT] = ["brown", "black", "red", "gold"];

/// Placeholder text for an empty input field.
pub const DEFAULT_TEXT: &str = "Ex: br Black r";

/// Result text shown alongside the placeholder input.
pub const PLACEHOLDER_RESULT_TEXT: &str = "Type in the resistor's color code!";

/// Hint shown whenever the input does not decode.
pub const INVALID_CODE_MESSAGE: &str =
    "Expecting three color bands (and optional tolerance band)...";
