// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the whitespace-separated
/// units of a color code (e.g. `"br"`, `"black"`).
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A canonical, lowercase color name taken from one of the static color tables.
pub type ColorName = &'static str;

/// A single decimal digit (0-9) encoded by a significant-figure or multiplier band.
pub type Digit = u8;

/// The power-of-ten exponent encoded by the multiplier band.
pub type MultiplierExponent = u8;

/// A tolerance, in percent (e.g. `5` means ±5%).
pub type TolerancePercent = u8;

/// Resistance in whole ohms.
pub type Ohms = u64;

/// An ordered list of `(color, value)` pairs.
///
/// Declaration order matters: when a token is a prefix of several colors, the
/// first-declared color wins.
pub type ColorTable<V> = [(ColorName, V)];

/// An ordered list of `(alias spelling, canonical color)` pairs.
pub type AliasTable = [(&'static str, ColorName)];

/// Number of bands drawn for a resistor (three value bands plus one tolerance band).
pub const BAND_COUNT: usize = 4;

/// The color each band should be painted with. `None` marks a band whose token is
/// missing or could not be resolved.
pub type BandColors = [Option<ColorName>; BAND_COUNT];
