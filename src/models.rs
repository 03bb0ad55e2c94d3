pub mod band_colors;
pub use band_colors::{default_band_colors, resolve_band_colors};

pub mod color_resolver;
pub use color_resolver::ColorResolver;

pub mod error;
pub use error::Error;

pub mod formatter_config;
pub use formatter_config::FormatterConfig;

pub mod resistor_decoder;
pub use resistor_decoder::ResistorDecoder;

pub mod resistor_reading;
pub use resistor_reading::ResistorReading;

pub mod resistor_value;
pub use resistor_value::ResistorValue;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
