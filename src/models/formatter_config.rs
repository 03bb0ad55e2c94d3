pub struct FormatterConfig {
    pub ohm_symbol: &'static str,
    pub plus_minus_symbol: &'static str,
}
