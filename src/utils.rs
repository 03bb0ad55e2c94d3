pub mod count_decimal_digits;
pub use count_decimal_digits::count_decimal_digits;

pub mod resolve_color;
pub use resolve_color::resolve_color;
