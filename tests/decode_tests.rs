use resistor_code::constants::{COLOR_ALIASES, DIGIT_COLORS};
use resistor_code::{
    calculate_resistance, calculate_resistance_with_custom_config, decode, format_value,
    resolve_color, tokenize, Error, ResistorValue, HTML_FORMATTER_CONFIG,
};

fn to_tokens(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|color| color.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefix_and_alias() {
        assert_eq!(
            resolve_color("br", DIGIT_COLORS, Some(COLOR_ALIASES)),
            Some("brown")
        );
        assert_eq!(
            resolve_color("blk", DIGIT_COLORS, Some(COLOR_ALIASES)),
            Some("black")
        );
        assert_eq!(
            resolve_color("xyz", DIGIT_COLORS, Some(COLOR_ALIASES)),
            None
        );
    }

    #[test]
    fn test_resolve_empty_token_returns_first_key() {
        // The tokenizer never produces empty tokens, so this only matters in isolation
        assert_eq!(resolve_color("", DIGIT_COLORS, None), Some("black"));
    }

    #[test]
    fn test_decode_three_bands() {
        let resistor_value = decode(&to_tokens(&["brown", "black", "red"])).unwrap();

        assert_eq!(
            resistor_value,
            ResistorValue {
                first_digit: 1,
                second_digit: 0,
                multiplier_exponent: 2,
                tolerance_percent: None,
            }
        );
        assert_eq!(format_value(&resistor_value), "1 kΩ");
    }

    #[test]
    fn test_decode_four_bands() {
        let resistor_value = decode(&to_tokens(&["brown", "black", "red", "gold"])).unwrap();

        assert_eq!(resistor_value.tolerance_percent, Some(5));
        assert_eq!(
            format_value(&resistor_value),
            "1 kΩ (with tolerance of ±5%)"
        );
    }

    #[test]
    fn test_decode_rejects_wrong_band_count() {
        for colors in [
            &[][..],
            &["brown"][..],
            &["brown", "black"][..],
            &["brown", "black", "red", "gold", "gold"][..],
        ] {
            match decode(&to_tokens(colors)) {
                Err(Error::InvalidCode(_)) => {}
                other => panic!("Expected invalid code for {:?}, got {:?}", colors, other),
            }
        }
    }

    #[test]
    fn test_decode_rejects_unknown_colors() {
        assert!(decode(&to_tokens(&["xyz", "black", "red"])).is_err());
        assert!(decode(&to_tokens(&["brown", "xyz", "red"])).is_err());
        assert!(decode(&to_tokens(&["brown", "black", "xyz"])).is_err());
        assert!(decode(&to_tokens(&["brown", "black", "red", "xyz"])).is_err());
    }

    #[test]
    fn test_tolerance_band_uses_its_own_table() {
        // Orange is a digit color but not a tolerance color
        assert!(decode(&to_tokens(&["brown", "black", "red", "orange"])).is_err());
        // "brn" is a digit alias only
        assert!(decode(&to_tokens(&["brown", "black", "red", "brn"])).is_err());
        assert_eq!(
            decode(&to_tokens(&["brn", "black", "red", "brown"]))
                .unwrap()
                .tolerance_percent,
            Some(1)
        );
    }

    #[test]
    fn test_invalid_code_message_names_the_band() {
        let err = decode(&to_tokens(&["brown", "xyz", "red"])).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid Code: Unknown color \"xyz\" for band 2"
        );
    }

    #[test]
    fn test_calculate_resistance() {
        assert_eq!(calculate_resistance("  br Black  r ").unwrap(), "1 kΩ");
        assert!(calculate_resistance("brown black").is_err());
        assert_eq!(
            calculate_resistance_with_custom_config(HTML_FORMATTER_CONFIG, "red red orange silver")
                .unwrap(),
            "22 k&Omega; (with tolerance of &plusmn;10%)"
        );
    }

    #[test]
    fn test_every_three_band_code_formats() {
        for (first, _) in DIGIT_COLORS {
            for (second, _) in DIGIT_COLORS {
                for (multiplier, _) in DIGIT_COLORS {
                    let tokens = tokenize(&format!("{} {} {}", first, second, multiplier));
                    let resistor_value = decode(&tokens).unwrap();
                    let text = format_value(&resistor_value);

                    assert!(text.ends_with('Ω'), "Unexpected output {:?}", text);
                    assert_eq!(text, format_value(&resistor_value));
                }
            }
        }
    }
}
