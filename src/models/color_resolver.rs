use crate::constants::{COLOR_ALIASES, DIGIT_COLORS, TOLERANCE_COLORS};
use crate::types::{AliasTable, ColorName, ColorTable, Digit, TokenRef, TolerancePercent};
use crate::utils::resolve_color;
use log::trace;

/// Pairs a color table with the aliases accepted for it.
#[derive(Copy, Clone)]
pub struct ColorResolver<V: Copy + 'static> {
    table: &'static ColorTable<V>,
    aliases: Option<&'static AliasTable>,
}

impl ColorResolver<Digit> {
    /// Resolver for significant-figure and multiplier bands
    pub fn digit_band() -> Self {
        Self {
            table: DIGIT_COLORS,
            aliases: Some(COLOR_ALIASES),
        }
    }
}

impl ColorResolver<TolerancePercent> {
    /// Resolver for the tolerance band. Aliases are not accepted here.
    pub fn tolerance_band() -> Self {
        Self {
            table: TOLERANCE_COLORS,
            aliases: None,
        }
    }
}

impl<V: Copy + 'static> ColorResolver<V> {
    pub fn resolve(&self, token: &TokenRef) -> Option<ColorName> {
        let color = resolve_color(token, self.table, self.aliases);
        trace!("Resolved {:?} to {:?}", token, color);

        color
    }

    /// Resolves the token and looks up the value its color encodes.
    pub fn resolve_value(&self, token: &TokenRef) -> Option<(ColorName, V)> {
        let color = self.resolve(token)?;

        self.value_of(color).map(|value| (color, value))
    }

    /// Looks up a canonical color name (exact match only).
    pub fn value_of(&self, color: &TokenRef) -> Option<V> {
        self.table
            .iter()
            .find(|(name, _)| *name == color)
            .map(|(_, value)| *value)
    }
}
