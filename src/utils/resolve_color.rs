use crate::types::{AliasTable, ColorName, ColorTable, TokenRef};

/// Resolves a (possibly abbreviated) token to a canonical color name.
///
/// The token is matched as a prefix against the table keys in declaration
/// order, then against the alias spellings. The first match wins.
///
/// Note: An empty token is a prefix of every key and therefore resolves to the
/// first entry of `table`.
pub fn resolve_color<V>(
    token: &TokenRef,
    table: &ColorTable<V>,
    aliases: Option<&AliasTable>,
) -> Option<ColorName> {
    if let Some((color, _)) = table.iter().find(|(color, _)| color.starts_with(token)) {
        return Some(*color);
    }

    aliases?
        .iter()
        .find(|(alias, _)| alias.starts_with(token))
        .map(|(_, color)| *color)
}
