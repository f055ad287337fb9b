use super::model::MaskToken;

pub fn parse_template(template: &str) -> Vec<MaskToken> {
    template.chars().map(MaskToken::classify).collect()
}

/// Drop characters irrelevant to the active classes.
///
/// Charset mode keeps ASCII word characters (`[A-Za-z0-9_]`), otherwise only
/// ASCII digits survive.
pub fn strip_input(raw: &str, charset_mode: bool) -> Vec<char> {
    raw.chars()
        .filter(|ch| {
            if charset_mode {
                ch.is_ascii_alphanumeric() || *ch == '_'
            } else {
                ch.is_ascii_digit()
            }
        })
        .collect()
}
