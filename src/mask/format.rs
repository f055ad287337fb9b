use super::model::{Step, resolve};
use super::parser::{parse_template, strip_input};

/// Project raw typed text onto `template`.
///
/// The walk takes one stripped input character per matched slot, writes
/// literals inline, and ends as soon as input runs out or a character lands
/// on a slot of the wrong class. Trailing literals after the last consumed
/// character are never written.
pub fn format(raw: &str, template: &str, charset_mode: bool) -> String {
    let stripped = strip_input(raw, charset_mode);
    let mut input = stripped.into_iter().peekable();
    let mut out = String::new();

    for token in parse_template(template) {
        match resolve(token, input.peek().copied(), charset_mode) {
            Step::Consume => {
                if let Some(ch) = input.next() {
                    out.push(ch);
                }
            }
            Step::Emit(ch) => out.push(ch),
            Step::Stop => return out,
        }

        if input.peek().is_none() {
            break;
        }
    }

    out
}

/// Overlay text: the formatted value followed by the unfilled template tail.
pub fn guide(formatted: &str, template: &str) -> String {
    let used = formatted.chars().count();
    let mut out = String::from(formatted);
    out.extend(template.chars().skip(used));
    out
}
