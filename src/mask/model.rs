/// Template characters that expect a digit.
pub const DIGIT_SLOTS: [char; 4] = ['X', 'M', 'D', 'Y'];

/// Template character that expects a letter (charset mode only).
pub const LETTER_SLOT: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    Literal(char),
    DigitSlot(char),
    LetterSlot,
}

impl MaskToken {
    pub fn classify(ch: char) -> Self {
        if DIGIT_SLOTS.contains(&ch) {
            Self::DigitSlot(ch)
        } else if ch == LETTER_SLOT {
            Self::LetterSlot
        } else {
            Self::Literal(ch)
        }
    }

    /// The character this token occupies in the template.
    pub fn as_char(self) -> char {
        match self {
            Self::Literal(ch) | Self::DigitSlot(ch) => ch,
            Self::LetterSlot => LETTER_SLOT,
        }
    }
}

/// Class of a character taken from the stripped input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Letter,
    /// Survives the word-character strip but fits neither slot (`_`).
    Other,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        if ch.is_ascii_digit() {
            Self::Digit
        } else if ch.is_ascii_alphabetic() {
            Self::Letter
        } else {
            Self::Other
        }
    }
}

/// What the formatter does at one template position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Take the candidate from the input buffer.
    Consume,
    /// Write this character without touching the input.
    Emit(char),
    /// Return the output built so far.
    Stop,
}

/// Decide how a template token treats the next input character.
///
/// An absent candidate at a slot stops the walk, so the formatted value
/// never shows a bare slot marker. Letter slots cannot match outside charset
/// mode and truncate there.
pub fn resolve(token: MaskToken, candidate: Option<char>, charset_mode: bool) -> Step {
    let class = candidate.map(CharClass::of);
    match token {
        MaskToken::DigitSlot(_) => match class {
            Some(CharClass::Digit) => Step::Consume,
            _ => Step::Stop,
        },
        MaskToken::LetterSlot => match class {
            Some(CharClass::Letter) if charset_mode => Step::Consume,
            _ => Step::Stop,
        },
        MaskToken::Literal(ch) => Step::Emit(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::{CharClass, MaskToken, Step, resolve};

    #[test]
    fn classify_slot_tokens() {
        for ch in ['X', 'M', 'D', 'Y'] {
            assert_eq!(MaskToken::classify(ch), MaskToken::DigitSlot(ch));
        }
        assert_eq!(MaskToken::classify('_'), MaskToken::LetterSlot);
        assert_eq!(MaskToken::classify('x'), MaskToken::Literal('x'));
        assert_eq!(MaskToken::classify('-'), MaskToken::Literal('-'));
    }

    #[test]
    fn underscore_is_neither_digit_nor_letter() {
        assert_eq!(CharClass::of('_'), CharClass::Other);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('q'), CharClass::Letter);
        assert_eq!(CharClass::of('é'), CharClass::Other);
    }

    #[test]
    fn digit_slot_consumes_digit_and_stops_otherwise() {
        let slot = MaskToken::DigitSlot('X');
        assert_eq!(resolve(slot, Some('4'), false), Step::Consume);
        assert_eq!(resolve(slot, Some('4'), true), Step::Consume);
        assert_eq!(resolve(slot, Some('a'), true), Step::Stop);
        assert_eq!(resolve(slot, None, false), Step::Stop);
    }

    #[test]
    fn letter_slot_depends_on_charset_mode() {
        let slot = MaskToken::LetterSlot;
        assert_eq!(resolve(slot, Some('a'), true), Step::Consume);
        assert_eq!(resolve(slot, Some('1'), true), Step::Stop);
        assert_eq!(resolve(slot, Some('_'), true), Step::Stop);
        assert_eq!(resolve(slot, Some('1'), false), Step::Stop);
        assert_eq!(resolve(slot, Some('a'), false), Step::Stop);
    }

    #[test]
    fn literal_never_consumes() {
        let literal = MaskToken::Literal('/');
        assert_eq!(resolve(literal, Some('1'), false), Step::Emit('/'));
        assert_eq!(resolve(literal, None, true), Step::Emit('/'));
    }
}
