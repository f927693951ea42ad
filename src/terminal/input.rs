//! Key events understood by terminal screens.

/// A discrete key event, already decoupled from any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable character, with the shift modifier state
    Char { ch: char, shift: bool },
    Enter,
    Backspace,
    Escape,
}

impl KeyInput {
    /// Shorthand for an unshifted character.
    pub fn char(ch: char) -> Self {
        Self::Char { ch, shift: false }
    }
}

/// Whether `ch` is in the printable ASCII range accepted by the prompt.
pub fn is_printable(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Apply the shift modifier to a key on a US layout.
///
/// Symbol keys map to their shifted symbol, letters are upper-cased and
/// anything already shifted comes back unchanged.
pub fn shift_char(ch: char) -> char {
    match ch {
        '`' => '~',
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        other => other.to_ascii_uppercase(),
    }
}
