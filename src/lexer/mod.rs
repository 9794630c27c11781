use std::fmt;

use thiserror::Error;

pub mod lexer;
pub mod program;

pub use program::Program;

/// Number of symbols in the ring
pub const ALPHABET_LEN: usize = 8;

/// One of the eight instruction symbols.
///
/// Variants are declared in ring order, so the discriminant is the symbol's
/// position in the cycle `> < + - . , [ ]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    // `>`: Increment the `data pointer` by one
    ShiftRight = 0,
    // `<`: Decrement the `data pointer` by one
    ShiftLeft = 1,

    // `+`: Increment the byte at the `data pointer` by one
    Increment = 2,
    // `-`: Decrement the byte at the `data pointer` by one
    Decrement = 3,

    // `.`: Write the byte at the `data pointer` to the `output device`
    Write = 4,
    // `,`: Read the next byte from the `input device` and store it at the `data pointer`
    Read = 5,

    // `[`: If the byte at the `data pointer` is zero, jump past the matching `]`
    JumpStart = 6,
    // `]`: If the byte at the `data pointer` is non-zero, jump back to just after the matching `[`
    JumpEnd = 7,
}

/// Which way round the ring to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forwards,
    Backwards,
}

impl Symbol {
    /// All symbols in ring order
    pub const ALL: [Symbol; ALPHABET_LEN] = [
        Symbol::ShiftRight,
        Symbol::ShiftLeft,
        Symbol::Increment,
        Symbol::Decrement,
        Symbol::Write,
        Symbol::Read,
        Symbol::JumpStart,
        Symbol::JumpEnd,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Symbol {
        Self::ALL[index % ALPHABET_LEN]
    }

    pub fn successor(self) -> Symbol {
        self.rotate(1, Direction::Forwards)
    }

    pub fn predecessor(self) -> Symbol {
        self.rotate(1, Direction::Backwards)
    }

    /// Move `steps` places round the ring, only `steps mod 8` matters
    pub fn rotate(self, steps: usize, direction: Direction) -> Symbol {
        let steps = steps % ALPHABET_LEN;
        match direction {
            Direction::Forwards => Self::from_index(self.index() + steps),
            Direction::Backwards => Self::from_index(self.index() + ALPHABET_LEN - steps),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::ShiftRight => '>',
            Symbol::ShiftLeft => '<',
            Symbol::Increment => '+',
            Symbol::Decrement => '-',
            Symbol::Write => '.',
            Symbol::Read => ',',
            Symbol::JumpStart => '[',
            Symbol::JumpEnd => ']',
        }
    }

    /// Same as `TryFrom<char>` but without building an error, used when filtering
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '>' => Some(Symbol::ShiftRight),
            '<' => Some(Symbol::ShiftLeft),
            '+' => Some(Symbol::Increment),
            '-' => Some(Symbol::Decrement),
            '.' => Some(Symbol::Write),
            ',' => Some(Symbol::Read),
            '[' => Some(Symbol::JumpStart),
            ']' => Some(Symbol::JumpEnd),
            _ => None,
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = LexerError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::from_char(c).ok_or(LexerError::InvalidSymbol { symbol: c, offset: 0 })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Error, Debug)]
pub enum LexerError {
    #[error("{symbol:?} at offset {offset} is not an instruction symbol")]
    InvalidSymbol { symbol: char, offset: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_follows_ring_order() {
        assert_eq!(Symbol::ShiftRight.successor(), Symbol::ShiftLeft);
        assert_eq!(Symbol::Increment.successor(), Symbol::Decrement);
        assert_eq!(Symbol::JumpStart.successor(), Symbol::JumpEnd);
        // wraps back round
        assert_eq!(Symbol::JumpEnd.successor(), Symbol::ShiftRight);
    }

    #[test]
    fn predecessor_wraps() {
        assert_eq!(Symbol::ShiftRight.predecessor(), Symbol::JumpEnd);
        assert_eq!(Symbol::Decrement.predecessor(), Symbol::Increment);
    }

    #[test]
    fn successor_and_predecessor_are_inverses() {
        for symbol in Symbol::ALL {
            assert_eq!(symbol.successor().predecessor(), symbol);
            assert_eq!(symbol.predecessor().successor(), symbol);
        }
    }

    #[test]
    fn full_rotation_is_identity() {
        for symbol in Symbol::ALL {
            assert_eq!(symbol.rotate(ALPHABET_LEN, Direction::Forwards), symbol);
            assert_eq!(symbol.rotate(3 * ALPHABET_LEN, Direction::Backwards), symbol);
        }
    }

    #[test]
    fn rotate_matches_repeated_successor() {
        for symbol in Symbol::ALL {
            let mut stepped = symbol;
            for steps in 0..20 {
                assert_eq!(symbol.rotate(steps, Direction::Forwards), stepped);
                stepped = stepped.successor();
            }
        }
    }

    #[test]
    fn chars_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::try_from(symbol.as_char()).unwrap(), symbol);
            assert_eq!(symbol.to_string(), symbol.as_char().to_string());
        }
    }

    #[test]
    fn non_member_is_rejected() {
        let err = Symbol::try_from('x').unwrap_err();
        assert!(matches!(err, LexerError::InvalidSymbol { symbol: 'x', .. }));
        assert_eq!(Symbol::from_char(' '), None);
    }
}
