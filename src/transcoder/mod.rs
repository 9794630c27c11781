//! Converts between plain programs and their rotated encoding.
//!
//! The symbol at position `i` is moved `i mod 8` places round the ring,
//! forwards to encode and backwards to decode. The shift only depends on the
//! position, so the two directions are exact inverses for any length.

use crate::lexer::{Direction, Program};

/// Rotate every symbol by its own position in the sequence
pub fn rotate(program: &Program, direction: Direction) -> Program {
    program
        .iter()
        .enumerate()
        .map(|(position, symbol)| symbol.rotate(position, direction))
        .collect()
}

/// Plain program to rotated encoding
pub fn encode(program: &Program) -> Program {
    rotate(program, Direction::Forwards)
}

/// Rotated encoding back to the plain program
pub fn decode(program: &Program) -> Program {
    rotate(program, Direction::Backwards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(s: &str) -> Program {
        s.parse().unwrap()
    }

    #[test]
    fn first_symbol_is_unchanged() {
        assert_eq!(encode(&program("+")), program("+"));
    }

    #[test]
    fn second_symbol_moves_one_place() {
        assert_eq!(encode(&program("++")), program("+-"));
        assert_eq!(decode(&program("+-")), program("++"));
    }

    #[test]
    fn shift_repeats_every_eight_positions() {
        let encoded = encode(&program(">>>>>>>>>>"));
        assert_eq!(encoded.to_string(), "><+-.,[]><");
    }

    #[test]
    fn empty_program_stays_empty() {
        assert!(encode(&Program::default()).is_empty());
        assert!(decode(&Program::default()).is_empty());
    }

    #[test]
    fn each_position_uses_its_own_shift() {
        let source = program("[->+<]>.");
        let encoded = encode(&source);
        for (position, symbol) in source.iter().enumerate() {
            assert_eq!(
                symbol.rotate(position, Direction::Forwards),
                encoded.symbols()[position]
            );
        }
    }

    #[test]
    fn hello_world_round_trip() {
        let source = program(
            "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.",
        );
        assert_ne!(encode(&source), source);
        assert_eq!(decode(&encode(&source)), source);
    }
}
