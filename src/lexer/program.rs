use std::{fmt, str::FromStr};

use super::{LexerError, Symbol};

/// An ordered sequence of instruction symbols, fixed once built
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Program {
    symbols: Vec<Symbol>,
}

impl Program {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }
}

impl From<Vec<Symbol>> for Program {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::new(symbols)
    }
}

impl FromIterator<Symbol> for Program {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

/// Strict parse: every character has to be an instruction symbol.
/// Use [`crate::lexer::lexer::Lexer`] to filter free-form source text instead.
impl FromStr for Program {
    type Err = LexerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(offset, c)| {
                Symbol::from_char(c).ok_or(LexerError::InvalidSymbol { symbol: c, offset })
            })
            .collect()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols.iter() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_symbol_in_order() {
        let program: Program = "><+-.,[]".parse().unwrap();
        assert_eq!(program.symbols(), &Symbol::ALL[..]);
        assert_eq!(program.to_string(), "><+-.,[]");
    }

    #[test]
    fn strict_parse_reports_offset() {
        let err = "++ +".parse::<Program>().unwrap_err();
        match err {
            LexerError::InvalidSymbol { symbol, offset } => {
                assert_eq!(symbol, ' ');
                assert_eq!(offset, 2);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn empty_program() {
        let program: Program = "".parse().unwrap();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert_eq!(program, Program::default());
    }
}
