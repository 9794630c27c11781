use super::{Program, Symbol};

/// Filters free-form source text down to instruction symbols.
///
/// Everything that isn't one of the eight symbols is a comment and is
/// dropped without complaint, order of the remaining symbols is kept.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable positions in file */
    pub cur_line: usize,
    pub cur_col: usize,

    /** 'raw' format / offset within the file (in terms of 'codepoints') */
    pub codepoint_offset: usize,

    chars: std::str::Chars<'a>,
    dropped: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            cur_col: 1,
            cur_line: 1,

            codepoint_offset: 0,

            chars: chars.chars(),
            dropped: 0,
        }
    }

    fn consume_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.cur_col += 1;
        if c == '\n' {
            self.cur_line += 1;
            self.cur_col = 1;
        }
        self.codepoint_offset += 1;
        Some(c)
    }

    /// Next instruction symbol, `None` once the text is exhausted
    pub fn next_symbol(&mut self) -> Option<Symbol> {
        while let Some(c) = self.consume_char() {
            match Symbol::from_char(c) {
                Some(symbol) => return Some(symbol),
                None => self.dropped += 1,
            }
        }
        None
    }

    /// How many comment characters have been skipped so far
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn collect_program(&mut self) -> Program {
        self.by_ref().collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_symbol()
    }
}
