use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    lexer::{lexer::Lexer, Program},
    transcoder,
};

const PLAIN_EXTENSIONS: [&str; 2] = [".bf", ".brainfuck"];
const ROTATED_EXTENSION: &str = ".ultimate_brainfuck";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Could not open file {}", path.display())]
    FileIO {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Unsupported file extension for {} (expected .bf, .brainfuck or .ultimate_brainfuck)",
        path.display()
    )]
    UnsupportedExtension { path: PathBuf },
}

/// Which instruction dialect a source file is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Symbols mean what they say
    Plain,
    /// Each symbol is rotated by its position, see [`crate::transcoder`]
    Rotated,
}

impl Dialect {
    pub fn from_path(path: &Path) -> Result<Dialect, SourceError> {
        let name = path.to_string_lossy();
        if name.ends_with(ROTATED_EXTENSION) {
            Ok(Dialect::Rotated)
        } else if PLAIN_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            Ok(Dialect::Plain)
        } else {
            Err(SourceError::UnsupportedExtension {
                path: path.to_path_buf(),
            })
        }
    }
}

/// A program read from disk, in the dialect it was written in
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub dialect: Dialect,
    pub program: Program,
    /// Number of comment characters dropped while lexing
    pub dropped: usize,
}

impl SourceFile {
    pub fn from_text(dialect: Dialect, text: &str) -> Self {
        let mut lexer = Lexer::new(text);
        let program = lexer.collect_program();
        Self {
            dialect,
            program,
            dropped: lexer.dropped(),
        }
    }

    /// The program as directly executable symbols
    pub fn plain(&self) -> Program {
        match self.dialect {
            Dialect::Plain => self.program.clone(),
            Dialect::Rotated => transcoder::decode(&self.program),
        }
    }

    /// The program in its rotated encoding
    pub fn rotated(&self) -> Program {
        match self.dialect {
            Dialect::Plain => transcoder::encode(&self.program),
            Dialect::Rotated => self.program.clone(),
        }
    }
}

/// Detect the dialect from the file name then read and lex the file
pub fn load(path: &Path) -> Result<SourceFile, SourceError> {
    let dialect = Dialect::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::FileIO {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile::from_text(dialect, &text))
}
