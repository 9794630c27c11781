//! Rotated brainf**k toolchain.
//!
//! Programs move between the plain instruction set and its rotated encoding
//! through [`transcoder`], and plain programs run on the tape machine in
//! [`interpreter`].

pub mod interpreter;
pub mod lexer;
pub mod source;
pub mod transcoder;
