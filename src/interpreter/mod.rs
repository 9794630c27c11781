pub mod jump_table;
pub mod jump_table_interpreter;
pub mod stack_interpreter;
pub mod tape;

use std::io::{self, Read, Write};

use thiserror::Error;

use crate::lexer::Program;

use self::{
    jump_table_interpreter::JumpTableInterpreter, stack_interpreter::StackInterpreter, tape::Tape,
};

pub const DEFAULT_TAPE_LEN: usize = 30_000;

#[derive(Error, Debug)]
pub enum InterpreterError {
    #[error("IO Error")]
    Io(
        #[from]
        io::Error,
    ),

    #[error("Tape needs at least one cell")]
    EmptyTape,

    #[error("Can't find matching [ for ] at position {position}")]
    UnmatchedJumpEnd { position: usize },

    #[error("Step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },
}

/// What to do when execution reaches a `]` that has no `[`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketPolicy {
    /// Stop with [`InterpreterError::UnmatchedJumpEnd`]
    #[default]
    Strict,
    /// Treat it as a no-op
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    pub tape_len: usize,
    pub bracket_policy: BracketPolicy,
    /// Maximum number of instructions to dispatch, unbounded when `None`
    pub max_steps: Option<u64>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            tape_len: DEFAULT_TAPE_LEN,
            bracket_policy: BracketPolicy::default(),
            max_steps: None,
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    pub steps: u64,
}

/// Which execution engine to use, both give identical results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Brackets resolved through a precomputed table
    #[default]
    JumpTable,
    /// Forward scan for `[`, return stack for `]`
    Stack,
}

impl Engine {
    pub fn run<R: Read, W: Write>(
        self,
        config: &MachineConfig,
        runtime: &mut Runtime<R, W>,
        program: &Program,
    ) -> Result<Execution, InterpreterError> {
        match self {
            Engine::JumpTable => JumpTableInterpreter::new(config).run(runtime, program),
            Engine::Stack => StackInterpreter::new(config).run(runtime, program),
        }
    }
}

/// Counts dispatched instructions against an optional limit
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepCounter {
    taken: u64,
    limit: Option<u64>,
}

impl StepCounter {
    pub(crate) fn new(limit: Option<u64>) -> Self {
        Self { taken: 0, limit }
    }

    pub(crate) fn tick(&mut self) -> Result<(), InterpreterError> {
        if let Some(limit) = self.limit {
            if self.taken >= limit {
                return Err(InterpreterError::StepLimitExceeded { limit });
            }
        }
        self.taken += 1;
        Ok(())
    }

    pub(crate) fn finish(self) -> Execution {
        Execution { steps: self.taken }
    }
}

/// The machine state shared by both engines: the tape plus the byte streams
pub struct Runtime<R, W> {
    tape: Tape,

    in_stream: R,
    out_stream: W,
}

impl<R: Read, W: Write> Runtime<R, W> {
    pub fn new(tape_len: usize, in_stream: R, out_stream: W) -> Result<Self, InterpreterError> {
        Ok(Self {
            tape: Tape::new(tape_len)?,
            in_stream,
            out_stream,
        })
    }

    pub fn reset(&mut self) {
        self.tape.reset();
    }

    /// Read one byte from the input stream into the current cell, end of input reads as 0
    pub fn read(&mut self) -> Result<(), InterpreterError> {
        // anything already written should be visible before we block
        self.out_stream.flush()?;

        let mut buffer = [0u8];
        let value = loop {
            match self.in_stream.read(&mut buffer) {
                Ok(0) => break 0,
                Ok(_) => break buffer[0],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };
        self.tape.set(value);
        Ok(())
    }

    /// Write the current cell to the output stream
    pub fn write(&mut self) -> Result<(), InterpreterError> {
        self.out_stream.write_all(&[self.tape.get()])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), InterpreterError> {
        self.out_stream.flush()?;
        Ok(())
    }

    pub fn deref_and_add_value(&mut self, by: u8) {
        self.tape.add(by);
    }

    pub fn deref_and_sub_value(&mut self, by: u8) {
        self.tape.sub(by);
    }

    pub fn shift_data_pointer(&mut self, by: isize) {
        self.tape.shift(by);
    }

    /// is the value at the data pointer zero?
    pub fn value_is_zero(&self) -> bool {
        self.tape.get() == 0
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn output(&self) -> &W {
        &self.out_stream
    }

    pub fn into_output(self) -> W {
        self.out_stream
    }
}
