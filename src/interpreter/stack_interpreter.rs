use std::io::{Read, Write};

use crate::lexer::{Program, Symbol};

use super::{BracketPolicy, Execution, InterpreterError, MachineConfig, Runtime, StepCounter};

/// Executes a program using a stack of open `[` positions.
///
/// A `[` on a zero cell scans forwards counting bracket depth to find its
/// partner. Otherwise its position is pushed, and the `]` at the bottom of
/// the loop either jumps back to it or pops it. The stack depth is always the
/// current loop nesting depth.
pub struct StackInterpreter {
    bracket_policy: BracketPolicy,
    max_steps: Option<u64>,
    control_stack: Vec<usize>,
}

impl StackInterpreter {
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            bracket_policy: config.bracket_policy,
            max_steps: config.max_steps,
            control_stack: vec![],
        }
    }

    pub fn control_stack(&self) -> &[usize] {
        &self.control_stack
    }

    pub fn run<R: Read, W: Write>(
        &mut self,
        runtime: &mut Runtime<R, W>,
        program: &Program,
    ) -> Result<Execution, InterpreterError> {
        self.control_stack.clear();
        let instructions = program.symbols();
        let mut steps = StepCounter::new(self.max_steps);

        let mut ip = 0;
        while ip < instructions.len() {
            steps.tick()?;
            match instructions[ip] {
                Symbol::ShiftRight => runtime.shift_data_pointer(1),
                Symbol::ShiftLeft => runtime.shift_data_pointer(-1),
                Symbol::Increment => runtime.deref_and_add_value(1),
                Symbol::Decrement => runtime.deref_and_sub_value(1),
                Symbol::Write => runtime.write()?,
                Symbol::Read => runtime.read()?,
                Symbol::JumpStart => {
                    if runtime.value_is_zero() {
                        ip = skip_loop(instructions, ip);
                    } else {
                        self.control_stack.push(ip);
                    }
                }
                Symbol::JumpEnd => match self.control_stack.last() {
                    Some(&start) => {
                        if runtime.value_is_zero() {
                            self.control_stack.pop();
                        } else {
                            // the `ip += 1` below lands us just after the `[`
                            ip = start;
                        }
                    }
                    None => {
                        if self.bracket_policy == BracketPolicy::Strict {
                            return Err(InterpreterError::UnmatchedJumpEnd { position: ip });
                        }
                    }
                },
            }
            ip += 1;
        }

        runtime.flush()?;
        Ok(steps.finish())
    }
}

/// Position of the `]` closing the `[` at `start`, or the program length if there isn't one
fn skip_loop(instructions: &[Symbol], start: usize) -> usize {
    let mut depth = 1;
    let mut ip = start;
    while depth > 0 {
        ip += 1;
        match instructions.get(ip) {
            Some(Symbol::JumpStart) => depth += 1,
            Some(Symbol::JumpEnd) => depth -= 1,
            Some(_) => {}
            None => return instructions.len(),
        }
    }
    ip
}
