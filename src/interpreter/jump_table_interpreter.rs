use std::io::{Read, Write};

use crate::lexer::{Program, Symbol};

use super::{
    jump_table::JumpTable, BracketPolicy, Execution, InterpreterError, MachineConfig, Runtime,
    StepCounter,
};

/// Executes a program with both bracket directions resolved through a [`JumpTable`]
pub struct JumpTableInterpreter {
    bracket_policy: BracketPolicy,
    max_steps: Option<u64>,
}

impl JumpTableInterpreter {
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            bracket_policy: config.bracket_policy,
            max_steps: config.max_steps,
        }
    }

    pub fn run<R: Read, W: Write>(
        &mut self,
        runtime: &mut Runtime<R, W>,
        program: &Program,
    ) -> Result<Execution, InterpreterError> {
        let table = JumpTable::build(program);
        let instructions = program.symbols();
        let mut steps = StepCounter::new(self.max_steps);

        let mut pc = 0;
        while pc < instructions.len() {
            steps.tick()?;
            match instructions[pc] {
                Symbol::ShiftRight => runtime.shift_data_pointer(1),
                Symbol::ShiftLeft => runtime.shift_data_pointer(-1),
                Symbol::Increment => runtime.deref_and_add_value(1),
                Symbol::Decrement => runtime.deref_and_sub_value(1),
                Symbol::Write => runtime.write()?,
                Symbol::Read => runtime.read()?,
                Symbol::JumpStart => {
                    if runtime.value_is_zero() {
                        // no partner means the loop runs to the end of the program
                        pc = table.matching(pc).unwrap_or(instructions.len());
                    }
                }
                Symbol::JumpEnd => match table.matching(pc) {
                    Some(start) => {
                        if !runtime.value_is_zero() {
                            pc = start;
                        }
                    }
                    None => {
                        if self.bracket_policy == BracketPolicy::Strict {
                            return Err(InterpreterError::UnmatchedJumpEnd { position: pc });
                        }
                    }
                },
            }
            pc += 1;
        }

        runtime.flush()?;
        Ok(steps.finish())
    }
}
