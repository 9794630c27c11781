use std::num::NonZeroUsize;

use super::InterpreterError;

/// Cursor into the tape, always kept in `[0, len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPointer {
    index: usize,
    len: NonZeroUsize,
}

impl DataPointer {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move by `by` cells, wrapping at either end of the tape
    pub fn shift(&mut self, by: isize) {
        let len = self.len.get();
        // reduce first so the add below can't overflow
        let offset = by.rem_euclid(len as isize) as usize;
        self.index = (self.index + offset) % len;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Fixed size block of cells, never grows or shrinks after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Box<[u8]>,
    pointer: DataPointer,
}

impl Tape {
    pub fn new(len: usize) -> Result<Self, InterpreterError> {
        let len = NonZeroUsize::new(len).ok_or(InterpreterError::EmptyTape)?;
        Ok(Self {
            cells: vec![0; len.get()].into_boxed_slice(),
            pointer: DataPointer::new(len),
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn pointer(&self) -> usize {
        self.pointer.index()
    }

    pub fn shift(&mut self, by: isize) {
        self.pointer.shift(by);
    }

    pub fn get(&self) -> u8 {
        self.cells[self.pointer.index()]
    }

    pub fn set(&mut self, value: u8) {
        self.cells[self.pointer.index()] = value;
    }

    pub fn add(&mut self, by: u8) {
        self.set(self.get().wrapping_add(by));
    }

    pub fn sub(&mut self, by: u8) {
        self.set(self.get().wrapping_sub(by));
    }

    pub fn reset(&mut self) {
        self.cells.fill(0);
        self.pointer.reset();
    }
}
