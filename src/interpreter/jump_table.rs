use crate::lexer::{Program, Symbol};

/// Matching bracket positions for a program, built once in a single pass.
///
/// `matching(i)` is the index of the bracket paired with the one at `i`, or
/// `None` when `i` is unmatched or not a bracket at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTable {
    targets: Vec<Option<usize>>,
}

impl JumpTable {
    pub fn build(program: &Program) -> Self {
        let mut targets = vec![None; program.len()];
        let mut open = Vec::new();

        for (i, symbol) in program.iter().enumerate() {
            match symbol {
                Symbol::JumpStart => open.push(i),
                Symbol::JumpEnd => {
                    // a `]` with nothing open stays unmatched
                    if let Some(start) = open.pop() {
                        targets[start] = Some(i);
                        targets[i] = Some(start);
                    }
                }
                _ => {}
            }
        }
        // anything left in `open` is an unmatched `[`

        Self { targets }
    }

    pub fn matching(&self, position: usize) -> Option<usize> {
        self.targets.get(position).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(s: &str) -> JumpTable {
        JumpTable::build(&s.parse().unwrap())
    }

    #[test]
    fn nested_pairs() {
        let table = table("[[]]");
        assert_eq!(table.matching(0), Some(3));
        assert_eq!(table.matching(1), Some(2));
        assert_eq!(table.matching(2), Some(1));
        assert_eq!(table.matching(3), Some(0));
    }

    #[test]
    fn sequential_pairs() {
        let table = table("[-]>[+]");
        assert_eq!(table.matching(0), Some(2));
        assert_eq!(table.matching(4), Some(6));
        assert_eq!(table.matching(3), None);
    }

    #[test]
    fn unmatched_start() {
        let table = table("[[]");
        assert_eq!(table.matching(0), None);
        assert_eq!(table.matching(1), Some(2));
    }

    #[test]
    fn unmatched_end() {
        let table = table("[]]");
        assert_eq!(table.matching(1), Some(0));
        assert_eq!(table.matching(2), None);
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(table("[]").matching(10), None);
    }
}
