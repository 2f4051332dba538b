//! Undo history.
//!
//! Every executed instruction pushes one [`HistoryEntry`] holding the
//! pre-image of the state it changed: at most one register and at most one
//! memory cell. The log is last-in-first-out and is drained by `reset`.

/// Prior value of one memory cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryPreImage {
    /// Address of the cell.
    pub index: u8,
    /// Value before the instruction executed.
    pub value: u8,
}

/// State changed by one executed instruction, captured before the change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Address the instruction was fetched from.
    pub pc: u8,
    /// Register written by the instruction.
    pub register_index: usize,
    /// Value of that register before the write.
    pub previous_register_value: u8,
    /// Memory cell written by the instruction. `None` for the ALU opcodes,
    /// none of which store to memory.
    pub memory: Option<MemoryPreImage>,
}

/// LIFO stack of history entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends the entry for the step just executed.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the newest entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// The newest entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of recorded steps.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no steps are recorded.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
