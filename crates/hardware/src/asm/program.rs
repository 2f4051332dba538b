//! Assembler output.

/// Ordered `(address, byte)` pairs produced by the assembler.
///
/// Addresses need not be contiguous or distinct; when loaded, later pairs
/// overwrite earlier ones at the same address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssembledProgram {
    pairs: Vec<(u8, u8)>,
}

impl AssembledProgram {
    /// Creates an empty program.
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends one emitted byte.
    pub fn push(&mut self, address: u8, byte: u8) {
        self.pairs.push((address, byte));
    }

    /// The pairs in emission order.
    pub fn pairs(&self) -> &[(u8, u8)] {
        &self.pairs
    }

    /// Number of emitted bytes.
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` if nothing was emitted.
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(u8, u8)> for AssembledProgram {
    fn from_iter<I: IntoIterator<Item = (u8, u8)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
