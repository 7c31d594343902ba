//! Byte frequency counting.

/// Occurrence count of every byte in one input, remembering the order in
/// which symbols were first seen so tree construction is reproducible.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; 256],
    order: Vec<u8>,
}

impl FrequencyTable {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        let mut order = Vec::new();
        for &byte in bytes {
            if counts[byte as usize] == 0 {
                order.push(byte);
            }
            counts[byte as usize] += 1;
        }
        FrequencyTable { counts, order }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// `(symbol, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.order.iter().map(move |&s| (s, self.counts[s as usize]))
    }

    /// The only symbol and its count, if the alphabet has exactly one symbol.
    pub fn single(&self) -> Option<(u8, u64)> {
        match self.order.as_slice() {
            [symbol] => Some((*symbol, self.counts[*symbol as usize])),
            _ => None,
        }
    }
}
