//! Per-symbol prefix codes.

use std::collections::BTreeMap;

/// A code as a string of `'0'` and `'1'` characters.
pub type Code = String;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: u8, code: Code) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes.iter().map(|(s, c)| (*s, c.as_str()))
    }

    /// Total number of bits needed to code `bytes`, or `None` if a byte has no code.
    pub fn encoded_bits(&self, bytes: &[u8]) -> Option<usize> {
        bytes.iter().map(|b| self.get(*b).map(String::len)).sum()
    }

    /// True when no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        // a prefix sorts immediately before some code it prefixes
        sorted.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(codes: &[(u8, &str)]) -> CodeTable {
        let mut t = CodeTable::new();
        for (s, c) in codes {
            t.insert(*s, c.to_string());
        }
        t
    }

    #[test]
    fn detects_prefix_collisions() {
        assert!(table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")]).is_prefix_free());
        assert!(!table(&[(b'a', "1"), (b'b', "10"), (b'c', "0")]).is_prefix_free());
        assert!(!table(&[(b'a', "01"), (b'b', "00"), (b'c', "011")]).is_prefix_free());
    }

    #[test]
    fn counts_encoded_bits() {
        let t = table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")]);
        assert_eq!(t.encoded_bits(b"abca"), Some(6));
        assert_eq!(t.encoded_bits(b"abz"), None);
        assert_eq!(t.iter().count(), 3);
    }
}
