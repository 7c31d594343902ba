//! Layout of the compressed container.
//!
//! ```text
//! zer#                              empty input
//! one#<symbol>#<count>              one distinct byte repeated <count> times
//! <tree-len>#<padding>#<tree><payload>
//! ```
//!
//! Numbers are ASCII decimal. `<symbol>`, `<tree>` and `<payload>` carry raw
//! bytes, so the header is read strictly left to right.

use crate::error::{Error, Result};

pub const DELIMITER: u8 = b'#';
pub const EMPTY_MARKER: &[u8] = b"zer";
pub const SINGLE_MARKER: &[u8] = b"one";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container<'a> {
    Empty,
    Single { symbol: u8, count: u64 },
    Coded { padding: u8, tree: &'a [u8], payload: &'a [u8] },
}

impl<'a> Container<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let mut cursor = HeaderCursor { data, pos: 0 };
        let token = cursor.token()?;

        if token == EMPTY_MARKER {
            return Ok(Container::Empty);
        }

        if token == SINGLE_MARKER {
            let symbol = cursor.byte("repeated symbol")?;
            let at = cursor.pos;
            if cursor.byte("delimiter")? != DELIMITER {
                return Err(Error::format_at("expected '#' after repeated symbol", at));
            }
            let count = parse_decimal(cursor.rest(), cursor.pos, "repeat count")?;
            return Ok(Container::Single { symbol, count });
        }

        let tree_len: usize = parse_decimal(token, 0, "tree length")?;
        let padding_at = cursor.pos;
        let padding: u8 = parse_decimal(cursor.token()?, padding_at, "padding length")?;
        if padding > 7 {
            return Err(Error::format_at(
                format!("padding length {padding} is not in 0..=7"),
                padding_at,
            ));
        }
        let rest = cursor.rest();
        if tree_len > rest.len() {
            return Err(Error::format_at(
                format!("tree length {tree_len} exceeds the {} remaining bytes", rest.len()),
                cursor.pos,
            ));
        }
        let (tree, payload) = rest.split_at(tree_len);
        Ok(Container::Coded { padding, tree, payload })
    }

    pub fn write(&self) -> Vec<u8> {
        match self {
            Container::Empty => {
                let mut out = EMPTY_MARKER.to_vec();
                out.push(DELIMITER);
                out
            }
            Container::Single { symbol, count } => {
                let mut out = SINGLE_MARKER.to_vec();
                out.push(DELIMITER);
                out.push(*symbol);
                out.push(DELIMITER);
                out.extend_from_slice(count.to_string().as_bytes());
                out
            }
            Container::Coded { padding, tree, payload } => {
                let mut out = format!("{}#{}#", tree.len(), padding).into_bytes();
                out.reserve(tree.len() + payload.len());
                out.extend_from_slice(tree);
                out.extend_from_slice(payload);
                out
            }
        }
    }
}

struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    /// Bytes up to the next delimiter; the delimiter is consumed.
    fn token(&mut self) -> Result<&'a [u8]> {
        let data = self.data;
        let rest = &data[self.pos..];
        let len = rest
            .iter()
            .position(|&b| b == DELIMITER)
            .ok_or_else(|| Error::format_at("missing '#' delimiter", self.data.len()))?;
        self.pos += len + 1;
        Ok(&rest[..len])
    }

    fn byte(&mut self, what: &str) -> Result<u8> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or_else(|| Error::format_at(format!("container truncated, expected {what}"), self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    fn rest(&self) -> &'a [u8] {
        let data = self.data;
        &data[self.pos..]
    }
}

fn parse_decimal<T: std::str::FromStr>(digits: &[u8], offset: usize, what: &str) -> Result<T> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(Error::format_at(format!("{what} is not a decimal number"), offset));
    }
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::format_at(format!("{what} is out of range"), offset))
}
