//! # huffzip
//!
//! Lossless byte-oriented Huffman compression into a small self-describing
//! container: a decimal header, the code tree in prefix notation, then the
//! packed code bits.
//!
//! ```
//! use huffzip::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let packed = codec.encode(b"abracadabra");
//! let unpacked = codec.decode(packed.data())?;
//! assert_eq!(unpacked.data(), b"abracadabra");
//! # Ok::<(), huffzip::Error>(())
//! ```

pub mod bits;
pub mod codec;
pub mod container;
pub mod error;
pub mod io;
pub mod min_heap;
pub mod result;
pub mod tree;

mod code;
mod frequency;
mod tree_string;

pub use code::{Code, CodeTable};
pub use codec::HuffmanCodec;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use io::{compress_file, decompress_file, default_output_path, Operation};
pub use result::CompressionResult;
pub use tree::{HuffNode, HuffmanTree};
