//! Compressing and decompressing files on disk.
//!
//! Containers hold raw bytes in every position, so files are read and written
//! as bytes without any text decoding.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::codec::HuffmanCodec;
use crate::error::Result;
use crate::result::CompressionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Compress,
    Decompress,
}

impl Operation {
    fn suffix(self) -> &'static str {
        match self {
            Operation::Compress => "_compressed.txt",
            Operation::Decompress => "_decompressed.txt",
        }
    }
}

/// `notes.txt` becomes `notes_compressed.txt` (or `notes_decompressed.txt`)
/// in the same directory.
pub fn default_output_path(src: &Path, operation: Operation) -> PathBuf {
    let name = src.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let stem = name.strip_suffix(".txt").unwrap_or(&name);
    src.with_file_name(format!("{stem}{}", operation.suffix()))
}

pub fn compress_file(src: &Path, dst: &Path) -> Result<CompressionResult> {
    let input = read_all(src)?;
    let result = HuffmanCodec::new().encode(&input);
    write_all(dst, result.data())?;
    info!(src = %src.display(), dst = %dst.display(), ratio = result.compression_ratio(), "compressed file");
    Ok(result)
}

pub fn decompress_file(src: &Path, dst: &Path) -> Result<CompressionResult> {
    let input = read_all(src)?;
    let result = HuffmanCodec::new().decode(&input)?;
    write_all(dst, result.data())?;
    info!(src = %src.display(), dst = %dst.display(), size = result.original_size(), "decompressed file");
    Ok(result)
}

fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn write_all(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}
