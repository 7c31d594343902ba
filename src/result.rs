//! Outcome of an encode or decode call.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionResult {
    #[serde(skip)]
    data: Vec<u8>,
    message: String,
    compression_ratio: f64,
    original_size: usize,
    compressed_size: usize,
}

impl CompressionResult {
    /// `compression_ratio` is `original_size / compressed_size`, or zero when
    /// there is nothing compressed.
    pub fn new(data: Vec<u8>, message: impl Into<String>, original_size: usize, compressed_size: usize) -> Self {
        let compression_ratio = if compressed_size == 0 {
            0.0
        } else {
            original_size as f64 / compressed_size as f64
        };
        CompressionResult {
            data,
            message: message.into(),
            compression_ratio,
            original_size,
            compressed_size,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn compression_ratio(&self) -> f64 {
        self.compression_ratio
    }

    pub fn original_size(&self) -> usize {
        self.original_size
    }

    pub fn compressed_size(&self) -> usize {
        self.compressed_size
    }

    /// Space saved relative to the original, as a percentage. Negative when
    /// the container is larger than the original.
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_size as f64 / self.original_size as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_and_savings() {
        let r = CompressionResult::new(vec![1, 2], "ok", 8, 2);
        assert_eq!(r.compression_ratio(), 4.0);
        assert_eq!(r.savings_percent(), 75.0);
        assert_eq!(r.data(), &[1, 2]);
    }

    #[test]
    fn empty_original_has_zero_ratio() {
        let r = CompressionResult::new(b"zer#".to_vec(), "empty", 0, 4);
        assert_eq!(r.compression_ratio(), 0.0);
        assert_eq!(r.savings_percent(), 0.0);
    }

    #[test]
    fn serializes_statistics_without_payload() {
        let r = CompressionResult::new(vec![0xff], "done", 3, 1);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["message"], "done");
        assert_eq!(json["compressionRatio"], 3.0);
        assert_eq!(json["originalSize"], 3);
        assert_eq!(json["compressedSize"], 1);
        assert!(json.get("data").is_none());
    }
}
