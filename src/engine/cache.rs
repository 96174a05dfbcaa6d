//! Result cache keyed by a content hash of the input pair

use crate::engine::scorer::AnalysisResult;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt::Write;

/// In-memory memoization of analysis results. Values are immutable and a
/// pure function of the key, so overwriting on re-insert is harmless.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, AnalysisResult>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digest of the input pair. A separator byte keeps
    /// ("ab", "c") and ("a", "bc") from colliding.
    pub fn key(job_description: &str, resume_text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(job_description.as_bytes());
        hasher.update([0x1f]);
        hasher.update(resume_text.as_bytes());

        let digest = hasher.finalize();
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(hex, "{:02x}", byte);
        }
        hex
    }

    pub fn get(&self, key: &str) -> Option<&AnalysisResult> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, result: AnalysisResult) {
        self.entries.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
