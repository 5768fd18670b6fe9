//! Fixed-capacity output buffer

/// Formatted text copied into a buffer of caller-chosen capacity
///
/// Text longer than the capacity is cut at the last character boundary that
/// fits; every byte after the text is NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedString {
    data: Box<[u8]>,
    len: usize,
    truncated: bool,
}

impl BoundedString {
    /// Empty buffer: all `capacity` bytes are NUL
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
            truncated: false,
        }
    }

    /// Copy `text` in, truncating on a UTF-8 boundary if it does not fit
    pub fn from_text(text: &str, capacity: usize) -> Self {
        let mut end = text.len().min(capacity);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let mut buffer = Self::with_capacity(capacity);
        buffer.data[..end].copy_from_slice(&text.as_bytes()[..end]);
        buffer.len = end;
        buffer.truncated = end < text.len();
        if buffer.truncated {
            log::debug!(
                "bounded output cut from {} to {} bytes (capacity {})",
                text.len(),
                end,
                capacity
            );
        }
        buffer
    }

    /// The text part, without the NUL fill
    pub fn as_str(&self) -> &str {
        // Only ever filled from a &str cut on a char boundary
        std::str::from_utf8(&self.data[..self.len]).unwrap_or_default()
    }

    /// The whole buffer, including the NUL fill
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Whether the source text did not fit
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl std::fmt::Display for BoundedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<str> for BoundedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for BoundedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
