//! Length-prefixed packing of a list of strings into a single string.
//!
//! Each element is written as `<byte length>:<bytes>`, so
//! `["foo", "bazbar"]` packs to `3:foo6:bazbar`. Elements may contain the
//! delimiter or digits; the prefix alone decides where an element ends.

const DELIMITER: u8 = b':';

/// Error types for decoding a packed string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("no ':' after length prefix starting at byte {offset}")]
    MissingDelimiter { offset: usize },

    #[error("invalid length prefix at byte {offset}")]
    InvalidLength { offset: usize },

    #[error("element at byte {offset} needs {expected} bytes, only {available} left")]
    Truncated {
        offset: usize,
        expected: usize,
        available: usize,
    },

    #[error("element ending at byte {offset} splits a UTF-8 character")]
    NotCharBoundary { offset: usize },
}

/// Pack `values` into one string.
pub fn encode<S: AsRef<str>>(values: &[S]) -> String {
    let total: usize = values.iter().map(|v| v.as_ref().len() + 4).sum();
    let mut packed = String::with_capacity(total);
    for value in values {
        let value = value.as_ref();
        packed.push_str(&value.len().to_string());
        packed.push(char::from(DELIMITER));
        packed.push_str(value);
    }
    log::debug!("packed {} strings into {} bytes", values.len(), packed.len());
    packed
}

/// Unpack a string produced by [`encode`].
///
/// # Errors
/// Any [`CodecError`] describing the first malformed frame.
pub fn decode(packed: &str) -> Result<Vec<String>, CodecError> {
    let bytes = packed.as_bytes();
    let mut values = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let delimiter = bytes[offset..]
            .iter()
            .position(|&b| b == DELIMITER)
            .map(|pos| offset + pos)
            .ok_or(CodecError::MissingDelimiter { offset })?;

        let len = parse_len(&bytes[offset..delimiter]).ok_or(CodecError::InvalidLength { offset })?;

        let start = delimiter + 1;
        let available = bytes.len() - start;
        if len > available {
            return Err(CodecError::Truncated {
                offset: start,
                expected: len,
                available,
            });
        }

        let end = start + len;
        let value = packed
            .get(start..end)
            .ok_or(CodecError::NotCharBoundary { offset: end })?;
        log::trace!("frame {}: {len} bytes at {start}", values.len());
        values.push(value.to_owned());
        offset = end;
    }

    Ok(values)
}

fn parse_len(digits: &[u8]) -> Option<usize> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0usize, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(usize::from(b - b'0'))
    })
}
