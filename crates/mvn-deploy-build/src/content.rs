use mvn_deploy_core::FileEncoding;

/// Number of leading bytes inspected for a NUL byte.
const SNIFF_LEN: usize = 8000;

/// A build-directory file, classified for storage in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Stored byte-for-byte.
    Binary(Vec<u8>),
    /// Decoded with the configured encoding, stored as UTF-8.
    Text(String),
}

impl Content {
    /// Classify `bytes` as binary or text.
    ///
    /// A file is binary if a NUL byte appears within the first 8000 bytes, or
    /// if it cannot be decoded with `encoding`. Latin-1 decodes every byte, so
    /// under that encoding only the NUL check applies.
    pub fn classify(bytes: Vec<u8>, encoding: FileEncoding) -> Self {
        let head = &bytes[..bytes.len().min(SNIFF_LEN)];
        if head.contains(&0) {
            return Self::Binary(bytes);
        }

        match encoding {
            FileEncoding::Latin1 => Self::Text(bytes.iter().map(|&b| char::from(b)).collect()),
            FileEncoding::Ascii if !bytes.is_ascii() => Self::Binary(bytes),
            FileEncoding::Ascii | FileEncoding::Utf8 => match String::from_utf8(bytes) {
                Ok(text) => Self::Text(text),
                Err(e) => Self::Binary(e.into_bytes()),
            },
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// Bytes to write into the archive entry.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Binary(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_text_round_trips() {
        let src = "## README\nlorum ipsum — ünïcode".as_bytes().to_vec();
        let content = Content::classify(src.clone(), FileEncoding::Utf8);
        assert!(!content.is_binary());
        assert_eq!(content.into_bytes(), src);
    }

    #[test]
    fn nul_byte_marks_binary() {
        let src = vec![0x89, b'P', b'N', b'G', 0x00, 0x1a];
        let content = Content::classify(src.clone(), FileEncoding::Latin1);
        assert!(content.is_binary());
        assert_eq!(content.into_bytes(), src);
    }

    #[test]
    fn nul_past_sniff_window_is_ignored() {
        let mut src = vec![b'a'; SNIFF_LEN];
        src.push(0);
        assert!(!Content::classify(src, FileEncoding::Utf8).is_binary());
    }

    #[test]
    fn invalid_utf8_is_binary_and_preserved() {
        let src = vec![b'a', 0xff, 0xfe, b'b'];
        let content = Content::classify(src.clone(), FileEncoding::Utf8);
        assert!(content.is_binary());
        assert_eq!(content.into_bytes(), src);
    }

    #[test]
    fn latin1_text_is_transcoded() {
        // "café" in ISO-8859-1
        let content = Content::classify(vec![b'c', b'a', b'f', 0xe9], FileEncoding::Latin1);
        assert_eq!(content, Content::Text("café".to_owned()));
        assert_eq!(content.into_bytes(), "café".as_bytes());
    }

    #[test]
    fn ascii_rejects_high_bytes() {
        let content = Content::classify("café".as_bytes().to_vec(), FileEncoding::Ascii);
        assert!(content.is_binary());
    }
}
