use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::error::ScrapeError;

/// Decodes response bodies from the encoding the site serves (EUC-KR for
/// Incruit) into UTF-8.
#[derive(Debug, Clone, Copy)]
pub struct SourceDecoder {
    encoding: &'static Encoding,
}

/// Decoded text plus whether any byte sequence was malformed.
/// Malformed sequences are replaced with U+FFFD.
#[derive(Debug)]
pub struct Decoded<'a> {
    pub text: Cow<'a, str>,
    pub had_errors: bool,
}

impl SourceDecoder {
    /// Look up a decoder by WHATWG label (`euc-kr`, `utf-8`, `shift_jis`, ...)
    pub fn for_label(label: &str) -> Result<Self, ScrapeError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| Self { encoding })
            .ok_or_else(|| ScrapeError::UnknownEncoding(label.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn decode<'a>(&self, raw: &'a [u8]) -> Decoded<'a> {
        let (text, _, had_errors) = self.encoding.decode(raw);
        Decoded { text, had_errors }
    }
}

/// Collapse every whitespace run to a single ASCII space and trim both ends.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalization applied to every scraped text field before it is stored.
pub fn normalize_field(raw: &str) -> String {
    collapse_whitespace(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::EUC_KR;

    #[test]
    fn decodes_euc_kr_bytes() {
        let (bytes, _, _) = EUC_KR.encode("파이썬 개발자 채용");
        let decoder = SourceDecoder::for_label("euc-kr").unwrap();

        let decoded = decoder.decode(&bytes);
        assert_eq!(decoded.text, "파이썬 개발자 채용");
        assert!(!decoded.had_errors);
    }

    #[test]
    fn malformed_bytes_still_yield_text() {
        // 0xB0 opens a two-byte sequence that never completes
        let raw = b"python \xB0";
        let decoder = SourceDecoder::for_label("euc-kr").unwrap();

        let decoded = decoder.decode(raw);
        assert!(decoded.had_errors);
        assert!(decoded.text.starts_with("python "));
        assert!(decoded.text.contains('\u{FFFD}'));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = SourceDecoder::for_label("klingon").unwrap_err();
        assert!(matches!(err, ScrapeError::UnknownEncoding(label) if label == "klingon"));
    }

    #[test]
    fn label_lookup_is_case_insensitive() {
        let decoder = SourceDecoder::for_label(" EUC-KR ").unwrap();
        assert_eq!(decoder.name(), "EUC-KR");
    }

    #[test]
    fn collapses_inner_and_outer_whitespace() {
        let raw = "\n\t  Python   백엔드\n\n 개발자 \r\n";
        assert_eq!(collapse_whitespace(raw), "Python 백엔드 개발자");
    }

    #[test]
    fn normalized_field_is_the_collapsed_text() {
        assert_eq!(normalize_field("  서울  \n 강남구 "), "서울 강남구");
        assert_eq!(normalize_field(" \n\t "), "");
    }
}
