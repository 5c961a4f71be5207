//! Text decoding helpers.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `<meta charset="...">`)
/// 3. Falls back to Windows-1252 (common in hand-written legacy pages)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    // Try UTF-8 first (handles BOM automatically)
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    // Fallback: Windows-1252 (superset of ISO-8859-1)
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the charset declared by a `<meta>` tag near the top of an HTML file.
///
/// Handles both `<meta charset="...">` and the older
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">` form.
/// Only the first 1024 bytes are checked, matching the HTML prescan window.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let check_len = bytes.len().min(1024);
    let prefix = &bytes[..check_len];

    let charset_pos = prefix
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;
    let after = &prefix[charset_pos + 8..];

    let (start, quote) = match after.first() {
        Some(&q) if q == b'"' || q == b'\'' => (1, Some(q)),
        Some(_) => (0, None),
        None => return None,
    };

    let end = after[start..]
        .iter()
        .position(|&b| match quote {
            Some(q) => b == q,
            None => b == b'"' || b == b'\'' || b == b';' || b == b'>' || b.is_ascii_whitespace(),
        })
        .map(|p| p + start)
        .unwrap_or(after.len());

    let value = std::str::from_utf8(&after[start..end]).ok()?.trim();
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("héllo".as_bytes(), None), "héllo");
    }

    #[test]
    fn test_decode_utf8_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBF<img>", None), "<img>");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0xE9 is 'é' in Windows-1252 and invalid as a lone UTF-8 byte
        assert_eq!(decode_text(b"caf\xE9", None), "café");
    }

    #[test]
    fn test_decode_with_hint() {
        // 0xE9 in ISO-8859-5 is 'щ'
        assert_eq!(decode_text(b"\xE9", Some("iso-8859-5")), "щ");
    }

    #[test]
    fn test_extract_meta_charset() {
        assert_eq!(
            extract_meta_charset(br#"<html><head><meta charset="latin1"></head>"#),
            Some("latin1")
        );
        assert_eq!(
            extract_meta_charset(
                br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251">"#
            ),
            Some("windows-1251")
        );
        assert_eq!(extract_meta_charset(b"<img src=a.png>"), None);
    }
}
