//! Text extraction collaborator and upload identity helpers.
//!
//! Extraction is deliberately thin: plain-text files decode as UTF-8, binary
//! formats yield an empty string, and an empty string is a valid downstream
//! input (the classifier then works from the title alone).

/// Produces plain text from uploaded bytes. Implementations for PDF/DOC are
/// external; the contract is "text or empty string", never an error.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], mime_type: &str) -> String;
}

/// Default extractor: UTF-8 for `text/*` mimes, empty otherwise
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8], mime_type: &str) -> String {
        if mime_type.contains("text") {
            String::from_utf8_lossy(bytes).into_owned()
        } else {
            String::new()
        }
    }
}

/// Stable id for an uploaded file, `file-<base36 hash>` over the file name.
/// Same rolling hash the web frontend used, so ids survive a reupload.
pub fn file_id(file_name: &str) -> String {
    let mut hash: i32 = 0;
    for unit in file_name.encode_utf16() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    format!("file-{}", to_base36(hash.unsigned_abs()))
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Strip the trailing extension from a file name ("paper.v2.pdf" -> "paper.v2")
pub fn title_from_filename(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => {
            let ext = &name[pos + 1..];
            if !ext.is_empty() && !ext.contains('/') {
                &name[..pos]
            } else {
                name
            }
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_decodes() {
        let extractor = PlainTextExtractor;
        let out = extractor.extract(b"hello paper", "text/plain");
        assert_eq!(out, "hello paper");
    }

    #[test]
    fn binary_yields_empty_string() {
        let extractor = PlainTextExtractor;
        let out = extractor.extract(&[0xDE, 0xAD, 0xBE, 0xEF], "application/pdf");
        assert!(out.is_empty());
    }

    #[test]
    fn file_ids_are_stable_and_distinct() {
        assert_eq!(file_id("paper.pdf"), file_id("paper.pdf"));
        assert_ne!(file_id("paper.pdf"), file_id("other.pdf"));
        assert!(file_id("paper.pdf").starts_with("file-"));
    }

    #[test]
    fn empty_name_hashes_to_zero() {
        assert_eq!(file_id(""), "file-0");
    }

    #[test]
    fn filename_title_strips_one_extension() {
        assert_eq!(title_from_filename("study.pdf"), "study");
        assert_eq!(title_from_filename("study.v2.pdf"), "study.v2");
        assert_eq!(title_from_filename("no_extension"), "no_extension");
        assert_eq!(title_from_filename(".hidden"), ".hidden");
    }
}
