use chardetng::EncodingDetector;
use encoding_rs::Encoding;

// ---------------------------------------------------------------------------
// Byte → text decoding for instrument exports
// ---------------------------------------------------------------------------

/// Guess the charset of a raw export.
///
/// A byte-order mark wins outright; otherwise the statistical detector
/// decides. Instrument PCs commonly write legacy single-byte code pages
/// (windows-1251 for Cyrillic sample names), so UTF-8 is only one candidate.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decode a DSP export to text and strip every carriage return.
///
/// Malformed sequences become U+FFFD rather than failing here; the parser
/// rejects them if they land on a line it needs.
pub fn decode_dsp_bytes(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    let (text, used, had_errors) = encoding.decode(bytes);
    log::debug!(
        "Decoded {} bytes as {}{}",
        bytes.len(),
        used.name(),
        if had_errors { " (with replacement characters)" } else { "" }
    );
    text.replace('\r', "")
}
