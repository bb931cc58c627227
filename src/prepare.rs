use unicode_normalization::UnicodeNormalization;

pub fn stage0(text: &str) -> String {
    // NFC so decomposed Hangul jamo survive the syllable-range filter
    let text: String = text.nfc().collect();
    text.replace("\r\n", "\n").replace('\r', "\n")
}
