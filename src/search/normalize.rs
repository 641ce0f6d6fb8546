//! Arabic-aware text normalization
//!
//! Folds the orthographic variation that makes two spellings of the same
//! Arabic word compare unequal: tashkeel, hamza-bearing alef forms, taa
//! marbuta and alef maksura. Latin text is lowercased. No stemming or
//! transliteration is done.

use unicode_normalization::char::decompose_canonical;
use unicode_normalization::UnicodeNormalization;

const ALEF: char = '\u{0627}';
const HAA: char = '\u{0647}';
const YAA: char = '\u{064A}';

/// Arabic combining marks removed before comparison
pub fn is_tashkeel(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06ED}')
}

/// Unify letter variants: hamza/madda alef to bare alef, taa marbuta to
/// haa, alef maksura to yaa
pub fn fold_letter(c: char) -> char {
    match c {
        '\u{0622}' | '\u{0623}' | '\u{0625}' => ALEF,
        '\u{0629}' => HAA,
        '\u{0649}' => YAA,
        other => other,
    }
}

fn push_folded(c: char, out: &mut String) {
    if is_tashkeel(c) {
        return;
    }
    out.extend(fold_letter(c).to_lowercase());
}

/// Canonicalize text for comparison.
///
/// Text is decomposed first, so a hamza or madda is stripped whether it
/// was typed as a separate mark or came precomposed with its carrier
/// (ؤ and و + U+0654 both become و).
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.nfd() {
        push_folded(c, &mut folded);
    }
    folded.nfc().collect()
}

/// Normalized text as chars, each paired with the byte range of the
/// original char it came from.
///
/// Decomposes each char on its own and never recomposes, so it is meant
/// for locating matches in the original text (highlighting), not for
/// deciding whether something matches.
pub fn normalize_mapped(text: &str) -> (Vec<char>, Vec<(usize, usize)>) {
    let mut chars = Vec::with_capacity(text.len());
    let mut spans = Vec::with_capacity(text.len());
    let mut buf = String::new();

    for (start, c) in text.char_indices() {
        buf.clear();
        decompose_canonical(c, |d| push_folded(d, &mut buf));
        let end = start + c.len_utf8();
        for folded in buf.chars() {
            chars.push(folded);
            spans.push((start, end));
        }
    }

    (chars, spans)
}
