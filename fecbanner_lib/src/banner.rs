//! Groups the words of a committee name into banner lines.
//!
//! Each banner line is rendered as its own glyph block, so fewer lines means a
//! shorter banner. Adjacent words are merged greedily as long as the pair
//! (plus the joining space) is no wider than the longest single word; a long
//! word is never split.

use crate::error::BannerError;

/// Splits a display name on whitespace, preserving word order.
pub fn split_name(name: &str) -> Vec<&str> {
    name.split_whitespace().collect()
}

/// Combines name words into banner lines of one or two words each.
///
/// When the last word is left over on its own and is short enough that the
/// pair formula still fits, it is emitted with a trailing space
/// (`"Reform "`). Callers that compare lines against the source words should
/// trim that space.
pub fn combine_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>, BannerError> {
    let longest = words
        .iter()
        .map(|w| char_len(w.as_ref()))
        .max()
        .ok_or(BannerError::EmptyName)?;

    let mut combined = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let current = words[i].as_ref();
        let next = words.get(i + 1).map(AsRef::as_ref).unwrap_or("");

        if char_len(current) + char_len(next) + 1 <= longest {
            combined.push(format!("{} {}", current, next));
            i += 2;
        } else {
            combined.push(current.to_string());
            i += 1;
        }
    }

    tracing::debug!(
        words = words.len(),
        lines = combined.len(),
        longest,
        "combined banner words"
    );
    Ok(combined)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
