use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::TokenizeConfig;
use crate::token::Token;

/// Split `text` into normalized tokens.
///
/// Walks grapheme clusters so combining marks never detach from their base
/// character, splits on Unicode whitespace plus the configured separator set,
/// and drops tokens whose comparison form ends up empty (pure punctuation).
pub fn tokenize(text: &str, cfg: &TokenizeConfig) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut raw = String::new();

    for grapheme in text.graphemes(true) {
        let is_delim = grapheme
            .chars()
            .all(|c| c.is_whitespace() || cfg.separators.contains(c));
        if is_delim {
            finalize_token(&mut tokens, &mut raw, cfg);
        } else {
            raw.push_str(grapheme);
        }
    }
    finalize_token(&mut tokens, &mut raw, cfg);

    tokens.truncate(cfg.max_tokens);
    tokens
}

fn finalize_token(tokens: &mut Vec<Token>, raw: &mut String, cfg: &TokenizeConfig) {
    if raw.is_empty() {
        return;
    }
    let normalized = normalize_word(raw, cfg);
    if normalized.is_empty() {
        raw.clear();
    } else {
        tokens.push(Token::new(normalized, std::mem::take(raw)));
    }
}

/// NFKC, lowercase, then optional diacritic folding.
///
/// Folding decomposes, drops nonspacing marks, and recomposes; the round
/// trip matters for scripts like Hangul whose canonical decomposition is not
/// a base-plus-mark pair and must survive untouched. The sharp s gets a
/// dedicated expansion because no decomposition reaches `ss`.
fn normalize_word(word: &str, cfg: &TokenizeConfig) -> String {
    let mut lowered = String::with_capacity(word.len());
    for ch in word.nfkc() {
        lowered.extend(ch.to_lowercase());
    }
    if !cfg.fold_diacritics {
        return lowered;
    }
    lowered
        .replace('ß', "ss")
        .nfd()
        .filter(|c| !c.is_mark_nonspacing())
        .nfc()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input, &TokenizeConfig::default())
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn splits_on_separators_and_whitespace() {
        assert_eq!(texts("Rue Saint-Denis"), vec!["rue", "saint", "denis"]);
        assert_eq!(texts("12/14, Main St."), vec!["12", "14", "main", "st"]);
    }

    #[test]
    fn pure_punctuation_tokens_dropped() {
        assert_eq!(texts("Main # St"), vec!["main", "#", "st"]);
        assert!(texts("--- ,,,").is_empty());
    }

    #[test]
    fn sharp_s_expands() {
        assert_eq!(texts("Hauptstraße"), vec!["hauptstrasse"]);
    }

    #[test]
    fn combining_marks_fold_with_base() {
        assert_eq!(texts("Cafe\u{0301}"), vec!["cafe"]);
        assert_eq!(texts("Caf\u{00E9}"), vec!["cafe"]);
    }

    #[test]
    fn korean_tokens_survive_normalization() {
        assert_eq!(texts("서울시 강남구"), vec!["서울시", "강남구"]);
    }
}
