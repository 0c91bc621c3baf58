// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case and accent folding for Portuguese text.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case, strip diacritics (NFD + combining mark removal) and collapse
/// whitespace runs to a single space.
///
/// `"Não  AGUENTO mais"` becomes `"nao aguento mais"`.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text with every non-alphanumeric character turned into a space
/// and a space on each side, so that `" dor "` only matches the whole word.
pub(crate) fn word_padded(normalized: &str) -> String {
    let spaced: String = normalized
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    format!(" {} ", spaced.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Não aguento MAIS"), "nao aguento mais");
        assert_eq!(normalize("alucinação"), "alucinacao");
        assert_eq!(normalize("Depressão PÓS-PARTO"), "depressao pos-parto");
        assert_eq!(normalize("ouço vozes"), "ouco vozes");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  quero \t\n morrer  "), "quero morrer");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn word_padding_splits_on_punctuation() {
        assert_eq!(word_padded("estou com dor, socorro!"), " estou com dor socorro ");
        assert_eq!(word_padded(""), "  ");
    }
}
