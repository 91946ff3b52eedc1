use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form shared by both matchers: NFD-decompose,
/// drop combining marks, replace anything that is not a word character
/// with a space, lowercase, and collapse/trim whitespace.
///
/// - "Átomo" → "atomo"
/// - "L'Étranger" → "l etranger"
/// - "  Deep   Work " → "deep work"
///
/// Total and idempotent; empty input yields the empty string.
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Atomic Habits  "), "atomic habits");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Átomo"), normalize("atomo"));
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("Mihály Csíkszentmihályi"), "mihaly csikszentmihalyi");
    }

    #[test]
    fn punctuation_becomes_space() {
        assert_eq!(normalize("don't-stop"), "don t stop");
        assert_eq!(normalize("Thinking, Fast and Slow"), "thinking fast and slow");
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(normalize("a \t b\n c"), "a b c");
    }

    #[test]
    fn total_on_empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  ¡¿!?  "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["Árbol", "  Foo—Bar  ", "ñandú", "L'Étranger", "", "10% Happier"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
