//! Name matching between raw player input and world nouns.
//!
//! Intent classification and item resolution both deliberately use plain
//! substring containment: a command mentioning an item's name anywhere
//! resolves to that item, and ambiguity is settled by container insertion
//! order rather than reported. The strategy lives behind this seam so it
//! can be swapped for tokenized matching without touching call sites.

/// True when `input` mentions `name`, case-insensitively.
pub fn mentions(input: &str, name: &str) -> bool {
    input.to_lowercase().contains(&name.to_lowercase())
}

/// True when `input` is exactly `phrase`, ignoring case.
pub fn is_phrase(input: &str, phrase: &str) -> bool {
    input.trim().eq_ignore_ascii_case(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_is_substring_containment() {
        assert!(mentions("take the fishing pole", "pole"));
        assert!(mentions("TAKE POLE", "pole"));
        assert!(!mentions("take the rod", "pole"));
    }

    #[test]
    fn is_phrase_requires_exact_match() {
        assert!(is_phrase("Catch Fish With Pole", "catch fish with pole"));
        assert!(is_phrase("  catch fish  ", "catch fish"));
        assert!(!is_phrase("please catch fish", "catch fish"));
    }
}
