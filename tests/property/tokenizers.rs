//! Properties of the tokenizers.

use compkeys::{bigrams, biunigrams, prefixes, suffixes};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ a-zあい]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn prop_bigrams_are_two_chars_within_a_word(s in text_strategy()) {
        let words: Vec<&str> = s.split(' ').collect();
        for gram in bigrams(&s) {
            prop_assert_eq!(gram.chars().count(), 2);
            prop_assert!(words.iter().any(|w| w.contains(gram.as_str())));
        }
    }

    #[test]
    fn prop_biunigrams_contain_bigrams(s in text_strategy()) {
        let all = biunigrams(&s);
        prop_assert!(bigrams(&s).is_subset(&all));
        for c in s.chars().filter(|&c| c != ' ') {
            prop_assert!(all.contains(&c.to_string()));
        }
    }

    #[test]
    fn prop_prefixes_and_suffixes_cover_words(s in text_strategy()) {
        let pre = prefixes(&s);
        let suf = suffixes(&s);
        for word in s.split(' ').filter(|w| !w.is_empty()) {
            prop_assert!(pre.contains(word));
            prop_assert!(suf.contains(word));
        }
        for p in &pre {
            prop_assert!(s.split(' ').any(|w| w.starts_with(p.as_str())));
        }
        for x in &suf {
            prop_assert!(s.split(' ').any(|w| w.ends_with(x.as_str())));
        }
    }

    #[test]
    fn prop_no_token_contains_a_space(s in text_strategy()) {
        for token in biunigrams(&s).into_iter().chain(prefixes(&s)).chain(suffixes(&s)) {
            prop_assert!(!token.contains(' ') && !token.is_empty());
        }
    }
}
