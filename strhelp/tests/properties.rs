use proptest::prelude::*;
use strhelp::prelude::*;

// Bias toward spaces, commas and letters of both cases so trims and splits
// actually have something to do.
fn ascii_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(b' '),
            2 => Just(b','),
            5 => b'a'..=b'z',
            5 => b'A'..=b'Z',
            2 => any::<u8>(),
        ],
        0..64,
    )
}

// Same mix as `ascii_text`, widened, plus units outside the ASCII range.
fn wide_text() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(
        prop_oneof![
            8 => ascii_text().prop_map(|s| s.into_iter().map(u16::from).collect::<Vec<_>>()),
            1 => prop::collection::vec(any::<u16>(), 0..8),
        ],
        0..4,
    )
    .prop_map(|runs| runs.concat())
}

fn trim_set_chars() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b' '), Just(b','), b'a'..=b'c'], 1..5)
}

fn no_edge_spaces(s: &[u8]) -> bool {
    s.first() != Some(&b' ') && s.last() != Some(&b' ')
}

proptest! {
    #[test]
    fn reverse_is_an_involution(s in ascii_text()) {
        prop_assert_eq!(reverse(reverse(s.clone())), s);
    }

    #[test]
    fn reverse_wide_is_an_involution(s in prop::collection::vec(any::<u16>(), 0..64)) {
        prop_assert_eq!(reverse(reverse(s.clone())), s);
    }

    #[test]
    fn case_mapping_is_idempotent(s in ascii_text()) {
        let upper = to_upper(s.clone());
        prop_assert_eq!(to_upper(upper.clone()), upper);
        let lower = to_lower(s);
        prop_assert_eq!(to_lower(lower.clone()), lower);
    }

    #[test]
    fn upper_has_no_lowercase_letters(s in any::<String>()) {
        let chars: Vec<char> = s.chars().collect();
        prop_assert!(to_upper(chars).into_iter().all(|c| !c.is_ascii_lowercase()));
    }

    #[test]
    fn case_mapping_keeps_length_and_non_letters(s in ascii_text()) {
        let upper = to_upper(s.clone());
        prop_assert_eq!(upper.len(), s.len());
        for (a, b) in s.iter().zip(&upper) {
            if !a.is_ascii_alphabetic() {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn split_never_yields_empty_tokens(s in ascii_text(), d in any::<u8>()) {
        let tokens = split(&s, d);
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        prop_assert!(tokens.iter().all(|t| !t.contains(&d)));
        let kept: Vec<u8> = s.iter().copied().filter(|&c| c != d).collect();
        prop_assert_eq!(tokens.concat(), kept);
    }

    #[test]
    fn trims_leave_clean_edges_untouched(s in ascii_text().prop_filter("clean edges", |s| no_edge_spaces(s))) {
        prop_assert_eq!(trim(&s), s.clone());
        prop_assert_eq!(trimleft(&s), s.clone());
        prop_assert_eq!(trimright(&s), s);
    }

    #[test]
    fn trim_result_is_a_clean_infix(s in ascii_text()) {
        let t = trim(&s);
        prop_assert!(no_edge_spaces(&t));
        prop_assert!(t.is_empty() || s.windows(t.len()).any(|w| w == &t[..]));
        prop_assert_eq!(trim(&t), t.clone());
        prop_assert_eq!(trimleft(&trimright(&s)), t);
    }

    #[test]
    fn trim_chars_ignores_set_order(s in ascii_text(), set in prop::collection::vec(prop_oneof![Just(b' '), Just(b','), b'a'..=b'c'], 0..5)) {
        let mut rev = set.clone();
        rev.reverse();
        prop_assert_eq!(trim_chars(&s, &set), trim_chars(&s, &rev));
        let t = trim_chars(&s, &set);
        prop_assert!(t.first().map_or(true, |c| !set.contains(c)));
        prop_assert!(t.last().map_or(true, |c| !set.contains(c)));
    }

    #[test]
    fn remove_drops_only_the_target(s in ascii_text(), c in any::<u8>()) {
        let out = remove(s.clone(), c);
        prop_assert!(!out.contains(&c));
        let expected: Vec<u8> = s.into_iter().filter(|&x| x != c).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn str_layer_matches_char_layer(s in any::<String>()) {
        let chars: Vec<char> = s.chars().collect();
        prop_assert_eq!(s.reversed(), reverse(chars.clone()).into_iter().collect::<String>());
        prop_assert_eq!(s.trim_spaces(), trim(&chars).into_iter().collect::<String>());
    }

    #[test]
    fn char_trims_leave_clean_edges_untouched(s in ascii_text(), set in trim_set_chars()) {
        prop_assume!(s.first().map_or(true, |c| !set.contains(c)));
        prop_assume!(s.last().map_or(true, |c| !set.contains(c)));
        prop_assert_eq!(trim_chars(&s, &set), s.clone());
        prop_assert_eq!(trimleft_chars(&s, &set), s.clone());
        prop_assert_eq!(trimright_chars(&s, &set), s.clone());
        let prebuilt = CharSet::new(&set);
        prop_assert_eq!(trim_set(&s, &prebuilt), s.clone());
        prop_assert_eq!(trimleft_set(&s, &prebuilt), s.clone());
        prop_assert_eq!(trimright_set(&s, &prebuilt), s);
    }

    #[test]
    fn one_sided_char_trims_compose(s in ascii_text(), set in trim_set_chars()) {
        let left = trimleft_chars(&s, &set);
        let right = trimright_chars(&s, &set);
        prop_assert!(left.first().map_or(true, |c| !set.contains(c)));
        prop_assert!(right.last().map_or(true, |c| !set.contains(c)));
        prop_assert!(s.ends_with(&left));
        prop_assert!(s.starts_with(&right));
        prop_assert_eq!(trimright_chars(&left, &set), trim_chars(&s, &set));
    }

    #[test]
    fn wide_split_never_yields_empty_tokens(s in wide_text(), d in prop_oneof![Just(u16::from(b',')), any::<u16>()]) {
        let tokens = split(&s, d);
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        let kept: Vec<u16> = s.iter().copied().filter(|&c| c != d).collect();
        prop_assert_eq!(tokens.concat(), kept);
    }

    #[test]
    fn wide_remove_drops_only_the_target(s in wide_text(), c in prop_oneof![Just(u16::from(b' ')), any::<u16>()]) {
        let out = remove(s.clone(), c);
        prop_assert!(!out.contains(&c));
        let expected: Vec<u16> = s.into_iter().filter(|&x| x != c).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn wide_case_mapping_is_idempotent(s in wide_text()) {
        let upper = to_upper(s.clone());
        prop_assert_eq!(to_upper(upper.clone()), upper.clone());
        prop_assert!(upper.iter().all(|&c| !(u16::from(b'a')..=u16::from(b'z')).contains(&c)));
        let lower = to_lower(s);
        prop_assert_eq!(to_lower(lower.clone()), lower);
    }

    #[test]
    fn wide_trims_match_narrow_trims(s in ascii_text()) {
        let wide: Vec<u16> = s.iter().map(|&c| u16::from(c)).collect();
        let narrow = trim(&s).into_iter().map(u16::from).collect::<Vec<_>>();
        prop_assert_eq!(trim(&wide), narrow);
        prop_assert_eq!(trimleft(&wide).len(), trimleft(&s).len());
        prop_assert_eq!(trimright(&wide).len(), trimright(&s).len());
    }

    #[test]
    fn code_point_case_mapping_is_idempotent(s in prop::collection::vec(prop_oneof![0x41u32..=0x7a, any::<u32>()], 0..32)) {
        let upper = to_upper(s.clone());
        prop_assert_eq!(to_upper(upper.clone()), upper);
        let lower = to_lower(s.clone());
        prop_assert_eq!(to_lower(lower.clone()), lower);
        prop_assert_eq!(reverse(reverse(s.clone())), s);
    }
}
