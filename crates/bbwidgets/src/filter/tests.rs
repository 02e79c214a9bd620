//! Tests for the item filter.

use super::*;

fn items(labels: &[&str]) -> Vec<SelectItem<usize>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| SelectItem::new(*label, i))
        .collect()
}

fn values(result: &[&SelectItem<usize>]) -> Vec<usize> {
    result.iter().map(|item| item.value).collect()
}

// ==================== Passthrough Tests ====================

#[test]
fn test_empty_query_returns_all_items() {
    let source = items(&["alpha", "", "beta"]);
    let result = filter("", &source);
    assert_eq!(values(&result), vec![0, 1, 2]);
}

#[test]
fn test_whitespace_query_returns_all_items() {
    let source = items(&["alpha", "  ", "beta"]);
    assert_eq!(values(&filter("   ", &source)), vec![0, 1, 2]);
    assert_eq!(values(&filter("\t\n", &source)), vec![0, 1, 2]);
}

#[test]
fn test_passthrough_borrows_source() {
    let source = items(&["alpha", "beta"]);
    let result = filter("", &source);
    assert!(std::ptr::eq(result[0], &source[0]));
    assert!(std::ptr::eq(result[1], &source[1]));
}

#[test]
fn test_empty_source() {
    let source: Vec<SelectItem<usize>> = Vec::new();
    assert!(filter("abc", &source).is_empty());
    assert!(filter("", &source).is_empty());
}

// ==================== Token Tests ====================

#[test]
fn test_parse_lowercases_and_trims() {
    let query = SearchQuery::parse("  Foo BAR ");
    assert_eq!(query.tokens(), ["foo", "bar"]);
    assert!(!query.is_passthrough());
}

#[test]
fn test_parse_keeps_empty_tokens_from_double_spaces() {
    let query = SearchQuery::parse("ab  cd");
    assert_eq!(query.tokens(), ["ab", "", "cd"]);
}

#[test]
fn test_parse_whitespace_is_passthrough() {
    assert!(SearchQuery::parse("").is_passthrough());
    assert!(SearchQuery::parse("    ").is_passthrough());
}

#[test]
fn test_double_space_behaves_like_single_space() {
    let source = items(&["abcdef", "xycd", "ab"]);
    assert_eq!(
        values(&filter("ab  cd", &source)),
        values(&filter("ab cd", &source))
    );
}

// ==================== Matching Tests ====================

#[test]
fn test_all_tokens_must_match() {
    let source = items(&["abcdef", "xycd", "ab"]);
    let result = filter("ab cd", &source);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].text, "abcdef");
}

#[test]
fn test_single_character_query() {
    let source = items(&["Apple", "banana", "cherry"]);
    assert_eq!(values(&filter("a", &source)), vec![0, 1]);
}

#[test]
fn test_match_is_case_insensitive() {
    let source = items(&["New York", "newark", "YORKSHIRE"]);
    assert_eq!(values(&filter("YORK", &source)), vec![0, 2]);
    assert_eq!(values(&filter("nEw", &source)), vec![0, 1]);
}

#[test]
fn test_match_is_substring_not_prefix() {
    let source = items(&["Caterpillar", "Cat"]);
    assert_eq!(values(&filter("pill", &source)), vec![0]);
}

#[test]
fn test_token_order_does_not_matter() {
    let source = items(&["red green blue", "green", "blue red"]);
    assert_eq!(values(&filter("blue red", &source)), vec![0, 2]);
    assert_eq!(values(&filter("red blue", &source)), vec![0, 2]);
}

#[test]
fn test_duplicate_tokens_are_harmless() {
    let source = items(&["abc", "xyz"]);
    assert_eq!(values(&filter("a a a", &source)), vec![0]);
}

#[test]
fn test_query_longer_than_any_label() {
    let source = items(&["ab", "abc"]);
    assert!(filter("abcdefghijkl", &source).is_empty());
}

#[test]
fn test_blank_labels_never_match_non_empty_query() {
    let source = items(&["", "   ", "alpha"]);
    assert_eq!(values(&filter("a", &source)), vec![2]);
}

#[test]
fn test_deleted_flag_is_ignored() {
    let source = vec![
        SelectItem::with_deleted("archived project", 1, true),
        SelectItem::new("active project", 2),
    ];
    let result: Vec<i32> = filter("project", &source).iter().map(|i| i.value).collect();
    assert_eq!(result, vec![1, 2]);
}

#[test]
fn test_unicode_labels() {
    let source = items(&["Größe", "STRASSE", "Ärger"]);
    assert_eq!(values(&filter("ÄR", &source)), vec![2]);
    assert_eq!(values(&filter("größe", &source)), vec![0]);
}

// ==================== Properties ====================

#[test]
fn test_result_is_ordered_subsequence() {
    let source = items(&["a1", "b", "a2", "c", "a3", "ba"]);
    let result = values(&filter("a", &source));
    assert_eq!(result, vec![0, 2, 4, 5]);
    assert!(result.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_every_result_contains_every_token() {
    let source = items(&["Foo Bar", "bar baz", "FOOBAR", "qux", "barfoo x"]);
    let query = "foo bar";
    for item in filter(query, &source) {
        let label = item.text.to_lowercase();
        for token in SearchQuery::parse(query).tokens() {
            assert!(label.contains(token.as_str()), "{label} missing {token}");
        }
    }
}

#[test]
fn test_filter_indices_matches_filter() {
    let source = items(&["abcdef", "xycd", "ab", "cdab"]);
    assert_eq!(filter_indices("ab cd", &source), vec![0, 3]);
    assert_eq!(filter_indices("", &source), vec![0, 1, 2, 3]);
}

#[test]
fn test_query_can_be_reused() {
    let query = SearchQuery::parse("ab");
    let first = items(&["ab", "cd"]);
    let second = items(&["xx", "xab"]);
    assert_eq!(values(&query.apply(&first)), vec![0]);
    assert_eq!(values(&query.apply(&second)), vec![1]);
}
