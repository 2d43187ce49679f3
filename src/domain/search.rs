//! Deterministic fuzzy ranking of commands against a free-text query.
//!
//! Every query character must appear in the candidate text in order (a
//! subsequence match). Each matched character scores a base point, plus a
//! bonus when it starts a word and another when it directly follows the
//! previous match. The sum is then scaled by how tightly the matches cluster
//! and nudged upward the earlier the first match sits.
//!
//! Two candidates are scored per command: the title alone and the title
//! followed by description and keywords. Title matches count double, and only
//! title spans are reported for highlighting.

use crate::domain::models::{CommandRecord, SearchResult};
use feruca::Collator;
use std::cmp::Ordering;

const BASE_POINTS: f64 = 1.0;
const WORD_START_BONUS: f64 = 10.0;
const CONSECUTIVE_BONUS: f64 = 5.0;
const POSITION_BONUS: f64 = 10.0;
const TITLE_WEIGHT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchScore {
    pub total: f64,
    /// Half-open char ranges of contiguous matched runs, ascending.
    pub matches: Vec<(usize, usize)>,
}

#[must_use]
pub fn search(query: &str, commands: &[CommandRecord]) -> Vec<SearchResult> {
    if query.is_empty() {
        return commands
            .iter()
            .map(|command| SearchResult {
                command: command.clone(),
                score: 0.0,
                matches: Vec::new(),
            })
            .collect();
    }

    let query = fold_case(query);
    let mut results: Vec<SearchResult> = commands
        .iter()
        .filter_map(|command| {
            let (score, matches) = score_command(&query, command);
            (score > 0.0).then(|| SearchResult {
                command: command.clone(),
                score,
                matches,
            })
        })
        .collect();

    let mut collator = Collator::default();
    results.sort_by(|a, b| compare_results(&mut collator, a, b));
    results
}

/// Scores `query` against `target`, both compared case-insensitively.
#[must_use]
pub fn match_score(query: &str, target: &str) -> MatchScore {
    score_chars(&fold_case(query), &fold_case(target))
}

fn score_command(query: &[char], command: &CommandRecord) -> (f64, Vec<(usize, usize)>) {
    let title = score_chars(query, &fold_case(&command.title));
    let full = score_chars(query, &fold_case(&command.search_text()));
    (title.total * TITLE_WEIGHT + full.total, title.matches)
}

fn score_chars(query: &[char], target: &[char]) -> MatchScore {
    let mut query_idx = 0;
    let mut target_idx = 0;
    let mut total = 0.0;
    let mut matches = Vec::new();
    let mut span_start: Option<usize> = None;
    let mut last_match: Option<usize> = None;

    while target_idx < target.len() && query_idx < query.len() {
        if target[target_idx] == query[query_idx] {
            if target_idx == 0 || target[target_idx - 1] == ' ' {
                total += WORD_START_BONUS;
            }
            if last_match.is_some_and(|last| last + 1 == target_idx) {
                total += CONSECUTIVE_BONUS;
            }
            span_start.get_or_insert(target_idx);
            total += BASE_POINTS;
            last_match = Some(target_idx);
            query_idx += 1;
        } else if let Some(start) = span_start.take() {
            matches.push((start, target_idx));
        }
        target_idx += 1;
    }

    if let Some(start) = span_start {
        matches.push((start, target_idx));
    }

    if query_idx < query.len() {
        return MatchScore::default();
    }

    let first_start = matches.first().map_or(0, |&(start, _)| start);
    let spread = (target_idx - first_start + 1) as f64;
    total *= query.len() as f64 / spread;
    total += POSITION_BONUS / (first_start + 1) as f64;

    MatchScore { total, matches }
}

// Lowercases char by char so indices keep lining up with the original title.
fn fold_case(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

fn compare_results(collator: &mut Collator, a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| compare_titles(collator, &a.command.title, &b.command.title))
        .then_with(|| a.command.id.cmp(&b.command.id))
}

/// Root-locale collation (accents sort with their base letter, lowercase
/// before uppercase), then raw text so distinct titles never compare equal.
fn compare_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action;
    use proptest::prelude::*;

    fn cmd(id: &str, title: &str) -> CommandRecord {
        CommandRecord::new(id, title, action::noop())
    }

    fn mock_commands() -> Vec<CommandRecord> {
        vec![
            cmd("1", "Open Settings"),
            cmd("2", "Create New Project"),
            cmd("3", "git: commit").with_keywords(["gc"]),
            cmd("4", "git: checkout"),
            cmd("5", "System: Restart"),
        ]
    }

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.command.id.as_str()).collect()
    }

    fn is_subsequence(query: &str, target: &str) -> bool {
        let target = fold_case(target);
        let mut it = target.iter();
        fold_case(query).iter().all(|q| it.any(|t| t == q))
    }

    #[test]
    fn test_empty_query_returns_everything_in_input_order() {
        let commands = mock_commands();
        let results = search("", &commands);
        assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5"]);
        assert!(results.iter().all(|r| r.score == 0.0 && r.matches.is_empty()));
    }

    #[test]
    fn test_equal_scores_break_ties_by_title() {
        let commands = mock_commands();
        let results = search("git", &commands);
        assert_eq!(results[0].command.title, "git: checkout");
        assert_eq!(results[1].command.title, "git: commit");
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results, search("git", &commands));
    }

    #[test]
    fn test_accented_titles_sort_with_their_base_letter() {
        let commands = vec![cmd("1", "Fiche suivante"), cmd("2", "Étape suivante")];
        let results = search("suiv", &commands);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[0].command.title, "Étape suivante");
        assert_eq!(results[1].command.title, "Fiche suivante");
    }

    #[test]
    fn test_case_variants_put_lowercase_first() {
        let commands = vec![cmd("1", "Zoom In"), cmd("2", "zoom in")];
        let results = search("zoom", &commands);
        assert_eq!(ids(&results), vec!["2", "1"]);
    }

    #[test]
    fn test_word_start_outranks_mid_word() {
        let results = search("re", &mock_commands());
        assert_eq!(results[0].command.title, "System: Restart");
        assert!(ids(&results).contains(&"2"));
    }

    #[test]
    fn test_subsequence_across_words() {
        let results = search("cnp", &mock_commands());
        assert_eq!(results[0].command.title, "Create New Project");
        assert_eq!(results[0].matches, vec![(0, 1), (7, 8), (11, 12)]);
    }

    #[test]
    fn test_consecutive_characters_score_higher() {
        let commands = vec![cmd("a", "abc"), cmd("b", "a b c")];
        let results = search("abc", &commands);
        assert_eq!(ids(&results), vec!["a", "b"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(search("xyz123", &mock_commands()).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let commands = mock_commands();
        assert_eq!(
            ids(&search("SETTINGS", &commands)),
            ids(&search("settings", &commands))
        );
    }

    #[test]
    fn test_keyword_only_match_is_included_without_title_spans() {
        let commands = vec![cmd("t", "Toggle Theme").with_keywords(["dark"])];
        let results = search("dk", &commands);
        assert_eq!(ids(&results), vec!["t"]);
        assert!(results[0].matches.is_empty());
    }

    #[test]
    fn test_match_score_values() {
        // a(+10 +1) b(+5 +1) c(+5 +1) = 23, scaled by 3/4, plus 10/1
        let score = match_score("abc", "abc");
        assert!((score.total - 27.25).abs() < 1e-9);
        assert_eq!(score.matches, vec![(0, 3)]);

        // r(+10 +1) e(+5 +1) = 17, scaled by 2/3, plus 10/9
        let score = match_score("re", "System: Restart");
        assert!((score.total - (17.0 * 2.0 / 3.0 + 10.0 / 9.0)).abs() < 1e-9);
        assert_eq!(score.matches, vec![(8, 10)]);

        assert_eq!(match_score("zz", "abc"), MatchScore::default());
    }

    #[test]
    fn test_spans_index_title_chars() {
        let results = search("ür", &[cmd("u", "Über Rechner")]);
        assert_eq!(results[0].matches, vec![(0, 1), (3, 4)]);
    }

    #[test]
    fn test_identical_titles_order_by_id() {
        let forward = vec![cmd("b", "Same"), cmd("a", "Same")];
        let backward = vec![cmd("a", "Same"), cmd("b", "Same")];
        assert_eq!(ids(&search("sa", &forward)), vec!["a", "b"]);
        assert_eq!(ids(&search("sa", &backward)), vec!["a", "b"]);
    }

    fn arb_commands() -> impl Strategy<Value = Vec<CommandRecord>> {
        prop::collection::vec(
            (
                "[a-zA-Z :]{0,12}",
                prop::option::of("[a-z ]{0,10}"),
                prop::collection::vec("[a-z]{1,4}", 0..3),
            ),
            0..8,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, description, keywords))| {
                    let mut c = cmd(&i.to_string(), &title).with_keywords(keywords);
                    c.description = description;
                    c
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_search_is_deterministic(query in "[a-z :]{0,4}", commands in arb_commands()) {
            prop_assert_eq!(search(&query, &commands), search(&query, &commands));
        }

        #[test]
        fn prop_search_ignores_query_case(query in "[a-z]{1,4}", commands in arb_commands()) {
            let lower = search(&query, &commands);
            let upper = search(&query.to_uppercase(), &commands);
            prop_assert_eq!(ids(&lower), ids(&upper));
        }

        #[test]
        fn prop_results_are_subsequence_matches(query in "[a-z]{1,4}", commands in arb_commands()) {
            for result in search(&query, &commands) {
                prop_assert!(
                    is_subsequence(&query, &result.command.title)
                        || is_subsequence(&query, &result.command.search_text())
                );
            }
        }

        #[test]
        fn prop_excluded_iff_not_subsequence(query in "[a-z]{1,3}", commands in arb_commands()) {
            for command in &commands {
                let found = !search(&query, std::slice::from_ref(command)).is_empty();
                let expected = is_subsequence(&query, &command.title)
                    || is_subsequence(&query, &command.search_text());
                prop_assert_eq!(found, expected);
            }
        }

        #[test]
        fn prop_ties_ordered_by_title(query in "[a-z]{1,2}", commands in arb_commands()) {
            let results = search(&query, &commands);
            for pair in results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert_ne!(
                        compare_titles(
                            &mut Collator::default(),
                            &pair[0].command.title,
                            &pair[1].command.title
                        ),
                        Ordering::Greater
                    );
                }
            }
        }

        #[test]
        fn prop_spans_sorted_and_disjoint(query in "[a-z]{1,4}", commands in arb_commands()) {
            for result in search(&query, &commands) {
                let title_len = result.command.title.chars().count();
                for pair in result.matches.windows(2) {
                    prop_assert!(pair[0].1 < pair[1].0);
                }
                for &(start, end) in &result.matches {
                    prop_assert!(start < end && end <= title_len);
                }
            }
        }
    }
}
