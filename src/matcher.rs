//! Fuzzy subsequence matching and ranking
//!
//! Implements the scoring model used by the picker: a case-insensitive
//! ordered-subsequence scan of each candidate. The scan is greedy and
//! left-to-right with no backtracking, so an alternative alignment with a
//! higher score can be missed; that trade keeps scoring a single pass per
//! candidate and is accepted behavior, not a bug.
//!
//! Scoring:
//! - +1 for every matched character
//! - +3 when a match lands directly after the previous match (consecutive run)
//! - +2 when a match sits at the start of the candidate or right after a space

/// A candidate that matched the query, with its relevance score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Position of the candidate in the corpus it was filtered from
    pub index: usize,
    /// The candidate text
    pub path: String,
    /// Relevance score; at least 1 for a non-empty query
    pub score: u32,
}

/// Score a candidate against a query.
///
/// Returns 0 unless every character of `query`, in order, appears in
/// `candidate` (ignoring case). An empty query scores 0; `filter` treats it
/// as a pass-through instead.
#[must_use]
pub fn score(query: &str, candidate: &str) -> u32 {
    let query: Vec<char> = query.to_lowercase().chars().collect();
    let candidate: Vec<char> = candidate.to_lowercase().chars().collect();

    let mut total = 0u32;
    let mut query_idx = 0usize;
    let mut last_match: Option<usize> = None;

    for (i, &c) in candidate.iter().enumerate() {
        if query_idx >= query.len() {
            break;
        }

        if c == query[query_idx] {
            total += 1;

            // Bonus for consecutive matches
            if last_match.is_some_and(|last| i == last + 1) {
                total += 3;
            }

            // Bonus for matching start of words
            if i == 0 || candidate[i - 1] == ' ' {
                total += 2;
            }

            last_match = Some(i);
            query_idx += 1;
        }
    }

    // Not all query characters were found
    if query_idx != query.len() {
        return 0;
    }

    total
}

/// Filter and rank candidates against a query.
///
/// Zero-score candidates are dropped and the rest are sorted by descending
/// score. The sort is stable, so candidates with equal scores keep their
/// original corpus order and repeated calls with the same input produce
/// identical output.
///
/// An empty query passes every candidate through in original order (the
/// scores on those matches carry no meaning).
#[must_use]
pub fn filter(query: &str, candidates: &[String]) -> Vec<Match> {
    if query.is_empty() {
        return candidates
            .iter()
            .enumerate()
            .map(|(index, path)| Match {
                index,
                path: path.clone(),
                score: 0,
            })
            .collect();
    }

    let mut matches: Vec<Match> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, path)| {
            let score = score(query, path);
            (score > 0).then(|| Match {
                index,
                path: path.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn test_subsequence_order_is_required() {
        assert!(score("fb", "foobar") > 0);
        assert_eq!(score("bf", "foobar"), 0);
    }

    #[test]
    fn test_no_match_scores_zero() {
        assert_eq!(score("xyz", "foobar"), 0);
        assert_eq!(score("foobarbaz", "foobar"), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("FOO", "foobar"), score("foo", "foobar"));
        assert!(score("readme", "README.md") > 0);
    }

    #[test]
    fn test_consecutive_run_bonus() {
        // "fo" is adjacent in the first candidate only
        assert!(score("fo", "foobar") > score("fo", "f-o-obar"));
    }

    #[test]
    fn test_word_start_bonus() {
        // Leading match earns the word-start bonus
        let at_start = score("a", "abc");
        let mid = score("a", "bac");
        assert!(at_start > mid);

        // Match right after a space earns it too
        assert!(score("b", "a bc") > score("b", "abc"));
    }

    #[test]
    fn test_exact_scoring_values() {
        // "ab": 'a' at 0 (+1 +2 word start), 'b' at 1 (+1 +3 consecutive)
        assert_eq!(score("ab", "abc"), 7);
        // "ac": 'a' at 0 (+1 +2), 'c' at 2 (+1, not consecutive)
        assert_eq!(score("ac", "abc"), 4);
    }

    #[test]
    fn test_filter_drops_non_matches() {
        let candidates = corpus(&["a.txt", "sub/b.txt"]);
        let results = filter("a", &candidates);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, "a.txt");
        assert!(results[0].score > 0);
    }

    #[test]
    fn test_filter_ranks_by_score() {
        let candidates = corpus(&["x_main_x.rs", "main.rs"]);
        let results = filter("main", &candidates);

        assert_eq!(results.len(), 2);
        // Word-start bonus ranks the leading match first
        assert_eq!(results[0].path, "main.rs");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_filter_empty_query_passes_through() {
        let candidates = corpus(&["b.txt", "a.txt", "c.txt"]);
        let results = filter("", &candidates);

        let paths: Vec<&str> = results.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["b.txt", "a.txt", "c.txt"]);
    }

    #[test]
    fn test_filter_stable_tie_break() {
        // Identical candidates score identically and keep corpus order
        let candidates = corpus(&["ab1", "ab2", "ab3"]);
        let results = filter("ab", &candidates);

        let indices: Vec<usize> = results.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let candidates = corpus(&["src/main.rs", "src/lib.rs", "tests/main_test.rs"]);
        let first = filter("main", &candidates);
        let second = filter("main", &candidates);
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_results_are_corpus_members() {
        let candidates = corpus(&["alpha", "beta", "gamma"]);
        for m in filter("a", &candidates) {
            assert!(candidates.contains(&m.path));
            assert_eq!(candidates[m.index], m.path);
        }
    }
}
