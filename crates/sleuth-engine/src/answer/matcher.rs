//! Fuzzy culprit-answer matching: exact normalized equality first, then a
//! token-overlap threshold that tolerates paraphrasing and word order while
//! rejecting guesses sharing only an incidental word with a longer answer.

use std::collections::HashSet;

/// Fraction of an accepted answer's tokens a guess must cover.
const OVERLAP_THRESHOLD: f64 = 0.7;

/// Lower-case, replace everything outside `[a-z0-9 ]` with a space, collapse
/// whitespace runs, trim.
pub fn normalize(input: &str) -> String {
    let mapped: String = input
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into tokens, discarding tokens of length <= 1.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| t.len() > 1)
        .map(str::to_owned)
        .collect()
}

/// Whether a free-text guess counts as identifying the culprit.
pub fn is_match(user_input: &str, accepted: &[String]) -> bool {
    let user_norm = normalize(user_input);
    if user_norm.is_empty() {
        return false;
    }
    let user_tokens: HashSet<String> = tokenize(user_input).into_iter().collect();

    for answer in accepted {
        let answer_norm = normalize(answer);
        if answer_norm.is_empty() {
            continue;
        }
        if user_norm == answer_norm {
            return true;
        }
        let answer_tokens = tokenize(&answer_norm);
        if answer_tokens.is_empty() {
            continue;
        }
        let matches = answer_tokens
            .iter()
            .filter(|t| user_tokens.contains(*t))
            .count();
        let needed = needed_tokens(answer_tokens.len());
        if matches >= needed {
            return true;
        }
    }
    false
}

/// At least one token, otherwise 70% of the answer's tokens rounded up.
fn needed_tokens(answer_token_count: usize) -> usize {
    ((answer_token_count as f64) * OVERLAP_THRESHOLD).ceil().max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalize_strips_punctuation_and_collapses_spaces() {
        assert_eq!(normalize("  The NULL-pointer,   bug!  "), "the null pointer bug");
        assert_eq!(normalize("??!"), "");
    }

    #[test]
    fn tokenize_drops_single_character_tokens() {
        assert_eq!(tokenize("a off by 1 error"), vec!["off", "by", "error"]);
    }

    #[test]
    fn exact_match_after_normalization() {
        assert!(is_match("Null Pointer Exception!", &answers(&["null pointer exception"])));
    }

    #[test]
    fn two_of_three_tokens_is_below_the_bar() {
        // needed = ceil(0.7 * 3) = 3, matches = 2
        assert!(!is_match("The Null Pointer", &answers(&["null pointer exception"])));
    }

    #[test]
    fn all_target_tokens_present_matches_despite_extras() {
        assert!(is_match(
            "null pointer exception now",
            &answers(&["null pointer exception"])
        ));
    }

    #[test]
    fn empty_and_unrelated_guesses_fail() {
        assert!(!is_match("", &answers(&["off by one"])));
        assert!(!is_match("xyz", &answers(&["off by one"])));
    }

    #[test]
    fn single_incidental_word_does_not_match_multiword_answer() {
        // "loop" alone covers 1 of 2 tokens; needed = ceil(1.4) = 2
        assert!(!is_match("loop", &answers(&["infinite loop"])));
        assert!(is_match("infinite loop somewhere", &answers(&["infinite loop"])));
    }

    #[test]
    fn any_accepted_answer_may_match() {
        let accepted = answers(&["missing semicolon", "automatic semicolon insertion"]);
        assert!(is_match("the semicolon is missing", &accepted));
    }

    #[test]
    fn needed_tokens_floor_is_one() {
        assert_eq!(needed_tokens(1), 1);
        assert_eq!(needed_tokens(2), 2);
        assert_eq!(needed_tokens(3), 3);
        assert_eq!(needed_tokens(4), 3);
        assert_eq!(needed_tokens(10), 7);
    }
}
