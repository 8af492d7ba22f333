//! Spoiler Shield: whole-word masking of culprit-revealing terms in case
//! titles, descriptions, and code comments. The culprit reveal itself is
//! exempt; that asymmetry is intentional and must be preserved.

use std::collections::HashSet;

use crate::cases::manifest::CaseFile;

/// Terms masked in every case regardless of its accepted answers.
pub const EXTRA_TERMS: [&str; 13] = [
    "infinite",
    "loop",
    "semicolon",
    "null",
    "undefined",
    "switch",
    "break",
    "fallthrough",
    "asi",
    "off",
    "by",
    "one",
    "fencepost",
];

/// Keywords shorter than this are never masked.
const MIN_KEYWORD_LEN: usize = 3;

const BLOCK: char = '█';

/// Derive the masking keyword set for a case: accepted answers (whole
/// phrases), title words, and the fixed extra terms, lowercased,
/// deduplicated, order preserved.
pub fn keywords(case: &CaseFile) -> Vec<String> {
    let title_words = case
        .title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_owned);

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for word in case
        .answers
        .iter()
        .cloned()
        .chain(title_words)
        .chain(EXTRA_TERMS.iter().map(|s| s.to_string()))
    {
        let word = word.to_lowercase();
        if !word.is_empty() && seen.insert(word.clone()) {
            out.push(word);
        }
    }
    out
}

/// Replace every whole-word occurrence of each keyword (length >= 3) with
/// block characters of equal length. Keywords may be multi-word phrases;
/// boundaries are non-alphanumeric characters or the text edges.
pub fn mask_keywords(text: &str, keywords: &[String]) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut lower: Vec<char> = chars.iter().map(|c| c.to_ascii_lowercase()).collect();

    for keyword in keywords {
        let kw: Vec<char> = keyword.chars().collect();
        if kw.len() < MIN_KEYWORD_LEN {
            continue;
        }
        let mut i = 0;
        while i + kw.len() <= lower.len() {
            let end = i + kw.len();
            let boundary_before = i == 0 || !lower[i - 1].is_alphanumeric();
            let boundary_after = end == lower.len() || !lower[end].is_alphanumeric();
            if boundary_before && boundary_after && lower[i..end] == kw[..] {
                for j in i..end {
                    chars[j] = BLOCK;
                    lower[j] = BLOCK;
                }
                i = end;
            } else {
                i += 1;
            }
        }
    }
    chars.into_iter().collect()
}

/// Mask only the `//` comment tail of each code line, leaving the code
/// itself readable.
pub fn mask_code_comments(code: &str, keywords: &[String]) -> String {
    code.split('\n')
        .map(|line| match line.find("//") {
            Some(idx) => {
                let (head, comment) = line.split_at(idx);
                format!("{head}{}", mask_keywords(comment, keywords))
            }
            None => line.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
