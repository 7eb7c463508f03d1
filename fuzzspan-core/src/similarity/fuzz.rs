//! FuzzyWuzzy-style ratio functions
//!
//! All functions return an integer score in `0..=100`, rounded half to
//! even. A comparison involving an empty string (after processing, for the
//! processed variants) scores 0.
//!
//! The basic ratio is the indel similarity `2 * LCS / (len(a) + len(b))`
//! over chars. `partial_ratio` slides the shorter string over every
//! same-length window of the longer one and keeps the best window.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Scale applied to token based ratios inside the weighted ratio
const UNBASE_SCALE: f64 = 0.95;

/// Partial ratio scale for moderately different lengths
const PARTIAL_SCALE: f64 = 0.90;

/// Partial ratio scale when one string is more than 8x longer
const PARTIAL_SCALE_LONG: f64 = 0.6;

static NON_WORD: OnceLock<Regex> = OnceLock::new();

fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"\W").expect("static pattern is valid"))
}

/// Basic similarity ratio
pub fn ratio(s1: &str, s2: &str) -> u8 {
    to_score(raw_ratio(s1, s2))
}

/// Best ratio of the shorter string against any window of the longer one
pub fn partial_ratio(s1: &str, s2: &str) -> u8 {
    to_score(raw_partial_ratio(s1, s2))
}

/// Ratio of the processed strings with their tokens sorted
pub fn token_sort_ratio(s1: &str, s2: &str) -> u8 {
    token_sort(s1, s2, false, true, true)
}

/// Partial ratio of the processed strings with their tokens sorted
pub fn partial_token_sort_ratio(s1: &str, s2: &str) -> u8 {
    token_sort(s1, s2, true, true, true)
}

/// Best ratio between token intersection and per-side remainders
pub fn token_set_ratio(s1: &str, s2: &str) -> u8 {
    token_set(s1, s2, false, true, true)
}

/// Partial variant of [`token_set_ratio`]
pub fn partial_token_set_ratio(s1: &str, s2: &str) -> u8 {
    token_set(s1, s2, true, true, true)
}

/// Ratio of the processed strings, non-ASCII characters removed
pub fn quick_ratio(s1: &str, s2: &str) -> u8 {
    quick(s1, s2, true)
}

/// Ratio of the processed strings, Unicode preserved
pub fn unicode_quick_ratio(s1: &str, s2: &str) -> u8 {
    quick(s1, s2, false)
}

/// Weighted best-of ratio, non-ASCII characters removed
pub fn weighted_ratio(s1: &str, s2: &str) -> u8 {
    weighted(s1, s2, true)
}

/// Weighted best-of ratio, Unicode preserved
pub fn unicode_weighted_ratio(s1: &str, s2: &str) -> u8 {
    weighted(s1, s2, false)
}

/// Replace non-word characters with spaces, lower-case and trim
///
/// With `force_ascii` non-ASCII characters are dropped first.
pub fn full_process(s: &str, force_ascii: bool) -> String {
    let ascii;
    let source = if force_ascii {
        ascii = s.chars().filter(char::is_ascii).collect::<String>();
        ascii.as_str()
    } else {
        s
    };

    non_word()
        .replace_all(source, " ")
        .to_lowercase()
        .trim()
        .to_string()
}

fn to_score(ratio: f64) -> u8 {
    (100.0 * ratio).round_ties_even().clamp(0.0, 100.0) as u8
}

fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Only the previous row is needed
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        curr[0] = 0;
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn chars_ratio(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let total = (a.len() + b.len()) as f64;
    2.0 * lcs_length(a, b) as f64 / total
}

fn raw_ratio(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    chars_ratio(&a, &b)
}

fn raw_partial_ratio(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = 0.0f64;
    for window in longer.windows(shorter.len()) {
        let r = chars_ratio(shorter, window);
        if r > 0.995 {
            return 1.0;
        }
        best = best.max(r);
    }
    best
}

fn ratio_with(partial: bool, s1: &str, s2: &str) -> u8 {
    if partial {
        partial_ratio(s1, s2)
    } else {
        ratio(s1, s2)
    }
}

fn process_and_sort(s: &str, force_ascii: bool, process: bool) -> String {
    let processed = if process {
        full_process(s, force_ascii)
    } else {
        s.to_string()
    };
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort(s1: &str, s2: &str, partial: bool, force_ascii: bool, process: bool) -> u8 {
    let sorted1 = process_and_sort(s1, force_ascii, process);
    let sorted2 = process_and_sort(s2, force_ascii, process);
    ratio_with(partial, &sorted1, &sorted2)
}

fn token_set(s1: &str, s2: &str, partial: bool, force_ascii: bool, process: bool) -> u8 {
    let (p1, p2) = if process {
        (full_process(s1, force_ascii), full_process(s2, force_ascii))
    } else {
        (s1.to_string(), s2.to_string())
    };
    if p1.is_empty() || p2.is_empty() {
        return 0;
    }

    let tokens1: BTreeSet<&str> = p1.split_whitespace().collect();
    let tokens2: BTreeSet<&str> = p2.split_whitespace().collect();

    let join = |tokens: Vec<&str>| tokens.join(" ");
    let sorted_sect = join(tokens1.intersection(&tokens2).copied().collect());
    let sorted_1to2 = join(tokens1.difference(&tokens2).copied().collect());
    let sorted_2to1 = join(tokens2.difference(&tokens1).copied().collect());

    let combined_1to2 = format!("{sorted_sect} {sorted_1to2}");
    let combined_2to1 = format!("{sorted_sect} {sorted_2to1}");
    let (sect, c12, c21) = (
        sorted_sect.trim(),
        combined_1to2.trim(),
        combined_2to1.trim(),
    );

    [
        ratio_with(partial, sect, c12),
        ratio_with(partial, sect, c21),
        ratio_with(partial, c12, c21),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

fn quick(s1: &str, s2: &str, force_ascii: bool) -> u8 {
    let p1 = full_process(s1, force_ascii);
    let p2 = full_process(s2, force_ascii);
    if p1.is_empty() || p2.is_empty() {
        return 0;
    }
    ratio(&p1, &p2)
}

fn weighted(s1: &str, s2: &str, force_ascii: bool) -> u8 {
    let p1 = full_process(s1, force_ascii);
    let p2 = full_process(s2, force_ascii);
    if p1.is_empty() || p2.is_empty() {
        return 0;
    }

    let base = f64::from(ratio(&p1, &p2));
    let len1 = p1.chars().count();
    let len2 = p2.chars().count();
    let len_ratio = len1.max(len2) as f64 / len1.min(len2) as f64;

    let best = if len_ratio < 1.5 {
        let tsor = f64::from(token_sort(&p1, &p2, false, force_ascii, false)) * UNBASE_SCALE;
        let tser = f64::from(token_set(&p1, &p2, false, force_ascii, false)) * UNBASE_SCALE;
        base.max(tsor).max(tser)
    } else {
        let partial_scale = if len_ratio > 8.0 {
            PARTIAL_SCALE_LONG
        } else {
            PARTIAL_SCALE
        };
        let partial = f64::from(partial_ratio(&p1, &p2)) * partial_scale;
        let ptsor = f64::from(token_sort(&p1, &p2, true, force_ascii, false))
            * UNBASE_SCALE
            * partial_scale;
        let ptser = f64::from(token_set(&p1, &p2, true, force_ascii, false))
            * UNBASE_SCALE
            * partial_scale;
        base.max(partial).max(ptsor).max(ptser)
    };

    best.round_ties_even().clamp(0.0, 100.0) as u8
}
