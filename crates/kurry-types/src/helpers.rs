//! Wording helpers for diagnostics

const NUMBERS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const ORDINALS: [&str; 3] = ["first", "second", "third"];

/// `two`, `ten`, `11`
pub fn number_word(n: usize) -> String {
    NUMBERS
        .get(n)
        .map(|s| s.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// `one argument`, `three arguments`
pub fn arguments(n: usize) -> String {
    let noun = if n == 1 { "argument" } else { "arguments" };
    format!("{} {}", number_word(n), noun)
}

/// 1-based ordinal: `first`, `second`, `third`, then `4th`, `11th`, `22nd`
pub fn ordinal(n: usize) -> String {
    if (1..=ORDINALS.len()).contains(&n) {
        return ORDINALS[n - 1].to_string();
    }
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
