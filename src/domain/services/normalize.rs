use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Tokens that only name the age category or the federation suffix.
const STOP_WORDS: [&str; 4] = ["CADET", "JUVENIL", "JFG", "CFG"];

/// Canonical form of a team name, used to compare rosters across categories.
///
/// Strips diacritics, uppercases, turns punctuation into spaces and drops
/// the category stop words. Compatibility decomposition runs first so that
/// ordinals such as `ª` fold to a plain letter before uppercasing. Runs of single-letter tokens are joined back
/// into one initialism, so `"CE Ripollet Juvenil"` and `"c.e. ripollet"`
/// both become `"CE RIPOLLET"`.
pub fn normalize_name(name: &str) -> String {
    let cleaned: String = name
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .collect();

    // Joining can spell a stop word ("C F G"), hence the second filter.
    join_initials(&words)
        .into_iter()
        .filter(|word| !is_stop_word(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

fn join_initials(words: &[&str]) -> Vec<String> {
    let mut joined: Vec<String> = Vec::with_capacity(words.len());
    let mut previous_initial = false;

    for word in words {
        let initial = is_initial(word);
        match joined.last_mut() {
            Some(last) if initial && previous_initial => last.push_str(word),
            _ => joined.push((*word).to_string()),
        }
        previous_initial = initial;
    }

    joined
}

pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
