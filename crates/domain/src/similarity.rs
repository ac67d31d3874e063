//! Lexical similarity between two domain names.
//!
//! The score is `1 - levenshtein(a, b) / max(len(a), len(b))`, measured in
//! characters, and is used as a typosquatting signal: `1.0` means identical,
//! `0.0` means nothing in common positionally.

/// Classic Levenshtein edit distance (insert, delete and substitute cost 1).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the (len(a)+1) x (len(b)+1) table.
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Normalised similarity in `[0, 1]`. Two empty strings score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}
