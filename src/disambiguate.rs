//! Picking the article that most likely describes the searched movie.
//!
//! This is a greedy heuristic over the search engine's ranking. The top hit is trusted
//! whenever it is plausible; other candidates only win on string similarity. It produces
//! both false positives (a same-named non-film article) and false negatives (heavily
//! misspelt titles), which is why uncertain matches are reported instead of guessed.

use similar::TextDiff;

/// Candidates scoring below this are never selected on similarity alone.
pub const MIN_SIMILARITY: f64 = 0.6;

/// Whether one of `title` and `candidate` contains the other, ignoring case.
pub fn overlaps(title: &str, candidate: &str) -> bool {
    let title = title.to_lowercase();
    let candidate = candidate.to_lowercase();
    candidate.contains(&title) || title.contains(&candidate)
}

/// Case-insensitive similarity in `[0, 1]`, 1 meaning identical.
///
/// Twice the number of characters in matching blocks over the combined length, so a
/// short title inside a longer article name still scores well.
pub fn similarity(title: &str, candidate: &str) -> f64 {
    let title = title.to_lowercase();
    let candidate = candidate.to_lowercase();
    f64::from(TextDiff::from_chars(&title, &candidate).ratio())
}

/// Select the most likely article for `title` among the ranked `candidates`.
///
/// `None` means either there was nothing to choose from or no candidate was similar
/// enough; callers tell the two apart by whether `candidates` is empty.
pub fn most_likely<'c>(title: &str, candidates: &'c [String]) -> Option<&'c str> {
    let top = candidates.first()?.as_str();

    // The searched title inside the top hit (or the reverse) settles it.
    if overlaps(title, top) {
        return Some(top);
    }

    let scores: Vec<f64> = candidates.iter().map(|c| similarity(title, c)).collect();
    let (best, best_score) = stable_argmax(&scores)?;

    if scores[0] >= MIN_SIMILARITY && (top.contains("film") || scores[0] >= best_score) {
        return Some(top);
    }

    if best_score < MIN_SIMILARITY {
        return None;
    }
    Some(candidates[best].as_str())
}

/// Index and value of the highest score. Ties go to the earliest index.
fn stable_argmax(scores: &[f64]) -> Option<(usize, f64)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, score)| match best {
            Some((_, b)) if b >= score => best,
            _ => Some((i, score)),
        })
}
