//! Candidate filtering against a [`ConstraintState`].

use crate::constraints::ConstraintState;
use crate::word::Word;

/// Check whether a single word satisfies every constraint in `state`.
///
/// Words of the wrong length never match.
pub fn is_consistent(word: &Word, state: &ConstraintState) -> bool {
    if word.len() != state.word_length() {
        return false;
    }

    for (i, c) in word.letters().enumerate() {
        if let Some(fixed) = state.fixed()[i] {
            if fixed != c {
                return false;
            }
        }
        if state.forbidden()[i].contains(c) {
            return false;
        }
    }

    state
        .min_count()
        .iter()
        .all(|(&c, &min)| word.count(c) >= min)
}

/// Keep the words of `words` consistent with `state`, preserving order.
///
/// Callers usually pass the previous round's pool rather than the whole
/// corpus: a pool that met the older, weaker constraints only needs checking
/// against the new ones. An empty result means the constraints contradict
/// each other or the solution is not in the pool.
pub fn filter(words: &[Word], state: &ConstraintState) -> Vec<Word> {
    let kept: Vec<Word> = words
        .iter()
        .filter(|w| is_consistent(w, state))
        .cloned()
        .collect();

    log::debug!("filter kept {} of {} words", kept.len(), words.len());
    kept
}
