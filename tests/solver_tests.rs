use wordle_assist::{
    benchmark, load_sample_corpus, solve_for_target, Error, Feedback, FrequencyCorpus, Round,
    SolverConfig, Word,
};

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn get_test_corpus() -> FrequencyCorpus {
    FrequencyCorpus::from_pairs(
        5,
        [
            ("crane", 3162384),
            ("slate", 2890212),
            ("trace", 2801556),
            ("crate", 2301337),
            ("raise", 8420617),
            ("arise", 2920381),
            ("stare", 4105322),
            ("roast", 1912384),
            ("toast", 3710934),
            ("beast", 5102883),
        ],
    )
    .unwrap()
}

/// Enough rounds for every game to finish: each wrong guess removes itself
/// from the pool.
fn unlimited(corpus: &FrequencyCorpus) -> SolverConfig {
    SolverConfig {
        max_rounds: corpus.len(),
        ..SolverConfig::default()
    }
}

#[test]
fn test_initial_round() {
    let corpus = get_test_corpus();
    let round = Round::initial(&corpus);

    assert_eq!(round.number(), 1);
    assert_eq!(round.remaining_count(), corpus.len());
    assert!(round.state().is_empty());
}

#[test]
fn test_advance() {
    let corpus = get_test_corpus();
    let round = Round::initial(&corpus);

    let guess = word("crane");
    let feedback = Feedback::calculate(&guess, &word("crate")).unwrap();
    let next = round.advance(&guess, &feedback).unwrap();

    assert_eq!(next.number(), 2);
    assert!(next.remaining_count() < corpus.len());
    assert!(next.pool().contains(&word("crate")));
    assert!(!next.pool().contains(&guess));
    // the previous round is untouched
    assert_eq!(round.remaining_count(), corpus.len());
}

#[test]
fn test_advance_length_mismatch() {
    let corpus = get_test_corpus();
    let round = Round::initial(&corpus);
    let result = round.advance(&word("cranes"), &Feedback::parse("......").unwrap());
    assert!(matches!(result, Err(Error::LengthMismatch { .. })));
}

#[test]
fn test_suggest() {
    let corpus = get_test_corpus();
    let round = Round::initial(&corpus);
    let suggestions = round.suggest(&corpus, 3).unwrap();

    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].score, 1.0);
}

#[test]
fn test_suggest_on_empty_pool() {
    let corpus = get_test_corpus();
    let round = Round::initial(&corpus)
        .advance(&word("zzzzz"), &Feedback::parse("ccccc").unwrap())
        .unwrap();

    assert_eq!(round.remaining_count(), 0);
    assert!(matches!(
        round.suggest(&corpus, 3),
        Err(Error::EmptyCandidateSet)
    ));
}

#[test]
fn test_solve_for_target() {
    let corpus = get_test_corpus();
    let outcome = solve_for_target(&corpus, &unlimited(&corpus), &word("crate")).unwrap();

    assert!(outcome.solved);
    let (final_guess, final_feedback) = outcome.guesses.last().unwrap();
    assert!(final_feedback.is_win());
    assert_eq!(final_guess, &word("crate"));
}

#[test]
fn test_solve_various_targets() {
    let corpus = get_test_corpus();
    let config = unlimited(&corpus);

    for target in corpus.words() {
        let outcome = solve_for_target(&corpus, &config, target).unwrap();
        assert!(outcome.solved, "Didn't win for target: {}", target);
        let (final_guess, _) = outcome.guesses.last().unwrap();
        assert_eq!(final_guess, target);
    }
}

#[test]
fn test_solve_unknown_target_fails() {
    let corpus = get_test_corpus();
    let outcome = solve_for_target(&corpus, &unlimited(&corpus), &word("zebra")).unwrap();
    assert!(!outcome.solved);
    assert!(outcome.guesses.len() <= corpus.len());
}

#[test]
fn test_solve_respects_round_limit() {
    let corpus = load_sample_corpus(5).unwrap();
    let config = SolverConfig {
        max_rounds: 1,
        ..SolverConfig::default()
    };
    let outcome = solve_for_target(&corpus, &config, &word("zebra")).unwrap();
    assert_eq!(outcome.guesses.len(), 1);
    assert!(!outcome.solved);
}

#[test]
fn test_benchmark() {
    let corpus = load_sample_corpus(5).unwrap();
    let report = benchmark(&corpus, &unlimited(&corpus)).unwrap();

    assert_eq!(report.total(), corpus.len());
    assert!(report.failures.is_empty());
    assert!(report.average_guesses() >= 1.0);
    for pair in report.distribution.windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
}

#[test]
fn test_with_sample_corpus() {
    let corpus = load_sample_corpus(5).unwrap();
    assert!(corpus.len() > 100);

    let outcome = solve_for_target(&corpus, &unlimited(&corpus), &word("house")).unwrap();
    assert!(outcome.solved);
}
