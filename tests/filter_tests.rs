use wordle_assist::{
    filter, load_sample_corpus, rank, ConstraintState, Error, Feedback, FrequencyCorpus, Word,
};

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn scenario_corpus() -> FrequencyCorpus {
    FrequencyCorpus::from_pairs(5, [("crate", 100), ("crane", 90), ("trace", 80)]).unwrap()
}

fn is_subset(inner: &[Word], outer: &[Word]) -> bool {
    inner.iter().all(|w| outer.contains(w))
}

/// Guess sequences played against real targets from the sample corpus.
fn games() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("crane", vec!["slate", "trace", "crate"]),
        ("toast", vec!["arise", "roast", "beast"]),
        ("geese", vec!["sassy", "those", "these"]),
        ("there", vec!["other", "three", "where"]),
        ("poses", vec!["sales", "posts", "house"]),
    ]
}

#[test]
fn test_monotonic_narrowing() {
    let corpus = load_sample_corpus(5).unwrap();
    let pool = corpus.words();

    for (target, guesses) in games() {
        let target = word(target);
        let mut state = ConstraintState::new(5);
        for guess in guesses {
            let guess = word(guess);
            let feedback = Feedback::calculate(&guess, &target).unwrap();
            let next = state.apply_feedback(&guess, &feedback).unwrap();

            let before = filter(pool, &state);
            let after = filter(pool, &next);
            assert!(
                is_subset(&after, &before),
                "'{}' against '{}' widened the pool",
                guess,
                target
            );
            state = next;
        }
    }
}

#[test]
fn test_min_count_monotonic_across_rounds() {
    for (target, guesses) in games() {
        let target = word(target);
        let mut state = ConstraintState::new(5);
        for guess in guesses {
            let guess = word(guess);
            let feedback = Feedback::calculate(&guess, &target).unwrap();
            let next = state.apply_feedback(&guess, &feedback).unwrap();
            for (c, &count) in state.min_count() {
                assert!(next.min_count_of(*c) >= count);
            }
            state = next;
        }
    }
}

#[test]
fn test_true_solution_never_discarded() {
    let corpus = load_sample_corpus(5).unwrap();

    for (target, guesses) in games() {
        let target = word(target);
        let mut state = ConstraintState::new(5);
        let mut pool = vec![target.clone()];
        pool.extend(corpus.words().iter().cloned());
        for guess in guesses {
            let guess = word(guess);
            let feedback = Feedback::calculate(&guess, &target).unwrap();
            state = state.apply_feedback(&guess, &feedback).unwrap();
            pool = filter(&pool, &state);
            assert!(pool.contains(&target), "lost '{}' after '{}'", target, guess);
        }
    }
}

#[test]
fn test_refiltering_previous_pool_matches_full_corpus() {
    let corpus = load_sample_corpus(5).unwrap();
    let target = word("house");
    let mut state = ConstraintState::new(5);
    let mut pool = corpus.words().to_vec();

    for guess in ["arise", "those", "mouse"] {
        let guess = word(guess);
        let feedback = Feedback::calculate(&guess, &target).unwrap();
        state = state.apply_feedback(&guess, &feedback).unwrap();
        pool = filter(&pool, &state);
        assert_eq!(pool, filter(corpus.words(), &state));
    }
}

#[test]
fn test_idempotent_refiltering() {
    let corpus = load_sample_corpus(5).unwrap();
    let state = ConstraintState::new(5)
        .apply_feedback(&word("arise"), &Feedback::parse("....c").unwrap())
        .unwrap();

    let once = filter(corpus.words(), &state);
    let twice = filter(&once, &state);
    assert!(!once.is_empty());
    assert_eq!(once, twice);
}

#[test]
fn test_scenario_position_two_absent() {
    // a is gray at index 2 and not confirmed anywhere else, so a is ruled
    // out everywhere; every word in this corpus has an a at index 2
    let corpus = scenario_corpus();
    let state = ConstraintState::new(5)
        .apply_feedback(&word("crate"), &Feedback::parse("cc.cc").unwrap())
        .unwrap();

    let pool = filter(corpus.words(), &state);
    assert!(pool.is_empty());
    assert!(matches!(
        rank(&pool, &corpus, 3),
        Err(Error::EmptyCandidateSet)
    ));
}

#[test]
fn test_scenario_position_three_absent() {
    let corpus = scenario_corpus();
    let state = ConstraintState::new(5)
        .apply_feedback(&word("crate"), &Feedback::parse("ccc.c").unwrap())
        .unwrap();

    assert_eq!(filter(corpus.words(), &state), vec![word("crane")]);
}

#[test]
fn test_contradictory_feedback_yields_empty_pool() {
    let corpus = load_sample_corpus(5).unwrap();
    let state = ConstraintState::new(5)
        .apply_feedback(&word("geese"), &Feedback::parse(".xc..").unwrap())
        .unwrap();
    let state = state
        .apply_feedback(&word("there"), &Feedback::parse(".....").unwrap())
        .unwrap();
    // e must appear twice but is now only allowed at index 2
    assert_eq!(state.min_count_of('e'), 2);
    for i in [0, 1, 3, 4] {
        assert!(state.forbidden()[i].contains('e'));
    }

    let pool = filter(corpus.words(), &state);
    assert!(pool.is_empty());
    assert!(matches!(
        rank(&pool, &corpus, 1),
        Err(Error::EmptyCandidateSet)
    ));
}
