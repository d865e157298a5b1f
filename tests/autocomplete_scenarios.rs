use std::io::Write;

use autocomplete_core::learning::{normalize_fragment, LearningEngine, TrainingOptions};
use autocomplete_core::presentation::{format_suggestions, NO_MATCH};
use autocomplete_core::{rank, AutocompleteEngine, Candidate};

fn cat_car_cab() -> AutocompleteEngine {
    let mut engine = AutocompleteEngine::new();
    for w in ["cat", "car", "car", "cab"] {
        engine.train(w);
    }
    engine
}

#[test]
fn train_once_then_find_by_full_text() {
    let mut engine = AutocompleteEngine::new();
    engine.train("keyboard");
    assert_eq!(engine.find_words("keyboard"), vec![Candidate::new("keyboard")]);
}

#[test]
fn training_k_times_gives_confidence_k() {
    let mut engine = AutocompleteEngine::new();
    for k in 1..=5u64 {
        engine.train("again");
        assert_eq!(engine.find_words("again")[0].confidence, k);
    }
    engine.train("other");
    assert_eq!(engine.max_confidence(), 5);
}

#[test]
fn ca_scenario_ranks_car_first() {
    let engine = cat_car_cab();
    let found = engine.find_words("ca");

    let mut as_set: Vec<(String, u64)> =
        found.iter().map(|c| (c.word.clone(), c.confidence)).collect();
    as_set.sort();
    assert_eq!(
        as_set,
        vec![("cab".to_string(), 1), ("car".to_string(), 2), ("cat".to_string(), 1)]
    );

    let singles: Vec<&str> = found
        .iter()
        .filter(|c| c.confidence == 1)
        .map(|c| c.word.as_str())
        .collect();
    let ranked = rank(found.clone(), engine.max_confidence());
    assert_eq!(ranked[0], Candidate::with_confidence("car", 2));
    let ranked_singles: Vec<&str> = ranked[1..].iter().map(|c| c.word.as_str()).collect();
    assert_eq!(ranked_singles, singles);
}

#[test]
fn z_scenario_is_empty() {
    let engine = cat_car_cab();
    let found = engine.find_words("z");
    assert!(found.is_empty());
    assert_eq!(format_suggestions("z", &rank(found, engine.max_confidence())), NO_MATCH);
}

#[test]
fn empty_word_is_distinct() {
    let mut engine = cat_car_cab();
    engine.train("");

    let all = engine.find_words("");
    let empties: Vec<&Candidate> = all.iter().filter(|c| c.word.is_empty()).collect();
    assert_eq!(empties, vec![&Candidate::new("")]);
    assert_eq!(all.len(), 4);
}

#[test]
fn passage_training_end_to_end() {
    let mut engine = AutocompleteEngine::new();
    let learner = LearningEngine::new(TrainingOptions { ignore_empty_tokens: true });
    learner.learn(
        &mut engine,
        "The third thing that I need to tell you is that this thing does not think thoroughly.",
    );

    let ranked = engine.suggest(&normalize_fragment("Thi"), None);
    assert_eq!(
        format_suggestions("thi", &ranked),
        r#""thi" --> "thing" (2), "think" (1), "third" (1), "this" (1)"#
    );
    assert!(engine.find_words("").iter().all(|c| !c.word.is_empty()));
}

#[test]
fn training_file_lines_are_passages() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Hello world.").unwrap();
    writeln!(file, "hello there").unwrap();

    let mut engine = AutocompleteEngine::new();
    let report = LearningEngine::default()
        .learn_reader(&mut engine, std::io::BufReader::new(file.reopen().unwrap()))
        .unwrap();

    assert_eq!(report.learned, 5);
    let ranked = engine.dump();
    assert_eq!(ranked[0], Candidate::with_confidence("hello", 2));
    assert!(ranked.contains(&Candidate::new("")));
}
