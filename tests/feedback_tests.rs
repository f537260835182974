use std::collections::{BTreeMap, BTreeSet};

use wordle_minimax::{Dictionary, Feedback, Word};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[test]
fn test_all_correct() {
    let (is_correct, feedback) = Feedback::EMPTY.score(w("crane"), w("crane"));
    assert!(is_correct);
    assert_eq!(feedback.green(), [Some('c'), Some('r'), Some('a'), Some('n'), Some('e')]);
    assert!(feedback.yellow().is_empty());
    assert!(feedback.black().is_empty());
}

#[test]
fn test_all_absent() {
    let (is_correct, feedback) = Feedback::EMPTY.score(w("dream"), w("quick"));
    assert!(!is_correct);
    assert_eq!(feedback.green(), [None; 5]);
    assert!(feedback.yellow().is_empty());
    let black: BTreeSet<char> = "quick".chars().collect();
    assert_eq!(feedback.black(), black);
}

#[test]
fn test_mixed_feedback() {
    let (is_correct, feedback) = Feedback::EMPTY.score(w("crane"), w("arena"));
    assert!(!is_correct);
    assert_eq!(feedback.green(), [None, Some('r'), None, Some('n'), None]);

    let mut yellow = BTreeMap::new();
    yellow.insert('a', BTreeSet::from([0, 4]));
    yellow.insert('e', BTreeSet::from([2]));
    assert_eq!(feedback.yellow(), yellow);
    assert!(feedback.black().is_empty());
}

#[test]
fn test_mixed_feedback_constrains_candidates() {
    let (_, feedback) = Feedback::EMPTY.score(w("crane"), w("arena"));
    assert!(feedback.matches(w("crane")));
    // 'a' was seen at position 0, so a word with 'a' there is out.
    assert!(!feedback.matches(w("arena")));
}

#[test]
fn test_duplicate_letters_all_marked_yellow() {
    // Every misplaced copy of a present letter is yellow, however many copies
    // the truth actually has.
    let (_, feedback) = Feedback::EMPTY.score(w("crane"), w("eerie"));
    assert_eq!(feedback.green(), [None, None, None, None, Some('e')]);

    let mut yellow = BTreeMap::new();
    yellow.insert('e', BTreeSet::from([0, 1]));
    yellow.insert('r', BTreeSet::from([2]));
    assert_eq!(feedback.yellow(), yellow);
    assert_eq!(feedback.black(), BTreeSet::from(['i']));
    assert!(feedback.matches(w("crane")));
}

#[test]
fn test_score_leaves_prior_untouched() {
    let (_, prior) = Feedback::EMPTY.score(w("crane"), w("slate"));
    let snapshot = prior;
    let (_, next) = prior.score(w("crane"), w("brick"));

    assert_eq!(prior, snapshot);
    assert_ne!(next, prior);
    assert!(next.refines(&prior));
    assert!(!prior.refines(&next));
}

#[test]
fn test_matches_rejects_each_kind_of_conflict() {
    let (_, feedback) = Feedback::EMPTY.score(w("crane"), w("slate"));
    assert!(feedback.matches(w("crane")));
    // 's' is black
    assert!(!feedback.matches(w("scare")));
    // green 'e' missing at position 4
    assert!(!feedback.matches(w("cramp")));
    assert!(feedback.matches(w("crave")));

    let (_, feedback) = Feedback::EMPTY.score(w("crane"), w("react"));
    // 'r' is yellow: it must be present, but not at position 0
    assert!(feedback.matches(w("xcaer")));
    assert!(!feedback.matches(w("xcaxe")));
    assert!(!feedback.matches(w("rcaxe")));
    assert!(feedback.matches(w("crane")));
}

#[test]
fn test_empty_feedback_matches_everything() {
    let dictionary = Dictionary::embedded().unwrap();
    assert!(Feedback::EMPTY.is_empty());
    assert_eq!(
        Feedback::EMPTY.filter(dictionary.vocabulary()),
        dictionary.vocabulary()
    );
}

#[test]
fn test_filter_keeps_order() {
    let words: Vec<Word> = ["trace", "crane", "slate", "crate", "brace"]
        .iter()
        .map(|s| w(s))
        .collect();
    let (_, feedback) = Feedback::EMPTY.score(w("crate"), w("grace"));
    assert_eq!(feedback.filter(&words), vec![w("crane"), w("crate")]);
}

#[test]
fn test_truth_always_matches_its_own_feedback() {
    let dictionary = Dictionary::embedded().unwrap();
    let attempts: Vec<Word> = dictionary.vocabulary().iter().step_by(7).copied().collect();

    for &truth in dictionary.answers() {
        for &attempt in &attempts {
            let (_, feedback) = Feedback::EMPTY.score(truth, attempt);
            assert!(
                feedback.matches(truth),
                "{} does not match its feedback for {}: {}",
                truth,
                attempt,
                feedback
            );
        }
    }
}

#[test]
fn test_accumulated_feedback_stays_consistent() {
    let dictionary = Dictionary::embedded().unwrap();
    let attempts = [w("aesir"), w("cloth"), w("dumpy"), w("eerie"), w("fuzzy")];

    for &truth in dictionary.answers().iter().step_by(11) {
        let mut feedback = Feedback::EMPTY;
        for &attempt in &attempts {
            let (_, next) = feedback.score(truth, attempt);
            assert!(next.refines(&feedback));
            assert!(next.matches(truth));
            feedback = next;
        }
    }
}
