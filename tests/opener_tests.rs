use wordle_minimax::opener::total_score;
use wordle_minimax::{compare, find_openers, Dictionary, LetterScore, Word};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| w(s)).collect()
}

fn score(green: usize, yellow: usize) -> LetterScore {
    LetterScore { green, yellow }
}

#[test]
fn test_compare_greens_only() {
    assert_eq!(compare(w("crane"), w("slate")), score(2, 0));
}

#[test]
fn test_compare_self_is_all_green() {
    let dictionary = Dictionary::embedded().unwrap();
    for &word in dictionary.answers() {
        assert_eq!(compare(word, word), score(5, 0));
    }
}

#[test]
fn test_compare_never_exceeds_word_length() {
    let dictionary = Dictionary::embedded().unwrap();
    let attempts: Vec<Word> = dictionary.vocabulary().iter().step_by(13).copied().collect();
    for &truth in dictionary.answers().iter().step_by(5) {
        for &attempt in &attempts {
            let s = compare(truth, attempt);
            assert!(s.green + s.yellow <= 5, "{} vs {}: {:?}", truth, attempt, s);
        }
    }
}

#[test]
fn test_compare_consumes_truth_letters() {
    // Only one 'e' is left in "creep" once the green one is used up.
    assert_eq!(compare(w("creep"), w("geese")), score(1, 1));
    assert_eq!(compare(w("geese"), w("creep")), score(1, 1));
    assert_eq!(compare(w("abbey"), w("babes")), score(2, 2));
    assert_eq!(compare(w("crane"), w("nacre")), score(1, 4));
}

#[test]
fn test_total_score_sums_pool() {
    let pool = words(&["crane", "slate"]);
    assert_eq!(total_score(&pool, w("crane")), score(7, 0));
}

#[test]
fn test_find_openers() {
    let pool = words(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ]);
    assert_eq!(find_openers(&pool), vec![w("crate")]);
    assert_eq!(total_score(&pool, w("crate")), score(23, 12));
}

#[test]
fn test_find_openers_skips_repeated_letters() {
    let pool = words(&["crane", "geese", "slate", "arena", "trace"]);
    assert_eq!(find_openers(&pool), vec![w("crane")]);

    let only_repeats = words(&["geese", "arena"]);
    assert!(find_openers(&only_repeats).is_empty());
}

#[test]
fn test_find_openers_keeps_ties_in_order() {
    // Anagrams of each other score the same against themselves plus the other.
    let pool = words(&["least", "slate"]);
    assert_eq!(total_score(&pool, w("least")), total_score(&pool, w("slate")));
    assert_eq!(find_openers(&pool), vec![w("least"), w("slate")]);
}
