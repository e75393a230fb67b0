//! Integration tests for the full card loop: store -> presenter -> session.

use std::fs;
use std::path::Path;

use flashy::adapter::{Presenter, Screen};
use flashy::core::{CardSession, SessionError};
use flashy::store::{read_words, StoreConfig, StoreError, WordStore};
use flashy::types::{
    Face, LanguagePair, TextColor, UserIntent, Word, WordList, FLIP_DELAY_MS, TICK_MS,
};

const FIVE_WORDS: &str = "French,English\n\
partie,part\n\
histoire,history\n\
chercher,search\n\
seulement,only\n\
police,police\n";

fn store_in(dir: &Path) -> WordStore {
    WordStore::new(StoreConfig::in_dir(dir))
}

fn progress_rows(store: &WordStore) -> WordList {
    let file = fs::File::open(&store.config().progress_path).unwrap();
    read_words(file, &LanguagePair::default(), &store.config().progress_path).unwrap()
}

fn card(screen: &Screen) -> &flashy::adapter::DisplayInstruction {
    match screen {
        Screen::Card(instruction) => instruction,
        Screen::Finished => panic!("expected a card, got the finished screen"),
    }
}

#[test]
fn test_single_word_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(&store.config().original_path, "French,English\nle chat,the cat\n").unwrap();

    let mut presenter = Presenter::start(store, 12345).unwrap();

    // Front.
    let front = card(presenter.screen()).clone();
    assert_eq!(front.label, "French");
    assert_eq!(front.word, "le chat");
    assert_eq!(front.text_color, TextColor::Black);
    assert_eq!(front.background, Face::Front);

    // Wait for the deferred flip.
    let mut elapsed = 0;
    while elapsed < FLIP_DELAY_MS {
        presenter.tick(TICK_MS);
        elapsed += TICK_MS;
    }
    let back = card(presenter.screen()).clone();
    assert_eq!(back.label, "English");
    assert_eq!(back.word, "the cat");
    assert_eq!(back.text_color, TextColor::White);
    assert_eq!(back.background, Face::Back);

    // Know -> list empty -> finished.
    presenter.handle(UserIntent::Know);
    assert!(presenter.words().is_empty());
    assert!(presenter.screen().is_finished());

    // Any further draw is exhausted.
    let mut session = presenter.session().clone();
    assert_eq!(
        session.advance(presenter.words().as_slice()),
        Err(SessionError::ListExhausted)
    );
}

#[test]
fn test_first_run_reads_original_then_saves_progress() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(&store.config().original_path, FIVE_WORDS).unwrap();
    assert!(!store.config().progress_path.exists());

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 5);

    let mut presenter = Presenter::new(store.clone(), loaded.clone(), CardSession::new(7));
    let current = presenter.session().current_word().cloned().unwrap();
    presenter.handle(UserIntent::Know);

    let saved = progress_rows(&store);
    assert_eq!(saved.len(), 4);
    assert!(!saved.contains(&current));
    assert_eq!(saved, *presenter.words());

    // Original is never written.
    assert_eq!(fs::read_to_string(&store.config().original_path).unwrap(), FIVE_WORDS);
}

#[test]
fn test_progress_is_authoritative_on_next_start() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(&store.config().original_path, FIVE_WORDS).unwrap();

    let mut first = Presenter::start(store.clone(), 1).unwrap();
    first.handle(UserIntent::Know);
    first.handle(UserIntent::Know);
    let remaining = first.words().clone();
    drop(first);

    let second = Presenter::start(store, 2).unwrap();
    assert_eq!(*second.words(), remaining);
    assert_eq!(second.words().len(), 3);
}

#[test]
fn test_mark_known_removes_exactly_the_current_word() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let mut words = WordList::from(vec![
        Word::new("a", "1"),
        Word::new("b", "2"),
        Word::new("c", "3"),
    ]);
    let mut session = CardSession::new(99);

    while !words.is_empty() {
        let before = words.len();
        session.advance(words.as_slice()).unwrap();
        let known = session.mark_known().unwrap();

        let removed = store.remove_and_persist(&mut words, &known).unwrap();
        assert_eq!(removed, known);
        assert_eq!(words.len(), before - 1);
        assert!(!words.contains(&known));
    }
    assert_eq!(session.advance(words.as_slice()), Err(SessionError::ListExhausted));
}

#[test]
fn test_dont_know_never_shrinks_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(&store.config().original_path, FIVE_WORDS).unwrap();

    let mut presenter = Presenter::start(store.clone(), 3).unwrap();
    for _ in 0..20 {
        presenter.handle(UserIntent::DontKnow);
        let shown = card(presenter.screen());
        assert_eq!(shown.background, Face::Front);
        assert!(presenter
            .words()
            .iter()
            .any(|w| w.source_text == shown.word));
    }
    assert_eq!(presenter.words().len(), 5);
    assert!(!store.config().progress_path.exists());
}

#[test]
fn test_dont_know_resets_flip_timer() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(&store.config().original_path, FIVE_WORDS).unwrap();

    let mut presenter = Presenter::start(store, 3).unwrap();
    assert!(!presenter.tick(FLIP_DELAY_MS - TICK_MS));
    presenter.handle(UserIntent::DontKnow);

    // The first card's timer would have fired here.
    assert!(!presenter.tick(TICK_MS));
    assert_eq!(card(presenter.screen()).background, Face::Front);

    assert!(presenter.tick(FLIP_DELAY_MS));
    assert_eq!(card(presenter.screen()).background, Face::Back);
}

#[test]
fn test_persistence_failure_keeps_session_going() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the progress file's directory should be.
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "not a directory").unwrap();

    let config = StoreConfig {
        progress_path: blocker.join("words_to_learn.csv"),
        original_path: dir.path().join("french_words.csv"),
        languages: LanguagePair::default(),
    };
    let words =
        read_words(FIVE_WORDS.as_bytes(), &config.languages, &config.original_path).unwrap();

    let store = WordStore::new(config);
    let mut presenter = Presenter::new(store, words, CardSession::new(11));
    assert!(presenter.notice().is_none());

    presenter.handle(UserIntent::Know);
    assert_eq!(presenter.words().len(), 4);
    assert!(!presenter.screen().is_finished());
    assert!(presenter.notice().unwrap().contains("Progress not saved"));

    presenter.handle(UserIntent::Know);
    assert_eq!(presenter.words().len(), 3);
}

#[test]
fn test_notice_clears_after_next_successful_save() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(&store.config().original_path, FIVE_WORDS).unwrap();
    let tmp = store.config().progress_tmp_path();
    fs::create_dir(&tmp).unwrap();

    let mut presenter = Presenter::start(store, 13).unwrap();
    presenter.handle(UserIntent::Know);
    assert!(presenter.notice().is_some());
    assert!(!dir.path().join("words_to_learn.csv").exists());

    fs::remove_dir(&tmp).unwrap();
    presenter.handle(UserIntent::Know);
    assert!(presenter.notice().is_none());
    assert_eq!(presenter.words().len(), 3);

    let saved = progress_rows(&WordStore::new(StoreConfig::in_dir(dir.path())));
    assert_eq!(&saved, presenter.words());
}

#[test]
fn test_persistence_error_variant() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "x").unwrap();

    let store = WordStore::new(StoreConfig::in_dir(&blocker));
    let mut words = WordList::from(vec![Word::new("a", "b"), Word::new("c", "d")]);

    let err = store
        .remove_and_persist(&mut words, &Word::new("a", "b"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Persistence { .. }), "{err:?}");
    assert_eq!(words.as_slice(), &[Word::new("c", "d")]);
}

#[test]
fn test_missing_data_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());

    match Presenter::start(store, 1) {
        Err(StoreError::DataUnavailable { .. }) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected DataUnavailable"),
    }
}

#[test]
fn test_malformed_row_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(
        &store.config().original_path,
        "French,English\npartie,part\nhistoire\n",
    )
    .unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::MalformedRow { line: 3, .. }), "{err:?}");
}

#[test]
fn test_all_known_progress_starts_finished() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    fs::write(&store.config().original_path, FIVE_WORDS).unwrap();
    fs::write(&store.config().progress_path, "French,English\n").unwrap();

    let presenter = Presenter::start(store, 1).unwrap();
    assert!(presenter.words().is_empty());
    assert!(presenter.screen().is_finished());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(dir.path());
    let words = WordList::from(vec![
        Word::new("oui, merci", "yes, thanks"),
        Word::new("l'été", "the \"summer\""),
        Word::new("oui, merci", "yes, thanks"),
    ]);

    store.save(&words).unwrap();
    assert_eq!(store.load().unwrap(), words);
}
