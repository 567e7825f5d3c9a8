use dotmap::{Action, SelectionSession, NOT_AVAILABLE};

#[test]
fn fresh_session_shows_first_word() {
    let session = SelectionSession::new();
    assert_eq!(session.bits().as_array(), &[false; 11]);
    assert_eq!(session.word_index(), 0);
    assert_eq!(session.word(), Some("abandon"));
    assert_eq!(session.input_word(), "");
    assert!(session.committed_words().is_empty());
}

#[test]
fn typing_last_word_sets_every_bit() {
    let mut session = SelectionSession::new();
    assert_eq!(session.set_input_word("zoo"), Some(2047));
    assert_eq!(session.bits().as_array(), &[true; 11]);
    assert_eq!(session.binary_string(), "11111111111");
}

#[test]
fn toggling_low_bit_selects_second_word() {
    let mut session = SelectionSession::new();
    session.toggle_bit(10);
    let mut expected = [false; 11];
    expected[10] = true;
    assert_eq!(session.bits().as_array(), &expected);
    assert_eq!(session.word_index(), 1);
    assert_eq!(session.word(), Some("ability"));
}

#[test]
fn commit_then_remove_empties_list() {
    let mut session = SelectionSession::new();
    session.set_index(5);
    let word = session.word().unwrap();
    assert_eq!(session.commit(), word);
    assert_eq!(session.committed_words(), [word]);
    assert_eq!(session.remove_at(0).as_deref(), Some(word));
    assert!(session.committed_words().is_empty());
}

#[test]
fn unmatched_word_keeps_previous_bits() {
    let mut session = SelectionSession::new();
    session.toggle_bit(3);
    let before = *session.bits();
    let index = session.word_index();
    assert_eq!(session.set_input_word("xyz123"), None);
    assert_eq!(session.input_word(), "xyz123");
    assert_eq!(*session.bits(), before);
    assert_eq!(session.word_index(), index);
}

#[test]
fn input_is_lowercased() {
    let mut session = SelectionSession::new();
    assert_eq!(session.set_input_word("ABLE"), Some(2));
    assert_eq!(session.input_word(), "able");
}

#[test]
fn toggling_leaves_typed_text_alone() {
    let mut session = SelectionSession::new();
    session.set_input_word("zoo");
    session.toggle_bit(0);
    assert_eq!(session.input_word(), "zoo");
    assert_eq!(session.word_index(), 1023);
}

#[test]
fn clear_keeps_committed_words() {
    let mut session = SelectionSession::new();
    session.set_input_word("zoo");
    session.commit();
    session.clear();
    assert_eq!(session.word_index(), 0);
    assert_eq!(session.input_word(), "");
    assert_eq!(session.committed_words(), ["zoo"]);
}

#[test]
fn remove_preserves_order_and_ignores_bad_rows() {
    let mut session = SelectionSession::new();
    for word in ["abandon", "ability", "able"] {
        session.set_input_word(word);
        session.commit();
    }
    assert_eq!(session.remove_at(7), None);
    assert_eq!(session.committed_words().len(), 3);
    assert_eq!(session.remove_at(1).as_deref(), Some("ability"));
    assert_eq!(session.committed_words(), ["abandon", "able"]);
}

#[test]
fn commit_allows_duplicates() {
    let mut session = SelectionSession::new();
    session.apply(Action::Commit);
    session.apply(Action::Commit);
    assert_eq!(session.committed_words(), ["abandon", "abandon"]);
    assert_ne!(session.committed_words()[0], NOT_AVAILABLE);
}

#[test]
fn view_serializes_to_json() {
    let mut session = SelectionSession::new();
    session.set_input_word("zoo");
    session.commit();
    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["word_index"], 2047);
    assert_eq!(json["word"], "zoo");
    assert_eq!(json["binary"], "11111111111");
    assert_eq!(json["committed_words"][0], "zoo");
}
