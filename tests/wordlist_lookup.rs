use dotmap::{Wordlist, NOT_AVAILABLE, WORDLIST_LEN};
use quickcheck::quickcheck;

quickcheck! {
    fn index_of_inverts_word_at(idx: u16) -> bool {
        let list = Wordlist::english();
        let idx = idx % WORDLIST_LEN as u16;
        let word = list.word_at(idx).unwrap();
        list.index_of(word) == Some(idx)
    }
}

quickcheck! {
    fn lookup_ignores_case(idx: u16) -> bool {
        let list = Wordlist::english();
        let idx = idx % WORDLIST_LEN as u16;
        let upper = list.word_at(idx).unwrap().to_uppercase();
        list.index_of(&upper) == Some(idx)
    }
}

#[test]
fn every_word_resolves_to_its_position() {
    let list = Wordlist::english();
    assert_eq!(list.len(), 2048);
    for (i, word) in list.iter().enumerate() {
        assert_eq!(list.index_of(word), Some(i as u16));
        assert_eq!(list.word_at(i), Some(word));
    }
}

#[test]
fn canonical_endpoints() {
    let list = Wordlist::english();
    assert_eq!(list.word_at(0), Some("abandon"));
    assert_eq!(list.word_at(1), Some("ability"));
    assert_eq!(list.word_at(2047), Some("zoo"));
}

#[test]
fn misses_return_sentinels() {
    let list = Wordlist::english();
    assert_eq!(list.index_of("notaword"), None);
    assert_eq!(list.index_of(""), None);
    assert_eq!(list.index_of("aban"), None);
    assert_eq!(list.index_of(" zoo"), None);
    assert_eq!(list.word_at(2048), None);
    assert_eq!(list.word_at(-1), None);
    assert_eq!(list.display_word(2048), NOT_AVAILABLE);
    assert_eq!(list.display_word(-1i64), "N/A");
}
