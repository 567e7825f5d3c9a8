use dotmap::{to_bits, to_index, Command, SelectionSession, MAX_INDEX};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            let mut session = SelectionSession::new();
            for line in text.lines() {
                if let Ok(command) = line.parse::<Command>() {
                    if !command.execute(&mut session) {
                        break;
                    }
                }
                let index = session.word_index();
                assert!(index <= MAX_INDEX);
                assert_eq!(to_index(&to_bits(index)), index);
                assert_eq!(session.binary_string().len(), 11);
            }
        });
    }
}
