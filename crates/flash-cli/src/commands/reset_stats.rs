use std::io::{BufRead, Write};

use crate::error::SessionError;
use crate::session::Session;

pub fn handle<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), SessionError> {
    session.store.reset_all_errors();
    session.console.say("Card statistics have been reset.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use flash_core::Card;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::session::tests::{messages, session_with};

    #[test]
    fn clears_every_counter() {
        let mut session = session_with("");
        session.store.add(Card::with_errors("dog", "animal", 4));
        session.store.add(Card::with_errors("tree", "plant", 1));

        handle(&mut session).unwrap();

        assert_eq!(session.store.max_error_count(), 0);
        assert_eq!(messages(&session), vec!["Card statistics have been reset."]);
    }
}
