use std::io::{BufRead, Write};

use flash_core::Verdict;

use crate::error::SessionError;
use crate::session::Session;

pub fn handle<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), SessionError> {
    let Some(reply) = session.console.prompt("How many times to ask?")? else {
        return Ok(());
    };
    let count = parse_count(&reply, session.options.max_questions)?;

    for _ in 0..count {
        let term = session.store.next_quiz_term()?.to_owned();
        session.store.record_quiz_access(&term);

        let Some(answer) = session
            .console
            .prompt(format!("Print the definition of \"{term}\":"))?
        else {
            return Ok(());
        };
        let verdict = session.store.grade(&term, &answer)?;
        session.console.say(describe(&verdict))?;
    }
    Ok(())
}

fn parse_count(reply: &str, max: u32) -> Result<u32, SessionError> {
    let requested = reply
        .trim()
        .parse::<u32>()
        .map_err(|_| SessionError::InvalidCount(reply.to_owned()))?;
    if requested > max {
        return Err(SessionError::TooManyQuestions { requested, max });
    }
    Ok(requested)
}

fn describe(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Correct => String::from("Correct!"),
        Verdict::DefinitionOfOther {
            expected,
            other_term,
        } => format!(
            "Wrong. The right answer is \"{expected}\", but your definition is correct for \"{other_term}\"."
        ),
        Verdict::Wrong { expected } => format!("Wrong. The right answer is \"{expected}\"."),
    }
}
