use super::*;
use crate::console::Console;
use crate::gameplay::Move;

/// Interactive seat fed from the console.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    const PROMPT: &'static str = "Rock, paper, scissors?";
    const INVALID: &'static str = "Please enter a valid choice: ";
}

impl Player for Human {
    /// Keeps asking until one of the three move names comes back, in any
    /// case. There is no attempt limit.
    fn decide(&mut self, console: &mut Console) -> anyhow::Result<Move> {
        loop {
            let reply = console.ask(Self::PROMPT)?;
            match Move::try_from(reply.as_str()) {
                Ok(choice) => {
                    console.say(format_args!("You played {}.", choice))?;
                    return Ok(choice);
                }
                Err(e) => {
                    log::debug!("{}", e);
                    console.say(Self::INVALID)?;
                }
            }
        }
    }
    fn notify(&mut self, _: Move, _: Move) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(replies: &str) -> (anyhow::Result<Move>, String) {
        let ref mut input = Cursor::new(replies.to_string());
        let ref mut output = Vec::new();
        let choice = Human.decide(&mut Console::new(input, output));
        (choice, String::from_utf8_lossy(output).into_owned())
    }

    #[test]
    fn accepts_any_case() {
        assert_eq!(transcript("PaPeR\n").0.unwrap(), Move::Paper);
        assert_eq!(transcript("scissors\n").0.unwrap(), Move::Scissors);
    }

    #[test]
    fn reprompts_until_valid() {
        let (choice, output) = transcript("lizard\n\nspock\nrock\n");
        assert_eq!(choice.unwrap(), Move::Rock);
        assert_eq!(output.matches("Rock, paper, scissors?").count(), 4);
        assert_eq!(output.matches("Please enter a valid choice: ").count(), 3);
        assert!(output.ends_with("You played rock.\n"));
    }

    #[test]
    fn padded_reply_reprompts() {
        let (choice, output) = transcript(" rock\nrock\n");
        assert_eq!(choice.unwrap(), Move::Rock);
        assert_eq!(output.matches("Rock, paper, scissors?").count(), 2);
        assert_eq!(output.matches("Please enter a valid choice: ").count(), 1);
    }

    #[test]
    fn closed_input_is_an_error() {
        assert!(transcript("nope\n").0.is_err());
    }
}
