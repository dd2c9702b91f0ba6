//! Line-based terminal host.
//!
//! Menus are printed with numbered options and answered one line at a time.
//! The letters of the classic prompts also work: `a`/`s`/`c` in the action
//! menu, `y`/`n` when confirming a special, and `c` to back out elsewhere.
//! `q` or end of input quits.

use std::io::{BufRead, Write};

use gozi_core::host::{
    Choice, ChoiceKind, ChoiceRequest, Chooser, RandomSource, Reporter, SeededRandom,
};
use gozi_core::output::BattleEvent;

/// Output style for narration and menus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    /// Human-readable narration
    Text,
    /// One JSON object per line
    Json,
}

/// Host that reads answers from `input` and narrates to `output`.
pub struct TerminalHost<R, W> {
    rng: SeededRandom,
    input: R,
    output: W,
    format: Format,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(seed: u64, input: R, output: W, format: Format) -> Self {
        Self {
            rng: SeededRandom::new(seed),
            input,
            output,
            format,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.output, "{line}") {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }

    /// Prints the input marker without a newline so answers follow it.
    fn write_marker(&mut self) {
        let written = write!(self.output, "> ").and_then(|()| self.output.flush());
        if let Err(err) = written {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }

    fn prompt(&mut self, request: &ChoiceRequest) {
        match self.format {
            Format::Json => match serde_json::to_string(request) {
                Ok(json) => self.write_line(&json),
                Err(err) => tracing::warn!(%err, "failed to encode request"),
            },
            Format::Text => {
                let header = match &request.kind {
                    ChoiceKind::Action {
                        actor,
                        special_ready,
                    } => {
                        let ready = if *special_ready {
                            "\nYour special is ready!"
                        } else {
                            ""
                        };
                        format!("Choose a move for {actor}!{ready}")
                    }
                    ChoiceKind::Target { ability, .. } => format!("Use {ability} on:"),
                    ChoiceKind::ConfirmSpecial {
                        special,
                        description,
                        ..
                    } => format!("{special}: {description}\nPerform your special?"),
                    ChoiceKind::Inspect => "View:".to_string(),
                };
                self.write_line(&header);
                for (i, option) in request.options.iter().enumerate() {
                    let mark = if option.available { "" } else { " [unavailable]" };
                    let line = format!("  ({}) {}{mark}", i + 1, option.label);
                    self.write_line(&line);
                }
                self.write_marker();
            }
        }
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
            Err(err) => {
                tracing::warn!(%err, "failed to read from terminal");
                None
            }
        }
    }
}

/// Maps a typed answer to a choice, or `None` if it means nothing here.
///
/// Numbers are 1-based. Out-of-range numbers still map to a pick; the engine
/// rejects them with a reason.
pub fn parse_answer(kind: &ChoiceKind, answer: &str) -> Option<Choice> {
    let choice = match (kind, answer) {
        (_, "q" | "quit") => Choice::Quit,
        (ChoiceKind::Action { .. }, "a") => Choice::Pick(0),
        (ChoiceKind::Action { .. }, "s") => Choice::Pick(1),
        (ChoiceKind::Action { .. }, "c") => Choice::Pick(2),
        (ChoiceKind::ConfirmSpecial { .. }, "y" | "yes") => Choice::Pick(0),
        (ChoiceKind::ConfirmSpecial { .. }, "n" | "no") => Choice::Pick(1),
        (_, "c" | "cancel") => Choice::Cancel,
        _ => {
            let number = answer.parse::<usize>().ok()?;
            return number.checked_sub(1).map(Choice::Pick);
        }
    };
    Some(choice)
}

impl<R: BufRead, W: Write> RandomSource for TerminalHost<R, W> {
    fn random_int(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_int(min, max)
    }
}

impl<R: BufRead, W: Write> Chooser for TerminalHost<R, W> {
    fn choose(&mut self, request: &ChoiceRequest) -> Choice {
        loop {
            self.prompt(request);
            let Some(answer) = self.read_answer() else {
                return Choice::Quit;
            };
            if let Some(choice) = parse_answer(&request.kind, &answer) {
                return choice;
            }
            self.write_line("Sorry, I didn't understand that.");
        }
    }
}

impl<R: BufRead, W: Write> Reporter for TerminalHost<R, W> {
    fn report(&mut self, event: &BattleEvent) {
        match self.format {
            Format::Text => {
                let text = event.to_string();
                self.write_line(&text);
            }
            Format::Json => match serde_json::to_string(event) {
                Ok(json) => self.write_line(&json),
                Err(err) => tracing::warn!(%err, "failed to encode event"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use gozi_core::host::ChoiceOption;

    use super::*;

    fn action_menu() -> ChoiceRequest {
        ChoiceRequest {
            kind: ChoiceKind::Action {
                actor: "Norman",
                special_ready: true,
            },
            options: vec![
                ChoiceOption::new("Attack: Sword Slash", true),
                ChoiceOption::new("Special: Blade Blitz (3/3)", true),
                ChoiceOption::new("Check stats", true),
            ],
        }
    }

    fn host(input: &str, format: Format) -> TerminalHost<Cursor<Vec<u8>>, Vec<u8>> {
        let input = Cursor::new(input.as_bytes().to_vec());
        TerminalHost::new(1, input, Vec::new(), format)
    }

    #[test]
    fn letters_map_to_action_menu_entries() {
        let kind = action_menu().kind;
        assert_eq!(parse_answer(&kind, "a"), Some(Choice::Pick(0)));
        assert_eq!(parse_answer(&kind, "s"), Some(Choice::Pick(1)));
        assert_eq!(parse_answer(&kind, "c"), Some(Choice::Pick(2)));
        assert_eq!(parse_answer(&kind, "3"), Some(Choice::Pick(2)));
    }

    #[test]
    fn c_cancels_outside_the_action_menu() {
        let kind = ChoiceKind::Inspect;
        assert_eq!(parse_answer(&kind, "c"), Some(Choice::Cancel));
        assert_eq!(parse_answer(&kind, "0"), None);
        assert_eq!(parse_answer(&kind, "x"), None);
    }

    #[test]
    fn unknown_answer_is_asked_again() {
        let mut host = host("hello\n2\n", Format::Text);
        assert_eq!(host.choose(&action_menu()), Choice::Pick(1));
        let output = String::from_utf8(host.into_output()).unwrap();
        assert!(output.contains("Sorry, I didn't understand that."));
        assert!(output.contains("Your special is ready!"));
    }

    #[test]
    fn text_menu_lists_options_then_the_input_marker() {
        let mut host = host("1\n", Format::Text);
        assert_eq!(host.choose(&action_menu()), Choice::Pick(0));
        let output = String::from_utf8(host.into_output()).unwrap();
        assert_eq!(
            output,
            "Choose a move for Norman!\nYour special is ready!\n\
             \x20 (1) Attack: Sword Slash\n\
             \x20 (2) Special: Blade Blitz (3/3)\n\
             \x20 (3) Check stats\n\
             > "
        );
    }

    #[test]
    fn end_of_input_quits() {
        let mut host = host("", Format::Text);
        assert_eq!(host.choose(&action_menu()), Choice::Quit);
    }

    #[test]
    fn json_mode_prints_one_object_per_event() {
        let mut host = host("", Format::Json);
        host.report(&BattleEvent::RoundStarted { round: 2 });
        host.report(&BattleEvent::ScoresUpdated { home: 1, away: 0 });
        let output = String::from_utf8(host.into_output()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["RoundStarted"]["round"], 2);
    }
}
