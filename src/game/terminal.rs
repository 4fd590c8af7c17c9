//! Line-oriented terminal driver.
//!
//! Reads commands from any `BufRead`, writes screens to any `Write`. The
//! sub-prompts for take, use and talk live here; the session only ever sees
//! fully resolved commands.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use log::debug;

use super::commands::{parse_index, Command, Parsed, Prompt};
use super::dialogue::END_CONVERSATION;
use super::render;
use super::session::{GameSession, Status};
use crate::validation::validate_player_name;

pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    output: W,
    typewriter_delay: Duration,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, typewriter_delay_ms: u64) -> Self {
        Terminal {
            input,
            output,
            typewriter_delay: Duration::from_millis(typewriter_delay_ms),
        }
    }

    /// Consumes the driver, handing back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prints `text` one character at a time.
    fn typewrite(&mut self, text: &str) -> io::Result<()> {
        if self.typewriter_delay.is_zero() {
            return writeln!(self.output, "{}", text);
        }
        for c in text.chars() {
            write!(self.output, "{}", c)?;
            self.output.flush()?;
            thread::sleep(self.typewriter_delay);
        }
        writeln!(self.output)
    }

    /// Opening story. Asks for the hero's name until a valid one is given;
    /// a blank answer or end of input picks `default_name`.
    pub fn intro(&mut self, default_name: &str) -> io::Result<String> {
        self.typewrite("You open your eyes in a dimly lit room...")?;
        self.typewrite(
            "An elderly figure stands before you, his eyes filled with wisdom and concern.",
        )?;
        self.typewrite("\"Ah, you're finally awake, brave soul.\"")?;
        self.typewrite("\"Tell me, what is your name?\"")?;

        let name = loop {
            let Some(line) = self.prompt("\nEnter your name: ")? else {
                break default_name.to_string();
            };
            if line.trim().is_empty() {
                break default_name.to_string();
            }
            match validate_player_name(&line) {
                Ok(name) => break name,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };

        self.typewrite(&format!("\"Welcome, {}. I am the Village Elder.\"", name))?;
        self.typewrite(
            "\"Our land is in grave danger. An ancient dragon has awakened from its slumber.\"",
        )?;
        self.typewrite(
            "\"Only by collecting the three sacred medallions can we hope to seal it away.\"",
        )?;
        self.typewrite("\"Here, take this map. It will guide you to the medallions.\"")?;
        Ok(name)
    }

    /// Plays until the session ends. End of input saves and quits.
    pub fn run(&mut self, session: &mut GameSession) -> io::Result<Status> {
        loop {
            writeln!(self.output, "\n{}", render::render_screen(session))?;
            let Some(line) = self.prompt("> ")? else {
                debug!("input closed, quitting");
                session.apply(Command::Quit);
                break;
            };

            let command = match Command::parse(&line) {
                Parsed::Command(Command::ShowInventory) => {
                    writeln!(
                        self.output,
                        "\n{}",
                        render::render_inventory(&session.player().inventory)
                    )?;
                    Command::ShowInventory
                }
                Parsed::Command(c) => c,
                Parsed::Prompt(Prompt::TakeItem) => self.ask_take(session)?,
                Parsed::Prompt(Prompt::UseItem) => self.ask_use(session)?,
                Parsed::Prompt(Prompt::Talk) => {
                    self.converse(session)?;
                    Command::Talk
                }
            };

            if session.apply(command).is_over() {
                break;
            }
        }

        let status = session.status();
        if let Some(ending) = render::render_ending(status) {
            writeln!(self.output, "\n{}", ending)?;
        }
        self.output.flush()?;
        Ok(status)
    }

    fn ask_number(&mut self, text: &str) -> io::Result<usize> {
        let answer = self.prompt(text)?;
        Ok(answer.as_deref().and_then(parse_index).unwrap_or(0))
    }

    fn ask_take(&mut self, session: &GameSession) -> io::Result<Command> {
        let names: Vec<String> = session
            .current_location()
            .map(|l| l.items().iter().map(|i| i.name.clone()).collect())
            .unwrap_or_default();
        if names.is_empty() {
            // Let the session report that there is nothing here.
            return Ok(Command::Take(0));
        }
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        writeln!(self.output, "\n{}", render::render_numbered("Items Here", &refs))?;
        let n = self.ask_number("Enter item number to take (0 to cancel): ")?;
        Ok(Command::Take(n))
    }

    fn ask_use(&mut self, session: &GameSession) -> io::Result<Command> {
        let names = session.player().inventory.names();
        if names.is_empty() {
            return Ok(Command::UseNumbered(0));
        }
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        writeln!(self.output, "\n{}", render::render_numbered("Your Items", &refs))?;
        let n = self.ask_number("Enter item number to use (0 to cancel): ")?;
        Ok(Command::UseNumbered(n))
    }

    fn converse(&mut self, session: &mut GameSession) -> io::Result<()> {
        let Some(dialogue) = session.conversation() else {
            return Ok(());
        };
        loop {
            writeln!(self.output, "\n{}", render::render_dialogue(&dialogue))?;
            let choice = self.ask_number("Choose an option: ")?;
            if choice == END_CONVERSATION {
                break;
            }
            match session.respond(&dialogue, choice) {
                Ok(reply) => {
                    writeln!(self.output, "\n{}: \"{}\"", reply.speaker, reply.response)?;
                    if let Some(quest) = reply.granted_quest {
                        writeln!(self.output, "New Quest: {}", quest)?;
                    }
                }
                Err(e) => {
                    debug!("dialogue choice {} rejected: {}", choice, e);
                    writeln!(self.output, "Invalid choice.")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::save::SaveStore;
    use crate::world::{Location, Npc, Player, Position, WorldGrid};
    use std::io::Cursor;

    fn session(td: &tempfile::TempDir) -> GameSession {
        let mut grid = WorldGrid::empty(3, 3);
        let mut here = Location::new("Misty Lake", "A lake shrouded in eternal mist.");
        here.add_npc(Npc::new("Village Elder"));
        grid.set_location(Position::new(1, 1), here);
        grid.set_location(Position::new(1, 0), Location::new("Path", ""));
        let store = SaveStore::new(td.path(), "gamesave");
        GameSession::from_parts(Player::new("Aria", Position::new(1, 1)), grid, store)
    }

    #[test]
    fn intro_uses_default_on_blank_name() {
        let mut term = Terminal::new(Cursor::new("\n"), Vec::new(), 0);
        assert_eq!(term.intro("Hero").unwrap(), "Hero");
    }

    #[test]
    fn intro_retries_bad_names() {
        let long = "x".repeat(40);
        let input = format!("{}\nAria\n", long);
        let mut term = Terminal::new(Cursor::new(input), Vec::new(), 0);
        assert_eq!(term.intro("Hero").unwrap(), "Aria");
        let out = String::from_utf8(term.into_output()).unwrap();
        assert!(out.contains("too long"));
    }

    #[test]
    fn talk_prompt_grants_quest_then_eof_quits() {
        let td = tempfile::tempdir().unwrap();
        let mut s = session(&td);
        let mut term = Terminal::new(Cursor::new("t\n2\n0\nu\n"), Vec::new(), 0);
        let status = term.run(&mut s).unwrap();
        assert_eq!(status, Status::Quit);
        assert_eq!(s.player().position, Position::new(1, 0));
        assert_eq!(
            s.player().current_quest.as_ref().map(|q| q.name.as_str()),
            Some("The Dragon's Threat")
        );
        assert!(s.store().exists());
        let out = String::from_utf8(term.into_output()).unwrap();
        assert!(out.contains("Talking to Village Elder"));
    }

    #[test]
    fn mistyped_dialogue_choice_stays_in_the_conversation() {
        let td = tempfile::tempdir().unwrap();
        let mut s = session(&td);
        let mut term = Terminal::new(Cursor::new("t\n9\n2\n0\n"), Vec::new(), 0);
        term.run(&mut s).unwrap();
        assert_eq!(
            s.player().current_quest.as_ref().map(|q| q.name.as_str()),
            Some("The Dragon's Threat")
        );
        assert!(!s.messages().iter().any(|m| m.contains("Nothing selected")));
        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out.matches("Invalid choice.").count(), 1);
    }
}
