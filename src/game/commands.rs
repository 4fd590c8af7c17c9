//! Player input parsing.
//!
//! Accepts the classic one-letter keys (`u d l r t i q`) and the word
//! commands (`take`, `use`, `enter`, `exit`, `save`), plus a few long-form
//! aliases. Input is case-insensitive and surrounding whitespace is ignored.

use crate::world::Direction;

/// A fully resolved command the session can apply in one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Talk,
    ShowInventory,
    /// Take the location item at a 1-based index. `0` cancels.
    Take(usize),
    /// Use the inventory item at a 1-based index. `0` cancels.
    UseNumbered(usize),
    /// Use the first inventory item with this name.
    Use(String),
    Enter,
    Exit,
    Save,
    Quit,
    Unknown(String),
}

/// Commands that need more input from the player before they can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    TakeItem,
    UseItem,
    Talk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Command(Command),
    Prompt(Prompt),
}

impl Command {
    /// Parses one input line.
    pub fn parse(raw: &str) -> Parsed {
        let lower = raw.trim().to_lowercase();
        let mut tokens = lower.split_whitespace();
        let op = tokens.next().unwrap_or("");
        let rest: Vec<&str> = tokens.collect();
        let arg = rest.join(" ");

        let cmd = match op {
            "u" | "up" | "north" | "n" => Command::Move(Direction::Up),
            "d" | "down" | "south" | "s" => Command::Move(Direction::Down),
            "l" | "left" | "west" | "w" => Command::Move(Direction::Left),
            "r" | "right" | "east" | "e" => Command::Move(Direction::Right),
            "t" | "talk" => return Parsed::Prompt(Prompt::Talk),
            "i" | "inv" | "inventory" => Command::ShowInventory,
            "take" | "get" => match parse_index(&arg) {
                Some(n) => Command::Take(n),
                None if arg.is_empty() => return Parsed::Prompt(Prompt::TakeItem),
                None => Command::Unknown(raw.trim().to_string()),
            },
            "use" => match parse_index(&arg) {
                Some(n) => Command::UseNumbered(n),
                None if arg.is_empty() => return Parsed::Prompt(Prompt::UseItem),
                None => Command::Use(title_case(&arg)),
            },
            "enter" => Command::Enter,
            "exit" | "leave" => Command::Exit,
            "save" => Command::Save,
            "q" | "quit" => Command::Quit,
            _ => Command::Unknown(raw.trim().to_string()),
        };
        Parsed::Command(cmd)
    }
}

/// Parses a menu selection. Anything that is not a plain number is `None`.
pub fn parse_index(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok()
}

// Item names are stored in title case ("Health Potion").
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
