use crate::core::zone_set::{AddOutcome, TimezoneSet};
use crate::domain::model::Notice;
use crate::domain::ports::ZoneDatabase;
use crate::utils::error::{ClockError, Result};
use std::str::FromStr;

const SEARCH_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    List,
    Search(String),
    Quit,
}

impl FromStr for Command {
    type Err = ClockError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let needs_arg = |cmd: fn(String) -> Command| {
            if arg.is_empty() {
                Err(ClockError::CommandError {
                    input: line.to_string(),
                    reason: format!("'{}' needs an argument", verb),
                })
            } else {
                Ok(cmd(arg.to_string()))
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "add" | "a" => needs_arg(Command::Add),
            "remove" | "rm" | "del" => needs_arg(Command::Remove),
            "search" | "find" | "s" => needs_arg(Command::Search),
            "list" | "ls" => Ok(Command::List),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(ClockError::CommandError {
                input: String::new(),
                reason: "empty command".to_string(),
            }),
            other => Err(ClockError::CommandError {
                input: line.to_string(),
                reason: format!("unknown command '{}'", other),
            }),
        }
    }
}

/// Session state. Handlers take it by value and hand it back; nothing is global.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub title: String,
    pub zones: TimezoneSet,
    notices: Vec<Notice>,
    running: bool,
}

impl AppState {
    pub fn new(title: impl Into<String>, zones: TimezoneSet) -> Self {
        Self {
            title: title.into(),
            zones,
            notices: Vec::new(),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Queues a notice raised outside command handling, e.g. by a failing output.
    pub fn note(&mut self, notice: Notice) {
        if !self.notices.contains(&notice) {
            self.notices.push(notice);
        }
    }

    /// Notices stay on screen until the next command replaces them.
    pub fn apply<D: ZoneDatabase>(mut self, command: Command, db: &D) -> Self {
        self.notices.clear();
        match command {
            Command::Add(id) => {
                if !db.contains(&id) {
                    let err = ClockError::unknown_zone(&id);
                    tracing::warn!("Rejected add: {}", err);
                    self.notices.push(Notice::error(err.user_friendly_message()));
                    return self;
                }
                match self.zones.add(id.clone()) {
                    AddOutcome::Added => {
                        tracing::info!("Added timezone {}", id);
                        self.notices.push(Notice::info(format!("Added {}.", id)));
                    }
                    AddOutcome::AlreadyPresent => {
                        tracing::warn!("{} is already in the list", id);
                        self.notices
                            .push(Notice::warning(format!("{} is already in the list.", id)));
                    }
                }
            }
            Command::Remove(id) => {
                if self.zones.remove(&id) {
                    tracing::info!("Removed timezone {}", id);
                    self.notices.push(Notice::info(format!("Removed {}.", id)));
                } else {
                    tracing::debug!("Ignoring remove of absent timezone {}", id);
                }
            }
            Command::List => {
                let listing = if self.zones.is_empty() {
                    "No timezones selected.".to_string()
                } else {
                    format!("Selected: {}", self.zones.list().join(", "))
                };
                self.notices.push(Notice::info(listing));
            }
            Command::Search(query) => {
                let hits = search_zones(db, &query, SEARCH_LIMIT);
                let message = if hits.is_empty() {
                    format!("No timezone matches '{}'.", query)
                } else {
                    format!("Matches for '{}': {}", query, hits.join(", "))
                };
                self.notices.push(Notice::info(message));
            }
            Command::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
        }
        self
    }

    /// Parses one line of user input and applies it. Blank lines change nothing;
    /// unparseable ones leave an error notice.
    pub fn handle_line<D: ZoneDatabase>(mut self, line: &str, db: &D) -> Self {
        if line.trim().is_empty() {
            return self;
        }
        match line.parse::<Command>() {
            Ok(command) => self.apply(command, db),
            Err(e) => {
                tracing::debug!("Bad command: {}", e);
                self.notices.clear();
                self.notices.push(Notice::error(format!(
                    "{} ({})",
                    e.user_friendly_message(),
                    e.recovery_suggestion()
                )));
                self
            }
        }
    }
}

/// Case-insensitive substring search; spaces and underscores are interchangeable.
pub fn search_zones<D: ZoneDatabase>(db: &D, query: &str, limit: usize) -> Vec<&'static str> {
    let needle = normalize(query);
    db.zone_ids()
        .into_iter()
        .filter(|id| normalize(id).contains(&needle))
        .take(limit)
        .collect()
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(' ', "_")
}
