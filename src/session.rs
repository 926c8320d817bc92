//! Interactive check-in session
//!
//! Reads one command per line and keeps a `HistoryStore` for as long as the
//! loop runs. Nothing is persisted.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::consts::HISTORY_CAPACITY;
use crate::core::{City, CoachPersona, Habit, Mood};
use crate::dashboard::{CheckIn, Credentials, Services, run_trigger};
use crate::error::AppError;
use crate::history::HistoryStore;
use crate::output::{habits_table, history_table, metrics_table, render_outcome, week_table};

const HELP: &str = "\
Commands:
  check <habit>      mark a habit done (see `list`)
  uncheck <habit>    mark a habit not done
  mood <1-10>        set today's mood
  city <name>        set the weather city
  persona <name>     strict, warm or playful
  status             show today's check-in
  report             record today and generate a coach report
  week               show the last 7 days
  history [n]        show the last n recorded reports (default 30)
  list               show habits, cities and personas
  help               show this help
  quit               end the session";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionCommand {
    Check(Habit),
    Uncheck(Habit),
    Mood(Mood),
    City(City),
    Persona(CoachPersona),
    Status,
    Report,
    Week,
    History(usize),
    List,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line; blank lines are `None`
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match word.to_lowercase().as_str() {
            "check" | "done" => SessionCommand::Check(rest.parse()?),
            "uncheck" | "undo" => SessionCommand::Uncheck(rest.parse()?),
            "mood" => SessionCommand::Mood(rest.parse()?),
            "city" => SessionCommand::City(rest.parse()?),
            "persona" | "coach" => SessionCommand::Persona(rest.parse()?),
            "status" => SessionCommand::Status,
            "report" | "generate" => SessionCommand::Report,
            "week" => SessionCommand::Week,
            "history" => {
                let n = if rest.is_empty() {
                    HISTORY_CAPACITY
                } else {
                    rest.parse().map_err(|_| AppError::UnknownCommand {
                        input: line.to_string(),
                    })?
                };
                SessionCommand::History(n)
            }
            "list" => SessionCommand::List,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => {
                return Err(AppError::UnknownCommand {
                    input: word.to_string(),
                });
            }
        };
        Ok(Some(command))
    }
}

pub(crate) struct Session<'a> {
    pub(crate) check_in: CheckIn,
    pub(crate) history: HistoryStore,
    credentials: Credentials,
    services: Services<'a>,
    today: Box<dyn Fn() -> NaiveDate + 'a>,
    json: bool,
    use_color: bool,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        check_in: CheckIn,
        credentials: Credentials,
        services: Services<'a>,
        today: Box<dyn Fn() -> NaiveDate + 'a>,
    ) -> Self {
        Self {
            check_in,
            history: HistoryStore::with_capacity(HISTORY_CAPACITY),
            credentials,
            services,
            today,
            json: false,
            use_color: false,
        }
    }

    pub(crate) fn with_output(mut self, json: bool, use_color: bool) -> Self {
        self.json = json;
        self.use_color = use_color;
        self
    }

    /// Run until `quit` or end of input
    pub(crate) fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "habitcoach session. Type `help` for commands.")?;
        for line in input.lines() {
            let line = line?;
            match SessionCommand::parse(&line) {
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(command)) => self.apply(command, out)?,
                Ok(None) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        writeln!(out, "Session ended. {} report(s) recorded.", self.history.len())
    }

    fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> io::Result<()> {
        let use_color = self.use_color;
        match command {
            SessionCommand::Check(habit) => {
                self.check_in.habits.set(habit, true);
                writeln!(out, "[x] {habit}")
            }
            SessionCommand::Uncheck(habit) => {
                self.check_in.habits.set(habit, false);
                writeln!(out, "[ ] {habit}")
            }
            SessionCommand::Mood(mood) => {
                self.check_in.mood = mood;
                writeln!(out, "Mood: {mood}/10")
            }
            SessionCommand::City(city) => {
                self.check_in.city = city;
                writeln!(out, "City: {city}")
            }
            SessionCommand::Persona(persona) => {
                self.check_in.persona = persona;
                writeln!(out, "Coach: {}", persona.title())
            }
            SessionCommand::Status => {
                writeln!(out, "{}", habits_table(&self.check_in.habits, use_color))?;
                writeln!(
                    out,
                    "{}",
                    metrics_table(&self.check_in.habits, self.check_in.mood, use_color)
                )?;
                writeln!(
                    out,
                    "City: {} | Coach: {}",
                    self.check_in.city,
                    self.check_in.persona.title()
                )
            }
            SessionCommand::Report => {
                let outcome = run_trigger(
                    &self.check_in,
                    (self.today)(),
                    &self.credentials,
                    &self.services,
                    &mut self.history,
                );
                if self.json {
                    writeln!(out, "{}", crate::output::outcome_json(&outcome))
                } else {
                    write!(out, "{}", render_outcome(&outcome, use_color))
                }
            }
            SessionCommand::Week => {
                let rows = self.history.week_rows(
                    (self.today)(),
                    self.check_in.habits.achievement(),
                    self.check_in.mood,
                );
                writeln!(out, "{}", week_table(&rows, use_color))
            }
            SessionCommand::History(n) => {
                if self.history.is_empty() {
                    return writeln!(out, "No reports recorded yet.");
                }
                writeln!(out, "{}", history_table(&self.history.last_n(n), use_color))
            }
            SessionCommand::List => write!(out, "{}", crate::app::options_text()),
            SessionCommand::Help => writeln!(out, "{HELP}"),
            SessionCommand::Quit => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::FakeTransport;

    fn run_lines(input: &str) -> (String, usize) {
        let transport = FakeTransport::new();
        let mut session = Session::new(
            CheckIn::default(),
            Credentials::default(),
            Services::new(&transport),
            Box::new(|| NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()),
        );
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session.history.len())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            SessionCommand::parse("check sleep").unwrap(),
            Some(SessionCommand::Check(Habit::Sleep))
        );
        assert_eq!(
            SessionCommand::parse("  MOOD 9 ").unwrap(),
            Some(SessionCommand::Mood(Mood::try_from(9).unwrap()))
        );
        assert_eq!(
            SessionCommand::parse("history 3").unwrap(),
            Some(SessionCommand::History(3))
        );
        assert_eq!(
            SessionCommand::parse("history").unwrap(),
            Some(SessionCommand::History(HISTORY_CAPACITY))
        );
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn parse_errors() {
        assert!(SessionCommand::parse("dance").is_err());
        assert!(SessionCommand::parse("mood 0").is_err());
        assert!(SessionCommand::parse("city Tokyo").is_err());
        assert!(SessionCommand::parse("check").is_err());
    }

    #[test]
    fn reports_are_recorded_in_history() {
        let (out, recorded) = run_lines("check sleep\nmood 8\nreport\ncheck study\nreport\nquit\nreport\n");
        assert_eq!(recorded, 2, "input after quit is ignored");
        assert!(out.contains("No OpenAI API key found"));
        assert!(out.contains("Session ended. 2 report(s) recorded."));
    }

    #[test]
    fn week_view_reflects_live_values() {
        let (out, _) = run_lines("check sleep\ncheck hydration\nweek\n");
        assert!(out.contains("2026-10-16"));
        assert!(out.contains("2026-10-10"));
        assert!(out.contains("40%"));
    }

    #[test]
    fn bad_input_does_not_end_session() {
        let (out, recorded) = run_lines("mood 12\nfly\nreport\n");
        assert!(out.contains("Invalid mood \"12\""));
        assert!(out.contains("Unknown command: fly"));
        assert_eq!(recorded, 1);
    }

    #[test]
    fn history_before_any_report() {
        let (out, _) = run_lines("history\n");
        assert!(out.contains("No reports recorded yet."));
    }
}
