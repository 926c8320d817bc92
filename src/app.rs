use std::fmt::Write as _;
use std::io::{self, Write};

use crate::cli::Cli;
use crate::clients::{OfflineTransport, Transport, UreqTransport};
use crate::consts::{HISTORY_CAPACITY, OPENAI_KEY_NAME, WEATHER_KEY_NAME};
use crate::core::{City, CoachPersona, Habit, HabitSet};
use crate::credentials::{CredentialResolver, SecretStore};
use crate::dashboard::{CheckIn, Credentials, Services, run_trigger};
use crate::error::AppError;
use crate::history::HistoryStore;
use crate::output::{metrics_table, options_json, outcome_json, render_outcome};
use crate::session::Session;
use crate::utils::Timezone;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) timezone: Timezone,
    pub(crate) credentials: Credentials,
    pub(crate) services: Services<'a>,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli, transport: &'a dyn Transport) -> Result<Self, AppError> {
        let timezone = Timezone::parse(cli.timezone.as_deref())?;
        let secrets = if cli.no_env {
            SecretStore::default()
        } else {
            SecretStore::load(cli.secrets.as_deref())?
        };
        let resolver = CredentialResolver::from_process_env(secrets);
        let allow_fallback = !cli.no_env;
        let credentials = Credentials {
            generation: resolver.resolve(OPENAI_KEY_NAME, cli.openai_key.as_deref(), allow_fallback),
            weather: resolver.resolve(WEATHER_KEY_NAME, cli.weather_key.as_deref(), allow_fallback),
        };
        Ok(Self {
            cli,
            timezone,
            credentials,
            services: Services::new(transport),
        })
    }

    fn check_in(&self, habits: HabitSet) -> CheckIn {
        CheckIn {
            habits,
            mood: self.cli.mood(),
            city: self.cli.city(),
            persona: self.cli.persona(),
        }
    }
}

/// Transport for this run: real HTTP unless offline
pub(crate) fn make_transport(offline: bool) -> Box<dyn Transport> {
    if offline {
        Box::new(OfflineTransport)
    } else {
        Box::new(UreqTransport::new())
    }
}

/// One-shot check-in and report
pub(crate) fn handle_report(ctx: &CommandContext<'_>, done: &[Habit]) {
    let check_in = ctx.check_in(HabitSet::with_completed(done));
    let mut history = HistoryStore::with_capacity(HISTORY_CAPACITY);
    let outcome = run_trigger(
        &check_in,
        ctx.timezone.today(),
        &ctx.credentials,
        &ctx.services,
        &mut history,
    );

    if ctx.cli.json {
        println!("{}", outcome_json(&outcome));
        return;
    }

    let use_color = ctx.cli.use_color();
    println!("{}", metrics_table(&check_in.habits, check_in.mood, use_color));
    println!();
    print!("{}", render_outcome(&outcome, use_color));
}

pub(crate) fn handle_session(ctx: CommandContext<'_>) -> io::Result<()> {
    let check_in = ctx.check_in(HabitSet::default());
    let timezone = ctx.timezone;
    let json = ctx.cli.json;
    let use_color = ctx.cli.use_color();
    let mut session = Session::new(
        check_in,
        ctx.credentials,
        ctx.services,
        Box::new(move || timezone.today()),
    )
    .with_output(json, use_color);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    stdout.flush()
}

/// Habits, cities and personas as plain text
pub(crate) fn options_text() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Habits:");
    for habit in Habit::ALL {
        let _ = writeln!(out, "  {:<10} {}", habit.key(), habit.label());
    }
    let _ = writeln!(out, "Cities:");
    let cities: Vec<_> = City::ALL.iter().map(|c| c.name()).collect();
    let _ = writeln!(out, "  {}", cities.join(", "));
    let _ = writeln!(out, "Coach personas:");
    for persona in CoachPersona::ALL {
        let default = if persona == CoachPersona::default() {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(out, "  {:<10} {}{}", persona.key(), persona.title(), default);
    }
    out
}

pub(crate) fn handle_list(json: bool) {
    if json {
        println!("{}", options_json());
    } else {
        print!("{}", options_text());
    }
}
