//! Browse command: interactive session over stdin.
//!
//! Every year or country change issues one fetch on its own thread.
//! Results come back over a channel to the thread that owns the
//! [`CalendarState`]; results of superseded requests are dropped there.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::{Context, Result};
use tracing::{debug, info_span, warn};

use holical_calendar::check_year;
use holical_client::{FetchOutcome, HolidaySource, find_country, search_countries};
use holical_view::{
    Applied, CalendarState, FETCH_ERROR_MESSAGE, FetchRequest, RenderOptions,
    render_holiday_list, render_view,
};

use crate::cli::BrowseArgs;
use crate::config::HolicalConfig;
use crate::convert;

const HELP: &str = "\
commands:
  year <YYYY>        show another year          (y)
  country <CC>       show another country       (c)
  next | prev        step the year by one       (n | p)
  show               print the calendar again   (s)
  list               print only the holiday list (l)
  countries [TEXT]   list country codes
  help               this text                  (h, ?)
  quit               leave                      (q)";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Year(i32),
    Country(String),
    Next,
    Prev,
    Show,
    List,
    Countries(String),
    Help,
    Quit,
}

/// Events delivered to the session loop.
enum Event {
    Input(String),
    Fetched(FetchRequest, FetchOutcome),
    InputClosed,
}

type SharedSource = Arc<dyn HolidaySource + Send + Sync>;

/// Run the browse command.
pub fn run(args: BrowseArgs, config: &HolicalConfig) -> Result<()> {
    let _cmd = info_span!("browse").entered();

    let selection = convert::resolve_selection(&args.selection, config)?;
    let options = convert::build_render_options(&config.display, args.columns, false)?;
    let source = convert::build_source(args.selection.from_file.as_deref(), &config.api)?;

    let (tx, rx) = mpsc::channel();
    spawn_input_reader(tx.clone());

    let state = CalendarState::new(selection.year, selection.country);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}")
        .and_then(|()| run_session(state, &source, &options, &tx, rx, &mut stdout))
        .context("failed to write to stdout")?;
    Ok(())
}

/// Drives one session until `quit`, or until input has closed and the
/// latest fetch has been shown. Returns the final state.
fn run_session<W: Write>(
    mut state: CalendarState,
    source: &SharedSource,
    options: &RenderOptions,
    tx: &Sender<Event>,
    rx: Receiver<Event>,
    out: &mut W,
) -> io::Result<CalendarState> {
    spawn_fetch(source, state.current_request(), tx);
    let mut awaiting = true;
    let mut input_closed = false;

    for event in rx {
        match event {
            Event::Fetched(request, outcome) => {
                match state.apply_fetch_result(&request, outcome) {
                    Applied::Stale => continue,
                    Applied::Updated | Applied::Failed => {
                        awaiting = false;
                        write!(out, "{}", render_view(&state.view(), options))?;
                        if input_closed {
                            break;
                        }
                    }
                }
            }
            Event::Input(line) => {
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(msg) => {
                        writeln!(out, "{msg}")?;
                        continue;
                    }
                };
                if command == BrowseCommand::Quit {
                    break;
                }
                if let Some(request) = execute(&mut state, command, options, out)? {
                    writeln!(out, "fetching {} {} ...", request.location(), request.year())?;
                    spawn_fetch(source, request, tx);
                    awaiting = true;
                }
            }
            Event::InputClosed => {
                if !awaiting {
                    break;
                }
                debug!(generation = state.current_request().generation(), "input closed, waiting for fetch");
                input_closed = true;
            }
        }
    }
    Ok(state)
}

/// Applies a command to the state. Returns the fetch to issue, if any.
fn execute<W: Write>(
    state: &mut CalendarState,
    command: BrowseCommand,
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<Option<FetchRequest>> {
    match command {
        BrowseCommand::Year(year) => change_year(state, Some(year), out),
        BrowseCommand::Country(code) => match find_country(&code) {
            Ok(country) => Ok(Some(state.set_location(country.code))),
            Err(e) => {
                writeln!(out, "{e}")?;
                Ok(None)
            }
        },
        BrowseCommand::Next => change_year(state, state.year().checked_add(1), out),
        BrowseCommand::Prev => change_year(state, state.year().checked_sub(1), out),
        BrowseCommand::Show => {
            write!(out, "{}", render_view(&state.view(), options))?;
            Ok(None)
        }
        BrowseCommand::List => {
            if state.is_error() {
                writeln!(out, "{FETCH_ERROR_MESSAGE}")?;
            } else {
                write!(out, "{}", render_holiday_list(state.holidays()))?;
            }
            Ok(None)
        }
        BrowseCommand::Countries(needle) => {
            for country in search_countries(&needle) {
                writeln!(out, "{}  {}", country.code, country.name)?;
            }
            Ok(None)
        }
        BrowseCommand::Help => {
            writeln!(out, "{HELP}")?;
            Ok(None)
        }
        BrowseCommand::Quit => Ok(None),
    }
}

/// Moves to `year` if it has a calendar; `None` means the step overflowed.
fn change_year<W: Write>(
    state: &mut CalendarState,
    year: Option<i32>,
    out: &mut W,
) -> io::Result<Option<FetchRequest>> {
    let Some(year) = year else {
        writeln!(out, "year out of range")?;
        return Ok(None);
    };
    match check_year(year) {
        Ok(year) => Ok(Some(state.set_year(year))),
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(None)
        }
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
fn parse_command(line: &str) -> Result<Option<BrowseCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let head = head.to_ascii_lowercase();
    let arg = words.next();
    if words.next().is_some() && head != "countries" {
        return Err(format!("too many arguments for {head:?}; type `help`"));
    }

    let command = match (head.as_str(), arg) {
        ("year" | "y", Some(value)) => {
            let year = value
                .parse()
                .map_err(|_| format!("not a year: {value:?}"))?;
            BrowseCommand::Year(year)
        }
        ("year" | "y", None) => return Err("usage: year <YYYY>".to_string()),
        ("country" | "c", Some(code)) => BrowseCommand::Country(code.to_string()),
        ("country" | "c", None) => return Err("usage: country <CC>".to_string()),
        ("next" | "n", None) => BrowseCommand::Next,
        ("prev" | "p", None) => BrowseCommand::Prev,
        ("show" | "s", None) => BrowseCommand::Show,
        ("list" | "l", None) => BrowseCommand::List,
        ("countries", _) => {
            let rest: Vec<&str> = line.split_whitespace().skip(1).collect();
            BrowseCommand::Countries(rest.join(" "))
        }
        ("help" | "h" | "?", None) => BrowseCommand::Help,
        ("quit" | "q" | "exit", None) => BrowseCommand::Quit,
        (other, _) => return Err(format!("unknown command {other:?}; type `help`")),
    };
    Ok(Some(command))
}

fn spawn_input_reader(tx: Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "failed to read stdin");
                    break;
                }
            };
            if tx.send(Event::Input(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Event::InputClosed);
    });
}

fn spawn_fetch(source: &SharedSource, request: FetchRequest, tx: &Sender<Event>) {
    let source = Arc::clone(source);
    let tx = tx.clone();
    thread::spawn(move || {
        let outcome = source.fetch(request.year(), request.location());
        debug!(generation = request.generation(), ok = outcome.is_success(), "fetch finished");
        // The receiver is gone once the session has ended.
        let _ = tx.send(Event::Fetched(request, outcome));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_commands() {
        assert_eq!(parse_command("year 2025"), Ok(Some(BrowseCommand::Year(2025))));
        assert_eq!(parse_command("y -44"), Ok(Some(BrowseCommand::Year(-44))));
        assert_eq!(parse_command("country de"), Ok(Some(BrowseCommand::Country("de".into()))));
        assert_eq!(parse_command("  NEXT "), Ok(Some(BrowseCommand::Next)));
        assert_eq!(parse_command("p"), Ok(Some(BrowseCommand::Prev)));
        assert_eq!(parse_command("q"), Ok(Some(BrowseCommand::Quit)));
        assert_eq!(parse_command("?"), Ok(Some(BrowseCommand::Help)));
    }

    #[test]
    fn parse_blank_line() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn parse_countries_keeps_all_words() {
        assert_eq!(
            parse_command("countries new zea"),
            Ok(Some(BrowseCommand::Countries("new zea".into())))
        );
        assert_eq!(
            parse_command("countries"),
            Ok(Some(BrowseCommand::Countries(String::new())))
        );
    }

    #[test]
    fn parse_errors() {
        assert!(parse_command("year").is_err());
        assert!(parse_command("year twenty").is_err());
        assert!(parse_command("country").is_err());
        assert!(parse_command("next 2").is_err());
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("year 2024 2025").is_err());
    }

    #[test]
    fn execute_issues_requests_only_for_input_changes() {
        let mut state = CalendarState::new(2024, "US");
        let options = RenderOptions::default();
        let mut out = Vec::new();

        let req = execute(&mut state, BrowseCommand::Next, &options, &mut out).unwrap().unwrap();
        assert_eq!((req.year(), req.location()), (2025, "US"));

        let req = execute(&mut state, BrowseCommand::Country("nz".into()), &options, &mut out)
            .unwrap()
            .unwrap();
        assert_eq!((req.year(), req.location()), (2025, "NZ"));

        let unknown = execute(&mut state, BrowseCommand::Country("ZZ".into()), &options, &mut out);
        assert!(unknown.unwrap().is_none());
        assert_eq!(state.location(), "NZ");

        assert!(execute(&mut state, BrowseCommand::Help, &options, &mut out).unwrap().is_none());
        assert!(execute(&mut state, BrowseCommand::List, &options, &mut out).unwrap().is_none());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown country code"));
        assert!(text.contains("Date        Description"));
    }

    #[test]
    fn year_changes_stay_inside_the_calendar_range() {
        let last = *holical_calendar::supported_years().end();
        let mut state = CalendarState::new(last, "US");
        let options = RenderOptions::default();
        let mut out = Vec::new();

        assert!(execute(&mut state, BrowseCommand::Next, &options, &mut out).unwrap().is_none());
        assert!(execute(&mut state, BrowseCommand::Year(i32::MAX), &options, &mut out).unwrap().is_none());
        assert_eq!(state.year(), last);
        assert!(String::from_utf8(out).unwrap().contains("out of range"));

        let mut state = CalendarState::new(i32::MIN, "US");
        let mut out = Vec::new();
        assert!(execute(&mut state, BrowseCommand::Prev, &options, &mut out).unwrap().is_none());
        assert_eq!(String::from_utf8(out).unwrap(), "year out of range\n");
    }

    struct Echo;

    impl HolidaySource for Echo {
        fn fetch(&self, year: i32, country_code: &str) -> FetchOutcome {
            FetchOutcome::Holidays(vec![holical_calendar::HolidayRecord::new(
                format!("{year}-01-01"),
                format!("New Year {year} {country_code}"),
            )])
        }
    }

    fn echo() -> SharedSource {
        Arc::new(Echo)
    }

    #[test]
    fn closed_input_still_shows_the_pending_fetch() {
        let (tx, rx) = mpsc::channel();
        tx.send(Event::Input("country de".to_string())).unwrap();
        tx.send(Event::InputClosed).unwrap();

        let mut out = Vec::new();
        let state = CalendarState::new(2024, "US");
        let state = run_session(state, &echo(), &RenderOptions::default(), &tx, rx, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("fetching DE 2024 ..."));
        assert!(text.contains("Public Holiday Calendar: 2024 (DE)"));
        assert!(text.contains("New Year 2024 DE"));
        assert!(!text.contains("(US)"), "superseded result must not be shown");
        assert_eq!(state.location(), "DE");
        assert_eq!(state.holidays().len(), 1);
    }

    #[test]
    fn closed_input_shows_the_initial_fetch() {
        let (tx, rx) = mpsc::channel();
        tx.send(Event::InputClosed).unwrap();

        let mut out = Vec::new();
        let state = CalendarState::new(2024, "NZ");
        run_session(state, &echo(), &RenderOptions::default(), &tx, rx, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Public Holiday Calendar: 2024 (NZ)").count(), 1);
    }

    #[test]
    fn quit_ends_the_session() {
        let (tx, rx) = mpsc::channel();
        tx.send(Event::Input("quit".to_string())).unwrap();

        let mut out = Vec::new();
        let state = CalendarState::new(2024, "US");
        let state = run_session(state, &echo(), &RenderOptions::default(), &tx, rx, &mut out).unwrap();
        assert!(state.holidays().is_empty());
    }

    #[test]
    fn threaded_fetches_apply_only_latest() {
        let source = echo();
        let (tx, rx) = mpsc::channel();
        let mut state = CalendarState::new(2020, "US");
        let mut issued = vec![state.current_request()];
        for year in 2021..=2025 {
            issued.push(state.set_year(year));
        }
        for request in issued {
            spawn_fetch(&source, request, &tx);
        }
        drop(tx);

        let applied: Vec<Applied> = rx
            .iter()
            .map(|event| match event {
                Event::Fetched(request, outcome) => state.apply_fetch_result(&request, outcome),
                _ => unreachable!("only fetch events are sent"),
            })
            .collect();

        assert_eq!(applied.len(), 6);
        assert_eq!(applied.iter().filter(|a| **a == Applied::Updated).count(), 1);
        assert_eq!(state.holidays()[0].name, "New Year 2025 US");
    }
}
