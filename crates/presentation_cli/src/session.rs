//! Line-driven interactive session over an endpoint state machine
//!
//! Each stdin line is one event. Every selection the machine emits is
//! printed as a single JSON line prefixed with `selection:`.

use std::str::FromStr;

use application::EndpointStateMachine;
use domain::{Coordinate, EndpointRole, RouteSelection};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::input::parse_coordinate;

pub const HELP: &str = "\
commands:
  type <role> <text>     debounced suggestion query
  suggest <role> <text>  immediate suggestion query
  list <role>            show the current suggestions
  pick <role> <index>    commit a suggestion
  address <role> <text>  geocode text and commit it
  click <lat,lng>        map click
  drag <role> <lat,lng>  move a placed marker
  focus <role>           focus an endpoint field
  clear <role>           clear an endpoint
  locate                 use the device location as origin
  show                   print the current selection
  quit";

/// One parsed session line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Type(EndpointRole, String),
    Suggest(EndpointRole, String),
    List(EndpointRole),
    Pick(EndpointRole, usize),
    Address(EndpointRole, String),
    Click(Coordinate),
    Drag(EndpointRole, Coordinate),
    Focus(EndpointRole),
    Clear(EndpointRole),
    Locate,
    Show,
    Help,
    Quit,
}

fn role(arg: Option<&str>) -> Result<EndpointRole, String> {
    arg.ok_or_else(|| "missing endpoint role".to_string())?
        .parse()
        .map_err(|e: domain::DomainError| e.to_string())
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    s.split_once(char::is_whitespace)
        .map_or((s, ""), |(head, rest)| (head, rest.trim()))
}

impl FromStr for SessionEvent {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (command, rest) = split_word(line);
        let (first, tail) = split_word(rest);
        let first = (!first.is_empty()).then_some(first);

        match command.to_lowercase().as_str() {
            "type" => Ok(Self::Type(role(first)?, tail.to_string())),
            "suggest" => Ok(Self::Suggest(role(first)?, tail.to_string())),
            "list" => Ok(Self::List(role(first)?)),
            "pick" => {
                let index = tail
                    .parse()
                    .map_err(|_| format!("invalid suggestion index {tail:?}"))?;
                Ok(Self::Pick(role(first)?, index))
            },
            "address" => Ok(Self::Address(role(first)?, tail.to_string())),
            "click" => Ok(Self::Click(parse_coordinate(rest)?)),
            "drag" => Ok(Self::Drag(role(first)?, parse_coordinate(tail)?)),
            "focus" => Ok(Self::Focus(role(first)?)),
            "clear" => Ok(Self::Clear(role(first)?)),
            "locate" => Ok(Self::Locate),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command {other:?}, try \"help\"")),
        }
    }
}

fn print_selection(selection: &RouteSelection) {
    match serde_json::to_string(selection) {
        Ok(json) => println!("selection: {json}"),
        Err(e) => warn!(error = %e, "Failed to serialize selection"),
    }
}

fn print_suggestions(machine: &EndpointStateMachine, role: EndpointRole) {
    let suggestions = machine.suggestions(role);
    if suggestions.is_empty() {
        println!("no {role} suggestions");
    }
    for (index, suggestion) in suggestions.iter().enumerate() {
        println!("[{index}] {}", suggestion.description);
    }
}

/// Apply one event; returns `false` when the session should end
async fn apply(machine: &EndpointStateMachine, event: SessionEvent) -> bool {
    debug!(?event, "Session event");
    match event {
        SessionEvent::Type(role, text) => machine.input_text(role, text),
        SessionEvent::Suggest(role, text) => {
            machine.refresh_suggestions(role, &text).await;
            print_suggestions(machine, role);
        },
        SessionEvent::List(role) => print_suggestions(machine, role),
        SessionEvent::Pick(role, index) => {
            if let Err(e) = machine.select_suggestion(role, index).await {
                println!("error: {e}");
            }
        },
        SessionEvent::Address(role, text) => {
            if let Err(e) = machine.set_address(role, &text).await {
                println!("error: {e}");
            }
        },
        SessionEvent::Click(coordinate) => {
            if machine.map_click(coordinate).await.is_none() {
                println!("click ignored");
            }
        },
        SessionEvent::Drag(role, coordinate) => {
            machine.move_endpoint(role, coordinate).await;
        },
        SessionEvent::Focus(role) => machine.focus(role),
        SessionEvent::Clear(role) => machine.clear(role),
        SessionEvent::Locate => {
            if !machine.use_my_location().await {
                println!("location unavailable");
            }
        },
        SessionEvent::Show => print_selection(&machine.snapshot()),
        SessionEvent::Help => println!("{HELP}"),
        SessionEvent::Quit => return false,
    }
    true
}

/// Read events from stdin until EOF or `quit`
///
/// Selections are printed as soon as they arrive, and any still queued when
/// input ends are flushed before returning.
pub async fn run(
    machine: &EndpointStateMachine,
    mut selections: UnboundedReceiver<RouteSelection>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            biased;
            Some(selection) = selections.recv() => print_selection(&selection),
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<SessionEvent>() {
                    Ok(event) => {
                        if !apply(machine, event).await {
                            break;
                        }
                    },
                    Err(e) => println!("error: {e}"),
                }
            },
        }
    }

    machine.shutdown();
    drain(&mut selections);
    Ok(())
}

/// Print every selection already queued without waiting for more
fn drain(selections: &mut UnboundedReceiver<RouteSelection>) -> usize {
    let mut printed = 0;
    while let Ok(selection) = selections.try_recv() {
        print_selection(&selection);
        printed += 1;
    }
    printed
}
