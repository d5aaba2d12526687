//! tipple - terminal frontend for the cocktail catalog.
//!
//! Wires configuration, the HTTP catalog client, and a query session into
//! a line-oriented interactive loop: pick a mode, assemble criteria,
//! search, expand cards.

use std::io::Write;

use tipple_catalog::HttpCatalog;
use tipple_core::{AppConfig, QueryMode};
use tipple_query::{bind, execute, Collector, QuerySession};
use tipple_ui::text::{render_form, render_results};
use tipple_ui::{FormView, ResultsView};

// =============================================================================
// Commands
// =============================================================================

/// One line of user input, parsed.
enum Command {
    Help,
    Modes,
    Mode(usize),
    Set(String),
    Pick(usize),
    Add,
    Clear,
    Form,
    Search,
    Open(usize),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "help" => Some(Command::Help),
        "modes" => Some(Command::Modes),
        "mode" => rest.parse().ok().map(Command::Mode),
        "set" => Some(Command::Set(rest.to_string())),
        "pick" => rest.parse().ok().map(Command::Pick),
        "add" => Some(Command::Add),
        "clear" => Some(Command::Clear),
        "form" => Some(Command::Form),
        "search" => Some(Command::Search),
        "open" => rest.parse().ok().map(Command::Open),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  modes          list query modes");
    println!("  mode <n>       switch to query mode n");
    println!("  set <text>     set the name to look up (name mode)");
    println!("  pick <n>       select option n in the dropdown (0 for none)");
    println!("  add            add the selected option to the criteria table");
    println!("  clear          clear the criteria table");
    println!("  form           show the query form");
    println!("  search         run the query");
    println!("  open <n>       expand or collapse result card n");
    println!("  quit           leave");
}

fn print_modes() {
    println!("Query modes:");
    for (index, mode) in QueryMode::ALL.iter().enumerate() {
        println!("  {}) {}", index + 1, mode.label());
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// =============================================================================
// Interactive Loop
// =============================================================================

async fn run(config: AppConfig) {
    let catalog = HttpCatalog::new(&config.catalog);
    let mut session = QuerySession::new();
    let mut view: Option<ResultsView> = None;

    println!("tipple - cocktail catalog lookup ({})", config.catalog.base_url);
    print_help();

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("stdin error: {}", e);
                break;
            }
        }

        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                println!("Unrecognized command, try 'help'.");
            }
            continue;
        };

        match command {
            Command::Help => print_help(),
            Command::Modes => print_modes(),
            Command::Quit => break,

            Command::Mode(number) => {
                let Some(mode) = number
                    .checked_sub(1)
                    .and_then(|i| QueryMode::ALL.get(i).copied())
                else {
                    println!("No such mode, try 'modes'.");
                    continue;
                };
                session.select_mode(bind(&catalog, mode).await);
                view = None;
                show_form(&session);
            }

            Command::Set(text) => match session.binding_mut().map(|b| b.collector_mut()) {
                Some(Collector::FreeText(input)) => {
                    input.set_value(text);
                    show_form(&session);
                }
                Some(Collector::PickList(_)) => {
                    println!("This mode picks from a list; try 'pick <n>' and 'add'.");
                }
                None => println!("Pick a query mode first."),
            },

            Command::Pick(number) => match session.binding_mut().map(|b| b.collector_mut()) {
                Some(Collector::PickList(list)) => {
                    if number == 0 {
                        list.clear_selection();
                    } else if let Some(option) = list.options().get(number - 1) {
                        let option = option.clone();
                        list.select(option);
                    } else {
                        println!("No such option.");
                        continue;
                    }
                    show_form(&session);
                }
                Some(Collector::FreeText(_)) => {
                    println!("Name mode takes free text; try 'set <text>'.");
                }
                None => println!("Pick a query mode first."),
            },

            Command::Add => match session.binding_mut().map(|b| b.collector_mut()) {
                Some(Collector::PickList(list)) => {
                    list.add_selected();
                    show_form(&session);
                }
                Some(Collector::FreeText(_)) => {
                    println!("Name mode takes free text; try 'set <text>'.");
                }
                None => println!("Pick a query mode first."),
            },

            Command::Clear => match session.binding_mut() {
                Some(binding) => {
                    binding.collector_mut().clear();
                    show_form(&session);
                }
                None => println!("Pick a query mode first."),
            },

            Command::Form => show_form(&session),

            Command::Search => {
                let Some(pending) = session.begin_search() else {
                    println!("Pick a query mode first.");
                    continue;
                };
                let results = execute(&catalog, pending.mode, &pending.criteria).await;
                if session.apply_results(pending.generation, results) {
                    if let Some(accepted) = session.results() {
                        let built = ResultsView::build(accepted);
                        print_lines(&render_results(&built, &config.display));
                        view = Some(built);
                    }
                }
            }

            Command::Open(number) => match &mut view {
                Some(results) => {
                    if number >= 1 && results.toggle(number - 1) {
                        print_lines(&render_results(results, &config.display));
                    } else {
                        println!("No such card.");
                    }
                }
                None => println!("Nothing to open; run a search first."),
            },
        }
    }
}

fn show_form(session: &QuerySession) {
    match session.binding() {
        Some(binding) => print_lines(&render_form(&FormView::from_binding(binding))),
        None => println!("Pick a query mode first."),
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config error: {} - using defaults", e);
            AppConfig::default()
        }
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    rt.block_on(run(config));
}
