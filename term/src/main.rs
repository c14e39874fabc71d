use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use todo_core::{view::Style, TodoClient, TodoController};
use todo_term::{dispatch, Args, Command, Flow, StderrNotifier, StdinConfirmer, UreqTransport};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let filter = EnvFilter::try_new(&args.log).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let style = if args.plain { Style::Plain } else { Style::Ansi };
    let mut controller = TodoController::new(
        TodoClient::new(&args.api_url),
        UreqTransport::new(),
        StdinConfirmer,
        StderrNotifier,
    );

    let mut out = io::stdout();
    controller.load();
    dispatch(&mut controller, Command::List, style, &mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| dispatch(&mut controller, command, style, &mut out));
        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}
