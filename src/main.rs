// vim: set ai et ts=4 sts=4 sw=4:
use std::io;
use std::process;
use clap::{App, Arg};
use log::info;

use gridlogic::battleships::Battleships;
use gridlogic::util::{maybe_color, is_a_tty};

pub struct Args {
    pub verbosity: u64,
    pub emit_color: bool,
}

fn setup_logging(args: &Args) {
    let level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.target(), record.level(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
        .expect("failed to initialize logging");
}

fn main() {
    let matches = App::new("gridlogic")
        .about("models and validates grid-based logic puzzles")
        .arg(Arg::with_name("verbose")
                 .short("v")
                 .multiple(true)
                 .help("increases logging verbosity"))
        .arg(Arg::with_name("no-color")
                 .long("no-color")
                 .help("disables colored output"))
        .get_matches();
    let args = Args {
        verbosity:  matches.occurrences_of("verbose"),
        emit_color: !matches.is_present("no-color") && is_a_tty(io::stdout()),
    };
    setup_logging(&args);

    let s = "
  1133102414
3 ..x.....x.    --x----xx-
1 ..........    --x-------
1 ..........    --x-------
2 .......x..    ----x--x--
1 ..........    -------x--
2 ..........    -x-------x
2 ..........    -------x-x
3 x..x......    x--x-----x
3 ......x...    ---x--x--x
2 ..........    ---x--x---
";
    let puzzle = match Battleships::from_data(s) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    info!("loaded a {}x{} puzzle", puzzle.width(), puzzle.height());

    println!("{}", puzzle);
    for group in &puzzle.rect.groups {
        println!("{}: {}",
                 maybe_color(&group.to_colored_string(), args.emit_color),
                 match group.is_satisfied() {
                     true  => "satisfied",
                     false => "open",
                 });
    }
}
