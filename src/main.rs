use std::io::{self, Read};
use std::process;

use clap::{crate_version, App, Arg, ArgGroup};
use log::debug;

use eight_puzzle_solver::config::{Dedup, Heuristic};
use eight_puzzle_solver::puzzle::Puzzle;
use eight_puzzle_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("eight-puzzle-solver")
        .version(crate_version!())
        .about("Finds the shortest sequence of slides between two 3x3 sliding tile puzzle grids")
        .arg(
            Arg::with_name("misplaced")
                .short("t")
                .long("misplaced")
                .help("estimate by number of misplaced tiles (default)"),
        ).arg(
            Arg::with_name("manhattan")
                .short("m")
                .long("manhattan")
                .help("estimate by sum of manhattan distances of tiles"),
        ).group(
            ArgGroup::with_name("heuristic")
                .arg("misplaced")
                .arg("manhattan"),
        ).arg(
            Arg::with_name("count-blank")
                .short("b")
                .long("count-blank")
                .help("score the blank like a tile, paths are no longer guaranteed to be shortest"),
        ).arg(
            Arg::with_name("fringe-dedup")
                .short("f")
                .long("fringe-dedup")
                .help("also skip successors already waiting in the fringe with an equal or lower cost"),
        ).arg(
            Arg::with_name("status")
                .short("s")
                .long("status")
                .help("print progress whenever a new depth is reached"),
        ).arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print node counts for each depth"),
        ).arg(
            Arg::with_name("file")
                .help("start grid followed by goal grid, 9 numbers each (reads stdin if missing)"),
        ).get_matches();

    let mut heuristic = if matches.is_present("manhattan") {
        Heuristic::Manhattan
    } else {
        Heuristic::default()
    };
    if matches.is_present("count-blank") {
        heuristic = heuristic.with_blank();
    }
    let dedup = if matches.is_present("fringe-dedup") {
        Dedup::ClosedAndFringe
    } else {
        Dedup::default()
    };
    let print_status = matches.is_present("status");

    let (source, puzzle) = match matches.value_of("file") {
        Some(path) => {
            let puzzle = path.load_puzzle().unwrap_or_else(|err| {
                eprintln!("Can't load puzzle {}: {}", path, err);
                process::exit(1);
            });
            (path.to_owned(), puzzle)
        }
        None => ("stdin".to_owned(), read_stdin()),
    };
    debug!("Loaded puzzle:\n{}", puzzle);

    println!("Solving {} using {}...", source, heuristic);
    let solution = puzzle.solve(heuristic, dedup, print_status);

    print!("{}", solution.stats);
    if matches.is_present("stats") {
        print!("{}", solution.stats.depth_table());
    }
    match solution.moves() {
        Some(moves) => {
            println!("Found solution:");
            if let Some(ref path) = solution.path {
                print!("{}", puzzle.format_solution(path));
            }
            println!("Moves: {}", moves);
            println!("Steps: {}", moves.len());
        }
        None => println!("No solution"),
    }
}

fn read_stdin() -> Puzzle {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).unwrap_or_else(|err| {
        eprintln!("Can't read stdin: {}", err);
        process::exit(1);
    });
    text.parse().unwrap_or_else(|err| {
        eprintln!("Failed to parse: {}", err);
        process::exit(1);
    })
}
