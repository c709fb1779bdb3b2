use std::io::{self, IsTerminal};
use std::process;

use clap::{App, Arg, ArgMatches};
use colored::Colorize;
use log::debug;

use eight_puzzle::config::{Color, Config};
use eight_puzzle::grid::Grid;
use eight_puzzle::prompt;
use eight_puzzle::solution_formatter::{SolutionFormatter, SEPARATOR};
use eight_puzzle::{LoadGrid, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("eight-puzzle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves the 8-puzzle using A* with the Manhattan distance heuristic")
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .takes_value(true)
                .value_name("FILE")
                .conflicts_with("tiles")
                .help("read the initial configuration from a file"),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .takes_value(true)
                .possible_values(&Color::VARIANTS)
                .default_value("auto")
                .help("highlight the blank tile"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .takes_value(true)
                .value_name("STATES")
                .help("give up after creating this many states"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print status whenever the search reaches a new depth"),
        )
        .arg(
            Arg::with_name("tiles")
                .multiple(true)
                .help("nine numbers 0-8 row by row, 0 is the blank (asks interactively if missing)"),
        )
        .get_matches();

    let color = use_color(&matches);
    let config = Config {
        state_limit: matches.value_of("limit").map(|limit| {
            limit.parse::<usize>().unwrap_or_else(|err| {
                eprintln!("Invalid state limit {}: {}", limit, err);
                process::exit(1);
            })
        }),
    };

    let grid = read_initial(&matches, color);
    debug!("Initial grid {:?}, solvable: {}", grid, grid.is_solvable());

    println!("Solving {}...", grid);
    let solution = grid
        .solve(&config, matches.is_present("verbose"))
        .unwrap_or_else(|err| {
            println!("{}", err);
            process::exit(1);
        });
    if matches.is_present("stats") {
        println!("{}", solution.stats);
    }

    println!("{}", SEPARATOR);
    match solution.path {
        Some(_) => {
            println!("Found solution:");
            println!("{}", SEPARATOR);
            if let Some(moves) = solution.moves() {
                print!("{}", SolutionFormatter::new(grid, &moves, color));
                println!("Moves: {}", moves.move_cnt());
                if moves.move_cnt() > 0 {
                    println!("{}", moves);
                }
            }
        }
        None => println!("No solution"),
    }
}

fn use_color(matches: &ArgMatches<'_>) -> bool {
    let color = matches
        .value_of("color")
        .unwrap_or("auto")
        .parse::<Color>()
        .unwrap_or(Color::Auto);
    match color {
        Color::Always => {
            colored::control::set_override(true);
            true
        }
        Color::Never => false,
        // colored itself still respects NO_COLOR and friends
        Color::Auto => io::stdout().is_terminal(),
    }
}

fn read_initial(matches: &ArgMatches<'_>, color: bool) -> Grid {
    if let Some(path) = matches.value_of("file") {
        return path.load_grid().unwrap_or_else(|err| {
            eprintln!("Can't load {}: {}", path, err);
            process::exit(1);
        });
    }

    if let Some(tiles) = matches.values_of("tiles") {
        let tiles: Vec<&str> = tiles.collect();
        return tiles.join(" ").parse::<Grid>().unwrap_or_else(|err| {
            eprintln!("Invalid initial configuration: {}", err);
            process::exit(1);
        });
    }

    print_banner(color);
    let stdin = io::stdin();
    match prompt::read_grid(stdin.lock(), io::stdout()) {
        Ok(Some(grid)) => {
            println!();
            grid
        }
        Ok(None) => {
            eprintln!("No initial configuration entered");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Can't read input: {}", err);
            process::exit(1);
        }
    }
}

fn print_banner(color: bool) {
    let banner = format!(
        "8-puzzle solver\n\
         {0}\n\
         Enter the initial configuration as nine numbers separated by spaces,\n\
         row by row, 0 is the blank. For example: 0 5 7 1 4 3 6 8 2\n\
         Then follow the steps, each one slides a tile into the highlighted blank.\n\
         {0}",
        SEPARATOR
    );
    println!();
    if color {
        println!("{}", banner.green());
    } else {
        println!("{}", banner);
    }
    println!();
}
