//! Shortest path between two cells of a text map.
//!
//! Run: cargo run --bin gridpath -- MAP_FILE [START_X START_Y GOAL_X GOAL_Y]
//!
//! `MAP_FILE` may be `-` to read standard input. Without coordinates the
//! `P` and `Q` markers of the map are used. Set `RUST_LOG=debug` to see why
//! a query failed.

use std::fmt;
use std::io::{self, Read};
use std::process;

use gridpath_core::Point;
use gridpath_paths::{PathError, TextMap, pathfind};
use log::info;

const USAGE: &str = "usage: gridpath <MAP_FILE|-> [START_X START_Y GOAL_X GOAL_Y]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    map: String,
    endpoints: Option<(Point, Point)>,
}

#[derive(Debug)]
enum CliError {
    Usage(String),
    Io { path: String, source: io::Error },
    Path(PathError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}\n{USAGE}"),
            Self::Io { path, source } => write!(f, "cannot read {path}: {source}"),
            Self::Path(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Path(e) => Some(e),
            Self::Usage(_) => None,
        }
    }
}

impl From<PathError> for CliError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

fn parse_args(args: &[String]) -> Result<Args, CliError> {
    let (map, coords) = match args {
        [map, rest @ ..] => (map.clone(), rest),
        [] => return Err(CliError::Usage("missing map file".into())),
    };
    let endpoints = match coords {
        [] => None,
        [sx, sy, gx, gy] => {
            let n = |s: &String| {
                s.parse::<i32>()
                    .map_err(|_| CliError::Usage(format!("invalid coordinate \u{201c}{s}\u{201d}")))
            };
            Some((Point::new(n(sx)?, n(sy)?), Point::new(n(gx)?, n(gy)?)))
        }
        _ => {
            return Err(CliError::Usage(format!(
                "expected 0 or 4 coordinates, got {}",
                coords.len()
            )));
        }
    };
    Ok(Args { map, endpoints })
}

fn read_map(path: &str) -> Result<String, CliError> {
    let io_err = |source| CliError::Io {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s).map_err(io_err)?;
        Ok(s)
    } else {
        std::fs::read_to_string(path).map_err(io_err)
    }
}

fn solve(text: &str, endpoints: Option<(Point, Point)>) -> Result<u32, PathError> {
    let map = TextMap::parse(text)?;
    let (start, goal) = match endpoints {
        Some(e) => e,
        None => map.endpoints()?,
    };
    info!(
        "{}x{} map, {} -> {}",
        map.grid().width(),
        map.grid().height(),
        start,
        goal
    );
    pathfind(map.grid(), start, goal)
}

fn run(args: &[String]) -> Result<u32, CliError> {
    let args = parse_args(args)?;
    let text = read_map(&args.map)?;
    Ok(solve(&text, args.endpoints)?)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(d) => println!("{d}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(e.exit_code());
        }
    }
}
