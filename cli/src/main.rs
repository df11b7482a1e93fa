use std::{error::Error, io::Write, str::FromStr};

use clap::Parser;
use log::{info, warn};

use rouxlse::prelude::*;

/// Length of the random walk used to scramble with --random
const SCRAMBLE_DEPTH: usize = 40;

/// Optimal solver for the last six edges of the Roux method
///
/// Edges are labeled 0-5 for DF, DB, UB, UF, UL and UR.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// The edge in each slot DF DB UB UF UL UR, e.g. 425130
	edges_position: Option<String>,

	/// One binary digit per edge (not per slot), 1 if it is misoriented
	edges_orientation: Option<String>,

	/// Quarter turns the M slice is away from alignment (0-3)
	m_offset: Option<String>,

	/// Quarter turns the U layer is away from alignment (0-3)
	u_offset: Option<String>,

	/// Solve a random scramble instead of the given state
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Solve the state reached by applying this sequence to the solved state
	#[arg(short, long, default_value_t = String::new())]
	sequence: String,

	/// Output the number of quarter turns of the solution
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// Solve every state in the file (one per line, same format as the arguments)
	#[arg(long, default_value_t = String::new())]
	batch: String,
}

/// Pick the target from the arguments
fn read_target(args: &Args) -> Result<State, Box<dyn Error>> {
	if args.random {
		return Ok(State::random(&mut rand::thread_rng(), SCRAMBLE_DEPTH));
	}

	if !args.sequence.is_empty() {
		let moves = parse_moves(&args.sequence)?;
		return Ok(State::solved().apply_moves(&moves));
	}

	match (&args.edges_position, &args.edges_orientation, &args.m_offset, &args.u_offset) {
		(Some(position), Some(orientation), Some(m_offset), Some(u_offset)) => {
			Ok(State::from_fields(position, orientation, m_offset, u_offset)?)
		}
		_ => Err("4 arguments must be provided: <edges position> <edges orientation> <M offset> <U offset>".into()),
	}
}

fn write_solution(out: &mut dyn Write, trace: &Trace, length: bool) -> std::io::Result<()> {
	let solution = trace.solution();
	write!(out, "Solution found! {}", solution)?;
	if length {
		write!(out, " (len={})", solution.quarter_turns())?;
	}
	writeln!(out)
}

fn run_batch(out: &mut dyn Write, solver: &Solver, path: &str, length: bool) -> Result<(), Box<dyn Error>> {
	let content = std::fs::read_to_string(path)?;
	let targets = content
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(State::from_str)
		.collect::<Result<Vec<_>, _>>()?;

	info!("Solving {} states from {}", targets.len(), path);
	let outcomes = solver.solve_batch(&targets);

	for (target, outcome) in targets.iter().zip(outcomes) {
		write!(out, "{}: ", target)?;
		match outcome?.trace() {
			Some(trace) => write_solution(out, trace, length)?,
			None => writeln!(out, "Not found.")?,
		}
	}

	Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	let codec = Codec::new();
	let solver = Solver::new(&codec);

	if !args.batch.is_empty() {
		return run_batch(out.as_mut(), &solver, &args.batch, args.length);
	}

	let target = read_target(&args)?;
	writeln!(out, "Target state: {}", target)?;
	info!("Slots: {}", describe(&target));
	if !target.is_reachable() {
		warn!("{} cannot be reached with U and M turns", target);
	}

	let outcome = solver.solve_with(&target, |stats| {
		eprint!("Visited {} states.\r", stats.visited);
	})?;
	eprintln!();
	writeln!(out, "Visited {} states.", outcome.stats().visited)?;

	match outcome.trace() {
		Some(trace) => {
			write_solution(out.as_mut(), trace, args.length)?;
			Ok(())
		}
		None => {
			writeln!(out, "Not found.")?;
			Err("Could not solve the given state!".into())
		}
	}
}
