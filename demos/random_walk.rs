//! Example: generate a small synthetic log from hand-written automata.
//!
//! This example demonstrates how to:
//! 1. Plug walkers over pre-bounded automata into the generator
//! 2. Mix compliant and violating traces
//! 3. Store the log as plain strings with a legend file
//!
//! Run with: cargo run --example random_walk -- /tmp/loan.txt

use declare_logmaker::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Walks a tiny automaton given as `(state, symbol, target)` transitions.
///
/// The walk may stop in an accepting state once `min` steps are taken and
/// must stop after `max` steps.
struct TableWalker {
    transitions: Vec<(usize, char, usize)>,
    accepting: Vec<usize>,
    min: usize,
    max: usize,
    state: usize,
    steps: usize,
    rng: StdRng,
}

impl TableWalker {
    fn new(
        transitions: Vec<(usize, char, usize)>,
        accepting: Vec<usize>,
        min: usize,
        max: usize,
        seed: u64,
    ) -> Self {
        Self {
            transitions,
            accepting,
            min,
            max,
            state: 0,
            steps: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BoundedWalker for TableWalker {
    fn reset_to_start(&mut self) {
        self.state = 0;
        self.steps = 0;
    }

    fn step(&mut self) -> Option<Symbol> {
        let may_stop = self.steps >= self.min && self.accepting.contains(&self.state);
        if self.steps >= self.max || (may_stop && self.rng.random_bool(0.3)) {
            return None;
        }
        let outgoing: Vec<_> = self
            .transitions
            .iter()
            .filter(|(from, _, _)| *from == self.state)
            .collect();
        if outgoing.is_empty() {
            return None;
        }
        let (_, symbol, to) = *outgoing[self.rng.random_range(0..outgoing.len())];
        self.state = to;
        self.steps += 1;
        Some(symbol)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "loan.txt".into());

    let archive: TaskCharArchive = [
        ('a', "Apply"),
        ('r', "Review"),
        ('g', "Grant"),
        ('d', "Decline"),
    ]
    .into_iter()
    .collect();

    // Apply, then any number of reviews, then grant or decline.
    let mut compliant = TableWalker::new(
        vec![(0, 'a', 1), (1, 'r', 1), (1, 'g', 2), (1, 'd', 2)],
        vec![2],
        2,
        6,
        1,
    );
    // Also allows granting without applying first.
    let mut violating = TableWalker::new(
        vec![(0, 'a', 1), (0, 'g', 2), (1, 'r', 1), (1, 'g', 2), (1, 'd', 2)],
        vec![2],
        1,
        6,
        2,
    );

    let config = GenerationConfig::builder()
        .traces_in_log(20usize)
        .violating_in_log(5usize)
        .min_events_per_trace(1usize)
        .max_events_per_trace(6usize)
        .output_encoding(OutputEncoding::Strings)
        .output_path(output)
        .build()?;

    let mut maker = LogMaker::new(config);
    maker.create_log("Loan application", &mut compliant, Some(&mut violating), &archive)?;
    let path = maker.store_log()?;

    println!("Log written to {}", path.display());
    println!("Legend written to {}", legend_path_for(&path)?.display());
    Ok(())
}
