//! Fake walkers and archives shared by the integration tests.

#![allow(dead_code)]

use declare_logmaker::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Symbols the compliant fakes emit.
pub const COMPLIANT_SYMBOLS: [char; 3] = ['a', 'b', 'c'];

/// Symbols only the violating fakes emit, so a trace's origin is visible in
/// its content.
pub const VIOLATING_SYMBOLS: [char; 2] = ['x', 'y'];

pub fn archive() -> TaskCharArchive {
    [
        ('a', "Send docs"),
        ('b', "Receive grant"),
        ('c', "Sign contract"),
        ('x', "Skip review"),
        ('y', "Pay twice"),
    ]
    .into_iter()
    .collect()
}

/// Replays fixed scripts, one per trace, cycling when they run out.
pub struct ScriptedWalker {
    scripts: Vec<Vec<char>>,
    next_script: usize,
    current: Vec<char>,
    pos: usize,
    pub resets: usize,
}

impl ScriptedWalker {
    pub fn new(scripts: &[&str]) -> Self {
        Self {
            scripts: scripts.iter().map(|s| s.chars().collect()).collect(),
            next_script: 0,
            current: Vec::new(),
            pos: 0,
            resets: 0,
        }
    }
}

impl BoundedWalker for ScriptedWalker {
    fn reset_to_start(&mut self) {
        self.resets += 1;
        self.current = self
            .scripts
            .get(self.next_script % self.scripts.len().max(1))
            .cloned()
            .unwrap_or_default();
        self.next_script += 1;
        self.pos = 0;
    }

    fn step(&mut self) -> Option<Symbol> {
        let symbol = self.current.get(self.pos).copied();
        self.pos += 1;
        symbol
    }
}

/// Emits between `min` and `max` random symbols from `alphabet` per walk.
pub struct RandomLengthWalker {
    rng: StdRng,
    alphabet: Vec<char>,
    min: usize,
    max: usize,
    remaining: usize,
}

impl RandomLengthWalker {
    pub fn new(seed: u64, alphabet: &[char], min: usize, max: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            alphabet: alphabet.to_vec(),
            min,
            max,
            remaining: 0,
        }
    }
}

impl BoundedWalker for RandomLengthWalker {
    fn reset_to_start(&mut self) {
        self.remaining = self.rng.random_range(self.min..=self.max);
    }

    fn step(&mut self) -> Option<Symbol> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let idx = self.rng.random_range(0..self.alphabet.len());
        Some(self.alphabet[idx])
    }
}

pub fn config(traces: usize, violating: usize, min: usize, max: usize) -> GenerationConfig {
    GenerationConfig::builder()
        .traces_in_log(traces)
        .violating_in_log(violating)
        .min_events_per_trace(min)
        .max_events_per_trace(max)
        .seed(7u64)
        .build()
        .unwrap()
}
