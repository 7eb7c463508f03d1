//! Trace output of boundary refinement

use fuzzspan_core::{Annotator, SimpleAnnotator};
use fuzzspan_engine::refiner::{refine_left, refine_right};
use fuzzspan_engine::*;
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct Capture {
    lines: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target() == "fuzzspan_engine::refiner" {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_every_candidate_is_traced() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let annotator = SimpleAnnotator::new();
    let words = ["xx", "alpha", "beta", "gamma", "delta", "epsilon", "zz"];
    let doc = annotator.annotate_words(&words);
    let query = annotator.annotate("alpha beta gamma delta epsilon");
    let scorer = WindowScorer::new(&doc, &query, FuzzyAlgorithm::Simple, false);

    assert_eq!(refine_left(&scorer, 0, 5, 80, 2), (1, 85));
    assert_eq!(refine_right(&scorer, 0, 5, 80, 2), (6, 95));

    let lines = CAPTURE.lines.lock().unwrap().clone();
    let candidates: Vec<&str> = lines
        .iter()
        .map(|line| line.split(" = ").next().unwrap_or_default())
        .collect();

    // No left edge below zero, so "ll" only fires for the unmoved edge
    assert_eq!(
        candidates,
        vec!["ll 0..5", "lr 0..5", "lr 1..5", "rl 0..5", "rr 0..5", "rl 0..4", "rr 0..6"]
    );
    assert!(lines.contains(&"lr 1..5 = 85".to_string()));
    assert!(lines.contains(&"rr 0..6 = 95".to_string()));
}
