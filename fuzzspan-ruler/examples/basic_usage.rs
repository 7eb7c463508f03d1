//! Basic usage of searching and labeling

use fuzzspan_core::{Annotator, SimpleAnnotator};
use fuzzspan_engine::{FuzzyAlgorithm, FuzzySearcher, SearchOptions};
use fuzzspan_ruler::{FuzzyRuler, RulerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let annotator = SimpleAnnotator::new();
    let doc = annotator.annotate("chiken from Popeyes is better than chken from Chick-fil-A");

    // Method 1: Single best match
    println!("=== Method 1: Best Match ===");
    let searcher = FuzzySearcher::default();
    if let Some(found) = searcher.best_match(&doc, "chicken", &SearchOptions::default())? {
        println!(
            "  '{}' at {}",
            doc.span_text(found.start(), found.end()),
            found
        );
    }

    // Method 2: Several non-overlapping matches
    println!("\n=== Method 2: Multi Match ===");
    let options = SearchOptions::builder()
        .algorithm(FuzzyAlgorithm::Simple)
        .case_sensitive(true)
        .min_ratio(75)
        .build()?;
    for found in searcher.multi_match(&doc, "chicken", 3, &options)? {
        println!("  '{}' at {}", doc.span_text(found.start(), found.end()), found);
    }

    // Method 3: Labeling with a ruler
    println!("\n=== Method 3: Fuzzy Ruler ===");
    let config = RulerConfig::builder()
        .term("chicken", "FOOD")
        .term("Popeyes", "ORG")
        .overlap_adjust(1)
        .build()?;
    let ruler = FuzzyRuler::new(config)?;
    let entities = ruler.apply(&doc)?;
    for span in entities.spans() {
        println!("  '{}' {}", doc.span_text(span.start, span.end), span);
    }

    Ok(())
}
