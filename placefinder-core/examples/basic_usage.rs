//! Basic usage of the place finder

use placefinder_core::{Config, Input, PlaceFinder, SegmentationMode, TraceEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: default configuration
    println!("=== Example 1: Simple Usage ===");
    let mut finder = PlaceFinder::new()?;
    let text = "I went to San Francisco. Then I visited New York City.";
    let places = finder.find_places(text);

    println!("Input text: {}", text);
    for (place, count) in &places {
        println!("  {place}: {count}");
    }

    // Example 2: filter decisions from the trace
    println!("\n=== Example 2: Filter Decisions ===");
    for event in finder.trace() {
        if let TraceEvent::FilterDecision { candidate, verdict } = event {
            println!("  {candidate:<16} {verdict:?}");
        }
    }

    // Example 3: custom configuration
    println!("\n=== Example 3: Hybrid Segmentation ===");
    let config = Config::builder()
        .segmentation(SegmentationMode::Hybrid)
        .whitespace_aware(true)
        .build()?;
    let hybrid = PlaceFinder::with_config(config)?;
    let analysis = hybrid.process(Input::from_text(
        "From Kuala Lumpur we sailed\nto the Isle of Man.",
    ))?;

    println!("Raw candidates: {:?}", analysis.raw_candidates);
    println!("Places: {:?}", analysis.places);
    println!("  - Duration: {:?}", analysis.metadata.duration);
    println!("  - Sentences: {}", analysis.metadata.sentence_count);
    println!("  - Trace events: {}", analysis.events().len());

    Ok(())
}
