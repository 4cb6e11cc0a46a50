//! Scan a handful of driver offers for a rider request and print the verdicts.
//!
//! Run with: cargo run -p trip_match --example candidate_scan

use trip_match::test_helpers::{la_route, north_line, sf_route, sf_route_offset, trip_at};
use trip_match::{Role, TripEvaluator, TripMatcher};

fn main() {
    let evaluator = TripEvaluator::default();
    let rider = trip_at(Role::Rider, 0, sf_route()).with_id("rider");

    let drivers = vec![
        trip_at(Role::Driver, 10, sf_route_offset()).with_id("shadowing"),
        trip_at(Role::Driver, 60, sf_route_offset()).with_id("late"),
        trip_at(Role::Driver, 5, la_route()).with_id("los-angeles"),
        trip_at(Role::Driver, -8, north_line(37.77, 0.002, 20)).with_id("northbound"),
    ];

    println!("--- Verdicts for rider against {} drivers ---", drivers.len());
    for driver in &drivers {
        let verdict = evaluator.evaluate(&rider, driver);
        let id = driver.id.as_deref().unwrap_or("?");
        match verdict.reason() {
            None => println!(
                "  {id:<12} match  {:>5.1}% route overlap",
                verdict.overlap_score().unwrap_or_default() * 100.0
            ),
            Some(reason) => println!("  {id:<12} no     {reason}"),
        }
    }

    let matches = evaluator.find_matches(&rider, &drivers);
    println!("\nMatched {} of {} drivers", matches.len(), drivers.len());
}
