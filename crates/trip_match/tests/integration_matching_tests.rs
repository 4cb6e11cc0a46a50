use trip_match::overlap::overlap_fraction;
use trip_match::test_helpers::{la_route, north_line, sf_route, sf_route_offset, trip_at};
use trip_match::{MatchConfig, MatchVerdict, MismatchReason, Role, TripEvaluator, TripMatcher};

fn default_overlap(from: &trip_match::Path, to: &trip_match::Path) -> f64 {
    let config = MatchConfig::default();
    overlap_fraction(
        from.points(),
        to.points(),
        config.match_threshold_km,
        config.max_samples,
    )
}

#[test]
fn nearby_routes_overlap_highly() {
    let score = default_overlap(&sf_route(), &sf_route_offset());
    assert!(score > 0.8, "score {score}");
}

#[test]
fn distant_routes_barely_overlap() {
    let score = default_overlap(&sf_route(), &la_route());
    assert!(score < 0.1, "score {score}");
}

#[test]
fn rider_and_driver_ten_minutes_apart_match() {
    let rider = trip_at(Role::Rider, 0, sf_route());
    let driver = trip_at(Role::Driver, 10, sf_route_offset());

    let verdict = TripEvaluator::default().evaluate(&rider, &driver);
    assert!(verdict.is_match());
    assert!(verdict.overlap_score().expect("overlap computed") > 0.6);
}

#[test]
fn an_hour_apart_is_a_time_mismatch() {
    let rider = trip_at(Role::Rider, 0, sf_route());
    let driver = trip_at(Role::Driver, 60, sf_route_offset());

    let verdict = TripEvaluator::default().evaluate(&rider, &driver);
    assert_eq!(
        verdict,
        MatchVerdict::NotMatched {
            reason: MismatchReason::TimeMismatch,
            overlap_score: None,
        }
    );
}

#[test]
fn two_riders_are_rejected_regardless_of_overlap() {
    let rider = trip_at(Role::Rider, 0, sf_route());
    let other_rider = trip_at(Role::Rider, 0, sf_route());

    let verdict = TripEvaluator::default().evaluate(&rider, &other_rider);
    assert_eq!(verdict.reason(), Some(MismatchReason::SameRole));
    assert_eq!(verdict.overlap_score(), None);
}

#[test]
fn two_drivers_are_rejected() {
    let a = trip_at(Role::Driver, 0, sf_route());
    let b = trip_at(Role::Driver, 5, sf_route_offset());

    let verdict = TripEvaluator::default().evaluate(&a, &b);
    assert_eq!(verdict.reason(), Some(MismatchReason::SameRole));
}

#[test]
fn time_check_runs_before_role_check() {
    let a = trip_at(Role::Rider, 0, sf_route());
    let b = trip_at(Role::Rider, 90, sf_route());

    let verdict = TripEvaluator::default().evaluate(&a, &b);
    assert_eq!(verdict.reason(), Some(MismatchReason::TimeMismatch));
}

#[test]
fn far_routes_report_insufficient_overlap_with_score() {
    let rider = trip_at(Role::Rider, 0, sf_route());
    let driver = trip_at(Role::Driver, 0, la_route());

    let verdict = TripEvaluator::default().evaluate(&rider, &driver);
    assert_eq!(
        verdict,
        MatchVerdict::NotMatched {
            reason: MismatchReason::InsufficientOverlap,
            overlap_score: Some(0.0),
        }
    );
}

#[test]
fn rider_path_is_the_reference_whichever_side_calls() {
    // Driver covers the whole short rider path; the reverse covers a quarter.
    let long = north_line(37.70, 0.005, 40);
    let short = north_line(37.72, 0.01, 5);
    let evaluator = TripEvaluator::default();

    let rider_short = trip_at(Role::Rider, 0, short.clone());
    let driver_long = trip_at(Role::Driver, 0, long.clone());
    assert_eq!(
        evaluator.evaluate(&rider_short, &driver_long),
        MatchVerdict::Matched { overlap_score: 1.0 }
    );
    assert_eq!(
        evaluator.evaluate(&driver_long, &rider_short),
        MatchVerdict::Matched { overlap_score: 1.0 }
    );

    let rider_long = trip_at(Role::Rider, 0, long);
    let driver_short = trip_at(Role::Driver, 0, short);
    assert_eq!(
        evaluator.evaluate(&rider_long, &driver_short),
        MatchVerdict::NotMatched {
            reason: MismatchReason::InsufficientOverlap,
            overlap_score: Some(0.25),
        }
    );
    assert_eq!(
        evaluator.evaluate(&driver_short, &rider_long).overlap_score(),
        Some(0.25)
    );
}

#[test]
fn overlap_exactly_at_threshold_matches() {
    // Three of five rider points lie on the driver route, two are in Los Angeles.
    let mut points = sf_route().into_points();
    points.extend(la_route().into_points());
    let rider = trip_at(Role::Rider, 0, points.into());
    let driver = trip_at(Role::Driver, 0, sf_route());

    let verdict = TripEvaluator::default().evaluate(&rider, &driver);
    assert_eq!(verdict, MatchVerdict::Matched { overlap_score: 0.6 });

    let strict = TripEvaluator::new(MatchConfig::default().with_overlap_threshold(0.61));
    assert_eq!(
        strict.evaluate(&rider, &driver).reason(),
        Some(MismatchReason::InsufficientOverlap)
    );
}

#[test]
fn fifteen_minute_gap_is_inside_the_window() {
    let rider = trip_at(Role::Rider, 0, sf_route());
    let driver = trip_at(Role::Driver, -15, sf_route_offset());
    assert!(TripEvaluator::default().evaluate(&rider, &driver).is_match());

    let late = trip_at(Role::Driver, 16, sf_route_offset());
    assert_eq!(
        TripEvaluator::default().evaluate(&rider, &late).reason(),
        Some(MismatchReason::TimeMismatch)
    );
}

#[test]
fn configured_window_widens_acceptance() {
    let rider = trip_at(Role::Rider, 0, sf_route());
    let driver = trip_at(Role::Driver, 60, sf_route_offset());
    let evaluator = TripEvaluator::new(MatchConfig::default().with_time_window_minutes(60.0));

    assert!(evaluator.evaluate(&rider, &driver).is_match());
}

#[test]
fn configured_threshold_changes_proximity() {
    let rider = trip_at(Role::Rider, 0, sf_route());
    let driver = trip_at(Role::Driver, 0, sf_route_offset());
    let evaluator = TripEvaluator::new(MatchConfig::default().with_match_threshold_km(0.001));

    assert_eq!(
        evaluator.evaluate(&rider, &driver).overlap_score(),
        Some(0.0)
    );
}

#[test]
fn empty_rider_path_never_matches() {
    let rider = trip_at(Role::Rider, 0, trip_match::Path::default());
    let driver = trip_at(Role::Driver, 0, sf_route());

    let verdict = TripEvaluator::default().evaluate(&rider, &driver);
    assert_eq!(verdict.overlap_score(), Some(0.0));
    assert!(!verdict.is_match());
}

#[test]
fn find_matches_keeps_matching_candidates_in_order() {
    let mine = trip_at(Role::Rider, 0, sf_route()).with_id("me");
    let candidates = vec![
        trip_at(Role::Driver, 5, sf_route_offset()).with_id("near"),
        trip_at(Role::Driver, 5, la_route()).with_id("far"),
        trip_at(Role::Rider, 0, sf_route()).with_id("rider"),
        trip_at(Role::Driver, 45, sf_route()).with_id("late"),
        trip_at(Role::Driver, -3, sf_route()).with_id("early"),
    ];

    let matches = TripEvaluator::default().find_matches(&mine, &candidates);
    let ids: Vec<_> = matches
        .iter()
        .map(|m| m.candidate_id.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["near", "early"]);
    assert_eq!(matches[0].candidate_index, 0);
    assert_eq!(matches[1].candidate_index, 4);
    assert_eq!(matches[1].overlap_score, 1.0);
}

#[test]
fn find_matches_skips_the_trip_itself() {
    let mine = trip_at(Role::Driver, 0, sf_route()).with_id("same");
    // A record with the same id but a rider role, as a stale copy would look.
    let candidates = vec![
        trip_at(Role::Rider, 0, sf_route()).with_id("same"),
        trip_at(Role::Rider, 0, sf_route()),
    ];

    let matches = TripEvaluator::default().find_matches(&mine, &candidates);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].candidate_index, 1);
    assert_eq!(matches[0].candidate_id, None);
}
