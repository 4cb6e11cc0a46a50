use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use trip_match::{MatchConfig, MatchVerdict, Role, TripEvaluator, TripIntent, TripMatcher, TripRecord};

/// One matched counterpart in a scan report.
#[derive(Debug, Serialize)]
pub struct MatchEntry {
    pub id: Option<String>,
    pub role: Role,
    pub departure_time: DateTime<Utc>,
    pub overlap_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub trip_id: String,
    pub role: Role,
    pub candidates: usize,
    pub skipped: usize,
    pub matches: Vec<MatchEntry>,
}

pub fn load_records(path: &Path) -> Result<Vec<TripRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read trips {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid trips file {}", path.display()))
}

fn find_record<'a>(records: &'a [TripRecord], id: &str) -> Result<&'a TripRecord> {
    records
        .iter()
        .find(|record| record.id.as_deref() == Some(id))
        .with_context(|| format!("no trip with id {id}"))
}

/// Match one trip against every stored trip of the counterpart role.
///
/// Candidates whose paths fail to decode are logged and left out.
pub fn scan(
    records: &[TripRecord],
    trip_id: &str,
    now: Option<DateTime<Utc>>,
    config: MatchConfig,
) -> Result<ScanReport> {
    let mut mine = find_record(records, trip_id)?.resolve()?;
    if let Some(now) = now {
        mine = mine.with_departure_time(now);
    }

    let wanted = mine.role.counterpart();
    let mut skipped = 0;
    let candidates: Vec<TripIntent> = records
        .iter()
        .filter(|record| record.role == wanted)
        .filter_map(|record| match record.resolve() {
            Ok(intent) => Some(intent),
            Err(err) => {
                warn!(error = %err, "skipping undecodable trip");
                skipped += 1;
                None
            }
        })
        .collect();

    let evaluator = TripEvaluator::new(config);
    let matches: Vec<MatchEntry> = evaluator
        .find_matches(&mine, &candidates)
        .into_iter()
        .map(|found| {
            let candidate = &candidates[found.candidate_index];
            MatchEntry {
                id: found.candidate_id,
                role: candidate.role,
                departure_time: candidate.departure_time,
                overlap_percent: (found.overlap_score * 1000.0).round() / 10.0,
            }
        })
        .collect();

    info!(
        trip_id,
        candidates = candidates.len(),
        skipped,
        matched = matches.len(),
        "scan complete"
    );

    Ok(ScanReport {
        trip_id: trip_id.to_string(),
        role: mine.role,
        candidates: candidates.len(),
        skipped,
        matches,
    })
}

pub fn compare(
    records: &[TripRecord],
    mine: &str,
    other: &str,
    config: MatchConfig,
) -> Result<MatchVerdict> {
    let mine = find_record(records, mine)?;
    let other = find_record(records, other)?;
    let verdict = TripEvaluator::new(config).evaluate_records(mine, other)?;
    Ok(verdict)
}
