//! Best-time ranking per (stroke, distance).
//!
//! Each swimmer keeps only their fastest total time; swimmers are ordered
//! fastest first with ties broken by name, and groups are ordered by stroke
//! then distance.

use std::collections::BTreeMap;

use super::catalog::TOTAL_TIME_CODE;
use super::model::{Distance, SwimRecord};

/// One swimmer's best total time within a group.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub swimmer: String,
    pub best_time: f64,
}

/// Ranking for one (stroke, distance) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingGroup {
    pub stroke: String,
    pub distance: Distance,
    /// Fastest first.
    pub entries: Vec<RankEntry>,
}

impl RankingGroup {
    pub fn title(&self) -> String {
        format!("{} – {}m", self.stroke, self.distance)
    }
}

/// Rank every swimmer's best total time, grouped by stroke and distance.
///
/// Rows with another parameter or a missing value are ignored.
pub fn rank_total_times<'a, I>(records: I) -> Vec<RankingGroup>
where
    I: IntoIterator<Item = &'a SwimRecord>,
{
    // (stroke, distance) -> swimmer -> best time. BTreeMap keeps both the
    // group order and the name order needed for tie-breaks.
    let mut best: BTreeMap<(&str, &Distance), BTreeMap<&str, f64>> = BTreeMap::new();

    for rec in records {
        if rec.parameter != TOTAL_TIME_CODE {
            continue;
        }
        let Some(value) = rec.value else {
            continue;
        };
        best.entry((rec.stroke.as_str(), &rec.distance))
            .or_default()
            .entry(rec.swimmer.as_str())
            .and_modify(|t| *t = t.min(value))
            .or_insert(value);
    }

    best.into_iter()
        .map(|((stroke, distance), swimmers)| {
            let mut entries: Vec<RankEntry> = swimmers
                .into_iter()
                .map(|(swimmer, best_time)| RankEntry {
                    swimmer: swimmer.to_string(),
                    best_time,
                })
                .collect();
            // Stable sort over name-ordered input: equal times stay by name.
            entries.sort_by(|a, b| a.best_time.total_cmp(&b.best_time));
            RankingGroup {
                stroke: stroke.to_string(),
                distance: distance.clone(),
                entries,
            }
        })
        .collect()
}

/// Short form of a swimmer name for narrow layouts: `"Ana María López"`
/// becomes `"A. López"`. Blank names are returned unchanged.
pub fn abbreviate_name(name: &str) -> String {
    let mut words = name.split_whitespace();
    let (Some(first), last) = (words.next(), words.next_back()) else {
        return name.to_string();
    };
    let initial: String = first.chars().take(1).collect();
    format!("{initial}. {}", last.unwrap_or(first))
}
