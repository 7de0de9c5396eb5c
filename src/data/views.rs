//! Chart series and detail tables derived from the filtered rows.

use std::collections::{BTreeMap, BTreeSet};

use super::catalog::{self, Category};
use super::model::{Distance, Phase, SwimRecord};

/// One point of a comparative chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasePoint {
    pub phase: Phase,
    pub value: f64,
}

impl PhasePoint {
    pub fn x(&self) -> f64 {
        self.phase.axis_position()
    }
}

/// One swimmer's line in a chart, ordered by phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub swimmer: String,
    pub points: Vec<PhasePoint>,
}

/// A line chart for one parameter and one stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterChart {
    pub parameter: String,
    pub stroke: String,
    pub series: Vec<Series>,
}

impl ParameterChart {
    pub fn title(&self) -> String {
        format!("{} – Estilo: {}", catalog::display_name(&self.parameter), self.stroke)
    }
}

/// All charts of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub category: Category,
    pub charts: Vec<ParameterChart>,
}

/// Group filtered rows into category sections of per-stroke line charts.
///
/// Codes outside every category are skipped. Within a chart there is one
/// series per swimmer (by name), each ordered by phase with unknown phases
/// last; rows without a value are left out of the lines.
pub fn chart_sections(rows: &[&SwimRecord]) -> Vec<CategorySection> {
    let present: BTreeSet<&str> = rows.iter().map(|r| r.parameter.as_str()).collect();

    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let charts: Vec<ParameterChart> = category
                .codes()
                .iter()
                .filter(|code| present.contains(*code))
                .flat_map(|code| parameter_charts(rows, code))
                .collect();
            (!charts.is_empty()).then_some(CategorySection { category, charts })
        })
        .collect()
}

fn parameter_charts(rows: &[&SwimRecord], code: &str) -> Vec<ParameterChart> {
    let mut by_stroke: BTreeMap<&str, BTreeMap<&str, Vec<PhasePoint>>> = BTreeMap::new();

    for rec in rows.iter().filter(|r| r.parameter == code) {
        let lines = by_stroke.entry(rec.stroke.as_str()).or_default();
        let points = lines.entry(rec.swimmer.as_str()).or_default();
        if let Some(value) = rec.value {
            points.push(PhasePoint {
                phase: rec.phase.clone(),
                value,
            });
        }
    }

    by_stroke
        .into_iter()
        .map(|(stroke, lines)| ParameterChart {
            parameter: code.to_string(),
            stroke: stroke.to_string(),
            series: lines
                .into_iter()
                .map(|(swimmer, mut points)| {
                    points.sort_by(|a, b| a.phase.cmp(&b.phase));
                    Series {
                        swimmer: swimmer.to_string(),
                        points,
                    }
                })
                .collect(),
        })
        .collect()
}

/// One row of a swimmer's detail table.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub stroke: String,
    pub distance: Distance,
    pub phase: Phase,
    /// Display name of the parameter (raw code when not catalogued).
    pub parameter: String,
    pub value: Option<f64>,
    pub extra: Vec<String>,
}

/// Detail table for one swimmer.
#[derive(Debug, Clone, PartialEq)]
pub struct SwimmerDetail {
    pub swimmer: String,
    pub rows: Vec<DetailRow>,
}

/// Split filtered rows into one table per selected swimmer.
///
/// Swimmers appear in the given order, rows in input order. A swimmer with
/// no matching rows still gets an (empty) table.
pub fn swimmer_details<'a, S>(rows: &[&SwimRecord], swimmers: S) -> Vec<SwimmerDetail>
where
    S: IntoIterator<Item = &'a String>,
{
    swimmers
        .into_iter()
        .map(|swimmer| SwimmerDetail {
            swimmer: swimmer.clone(),
            rows: rows
                .iter()
                .filter(|r| &r.swimmer == swimmer)
                .map(|r| DetailRow {
                    stroke: r.stroke.clone(),
                    distance: r.distance.clone(),
                    phase: r.phase.clone(),
                    parameter: catalog::display_name(&r.parameter).to_string(),
                    value: r.value,
                    extra: r.extra.clone(),
                })
                .collect(),
        })
        .collect()
}
