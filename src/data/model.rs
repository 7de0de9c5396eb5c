use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Phase – competition round
// ---------------------------------------------------------------------------

/// A competition round after canonicalisation.
///
/// Labels the normaliser does not recognise are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    Preliminar,
    Semifinal,
    Final,
    Other(String),
}

impl Phase {
    /// Position of the phase in the competition (`Fase_Orden`).
    /// `None` for unrecognised phases.
    pub fn order(&self) -> Option<u8> {
        match self {
            Phase::Preliminar => Some(1),
            Phase::Semifinal => Some(2),
            Phase::Final => Some(3),
            Phase::Other(_) => None,
        }
    }

    /// Canonical label, or the raw label for unrecognised phases.
    pub fn label(&self) -> &str {
        match self {
            Phase::Preliminar => "Preliminar",
            Phase::Semifinal => "Semifinal",
            Phase::Final => "Final",
            Phase::Other(raw) => raw,
        }
    }

    /// X coordinate used by the comparative charts. Unordered phases go
    /// after the final.
    pub fn axis_position(&self) -> f64 {
        self.order().map_or(4.0, f64::from)
    }
}

// Ordered phases first (1, 2, 3), then unordered ones by label.
impl Ord for Phase {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.order(), other.order()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.label().cmp(other.label()),
        }
    }
}

impl PartialOrd for Phase {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Distance – event distance label with natural ordering
// ---------------------------------------------------------------------------

/// Event distance as written in the input (e.g. `"100"`).
///
/// Ordered numerically when both labels are numbers, so `50 < 100`.
/// Numeric labels sort before non-numeric ones, which compare as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Distance(String);

impl Distance {
    pub fn new(label: &str) -> Self {
        Distance(label.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// SwimRecord – one row of the canonical table
// ---------------------------------------------------------------------------

/// One observation of one parameter for one swim.
#[derive(Debug, Clone, PartialEq)]
pub struct SwimRecord {
    pub swimmer: String,
    pub stroke: String,
    pub distance: Distance,
    pub phase: Phase,
    /// Raw parameter code (e.g. `"T TOTAL"`).
    pub parameter: String,
    /// Finite value, or `None` when the cell could not be read as a number.
    pub value: Option<f64>,
    /// Values of the non-canonical columns, aligned with
    /// [`SwimDataset::extra_columns`].
    pub extra: Vec<String>,
}

// ---------------------------------------------------------------------------
// Field – the five filterable columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Swimmer,
    Stroke,
    Distance,
    Phase,
    Parameter,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Swimmer,
        Field::Stroke,
        Field::Distance,
        Field::Phase,
        Field::Parameter,
    ];

    /// Canonical column name.
    pub fn column(self) -> &'static str {
        match self {
            Field::Swimmer => "Nadador",
            Field::Stroke => "Estilo",
            Field::Distance => "Distancia",
            Field::Phase => "Fase",
            Field::Parameter => "Parametro",
        }
    }

    /// The record's value for this field, as used for filtering.
    pub fn value_of(self, record: &SwimRecord) -> &str {
        match self {
            Field::Swimmer => &record.swimmer,
            Field::Stroke => &record.stroke,
            Field::Distance => record.distance.as_str(),
            Field::Phase => record.phase.label(),
            Field::Parameter => &record.parameter,
        }
    }
}

// ---------------------------------------------------------------------------
// SwimDataset – the canonical table
// ---------------------------------------------------------------------------

/// The fully normalised dataset with pre-computed distinct values.
///
/// Built once per input file and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SwimDataset {
    pub records: Vec<SwimRecord>,
    /// Input columns beyond the six canonical ones, in file order.
    pub extra_columns: Vec<String>,
    distinct: BTreeMap<Field, Vec<String>>,
}

impl SwimDataset {
    /// Build the distinct-value index from the loaded records.
    pub fn from_records(records: Vec<SwimRecord>, extra_columns: Vec<String>) -> Self {
        let mut swimmers = BTreeSet::new();
        let mut strokes = BTreeSet::new();
        let mut distances = BTreeSet::new();
        let mut phases = BTreeSet::new();
        let mut parameters = BTreeSet::new();

        for rec in &records {
            swimmers.insert(rec.swimmer.as_str());
            strokes.insert(rec.stroke.as_str());
            distances.insert(&rec.distance);
            phases.insert(&rec.phase);
            parameters.insert(rec.parameter.as_str());
        }

        let mut distinct = BTreeMap::new();
        distinct.insert(Field::Swimmer, to_owned(swimmers));
        distinct.insert(Field::Stroke, to_owned(strokes));
        distinct.insert(
            Field::Distance,
            distances.into_iter().map(|d| d.as_str().to_string()).collect(),
        );
        distinct.insert(
            Field::Phase,
            phases.into_iter().map(|p| p.label().to_string()).collect(),
        );
        distinct.insert(Field::Parameter, to_owned(parameters));

        SwimDataset {
            records,
            extra_columns,
            distinct,
        }
    }

    /// Distinct values of a field in display order (distances naturally,
    /// phases by competition order, everything else alphabetically).
    pub fn distinct(&self, field: Field) -> &[String] {
        self.distinct.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn to_owned(set: BTreeSet<&str>) -> Vec<String> {
    set.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(
        swimmer: &str,
        stroke: &str,
        distance: &str,
        phase: Phase,
        parameter: &str,
        value: Option<f64>,
    ) -> SwimRecord {
        SwimRecord {
            swimmer: swimmer.to_string(),
            stroke: stroke.to_string(),
            distance: Distance::new(distance),
            phase,
            parameter: parameter.to_string(),
            value,
            extra: Vec::new(),
        }
    }

    #[test]
    fn phase_order_puts_unknown_last() {
        let mut phases = vec![
            Phase::Other("CUARTOS".into()),
            Phase::Final,
            Phase::Preliminar,
            Phase::Semifinal,
        ];
        phases.sort();
        assert_eq!(
            phases,
            vec![
                Phase::Preliminar,
                Phase::Semifinal,
                Phase::Final,
                Phase::Other("CUARTOS".into()),
            ]
        );
        assert_eq!(Phase::Other("CUARTOS".into()).order(), None);
        assert_eq!(Phase::Final.order(), Some(3));
    }

    #[test]
    fn distance_orders_naturally() {
        let mut d = vec![Distance::new("200"), Distance::new("50"), Distance::new("100")];
        d.sort();
        let labels: Vec<&str> = d.iter().map(Distance::as_str).collect();
        assert_eq!(labels, ["50", "100", "200"]);
        assert!(Distance::new("1500") < Distance::new("relevo"));
    }

    #[test]
    fn distinct_values_are_sorted_per_field() {
        let ds = SwimDataset::from_records(
            vec![
                record("Luis", "Libre", "100", Phase::Final, "T TOTAL", Some(60.0)),
                record("Ana", "Espalda", "50", Phase::Preliminar, "V1", None),
                record("Ana", "Libre", "100", Phase::Other("CUARTOS".into()), "T TOTAL", None),
            ],
            Vec::new(),
        );
        assert_eq!(ds.distinct(Field::Swimmer), ["Ana", "Luis"]);
        assert_eq!(ds.distinct(Field::Distance), ["50", "100"]);
        assert_eq!(ds.distinct(Field::Phase), ["Preliminar", "Final", "CUARTOS"]);
        assert_eq!(ds.distinct(Field::Parameter), ["T TOTAL", "V1"]);
        assert_eq!(ds.len(), 3);
    }
}
