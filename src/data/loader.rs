use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::coerce::CoercionStats;
use super::model::{Distance, Phase, SwimDataset, SwimRecord};
use super::schema::{HeaderMap, canonical_phase};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("input file is empty")]
    Empty,
    #[error("input file has a header but no data rows")]
    NoRows,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and normalise a swim telemetry CSV from disk.
pub fn load_csv(path: &Path) -> Result<SwimDataset> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    load_bytes(&bytes).with_context(|| format!("loading {}", path.display()))
}

/// Parse CSV content into the canonical table.
///
/// CSV layout: one header row, then one row per (swim, parameter)
/// observation. Header names are cleaned before lookup, so `" Nadador"`
/// and `"Cat Prueba"` are accepted. Columns beyond the six canonical ones
/// are kept as text.
///
/// Fails on an empty file, a header without rows, or an unusable header
/// (see [`super::schema::SchemaError`]). Bad values and unknown phases are
/// not errors. Text cells that are not valid UTF-8 are decoded lossily; a
/// `Valor` cell that is not valid UTF-8 counts as not numeric.
pub fn load_bytes(bytes: &[u8]) -> Result<SwimDataset> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(LoadError::Empty.into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let map = HeaderMap::resolve(&headers)?;

    let mut stats = CoercionStats::default();
    let mut unknown_phases: BTreeSet<String> = BTreeSet::new();
    let mut records = Vec::new();

    for (row_no, result) in reader.byte_records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let raw = |idx: usize| record.get(idx).unwrap_or_default();
        let cell = |idx: usize| String::from_utf8_lossy(raw(idx));

        let phase = canonical_phase(&cell(map.phase));
        if let Phase::Other(label) = &phase {
            if unknown_phases.insert(label.clone()) {
                log::warn!("unrecognised phase {label:?} (row {row_no}) kept as-is");
            }
        }

        records.push(SwimRecord {
            swimmer: cell(map.swimmer).trim().to_string(),
            stroke: cell(map.stroke).trim().to_string(),
            distance: Distance::new(&cell(map.distance)),
            phase,
            parameter: cell(map.parameter).trim().to_string(),
            value: match std::str::from_utf8(raw(map.value)) {
                Ok(text) => stats.coerce(text),
                Err(_) => stats.reject(),
            },
            extra: map.extra.iter().map(|(idx, _)| cell(*idx).into_owned()).collect(),
        });
    }

    if records.is_empty() {
        return Err(LoadError::NoRows.into());
    }

    if stats.missing() > 0 {
        log::info!(
            "{} numeric values, {} missing ({} blank, {} not numeric)",
            stats.numeric,
            stats.missing(),
            stats.blank,
            stats.invalid
        );
    }
    log::debug!("coercion: {stats:?}");

    let extra_columns = map.extra.into_iter().map(|(_, name)| name).collect();
    Ok(SwimDataset::from_records(records, extra_columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Field;
    use crate::data::schema::SchemaError;

    const SAMPLE: &str = "\
 Nadador ,Estilo,Distancia,Cat/Prueba,Cat Prueba,Parametro,Valor,Club
Ana López,Libre,100,x,PRE-ELIMINAR,T TOTAL,61.2,Fénix
Ana López,Libre,100,x,Final,T TOTAL,59.8,Fénix
Luis Pérez,Libre,100,x,CUARTOS,T TOTAL,DNF,Fénix
Luis Pérez,Espalda,50,x,semifinal,V1,,Fénix
";

    #[test]
    fn loads_and_normalises() {
        let ds = load_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.extra_columns, vec!["CatPrueba".to_string(), "Club".to_string()]);

        let first = &ds.records[0];
        assert_eq!(first.swimmer, "Ana López");
        assert_eq!(first.phase, Phase::Preliminar);
        assert_eq!(first.value, Some(61.2));
        assert_eq!(first.extra, vec!["x".to_string(), "Fénix".to_string()]);

        assert_eq!(ds.records[2].phase, Phase::Other("CUARTOS".to_string()));
        assert_eq!(ds.records[2].value, None);
        assert_eq!(ds.records[3].phase, Phase::Semifinal);
        assert_eq!(ds.records[3].value, None);
        assert_eq!(ds.distinct(Field::Distance), ["50", "100"]);
    }

    #[test]
    fn conflicting_phase_columns_are_fatal() {
        let csv = "Nadador,Estilo,Distancia,Fase,Cat_Prueba,Parametro,Valor\nA,Libre,50,Final,Final,T TOTAL,30\n";
        let err = load_bytes(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SchemaError>(),
            Some(&SchemaError::ConflictingPhaseColumns)
        );
    }

    #[test]
    fn empty_input_is_fatal() {
        let err = load_bytes(b"").unwrap_err();
        assert_eq!(err.downcast_ref::<LoadError>(), Some(&LoadError::Empty));

        let err = load_bytes(b"Nadador,Estilo,Distancia,Fase,Parametro,Valor\n").unwrap_err();
        assert_eq!(err.downcast_ref::<LoadError>(), Some(&LoadError::NoRows));
    }

    #[test]
    fn padded_unknown_phases_collapse() {
        let csv = "Nadador,Estilo,Distancia,Fase,Parametro,Valor,Fase_Orden\n\
A,Libre,50,CUARTOS,T TOTAL,30,9\n\
A,Libre,50, CUARTOS ,T TOTAL,31,9\n\
A,Libre,50, final ,T TOTAL,29,9\n";
        let ds = load_bytes(csv.as_bytes()).unwrap();
        assert_eq!(ds.distinct(Field::Phase), ["Final", "CUARTOS"]);
        assert!(ds.extra_columns.is_empty());
        assert!(ds.records.iter().all(|r| r.extra.is_empty()));
    }

    #[test]
    fn non_utf8_cells_are_not_fatal() {
        let csv = b"Nadador,Estilo,Distancia,Fase,Parametro,Valor,Club\n\
Ana,Libre,50,Final,T TOTAL,30.5,F\xe9nix\n\
Luis,Libre,50,Final,T TOTAL,\xe9\n";
        let ds = load_bytes(csv).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].value, Some(30.5));
        assert_eq!(ds.records[0].extra, vec!["F\u{fffd}nix".to_string()]);
        assert_eq!(ds.records[1].swimmer, "Luis");
        assert_eq!(ds.records[1].value, None);
    }

    #[test]
    fn missing_file_is_fatal() {
        let path = std::env::temp_dir()
            .join(format!("swim_analyst_does_not_exist_{}.csv", std::process::id()));
        let _ = std::fs::remove_file(&path);
        assert!(load_csv(&path).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("swim_analyst_loader_test_{}.csv", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.distinct(Field::Swimmer), ["Ana López", "Luis Pérez"]);
        let _ = std::fs::remove_file(&path);
    }
}
