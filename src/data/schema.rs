//! Header cleanup and phase canonicalisation.
//!
//! Input files come from different spreadsheets, so column names carry stray
//! whitespace and slashes, and the phase column may still use its legacy
//! name. Everything downstream relies on the canonical names only.

use std::collections::BTreeMap;

use thiserror::Error;

use super::model::{Field, Phase};

/// Column holding the measurement value.
pub const VALUE_COLUMN: &str = "Valor";

/// Older name of the phase column ("test category").
pub const LEGACY_PHASE_COLUMN: &str = "Cat_Prueba";

/// Phase order column. It is derived from `Fase`, so an input copy is dropped.
pub const PHASE_ORDER_COLUMN: &str = "Fase_Orden";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("both 'Cat_Prueba' and 'Fase' columns are present; refusing to pick one")]
    ConflictingPhaseColumns,
    #[error("columns {first:?} and {second:?} both normalise to '{name}'")]
    DuplicateColumn {
        name: String,
        first: String,
        second: String,
    },
    #[error("required column '{0}' not found")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Normalise a raw header: trim, drop `/`, spaces become underscores.
///
/// Idempotent: `clean_column_name(&clean_column_name(s)) == clean_column_name(s)`.
pub fn clean_column_name(raw: &str) -> String {
    raw.trim()
        .replace('/', "")
        .replace(' ', "_")
        .trim()
        .to_string()
}

/// Positions of the canonical columns inside a raw header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    pub swimmer: usize,
    pub stroke: usize,
    pub distance: usize,
    pub phase: usize,
    pub parameter: usize,
    pub value: usize,
    /// Remaining columns as (index, cleaned name), in file order.
    pub extra: Vec<(usize, String)>,
}

impl HeaderMap {
    /// Clean every header, apply the legacy phase rename and locate the
    /// six canonical columns.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, SchemaError> {
        let cleaned: Vec<String> = headers
            .iter()
            .map(|h| clean_column_name(h.as_ref()))
            .collect();

        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for (i, name) in cleaned.iter().enumerate() {
            if let Some(&first) = seen.get(name.as_str()) {
                return Err(SchemaError::DuplicateColumn {
                    name: name.clone(),
                    first: headers[first].as_ref().to_string(),
                    second: headers[i].as_ref().to_string(),
                });
            }
            seen.insert(name, i);
        }

        let phase = match (
            seen.get(Field::Phase.column()),
            seen.get(LEGACY_PHASE_COLUMN),
        ) {
            (Some(_), Some(_)) => return Err(SchemaError::ConflictingPhaseColumns),
            (Some(&i), None) => i,
            (None, Some(&i)) => {
                log::debug!("renaming legacy column '{LEGACY_PHASE_COLUMN}' to 'Fase'");
                i
            }
            (None, None) => return Err(SchemaError::MissingColumn(Field::Phase.column())),
        };

        let find = |name: &'static str| seen.get(name).copied().ok_or(SchemaError::MissingColumn(name));

        let map = HeaderMap {
            swimmer: find(Field::Swimmer.column())?,
            stroke: find(Field::Stroke.column())?,
            distance: find(Field::Distance.column())?,
            phase,
            parameter: find(Field::Parameter.column())?,
            value: find(VALUE_COLUMN)?,
            extra: Vec::new(),
        };

        let canonical = [
            map.swimmer,
            map.stroke,
            map.distance,
            map.phase,
            map.parameter,
            map.value,
        ];
        let extra = cleaned
            .into_iter()
            .enumerate()
            .filter(|(i, name)| {
                if name == PHASE_ORDER_COLUMN {
                    log::debug!("ignoring input column '{PHASE_ORDER_COLUMN}', it is recomputed");
                    return false;
                }
                !canonical.contains(i)
            })
            .collect();

        Ok(HeaderMap { extra, ..map })
    }
}

// ---------------------------------------------------------------------------
// Phase values
// ---------------------------------------------------------------------------

/// Map a raw phase label onto a canonical [`Phase`].
///
/// Matching is case-insensitive and treats `Ó` as `O`. Anything else is
/// returned as [`Phase::Other`] with only the surrounding whitespace removed.
pub fn canonical_phase(raw: &str) -> Phase {
    let raw = raw.trim();
    let key = raw.to_uppercase().replace('Ó', "O");
    match key.as_str() {
        "PRELIMINAR" | "PRE-ELIMINAR" | "PRE ELIMINAR" => Phase::Preliminar,
        "SEMIFINAL" | "SEMI-FINAL" => Phase::Semifinal,
        "FINAL" => Phase::Final,
        _ => Phase::Other(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 6] = ["Nadador", "Estilo", "Distancia", "Fase", "Parametro", "Valor"];

    #[test]
    fn test_clean_column_name() {
        assert_eq!(clean_column_name("  Nadador "), "Nadador");
        assert_eq!(clean_column_name("Cat/Prueba"), "CatPrueba");
        assert_eq!(clean_column_name("Cat Prueba"), "Cat_Prueba");
        assert_eq!(clean_column_name("Tiempo / Total"), "Tiempo__Total");
        assert_eq!(clean_column_name("a\t/"), "a");
    }

    #[test]
    fn test_resolve_canonical_headers() {
        let map = HeaderMap::resolve(&HEADERS).unwrap();
        assert_eq!(map.swimmer, 0);
        assert_eq!(map.phase, 3);
        assert_eq!(map.value, 5);
        assert!(map.extra.is_empty());
    }

    #[test]
    fn test_resolve_legacy_phase_column() {
        let headers = [" Nadador", "Estilo ", "Distancia", "Cat Prueba", "Parametro", "Valor", "Club"];
        let map = HeaderMap::resolve(&headers).unwrap();
        assert_eq!(map.phase, 3);
        assert_eq!(map.extra, vec![(6, "Club".to_string())]);
    }

    #[test]
    fn test_conflicting_phase_columns() {
        let headers = ["Nadador", "Estilo", "Distancia", "Fase", "Cat_Prueba", "Parametro", "Valor"];
        assert_eq!(
            HeaderMap::resolve(&headers),
            Err(SchemaError::ConflictingPhaseColumns)
        );
    }

    #[test]
    fn test_duplicate_after_cleanup() {
        let headers = ["Nadador", "Estilo", "Distancia", "Fase", "Parametro", "Valor", " Valor "];
        assert!(matches!(
            HeaderMap::resolve(&headers),
            Err(SchemaError::DuplicateColumn { ref name, .. }) if name == "Valor"
        ));
    }

    #[test]
    fn test_missing_column() {
        let headers = ["Nadador", "Estilo", "Distancia", "Fase", "Parametro"];
        assert_eq!(
            HeaderMap::resolve(&headers),
            Err(SchemaError::MissingColumn("Valor"))
        );
        let headers = ["Nadador", "Estilo", "Distancia", "Parametro", "Valor"];
        assert_eq!(
            HeaderMap::resolve(&headers),
            Err(SchemaError::MissingColumn("Fase"))
        );
    }

    #[test]
    fn test_canonical_phase_variants() {
        for raw in ["PRE-ELIMINAR", "PRELIMINAR", "pre eliminar", "Preliminar"] {
            let phase = canonical_phase(raw);
            assert_eq!(phase, Phase::Preliminar, "{raw}");
            assert_eq!(phase.order(), Some(1));
        }
        assert_eq!(canonical_phase("Semi-Final"), Phase::Semifinal);
        assert_eq!(canonical_phase("FINAL"), Phase::Final);
        assert_eq!(canonical_phase("FINAL").order(), Some(3));
        assert_eq!(canonical_phase(" final "), Phase::Final);
    }

    #[test]
    fn test_unrecognised_phase_passes_through() {
        let phase = canonical_phase("CUARTOS");
        assert_eq!(phase, Phase::Other("CUARTOS".to_string()));
        assert_eq!(phase.order(), None);
        assert!(phase > Phase::Final);
        assert_eq!(canonical_phase(" CUARTOS "), phase);
        assert_eq!(canonical_phase("\tCuartos de final "), Phase::Other("Cuartos de final".to_string()));
    }

    #[test]
    fn test_input_phase_order_column_is_dropped() {
        let headers = ["Nadador", "Estilo", "Distancia", "Fase", "Fase Orden", "Parametro", "Valor", "Club"];
        let map = HeaderMap::resolve(&headers).unwrap();
        assert_eq!(map.extra, vec![(7, "Club".to_string())]);
    }
}
