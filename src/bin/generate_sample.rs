//! Writes `archivo.csv`, a synthetic meet with the quirks real exports have:
//! the legacy `Cat Prueba` header, mixed phase spellings, an unknown phase
//! and a few unreadable values.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct SampleRow<'a> {
    #[serde(rename = "Nadador")]
    swimmer: &'a str,
    #[serde(rename = "Estilo")]
    stroke: &'a str,
    #[serde(rename = "Distancia")]
    distance: u32,
    #[serde(rename = "Cat Prueba")]
    phase: &'a str,
    #[serde(rename = "Parametro")]
    parameter: &'a str,
    #[serde(rename = "Valor")]
    value: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Metrics of one swim, derived from its total time.
fn swim_metrics(distance: u32, total: f64, rng: &mut SimpleRng) -> Vec<(&'static str, f64)> {
    let d = f64::from(distance);
    let lap = total / (d / 25.0);
    let strokes_1 = rng.gauss(14.0, 1.0).round();
    let strokes_2 = rng.gauss(15.0, 1.0).round();
    let glide_1 = rng.gauss(7.0, 0.6);
    let glide_2 = rng.gauss(6.0, 0.6);
    vec![
        ("T15 (1)", lap * 0.55),
        ("T25 (1)", lap),
        ("T15 (2)", lap * 0.57 + 0.2),
        ("T25 (2)", lap * 1.04),
        ("T TOTAL", total),
        ("# de BRZ 1", strokes_1),
        ("# de BRZ 2", strokes_2),
        ("BRZ TOTAL", (strokes_1 + strokes_2) * d / 50.0),
        ("DIST x BRZ", (25.0 - glide_1) / strokes_1),
        ("V1", 25.0 / lap),
        ("V2", 25.0 / (lap * 1.04)),
        ("V promedio", d / total),
        ("F1", glide_1),
        ("F2", glide_2),
        ("F promedio", (glide_1 + glide_2) / 2.0),
        ("DIST sin F", d - glide_1 - glide_2),
    ]
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let swimmers = [
        ("Ana María López", 0.0),
        ("Luis Pérez", 1.2),
        ("Sofía Ramírez", -0.8),
        ("Diego Torres", 2.0),
        ("Valentina Cruz", 0.4),
        ("Mateo Herrera", 3.1),
    ];
    let strokes = [("Libre", 1.0), ("Espalda", 1.1)];
    let distances = [50u32, 100];
    // Mixed spellings as they appear in real exports.
    let phases = ["PRE-ELIMINAR", "Semi-Final", "FINAL", "CUARTOS"];

    let output_path = "archivo.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for &(swimmer, handicap) in &swimmers {
        for &(stroke, stroke_factor) in &strokes {
            for &distance in &distances {
                let base = (f64::from(distance) * 0.55 + handicap) * stroke_factor;
                for (phase_idx, &phase) in phases.iter().enumerate() {
                    // Only half the field swims the unofficial round.
                    if phase == "CUARTOS" && rng.next_f64() < 0.5 {
                        continue;
                    }
                    let total = rng.gauss(base - phase_idx as f64 * 0.3, 0.4);
                    for (parameter, value) in swim_metrics(distance, total, &mut rng) {
                        let value = if rng.next_f64() < 0.01 {
                            "N/D".to_string()
                        } else {
                            format!("{value:.2}")
                        };
                        writer.serialize(SampleRow {
                            swimmer,
                            stroke,
                            distance,
                            phase,
                            parameter,
                            value,
                        })?;
                        rows += 1;
                    }
                }
            }
        }
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {rows} rows for {} swimmers to {output_path}", swimmers.len());
    Ok(())
}
