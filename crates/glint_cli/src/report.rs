//! Benchmark timing report.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

/// Wall-clock durations of the render passes, in seconds.
#[derive(Debug, Default)]
pub struct Timings {
    samples: Vec<f64>,
}

#[derive(Serialize)]
struct Report<'a> {
    average: f64,
    samples: &'a [f64],
}

impl Timings {
    /// Record one pass.
    pub fn push(&mut self, seconds: f64) {
        self.samples.push(seconds);
    }

    /// Mean duration across passes; zero when nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Write the report as JSON: `{"average": .., "samples": [..]}`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer(
            &mut w,
            &Report {
                average: self.average(),
                samples: &self.samples,
            },
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let mut timings = Timings::default();
        timings.push(1.0);
        timings.push(2.0);
        timings.push(3.0);
        assert_eq!(timings.average(), 2.0);
    }

    #[test]
    fn test_empty_average() {
        assert_eq!(Timings::default().average(), 0.0);
    }

    #[test]
    fn test_save_round_trips() {
        let mut timings = Timings::default();
        timings.push(0.5);
        timings.push(1.5);

        let path = std::env::temp_dir().join("glint_report_test.json");
        timings.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["average"], 1.0);
        assert_eq!(value["samples"][1], 1.5);
        std::fs::remove_file(&path).ok();
    }
}
