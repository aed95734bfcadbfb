use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::{Distribution, ExactError, Mode, Pmf, Request};

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub sides: u32,
    pub dice: u32,
    pub mode: Mode,
    pub trials: u64,
    pub mean: f64,
    pub stddev: f64,
    pub points: Vec<ReportPoint>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReportPoint {
    pub value: u64,
    pub count: u64,
    pub share: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<f64>,
}

impl Report {
    #[must_use]
    pub fn new(request: &Request, dist: &Distribution) -> Self {
        let trials = dist.trials();
        let points = dist
            .points()
            .into_iter()
            .map(|point| ReportPoint {
                value: point.value,
                count: point.count,
                share: point.count as f64 / trials as f64 * 100.0,
                expected: None,
            })
            .collect();

        Self {
            sides: request.pool().sides(),
            dice: request.pool().count(),
            mode: request.mode(),
            trials,
            mean: dist.mean(),
            stddev: dist.stddev(),
            points,
        }
    }

    pub fn with_exact(
        request: &Request,
        dist: &Distribution,
        pmf: &Pmf,
    ) -> Result<Self, ExactError> {
        let mut report = Self::new(request, dist);
        for point in &mut report.points {
            point.expected = Some(pmf.probability(point.value)? * 100.0);
        }
        Ok(report)
    }

    #[must_use]
    pub fn table(&self) -> String {
        let with_exact = self.points.iter().any(|point| point.expected.is_some());

        let mut header = vec![Cell::new("Outcome"), Cell::new("Count"), Cell::new("Share")];
        if with_exact {
            header.push(Cell::new("Expected"));
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_NO_BORDERS)
            .set_content_arrangement(ContentArrangement::DynamicFullWidth)
            .set_header(header);
        for point in &self.points {
            let mut row = vec![
                Cell::new(point.value.to_string()),
                Cell::new(point.count.to_string()),
                Cell::new(format!("{:6.2}%", point.share)),
            ];
            if let Some(expected) = point.expected {
                row.push(Cell::new(format!("{expected:6.2}%")));
            }
            table.add_row(row);
        }

        let config = format!("{}d{} {}", self.dice, self.sides, self.mode);
        let mean = self.mean;
        let stddev = self.stddev;
        let trials = self.trials;
        format!("{config} | Mean: {mean:.3}±{stddev:.3} | Trials: {trials}\n\n{table}\n")
    }
}
