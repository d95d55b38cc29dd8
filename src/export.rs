use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

use crate::{
    calculation::{compute_repayment, RepaymentFigures, Slice},
    mortgage::MortgageInputs,
};

/// The breakdown of one snapshot as written by `e` and `--json`.
#[derive(Debug, Serialize)]
pub struct BreakdownReport {
    pub inputs: MortgageInputs,
    pub figures: RepaymentFigures,
    pub slices: [Slice; 2],
}

impl BreakdownReport {
    pub fn new(inputs: MortgageInputs) -> Self {
        let repayment = compute_repayment(&inputs);
        Self {
            inputs,
            figures: repayment.displayed(),
            slices: repayment.slices(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize breakdown")
    }
}

pub fn export_breakdown(inputs: MortgageInputs, path: &Path) -> Result<()> {
    let json = BreakdownReport::new(inputs).to_json()?;
    let mut file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    writeln!(file, "{json}")?;
    Ok(())
}
