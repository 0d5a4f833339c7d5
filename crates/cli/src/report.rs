//! Machine-readable summary of one run.

use crate::provenance::{self, Payload};
use crate::settings::Settings;
use anyhow::{Context, Result};
use bipersistence::groebner::SaturationStats;
use bipersistence::{format, ModuleElement, Presentation};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct Report {
    pub input: String,
    pub degree: u8,
    pub points: usize,
    pub n_rows: usize,
    pub boundary_columns: usize,
    pub groebner_size: usize,
    pub stats: Stats,
    pub reduced: Vec<Vec<Entry>>,
    pub gap: String,
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub pairs_examined: u64,
    pub disjoint_leads: u64,
    pub zero_s_polys: u64,
    pub zero_reductions: u64,
    pub generators_added: u64,
}

impl From<SaturationStats> for Stats {
    fn from(s: SaturationStats) -> Self {
        Self {
            pairs_examined: s.pairs_examined,
            disjoint_leads: s.disjoint_leads,
            zero_s_polys: s.zero_s_polys,
            zero_reductions: s.zero_reductions,
            generators_added: s.generators_added,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Entry {
    pub row: usize,
    pub x: i64,
    pub y: i64,
}

fn entries(elem: &ModuleElement) -> Vec<Entry> {
    elem.iter()
        .map(|t| Entry {
            row: t.row,
            x: t.exp.x,
            y: t.exp.y,
        })
        .collect()
}

impl Report {
    pub fn new(input: &Path, points: usize, settings: &Settings, pres: &Presentation) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            degree: settings.degree(),
            points,
            n_rows: pres.n_rows,
            boundary_columns: pres.boundary.len(),
            groebner_size: pres.groebner.len(),
            stats: pres.stats.into(),
            reduced: pres.reduced.iter().map(entries).collect(),
            gap: format::gap_matrix(&pres.reduced, pres.n_rows),
        }
    }

    /// Write the report to `path` and its provenance sidecar next to it.
    pub fn write(&self, path: &Path, settings: &Settings) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating report dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        let params = json!({
            "degree": settings.degree(),
            "max_points": settings.max_points,
            "max_basis": settings.max_basis,
            "max_pairs": settings.max_pairs,
            "scale": settings.filtration().scale,
        });
        provenance::write_sidecar(path, Payload::new(params).with_input(&self.input))
    }
}
