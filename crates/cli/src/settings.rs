//! Runtime knobs read from the environment.
//!
//! The command line only takes the input path; everything tunable comes from
//! `BIPERSISTENCE_*` variables so scripted runs can set them once.

use anyhow::{bail, Context, Result};
use bipersistence::cfg::DEFAULT_MAX_POINTS;
use bipersistence::{FiltrationCfg, SaturationCfg, SimplexKind};
use std::path::PathBuf;
use std::str::FromStr;

pub const MAX_POINTS: &str = "BIPERSISTENCE_MAX_POINTS";
pub const MAX_BASIS: &str = "BIPERSISTENCE_MAX_BASIS";
pub const MAX_PAIRS: &str = "BIPERSISTENCE_MAX_PAIRS";
pub const DEGREE: &str = "BIPERSISTENCE_DEGREE";
pub const JSON: &str = "BIPERSISTENCE_JSON";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// `None` keeps every point.
    pub max_points: Option<usize>,
    pub max_basis: Option<usize>,
    pub max_pairs: Option<u64>,
    /// Rows of the boundary whose image is presented (1 → vertices, 2 → edges).
    pub rows: SimplexKind,
    pub json: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_points: Some(DEFAULT_MAX_POINTS),
            max_basis: None,
            max_pairs: None,
            rows: SimplexKind::Vertex,
            json: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Settings::default();
        if let Some(n) = parse_var::<usize, _>(&lookup, MAX_POINTS)? {
            s.max_points = (n > 0).then_some(n);
        }
        s.max_basis = parse_var(&lookup, MAX_BASIS)?;
        s.max_pairs = parse_var(&lookup, MAX_PAIRS)?;
        s.rows = match parse_var::<u8, _>(&lookup, DEGREE)? {
            None | Some(1) => SimplexKind::Vertex,
            Some(2) => SimplexKind::Edge,
            Some(other) => bail!("{DEGREE}={other}: only boundary degrees 1 and 2 exist"),
        };
        s.json = lookup(JSON).filter(|p| !p.is_empty()).map(PathBuf::from);
        Ok(s)
    }

    pub fn filtration(&self) -> FiltrationCfg {
        FiltrationCfg {
            max_points: self.max_points,
            ..FiltrationCfg::default()
        }
    }

    pub fn saturation(&self) -> SaturationCfg {
        SaturationCfg {
            max_basis: self.max_basis,
            max_pairs: self.max_pairs,
        }
    }

    /// Boundary degree `k` of the presented image `Im d_k`.
    pub fn degree(&self) -> u8 {
        match self.rows {
            SimplexKind::Vertex => 1,
            SimplexKind::Edge => 2,
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key}={raw} is not valid")),
    }
}
