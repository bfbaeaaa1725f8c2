//! Harmonic synthesis of tide heights over a regular time grid.

use tracing::debug;

use crate::astro::equilibrium_phases;
use crate::constituent::{ConstituentSet, NUM_CONSTITUENTS};
use crate::node::{NodeFactors, node_factors};

/// Julian Date of 2000-01-01 00:00 UT, the epoch all astronomical
/// arguments are referenced to.
pub const EPOCH_2000_JD: f64 = 2_451_544.5;

/// Days between node-correction refreshes during synthesis.
pub const NODE_UPDATE_DAYS: f64 = 30.5;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// One synthesized sample: a Julian Date (UT) and the water level in the
/// units the constituent amplitudes were given in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidePoint {
    pub jd: f64,
    pub height: f64,
}

/// Lazy synthesis iterator returned by [`tide_steps`].
///
/// Equilibrium phases are recomputed every step; node corrections are
/// held constant over each [`NODE_UPDATE_DAYS`] window and evaluated at
/// the window midpoint.
#[derive(Debug, Clone)]
pub struct TideSteps<'a> {
    set: &'a ConstituentSet,
    start_jd: f64,
    step_days: f64,
    node_interval_steps: f64,
    len: usize,
    j: usize,
    node: NodeFactors,
}

/// Steps through tide predictions for `set`, starting at `start_jd_utc`
/// and sampling every `step_minutes` for `series_days` days.
///
/// The number of samples is `series_days / step_minutes` in matching
/// units, truncated. A non-positive step or length yields an empty
/// iterator.
pub fn tide_steps(
    set: &ConstituentSet,
    start_jd_utc: f64,
    step_minutes: f64,
    series_days: f64,
) -> TideSteps<'_> {
    let step_days = step_minutes / MINUTES_PER_DAY;
    let len = if step_minutes > 0.0 && series_days > 0.0 {
        (series_days / step_days) as usize
    } else {
        0
    };
    TideSteps {
        set,
        start_jd: start_jd_utc,
        step_days,
        node_interval_steps: NODE_UPDATE_DAYS / step_days,
        len,
        j: 0,
        node: NodeFactors::unity(),
    }
}

/// Predicts tide heights on a regular grid and collects them.
///
/// Convenience wrapper over [`tide_steps`]; see there for grid
/// semantics.
pub fn predict_tides(
    set: &ConstituentSet,
    start_jd_utc: f64,
    step_minutes: f64,
    series_days: f64,
) -> Vec<TidePoint> {
    tide_steps(set, start_jd_utc, step_minutes, series_days).collect()
}

impl Iterator for TideSteps<'_> {
    type Item = TidePoint;

    fn next(&mut self) -> Option<TidePoint> {
        if self.j >= self.len {
            return None;
        }
        // Nudged off the exact grid instant so day fractions downstream
        // split into whole clock seconds.
        let jd = self.start_jd + self.step_days * self.j as f64 + 1.0e-9;
        let days = jd - EPOCH_2000_JD;

        if (self.j as f64) % self.node_interval_steps == 0.0 {
            self.node = node_factors(days + NODE_UPDATE_DAYS / 2.0);
            debug!(step = self.j, "node corrections refreshed");
        }

        let v0 = equilibrium_phases(days);
        let f = self.node.f();
        let u = self.node.u();
        let amplitudes = self.set.amplitudes();
        let lags = self.set.phase_lags();
        let mut height = self.set.mean();
        for i in 0..NUM_CONSTITUENTS {
            height += f[i] * amplitudes[i] * (v0[i] + u[i] - lags[i]).cos();
        }

        self.j += 1;
        Some(TidePoint { jd, height })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.j;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TideSteps<'_> {}
