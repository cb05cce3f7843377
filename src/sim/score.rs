//! Score tally: rasterized sampling of the claim ledger and the animated
//! count-up into per-team totals.
//!
//! The claimed triangles are sampled once into a packed 2-bit grid, then two
//! fronts sweep in from the left and right edges, folding whole columns into
//! the running totals as they pass. Front positions are kept around so a
//! renderer can draw the sweep.

use glam::Vec2;

use crate::consts::{
    SCORE_SAMPLE_BITS, SCORE_SAMPLE_RES, SCORE_SAMPLES_PER_BYTE,
};

use super::body::Team;
use super::bounds::Bounds;

/// Cell bit for a left-team claim
pub const SAMPLE_LEFT_BIT: u8 = 0b01;
/// Cell bit for a right-team claim
pub const SAMPLE_RIGHT_BIT: u8 = 0b10;

/// Signed area of the triangle (p0, p1, p2); positive when counter-clockwise
#[inline]
fn tri_determinant(p0: Vec2, p1: Vec2, p2: Vec2) -> f32 {
    (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y)
}

/// Winding-number containment test against a triangle.
///
/// An upward edge crossing the point's x-ray counts when the point is
/// strictly left of the edge, a downward crossing when strictly right;
/// nonzero winding means inside.
pub fn point_in_area(p: Vec2, corners: &[Vec2; 3]) -> bool {
    let mut wind = 0i32;

    for idx in 0..corners.len() {
        let start = corners[idx];
        let end = corners[(idx + 1) % corners.len()];

        if start.y < p.y && end.y > p.y {
            if tri_determinant(start, end, p) > 0.0 {
                wind += 1;
            }
        } else if start.y > p.y && end.y < p.y && tri_determinant(start, end, p) < 0.0 {
            wind -= 1;
        }
    }

    wind != 0
}

/// Sample grid plus tally animation state for one scoring pass
#[derive(Debug, Clone)]
pub struct ScoreTally {
    /// 2 bits per cell, 4 cells per byte, row-major
    samples: Vec<u8>,
    sampled: bool,
    /// Accumulated area fraction per team (Left, Right)
    totals: [f32; 2],
    /// Normalized front positions in [0, 1] (left-moving-right, right-moving-left)
    fronts: [f32; 2],
    /// Columns already folded into the totals per side
    swept: [usize; 2],
}

impl ScoreTally {
    pub fn new() -> Self {
        let (res_x, res_y) = SCORE_SAMPLE_RES;
        Self {
            samples: vec![0u8; res_x * res_y / SCORE_SAMPLES_PER_BYTE],
            sampled: false,
            totals: [0.0; 2],
            fronts: [0.0, 1.0],
            swept: [0; 2],
        }
    }

    pub fn reset(&mut self) {
        self.samples.fill(0);
        self.sampled = false;
        self.totals = [0.0; 2];
        self.fronts = [0.0, 1.0];
        self.swept = [0; 2];
    }

    pub fn sampled(&self) -> bool {
        self.sampled
    }

    /// Team bitmask for one grid cell
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        let idx = y * SCORE_SAMPLE_RES.0 + x;
        let shift = (idx % SCORE_SAMPLES_PER_BYTE) * SCORE_SAMPLE_BITS;
        (self.samples[idx / SCORE_SAMPLES_PER_BYTE] >> shift) & 0b11
    }

    fn set_sample(&mut self, x: usize, y: usize, mask: u8) {
        let idx = y * SCORE_SAMPLE_RES.0 + x;
        let shift = (idx % SCORE_SAMPLES_PER_BYTE) * SCORE_SAMPLE_BITS;
        let byte = &mut self.samples[idx / SCORE_SAMPLES_PER_BYTE];
        *byte = (*byte & !(0b11 << shift)) | (mask << shift);
    }

    /// Area fraction per team (Left, Right), valid once the fronts have swept
    pub fn totals(&self) -> [f32; 2] {
        self.totals
    }

    /// Normalized sweep front positions for render
    pub fn fronts(&self) -> [f32; 2] {
        self.fronts
    }

    /// Rasterize the claim ledger into the sample grid. Runs at most once
    /// per reset; later calls are no-ops.
    ///
    /// Cell centers uniformly cover the playfield rectangle; each is tested
    /// against the ledger newest-first, so the latest claim wins contested
    /// ground.
    pub fn rasterize(&mut self, bounds: &Bounds) {
        if self.sampled {
            return;
        }

        let (res_x, res_y) = SCORE_SAMPLE_RES;
        for y in 0..res_y {
            for x in 0..res_x {
                let t = Vec2::new(
                    (x as f32 + 0.5) / res_x as f32,
                    (y as f32 + 0.5) / res_y as f32,
                );
                let p = bounds.rect.interp(t);

                for area in bounds.ledger().iter().rev() {
                    if point_in_area(p, &area.corners) {
                        let mask = match area.team {
                            Team::Left => SAMPLE_LEFT_BIT,
                            Team::Right => SAMPLE_RIGHT_BIT,
                            Team::Neutral => 0,
                        };
                        self.set_sample(x, y, mask);
                        break;
                    }
                }
            }
        }

        self.sampled = true;
    }

    /// Advance both sweep fronts to `progress` (0 = edges, 1 = met at the
    /// center), folding newly passed columns into the totals. Each column is
    /// counted exactly once; the left front owns the left half of the grid
    /// and the right front the rest.
    pub fn advance_fronts(&mut self, progress: f32) {
        let (res_x, _) = SCORE_SAMPLE_RES;
        let p = progress.clamp(0.0, 1.0);
        self.fronts = [0.5 * p, 1.0 - 0.5 * p];

        let half = res_x / 2;
        let left_target = ((p * half as f32) as usize).min(half);
        while self.swept[0] < left_target {
            let col = self.swept[0];
            self.sweep_column(col);
            self.swept[0] += 1;
        }

        let right_half = res_x - half;
        let right_target = ((p * right_half as f32) as usize).min(right_half);
        while self.swept[1] < right_target {
            let col = res_x - 1 - self.swept[1];
            self.sweep_column(col);
            self.swept[1] += 1;
        }
    }

    fn sweep_column(&mut self, x: usize) {
        let (res_x, res_y) = SCORE_SAMPLE_RES;
        let cell_frac = 1.0 / (res_x * res_y) as f32;
        for y in 0..res_y {
            let mask = self.sample(x, y);
            if mask & SAMPLE_LEFT_BIT != 0 {
                self.totals[0] += cell_frac;
            }
            if mask & SAMPLE_RIGHT_BIT != 0 {
                self.totals[1] += cell_frac;
            }
        }
    }

    /// Count cells per bucket (left, right, unclaimed); render/debug helper
    pub fn sample_census(&self) -> (usize, usize, usize) {
        let (res_x, res_y) = SCORE_SAMPLE_RES;
        let mut counts = (0usize, 0usize, 0usize);
        for y in 0..res_y {
            for x in 0..res_x {
                match self.sample(x, y) {
                    m if m & SAMPLE_LEFT_BIT != 0 => counts.0 += 1,
                    m if m & SAMPLE_RIGHT_BIT != 0 => counts.1 += 1,
                    _ => counts.2 += 1,
                }
            }
        }
        counts
    }
}

impl Default for ScoreTally {
    fn default() -> Self {
        Self::new()
    }
}
