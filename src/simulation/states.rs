//! Core state types for the two-body simulation.
//!
//! Defines:
//! - `Body`        – mass and initial separation of one black hole
//! - `StateVector` – 12-element `[r1, r2, v1, v2]` state in the frame of body 1
//! - `Trajectory`  – sampled positions of body 2 over a time grid
//!
//! Body 1 is the heavier hole and sits at the origin; its velocity block is
//! zero by construction.

use nalgebra::{SVector, Vector3};
pub type NVec3 = Vector3<f64>;

/// Full two-body state: positions and velocities of both bodies
pub type StateVector = SVector<f64, 12>;

/// Offsets of the 3-element blocks inside a [`StateVector`]
pub const R1: usize = 0;
pub const R2: usize = 3;
pub const V1: usize = 6;
pub const V2: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f64, // mass (positive)
    pub distance: f64, // initial separation from the other body along +y
}

impl Body {
    pub fn new(mass: f64, distance: f64) -> Self {
        Self { mass, distance }
    }
}

/// Initial position of a body: on the y-axis at its configured distance
pub fn initial_position(body: &Body) -> NVec3 {
    NVec3::new(0.0, body.distance, 0.0)
}

/// Block access for the `[r1, r2, v1, v2]` layout
pub trait TwoBodyState {
    fn compose(r1: NVec3, r2: NVec3, v1: NVec3, v2: NVec3) -> Self;
    fn block(&self, offset: usize) -> NVec3;
    fn set_block(&mut self, offset: usize, value: &NVec3);

    fn r1(&self) -> NVec3 { self.block(R1) }
    fn r2(&self) -> NVec3 { self.block(R2) }
    fn v1(&self) -> NVec3 { self.block(V1) }
    fn v2(&self) -> NVec3 { self.block(V2) }
}

impl TwoBodyState for StateVector {
    fn compose(r1: NVec3, r2: NVec3, v1: NVec3, v2: NVec3) -> Self {
        let mut s = StateVector::zeros();
        s.set_block(R1, &r1);
        s.set_block(R2, &r2);
        s.set_block(V1, &v1);
        s.set_block(V2, &v2);
        s
    }

    fn block(&self, offset: usize) -> NVec3 {
        NVec3::new(self[offset], self[offset + 1], self[offset + 2])
    }

    fn set_block(&mut self, offset: usize, value: &NVec3) {
        self[offset] = value.x;
        self[offset + 1] = value.y;
        self[offset + 2] = value.z;
    }
}

/// Positions of body 2, one entry per time-grid sample
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub t: Vec<f64>, // sample times
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, t: f64, r: NVec3) {
        self.t.push(t);
        self.x.push(r.x);
        self.y.push(r.y);
        self.z.push(r.z);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Position of body 2 at sample `i`
    pub fn position(&self, i: usize) -> NVec3 {
        NVec3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Final sampled position, if any
    pub fn last(&self) -> Option<NVec3> {
        if self.is_empty() {
            None
        } else {
            Some(self.position(self.len() - 1))
        }
    }

    /// Split into the `(x, y, z)` sequences handed to a plotting consumer
    pub fn into_xyz(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.x, self.y, self.z)
    }
}
