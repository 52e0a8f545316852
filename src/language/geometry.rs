//! Minimal angle and vector types used to hold decoded numeric fields.

use serde::Serialize;
use std::f64::consts::PI;

/// A planar angle, held in radians and always normalized to (-π, π].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub fn from_radians(radians: f64) -> Angle {
        Angle(normalize(radians))
    }

    pub fn from_degrees(degrees: f64) -> Angle {
        Angle::from_radians(degrees.to_radians())
    }

    pub fn radians(&self) -> f64 {
        self.0
    }

    pub fn degrees(&self) -> f64 {
        self.0
            .to_degrees()
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::ZERO
    }
}

// Non-finite input has no meaningful direction; it collapses to zero rather
// than poisoning later arithmetic.
fn normalize(radians: f64) -> f64 {
    if !radians.is_finite() {
        return 0.0;
    }

    let mut result = radians % (2.0 * PI);
    if result <= -PI {
        result += 2.0 * PI;
    } else if result > PI {
        result -= 2.0 * PI;
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// Build from a distance, a horizontal angle measured counter-clockwise
    /// from the x axis, and a vertical angle measured up from the xy plane.
    pub fn from_polar(distance: f64, theta: Angle, phi: Angle) -> Vector3 {
        let planar = distance * phi
            .radians()
            .cos();
        Vector3 {
            x: planar * theta
                .radians()
                .cos(),
            y: planar * theta
                .radians()
                .sin(),
            z: distance * phi
                .radians()
                .sin(),
        }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// A sighting relative to the observer's camera, as the vision perceptor
/// reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Polar {
    pub distance: f64,
    pub theta: Angle,
    pub phi: Angle,
}

impl Polar {
    pub fn new(distance: f64, theta: Angle, phi: Angle) -> Polar {
        Polar {
            distance,
            theta,
            phi,
        }
    }

    pub fn to_cartesian(&self) -> Vector3 {
        Vector3::from_polar(self.distance, self.theta, self.phi)
    }
}
