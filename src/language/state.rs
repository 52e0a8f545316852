//! The frozen result of decoding one message.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::language::*;

/// Every reading decoded from a single perceptor message. Categories the
/// message did not mention are empty or None, never zero-valued readings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PerceptorState {
    pub(crate) simulation_time: Option<f64>,
    pub(crate) gyros: BTreeMap<String, GyroReading>,
    pub(crate) accelerometers: BTreeMap<String, AccelerometerReading>,
    pub(crate) hinges: BTreeMap<String, HingeReading>,
    pub(crate) universal_joints: BTreeMap<String, UniversalJointReading>,
    pub(crate) touches: BTreeMap<String, TouchReading>,
    pub(crate) forces: BTreeMap<String, ForceReading>,
    pub(crate) sightings: Vec<Sighting>,
    pub(crate) lines: Vec<LineSighting>,
    pub(crate) ball: Option<BallSighting>,
    pub(crate) own_position: Option<Vector3>,
    pub(crate) game: Option<GameState>,
    pub(crate) agent: Option<AgentState>,
    pub(crate) heard: Vec<HeardMessage>,
}

impl PerceptorState {
    pub fn simulation_time(&self) -> Option<f64> {
        self.simulation_time
    }

    pub fn gyros(&self) -> &BTreeMap<String, GyroReading> {
        &self.gyros
    }

    pub fn accelerometers(&self) -> &BTreeMap<String, AccelerometerReading> {
        &self.accelerometers
    }

    pub fn hinges(&self) -> &BTreeMap<String, HingeReading> {
        &self.hinges
    }

    pub fn universal_joints(&self) -> &BTreeMap<String, UniversalJointReading> {
        &self.universal_joints
    }

    pub fn touches(&self) -> &BTreeMap<String, TouchReading> {
        &self.touches
    }

    pub fn forces(&self) -> &BTreeMap<String, ForceReading> {
        &self.forces
    }

    /// Landmark and player sightings in the order the server sent them.
    pub fn sightings(&self) -> &[Sighting] {
        &self.sightings
    }

    pub fn landmarks(&self) -> impl Iterator<Item = &LandmarkSighting> {
        self.sightings
            .iter()
            .filter_map(|sighting| match sighting {
                Sighting::Landmark(landmark) => Some(landmark),
                _ => None,
            })
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerSighting> {
        self.sightings
            .iter()
            .filter_map(|sighting| match sighting {
                Sighting::Player(player) => Some(player),
                _ => None,
            })
    }

    pub fn lines(&self) -> &[LineSighting] {
        &self.lines
    }

    pub fn ball(&self) -> Option<&BallSighting> {
        self.ball
            .as_ref()
    }

    pub fn own_position(&self) -> Option<Vector3> {
        self.own_position
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game
            .as_ref()
    }

    pub fn agent(&self) -> Option<&AgentState> {
        self.agent
            .as_ref()
    }

    pub fn heard(&self) -> &[HeardMessage] {
        &self.heard
    }

    /// Total number of readings held, counting each sighting, line and heard
    /// message separately.
    pub fn len(&self) -> usize {
        let singles = [
            self.simulation_time
                .is_some(),
            self.ball
                .is_some(),
            self.own_position
                .is_some(),
            self.game
                .is_some(),
            self.agent
                .is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count();

        singles
            + self.gyros.len()
            + self.accelerometers.len()
            + self.hinges.len()
            + self.universal_joints.len()
            + self.touches.len()
            + self.forces.len()
            + self.sightings.len()
            + self.lines.len()
            + self.heard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
