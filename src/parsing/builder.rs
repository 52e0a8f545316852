use std::collections::BTreeMap;

use crate::language::*;
use crate::parsing::{Diagnostics, ParsingError};

/// Accumulates readings for one message, then freezes them.
#[derive(Debug, Default)]
pub(crate) struct StateBuilder {
    state: PerceptorState,
}

fn file<T>(
    map: &mut BTreeMap<String, T>,
    label: String,
    reading: T,
    offset: usize,
    diagnostics: &mut Diagnostics,
) {
    if map
        .insert(label.clone(), reading)
        .is_some()
    {
        diagnostics.record(ParsingError::DuplicateReading(offset, label));
    }
}

fn replace<T>(
    slot: &mut Option<T>,
    value: T,
    what: &str,
    offset: usize,
    diagnostics: &mut Diagnostics,
) {
    if slot
        .replace(value)
        .is_some()
    {
        diagnostics.record(ParsingError::DuplicateReading(offset, what.to_string()));
    }
}

impl StateBuilder {
    pub(crate) fn new() -> StateBuilder {
        StateBuilder::default()
    }

    /// File a reading under its category. A second reading for a label or
    /// a singular category wins, and the collision is recorded.
    pub(crate) fn insert(&mut self, offset: usize, reading: Reading, diagnostics: &mut Diagnostics) {
        let state = &mut self.state;

        match reading {
            Reading::Time(now) => replace(
                &mut state.simulation_time,
                now,
                "time",
                offset,
                diagnostics,
            ),
            Reading::Gyro(gyro) => file(
                &mut state.gyros,
                gyro.label
                    .clone(),
                gyro,
                offset,
                diagnostics,
            ),
            Reading::Accelerometer(acc) => file(
                &mut state.accelerometers,
                acc.label
                    .clone(),
                acc,
                offset,
                diagnostics,
            ),
            Reading::Hinge(hinge) => file(
                &mut state.hinges,
                hinge
                    .label
                    .clone(),
                hinge,
                offset,
                diagnostics,
            ),
            Reading::UniversalJoint(joint) => file(
                &mut state.universal_joints,
                joint
                    .label
                    .clone(),
                joint,
                offset,
                diagnostics,
            ),
            Reading::Touch(touch) => file(
                &mut state.touches,
                touch
                    .label
                    .clone(),
                touch,
                offset,
                diagnostics,
            ),
            Reading::Force(force) => file(
                &mut state.forces,
                force
                    .label
                    .clone(),
                force,
                offset,
                diagnostics,
            ),
            Reading::Vision(vision) => {
                state
                    .sightings
                    .extend(vision.sightings);
                state
                    .lines
                    .extend(vision.lines);
                if let Some(ball) = vision.ball {
                    replace(&mut state.ball, ball, "B", offset, diagnostics);
                }
                if let Some(position) = vision.position {
                    replace(
                        &mut state.own_position,
                        position,
                        "mypos",
                        offset,
                        diagnostics,
                    );
                }
            }
            Reading::Game(game) => replace(&mut state.game, game, "GS", offset, diagnostics),
            Reading::Agent(agent) => replace(
                &mut state.agent,
                agent,
                "AgentState",
                offset,
                diagnostics,
            ),
            Reading::Heard(heard) => state
                .heard
                .push(heard),
        }
    }

    pub(crate) fn build(self) -> PerceptorState {
        let mut state = self.state;
        let now = state.simulation_time;
        if let Some(game) = state
            .game
            .as_mut()
        {
            game.simulation_time = now;
        }
        state
    }
}
