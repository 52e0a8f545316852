//! Types representing the readings carried by one perceptor message

use serde::Serialize;

use crate::language::{Angle, Polar, Vector3};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GyroReading {
    pub label: String,
    /// Angular rate about each axis, in degrees per second.
    pub rate: Vector3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccelerometerReading {
    pub label: String,
    pub acceleration: Vector3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HingeReading {
    pub label: String,
    pub angle: Angle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversalJointReading {
    pub label: String,
    pub angle1: Angle,
    pub angle2: Angle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TouchReading {
    pub label: String,
    pub touching: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceReading {
    pub label: String,
    pub contact: Vector3,
    pub force: Vector3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Landmark {
    Flag1Left,
    Flag2Left,
    Flag1Right,
    Flag2Right,
    Goal1Left,
    Goal2Left,
    Goal1Right,
    Goal2Right,
}

impl Landmark {
    pub fn from_label(label: &str) -> Option<Landmark> {
        let landmark = match label {
            "F1L" => Landmark::Flag1Left,
            "F2L" => Landmark::Flag2Left,
            "F1R" => Landmark::Flag1Right,
            "F2R" => Landmark::Flag2Right,
            "G1L" => Landmark::Goal1Left,
            "G2L" => Landmark::Goal2Left,
            "G1R" => Landmark::Goal1Right,
            "G2R" => Landmark::Goal2Right,
            _ => return None,
        };
        Some(landmark)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Landmark::Flag1Left => "F1L",
            Landmark::Flag2Left => "F2L",
            Landmark::Flag1Right => "F1R",
            Landmark::Flag2Right => "F2R",
            Landmark::Goal1Left => "G1L",
            Landmark::Goal2Left => "G2L",
            Landmark::Goal1Right => "G1R",
            Landmark::Goal2Right => "G2R",
        }
    }

    pub fn is_goal_post(&self) -> bool {
        matches!(
            self,
            Landmark::Goal1Left | Landmark::Goal2Left | Landmark::Goal1Right | Landmark::Goal2Right
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandmarkSighting {
    pub landmark: Landmark,
    pub position: Polar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallSighting {
    pub position: Polar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartSighting {
    pub label: String,
    pub position: Polar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSighting {
    pub team: Option<String>,
    pub is_team_mate: bool,
    pub id: Option<u32>,
    /// Body parts in the order the server reported them.
    pub parts: Vec<PartSighting>,
}

/// A field line seen by the camera, from one end to the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSighting {
    pub start: Polar,
    pub end: Polar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Sighting {
    Landmark(LandmarkSighting),
    Player(PlayerSighting),
}

/// Everything one vision group reported, sightings kept in arrival order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Vision {
    pub sightings: Vec<Sighting>,
    pub ball: Option<BallSighting>,
    pub lines: Vec<LineSighting>,
    pub position: Option<Vector3>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldSide {
    Left,
    Right,
}

impl FieldSide {
    pub fn from_keyword(keyword: &str) -> Option<FieldSide> {
        match keyword {
            "left" | "Left" | "L" => Some(FieldSide::Left),
            "right" | "Right" | "R" => Some(FieldSide::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayMode {
    BeforeKickOff,
    KickOff(FieldSide),
    PlayOn,
    KickIn(FieldSide),
    CornerKick(FieldSide),
    GoalKick(FieldSide),
    Offside(FieldSide),
    GameOver,
    Goal(FieldSide),
    FreeKick(FieldSide),
    Unknown,
}

impl PlayMode {
    /// Recognize one of the server's play mode keywords. Anything else is
    /// None; the caller decides whether that becomes Unknown.
    pub fn from_keyword(keyword: &str) -> Option<PlayMode> {
        use FieldSide::*;

        let mode = match keyword {
            "BeforeKickOff" => PlayMode::BeforeKickOff,
            "KickOff_Left" => PlayMode::KickOff(Left),
            "KickOff_Right" => PlayMode::KickOff(Right),
            "PlayOn" => PlayMode::PlayOn,
            "KickIn_Left" => PlayMode::KickIn(Left),
            "KickIn_Right" => PlayMode::KickIn(Right),
            "corner_kick_left" => PlayMode::CornerKick(Left),
            "corner_kick_right" => PlayMode::CornerKick(Right),
            "goal_kick_left" => PlayMode::GoalKick(Left),
            "goal_kick_right" => PlayMode::GoalKick(Right),
            "offside_left" => PlayMode::Offside(Left),
            "offside_right" => PlayMode::Offside(Right),
            "GameOver" => PlayMode::GameOver,
            "Goal_Left" => PlayMode::Goal(Left),
            "Goal_Right" => PlayMode::Goal(Right),
            "free_kick_left" => PlayMode::FreeKick(Left),
            "free_kick_right" => PlayMode::FreeKick(Right),
            _ => return None,
        };
        Some(mode)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    /// Server clock, taken from the accompanying time group if present.
    pub simulation_time: Option<f64>,
    pub game_time: f64,
    pub play_mode: PlayMode,
    pub side: Option<FieldSide>,
    pub player_id: Option<u32>,
    pub score_left: Option<u32>,
    pub score_right: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentState {
    pub temperature: f64,
    pub battery: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeardMessage {
    pub heard_at: f64,
    pub from_self: bool,
    /// Direction the message came from; None when we said it ourselves.
    pub direction: Option<Angle>,
    pub team: Option<String>,
    pub text: String,
}

/// One decoded top level group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Reading {
    Time(f64),
    Gyro(GyroReading),
    Accelerometer(AccelerometerReading),
    Hinge(HingeReading),
    UniversalJoint(UniversalJointReading),
    Touch(TouchReading),
    Force(ForceReading),
    Vision(Vision),
    Game(GameState),
    Agent(AgentState),
    Heard(HeardMessage),
}
