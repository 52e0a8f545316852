use tracing::debug;

use crate::language::{PerceptorState, Reading};
use crate::parsing::builder::StateBuilder;
use crate::parsing::cursor::{Cursor, Token};
use crate::parsing::extract::*;
use crate::parsing::{Diagnostics, ParsingError};

/// Settings that change how a message is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Our own team's name. Players seen wearing it are team mates; with no
    /// team set every player seen is counted as an opponent.
    pub team: Option<String>,
}

/// The outcome of decoding one message: everything that could be read, and
/// everything that was wrong with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub state: PerceptorState,
    pub diagnostics: Vec<ParsingError>,
}

/// The perceptor tags this decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Time,
    GameState,
    Gyro,
    Accelerometer,
    HingeJoint,
    UniversalJoint,
    Touch,
    ForceResistance,
    Vision,
    AgentState,
    Hear,
}

const REGISTRY: &[(&str, Tag)] = &[
    ("time", Tag::Time),
    ("GS", Tag::GameState),
    ("GYR", Tag::Gyro),
    ("ACC", Tag::Accelerometer),
    ("HJ", Tag::HingeJoint),
    ("UJ", Tag::UniversalJoint),
    ("TCH", Tag::Touch),
    ("FRP", Tag::ForceResistance),
    ("See", Tag::Vision),
    ("AgentState", Tag::AgentState),
    ("hear", Tag::Hear),
];

impl Tag {
    pub fn lookup(keyword: &str) -> Option<Tag> {
        REGISTRY
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, tag)| *tag)
    }

    pub fn keyword(&self) -> &'static str {
        REGISTRY
            .iter()
            .find(|(_, tag)| tag == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }

    fn extractor(&self) -> Extractor {
        match self {
            Tag::Time => extract_time,
            Tag::GameState => extract_game_state,
            Tag::Gyro => extract_gyro,
            Tag::Accelerometer => extract_accelerometer,
            Tag::HingeJoint => extract_hinge,
            Tag::UniversalJoint => extract_universal_joint,
            Tag::Touch => extract_touch,
            Tag::ForceResistance => extract_force,
            Tag::Vision => extract_vision,
            Tag::AgentState => extract_agent_state,
            Tag::Hear => extract_hear,
        }
    }
}

/// Decode one complete message. Problems with individual groups are
/// collected rather than returned, and decoding carries on with the next
/// group, so this always produces a state.
pub fn decode_with_recovery(content: &str, options: &DecodeOptions) -> Decoded {
    let mut cursor = Cursor::new(content);
    let mut diagnostics = Diagnostics::new();
    let mut builder = StateBuilder::new();

    // Every pass either consumes at least one byte or abandons the rest of
    // the message, so this loop ends on any input.
    loop {
        let token = match cursor.take() {
            Ok(token) => token,
            Err(ParsingError::UnexpectedEndOfInput(_)) => break,
            Err(error @ ParsingError::UnmatchedCloseParen(_)) => {
                diagnostics.record(error);
                cursor.skip_unmatched();
                continue;
            }
            Err(error) => {
                diagnostics.record(error);
                cursor.skip_to_end();
                break;
            }
        };

        if !token.is_group() {
            let c = token
                .text
                .chars()
                .next()
                .unwrap_or(' ');
            diagnostics.record(ParsingError::UnexpectedCharacter(token.offset, c));
            continue;
        }

        match decode_group(token, options, &mut diagnostics) {
            Ok(reading) => builder.insert(token.offset, reading, &mut diagnostics),
            Err(error) => diagnostics.record(error),
        }
    }

    Decoded {
        state: builder.build(),
        diagnostics: diagnostics.into_inner(),
    }
}

fn decode_group(
    token: Token,
    options: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let mut cursor = Cursor::over(token);
    cursor.enter(1)?;

    let keyword = cursor.take()?;
    if keyword.is_group() {
        return Err(ParsingError::Expected(keyword.offset, "a tag keyword"));
    }

    let tag = Tag::lookup(keyword.text)
        .ok_or_else(|| ParsingError::UnknownTag(keyword.offset, keyword.text.to_string()))?;

    debug!(tag = tag.keyword(), offset = token.offset, "Decoding group");

    let extract = tag.extractor();
    let reading = extract(&mut cursor, options, diagnostics)?;

    finish(&mut cursor, tag.keyword(), diagnostics)?;

    Ok(reading)
}
