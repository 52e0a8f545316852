//! One extractor per perceptor tag. Each is handed a cursor sitting just
//! after the tag keyword inside its group and reads that tag's fields in
//! their documented order. Fields with the wrong number of values are
//! recorded and defaulted so that a reading still comes back; only a group
//! whose shape is unrecognizable is given up on.

use tracing::debug;

use crate::language::*;
use crate::parsing::cursor::{Cursor, Token};
use crate::parsing::numeric::{degrees, parse_count, parse_number, scan_literals};
use crate::parsing::{DecodeOptions, Diagnostics, ParsingError};

pub(crate) type Extractor =
    fn(&mut Cursor<'_>, &DecodeOptions, &mut Diagnostics) -> Result<Reading, ParsingError>;

/// A field such as `(rt 0.01 0.07 0.46)`: its name and the values after it.
#[derive(Debug)]
struct Field<'i> {
    name: Token<'i>,
    values: Vec<Token<'i>>,
}

/// Read the remaining siblings of the current group as values.
fn read_values<'i>(cursor: &mut Cursor<'i>) -> Result<Vec<Token<'i>>, ParsingError> {
    let mut values = Vec::new();
    while !cursor.at_group_end() {
        values.push(cursor.take()?);
    }
    Ok(values)
}

/// Read the next field whatever its name. Both the grouped `(name value)`
/// layout and the flat `name value` one are accepted.
fn read_any_field<'i>(cursor: &mut Cursor<'i>) -> Result<Field<'i>, ParsingError> {
    if cursor.peek() == Some('(') {
        cursor.enter(1)?;
        let name = cursor.take()?;
        let values = read_values(cursor)?;
        cursor.exit(1)?;
        Ok(Field { name, values })
    } else {
        let name = cursor.take()?;
        let value = cursor.take()?;
        Ok(Field {
            name,
            values: vec![value],
        })
    }
}

/// Read the field that must come next. If the group has already ended the
/// field comes back with no values, which the arity checks then report.
fn read_field<'i>(cursor: &mut Cursor<'i>, name: &'static str) -> Result<Field<'i>, ParsingError> {
    if cursor.at_group_end() {
        return Ok(Field {
            name: Token {
                text: name,
                offset: cursor.position(),
            },
            values: Vec::new(),
        });
    }

    let field = read_any_field(cursor)?;
    if field
        .name
        .text
        != name
    {
        return Err(ParsingError::ExpectedField(
            field
                .name
                .offset,
            name,
            field
                .name
                .text
                .to_string(),
        ));
    }
    Ok(field)
}

/// Exactly `expected` numbers from a field, zero-filled or truncated after
/// recording the mismatch.
fn numbers(
    field: &Field,
    name: &'static str,
    expected: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(expected);

    for token in &field.values {
        match scan_literals(token.text) {
            Ok(mut found) => values.append(&mut found),
            Err(index) => {
                diagnostics.record(ParsingError::InvalidNumber(
                    token.offset + index,
                    token
                        .text
                        .to_string(),
                ));
                values.push(0.0);
            }
        }
    }

    if values.len() != expected {
        diagnostics.record(ParsingError::FieldCount(
            field
                .name
                .offset,
            name,
            expected,
            values.len(),
        ));
        values.resize(expected, 0.0);
    }

    values
}

fn number(field: &Field, name: &'static str, diagnostics: &mut Diagnostics) -> f64 {
    numbers(field, name, 1, diagnostics)[0]
}

fn vector(field: &Field, name: &'static str, diagnostics: &mut Diagnostics) -> Vector3 {
    let v = numbers(field, name, 3, diagnostics);
    Vector3::new(v[0], v[1], v[2])
}

/// The single word a field holds, if it holds any.
fn word<'i>(field: &Field<'i>, name: &'static str, diagnostics: &mut Diagnostics) -> Option<&'i str> {
    match field
        .values
        .as_slice()
    {
        [] => {
            diagnostics.record(ParsingError::FieldCount(
                field
                    .name
                    .offset,
                name,
                1,
                0,
            ));
            None
        }
        [one] => Some(one.text),
        [first, ..] => {
            diagnostics.record(ParsingError::FieldCount(
                field
                    .name
                    .offset,
                name,
                1,
                field
                    .values
                    .len(),
            ));
            Some(first.text)
        }
    }
}

fn count(field: &Field, name: &'static str, diagnostics: &mut Diagnostics) -> Option<u32> {
    let text = word(field, name, diagnostics)?;
    let result = parse_count(text);
    if result.is_none() {
        diagnostics.record(ParsingError::InvalidNumber(
            field.values[0].offset,
            text.to_string(),
        ));
    }
    result
}

/// The `(n label)` field that leads every joint and sensor reading. Without
/// a label the reading can't be filed, so its absence is an error.
fn read_label(cursor: &mut Cursor, diagnostics: &mut Diagnostics) -> Result<String, ParsingError> {
    let field = read_field(cursor, "n")?;
    if field
        .values
        .is_empty()
    {
        return Err(ParsingError::FieldCount(
            field
                .name
                .offset,
            "n",
            1,
            0,
        ));
    }
    let label = word(&field, "n", diagnostics).unwrap_or_default();
    Ok(label.to_string())
}

fn read_polar(cursor: &mut Cursor, diagnostics: &mut Diagnostics) -> Result<Polar, ParsingError> {
    let field = read_field(cursor, "pol")?;
    let v = numbers(&field, "pol", 3, diagnostics);
    Ok(Polar::new(v[0], degrees(v[1]), degrees(v[2])))
}

/// Consume whatever is left of a group, recording it if anything was, and
/// step out of the group.
pub(crate) fn finish(
    cursor: &mut Cursor,
    tag: &'static str,
    diagnostics: &mut Diagnostics,
) -> Result<(), ParsingError> {
    if !cursor.at_group_end() {
        let offset = cursor.position();
        let extra = read_values(cursor)?;
        diagnostics.record(ParsingError::ExtraFields(offset, tag, extra.len()));
    }
    cursor.exit(1)
}

pub(crate) fn extract_time(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let field = read_field(cursor, "now")?;
    Ok(Reading::Time(number(&field, "now", diagnostics)))
}

pub(crate) fn extract_gyro(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let label = read_label(cursor, diagnostics)?;
    let field = read_field(cursor, "rt")?;
    let rate = vector(&field, "rt", diagnostics);

    Ok(Reading::Gyro(GyroReading { label, rate }))
}

pub(crate) fn extract_accelerometer(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let label = read_label(cursor, diagnostics)?;
    let field = read_field(cursor, "a")?;
    let acceleration = vector(&field, "a", diagnostics);

    Ok(Reading::Accelerometer(AccelerometerReading {
        label,
        acceleration,
    }))
}

pub(crate) fn extract_hinge(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let label = read_label(cursor, diagnostics)?;
    let field = read_field(cursor, "ax")?;
    let angle = degrees(number(&field, "ax", diagnostics));

    Ok(Reading::Hinge(HingeReading { label, angle }))
}

pub(crate) fn extract_universal_joint(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let label = read_label(cursor, diagnostics)?;
    let first = read_field(cursor, "ax1")?;
    let angle1 = degrees(number(&first, "ax1", diagnostics));
    let second = read_field(cursor, "ax2")?;
    let angle2 = degrees(number(&second, "ax2", diagnostics));

    Ok(Reading::UniversalJoint(UniversalJointReading {
        label,
        angle1,
        angle2,
    }))
}

pub(crate) fn extract_touch(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let label = read_label(cursor, diagnostics)?;
    let field = read_field(cursor, "val")?;
    let touching = number(&field, "val", diagnostics) != 0.0;

    Ok(Reading::Touch(TouchReading { label, touching }))
}

pub(crate) fn extract_force(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let label = read_label(cursor, diagnostics)?;
    let field = read_field(cursor, "c")?;
    let contact = vector(&field, "c", diagnostics);
    let field = read_field(cursor, "f")?;
    let force = vector(&field, "f", diagnostics);

    Ok(Reading::Force(ForceReading {
        label,
        contact,
        force,
    }))
}

pub(crate) fn extract_game_state(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let start = cursor.position();

    let mut game_time = None;
    let mut play_mode = None;
    let mut side = None;
    let mut player_id = None;
    let mut score_left = None;
    let mut score_right = None;

    while !cursor.at_group_end() {
        let field = read_any_field(cursor)?;
        match field
            .name
            .text
        {
            "t" => game_time = Some(number(&field, "t", diagnostics)),
            "pm" => {
                if let Some(keyword) = word(&field, "pm", diagnostics) {
                    let mode = PlayMode::from_keyword(keyword).unwrap_or_else(|| {
                        diagnostics.record(ParsingError::UnknownKeyword(
                            field.values[0].offset,
                            keyword.to_string(),
                        ));
                        PlayMode::Unknown
                    });
                    play_mode = Some(mode);
                }
            }
            "team" => {
                if let Some(keyword) = word(&field, "team", diagnostics) {
                    side = FieldSide::from_keyword(keyword);
                    if side.is_none() {
                        diagnostics.record(ParsingError::UnknownKeyword(
                            field.values[0].offset,
                            keyword.to_string(),
                        ));
                    }
                }
            }
            "unum" => player_id = count(&field, "unum", diagnostics),
            "sl" => score_left = count(&field, "sl", diagnostics),
            "sr" => score_right = count(&field, "sr", diagnostics),
            other => debug!(field = other, "Ignoring game state field"),
        }
    }

    let game_time = game_time.unwrap_or_else(|| {
        diagnostics.record(ParsingError::FieldCount(start, "t", 1, 0));
        0.0
    });
    let play_mode = play_mode.unwrap_or_else(|| {
        diagnostics.record(ParsingError::FieldCount(start, "pm", 1, 0));
        PlayMode::Unknown
    });

    Ok(Reading::Game(GameState {
        simulation_time: None,
        game_time,
        play_mode,
        side,
        player_id,
        score_left,
        score_right,
    }))
}

pub(crate) fn extract_agent_state(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let start = cursor.position();

    let mut temperature = None;
    let mut battery = None;

    while !cursor.at_group_end() {
        let field = read_any_field(cursor)?;
        match field
            .name
            .text
        {
            "temp" => temperature = Some(number(&field, "temp", diagnostics)),
            "battery" => battery = Some(number(&field, "battery", diagnostics)),
            other => debug!(field = other, "Ignoring agent state field"),
        }
    }

    let temperature = temperature.unwrap_or_else(|| {
        diagnostics.record(ParsingError::FieldCount(start, "temp", 1, 0));
        0.0
    });
    let battery = battery.unwrap_or_else(|| {
        diagnostics.record(ParsingError::FieldCount(start, "battery", 1, 0));
        0.0
    });

    Ok(Reading::Agent(AgentState {
        temperature,
        battery,
    }))
}

pub(crate) fn extract_hear(
    cursor: &mut Cursor,
    _: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let start = cursor.position();
    let words = read_values(cursor)?;

    // Newer servers put the speaker's team name first.
    let (team, fields) = match words.len() {
        3 => (None, &words[..]),
        4 => (Some(words[0].text), &words[1..]),
        n if n > 4 => {
            diagnostics.record(ParsingError::ExtraFields(words[4].offset, "hear", n - 4));
            (Some(words[0].text), &words[1..4])
        }
        n => return Err(ParsingError::FieldCount(start, "hear", 3, n)),
    };

    let time = fields[0];
    let heard_at = parse_number(time.text).unwrap_or_else(|| {
        diagnostics.record(ParsingError::InvalidNumber(
            time.offset,
            time.text
                .to_string(),
        ));
        0.0
    });

    let source = fields[1];
    let (from_self, direction) = if source.text == "self" {
        (true, None)
    } else {
        match parse_number(source.text) {
            Some(value) => (false, Some(degrees(value))),
            None => {
                diagnostics.record(ParsingError::InvalidNumber(
                    source.offset,
                    source
                        .text
                        .to_string(),
                ));
                (false, None)
            }
        }
    };

    let message = fields[2];
    let quote = |c: char| c == '\'' || c == '"';
    if message
        .text
        .starts_with(quote)
        != message
            .text
            .ends_with(quote)
        || message.text == "'"
        || message.text == "\""
    {
        diagnostics.record(ParsingError::UnterminatedLiteral(message.offset));
    }
    let text = message
        .text
        .trim_matches(quote)
        .to_string();

    Ok(Reading::Heard(HeardMessage {
        heard_at,
        from_self,
        direction,
        team: team.map(str::to_string),
        text,
    }))
}

pub(crate) fn extract_vision(
    cursor: &mut Cursor,
    options: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Reading, ParsingError> {
    let mut vision = Vision::default();

    while !cursor.at_group_end() {
        let item = cursor.take()?;
        // one bad sighting doesn't spoil the others
        if let Err(error) = read_sighting(item, options, &mut vision, diagnostics) {
            diagnostics.record(error);
        }
    }

    Ok(Reading::Vision(vision))
}

fn read_sighting(
    item: Token,
    options: &DecodeOptions,
    vision: &mut Vision,
    diagnostics: &mut Diagnostics,
) -> Result<(), ParsingError> {
    if !item.is_group() {
        let c = item
            .text
            .chars()
            .next()
            .unwrap_or(' ');
        return Err(ParsingError::UnexpectedCharacter(item.offset, c));
    }

    let mut cursor = Cursor::over(item);
    cursor.enter(1)?;
    let label = cursor.take()?;

    match label.text {
        "B" => {
            let position = read_polar(&mut cursor, diagnostics)?;
            if vision
                .ball
                .replace(BallSighting { position })
                .is_some()
            {
                diagnostics.record(ParsingError::DuplicateReading(label.offset, "B".to_string()));
            }
        }
        "P" => {
            let player = read_player(&mut cursor, options, diagnostics)?;
            vision
                .sightings
                .push(Sighting::Player(player));
        }
        "L" => {
            let start = read_polar(&mut cursor, diagnostics)?;
            let end = read_polar(&mut cursor, diagnostics)?;
            vision
                .lines
                .push(LineSighting { start, end });
        }
        "mypos" => {
            let field = Field {
                name: label,
                values: read_values(&mut cursor)?,
            };
            vision.position = Some(vector(&field, "mypos", diagnostics));
        }
        other => {
            let landmark = Landmark::from_label(other)
                .ok_or_else(|| ParsingError::UnknownTag(label.offset, other.to_string()))?;
            let position = read_polar(&mut cursor, diagnostics)?;
            vision
                .sightings
                .push(Sighting::Landmark(LandmarkSighting { landmark, position }));
        }
    }

    finish(&mut cursor, "See", diagnostics)
}

fn read_player(
    cursor: &mut Cursor,
    options: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<PlayerSighting, ParsingError> {
    let mut team = None;
    let mut id = None;
    let mut parts = Vec::new();

    while !cursor.at_group_end() {
        let field = read_any_field(cursor)?;
        match field
            .name
            .text
        {
            "team" => team = word(&field, "team", diagnostics).map(str::to_string),
            "id" => id = count(&field, "id", diagnostics),
            label => match read_part(&field, diagnostics) {
                Ok(position) => parts.push(PartSighting {
                    label: label.to_string(),
                    position,
                }),
                Err(error) => diagnostics.record(error),
            },
        }
    }

    let is_team_mate = match (&options.team, &team) {
        (Some(ours), Some(theirs)) => ours == theirs,
        _ => false,
    };

    Ok(PlayerSighting {
        team,
        is_team_mate,
        id,
        parts,
    })
}

/// A body part such as `(head (pol 9.04 -57.66 -28.25))`.
fn read_part(field: &Field, diagnostics: &mut Diagnostics) -> Result<Polar, ParsingError> {
    match field
        .values
        .as_slice()
    {
        [pol] if pol.is_group() => {
            let mut cursor = Cursor::over(*pol);
            read_polar(&mut cursor, diagnostics)
        }
        _ => Err(ParsingError::Expected(
            field
                .name
                .end(),
            "a polar position",
        )),
    }
}
