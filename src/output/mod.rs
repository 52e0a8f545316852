//! Output generation for the perceptor CLI application

use serde::Serialize;
use tinytemplate::TinyTemplate;

use perceptor::language::*;

mod renderer;

use renderer::Syntax;
pub use renderer::{Identity, Render, Terminal};

static TEMPLATE: &str = "{heading}
{{ if game }}  game    {game}
{{ endif }}{{ if agent }}  agent   {agent}
{{ endif }}{{ for line in sensors }}  sensor  {line}
{{ endfor }}{{ for line in joints }}  joint   {line}
{{ endfor }}{{ for line in vision }}  vision  {line}
{{ endfor }}{{ for line in heard }}  heard   {line}
{{ endfor }}";

#[derive(Serialize)]
struct Context {
    heading: String,
    game: Option<String>,
    agent: Option<String>,
    sensors: Vec<String>,
    joints: Vec<String>,
    vision: Vec<String>,
    heard: Vec<String>,
}

/// Produce a human readable summary of one decoded message. `line` is the
/// one-origin line number of the message within its capture file.
pub fn summarize(
    renderer: &impl Render,
    line: usize,
    state: &PerceptorState,
    diagnostics: usize,
) -> Result<String, tinytemplate::error::Error> {
    let context = Context {
        heading: heading(renderer, line, state, diagnostics),
        game: state
            .game()
            .map(|game| describe_game(renderer, game)),
        agent: state
            .agent()
            .map(|agent| {
                format!(
                    "temp {} battery {}",
                    number(renderer, agent.temperature),
                    number(renderer, agent.battery)
                )
            }),
        sensors: sensors(renderer, state),
        joints: joints(renderer, state),
        vision: vision(renderer, state),
        heard: state
            .heard()
            .iter()
            .map(|heard| describe_heard(renderer, heard))
            .collect(),
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", TEMPLATE)?;

    tt.render("summary", &context)
}

fn heading(renderer: &impl Render, line: usize, state: &PerceptorState, diagnostics: usize) -> String {
    let mut result = renderer.render(Syntax::Heading, &format!("message {}", line));

    if let Some(now) = state.simulation_time() {
        result.push_str(&format!(" at {}", number(renderer, now)));
    }

    let n = state.len();
    result.push_str(&format!(
        ": {} reading{}",
        n,
        if n == 1 { "" } else { "s" }
    ));

    if diagnostics > 0 {
        let warning = format!(
            "{} warning{}",
            diagnostics,
            if diagnostics == 1 { "" } else { "s" }
        );
        result.push_str(", ");
        result.push_str(&renderer.render(Syntax::Warning, &warning));
    }

    result
}

fn number(renderer: &impl Render, value: f64) -> String {
    renderer.render(Syntax::Numeric, &format!("{:.2}", value))
}

fn angle(renderer: &impl Render, value: Angle) -> String {
    renderer.render(Syntax::Numeric, &format!("{:.2}°", value.degrees()))
}

fn vector(renderer: &impl Render, value: Vector3) -> String {
    format!(
        "{} {} {}",
        number(renderer, value.x),
        number(renderer, value.y),
        number(renderer, value.z)
    )
}

fn polar(renderer: &impl Render, value: &Polar) -> String {
    format!(
        "{} {} {}",
        number(renderer, value.distance),
        angle(renderer, value.theta),
        angle(renderer, value.phi)
    )
}

fn label(renderer: &impl Render, value: &str) -> String {
    renderer.render(Syntax::Label, value)
}

fn side(value: FieldSide) -> &'static str {
    match value {
        FieldSide::Left => "left",
        FieldSide::Right => "right",
    }
}

fn play_mode(value: PlayMode) -> String {
    match value {
        PlayMode::BeforeKickOff => "BeforeKickOff".to_string(),
        PlayMode::KickOff(s) => format!("KickOff {}", side(s)),
        PlayMode::PlayOn => "PlayOn".to_string(),
        PlayMode::KickIn(s) => format!("KickIn {}", side(s)),
        PlayMode::CornerKick(s) => format!("CornerKick {}", side(s)),
        PlayMode::GoalKick(s) => format!("GoalKick {}", side(s)),
        PlayMode::Offside(s) => format!("Offside {}", side(s)),
        PlayMode::GameOver => "GameOver".to_string(),
        PlayMode::Goal(s) => format!("Goal {}", side(s)),
        PlayMode::FreeKick(s) => format!("FreeKick {}", side(s)),
        PlayMode::Unknown => "Unknown".to_string(),
    }
}

fn describe_game(renderer: &impl Render, game: &GameState) -> String {
    let mut result = format!(
        "t {} pm {}",
        number(renderer, game.game_time),
        renderer.render(Syntax::Keyword, &play_mode(game.play_mode))
    );

    if let Some(s) = game.side {
        result.push_str(&format!(" team {}", renderer.render(Syntax::Keyword, side(s))));
    }
    if let Some(unum) = game.player_id {
        result.push_str(&format!(" unum {}", unum));
    }
    if let (Some(left), Some(right)) = (game.score_left, game.score_right) {
        result.push_str(&format!(" score {}:{}", left, right));
    }

    result
}

fn sensors(renderer: &impl Render, state: &PerceptorState) -> Vec<String> {
    let mut lines = Vec::new();

    for gyro in state
        .gyros()
        .values()
    {
        lines.push(format!(
            "{} rt {}",
            label(renderer, &gyro.label),
            vector(renderer, gyro.rate)
        ));
    }
    for acc in state
        .accelerometers()
        .values()
    {
        lines.push(format!(
            "{} a {}",
            label(renderer, &acc.label),
            vector(renderer, acc.acceleration)
        ));
    }
    for touch in state
        .touches()
        .values()
    {
        lines.push(format!(
            "{} {}",
            label(renderer, &touch.label),
            renderer.render(
                Syntax::Keyword,
                if touch.touching { "touching" } else { "clear" }
            )
        ));
    }
    for force in state
        .forces()
        .values()
    {
        lines.push(format!(
            "{} c {} f {}",
            label(renderer, &force.label),
            vector(renderer, force.contact),
            vector(renderer, force.force)
        ));
    }

    lines
}

fn joints(renderer: &impl Render, state: &PerceptorState) -> Vec<String> {
    let mut lines = Vec::new();

    for hinge in state
        .hinges()
        .values()
    {
        lines.push(format!(
            "{} {}",
            label(renderer, &hinge.label),
            angle(renderer, hinge.angle)
        ));
    }
    for joint in state
        .universal_joints()
        .values()
    {
        lines.push(format!(
            "{} {} {}",
            label(renderer, &joint.label),
            angle(renderer, joint.angle1),
            angle(renderer, joint.angle2)
        ));
    }

    lines
}

fn vision(renderer: &impl Render, state: &PerceptorState) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(position) = state.own_position() {
        lines.push(format!(
            "{} {}",
            label(renderer, "mypos"),
            vector(renderer, position)
        ));
    }
    if let Some(ball) = state.ball() {
        lines.push(format!(
            "{} {}",
            label(renderer, "B"),
            polar(renderer, &ball.position)
        ));
    }

    for sighting in state.sightings() {
        match sighting {
            Sighting::Landmark(landmark) => lines.push(format!(
                "{} {}",
                label(
                    renderer,
                    landmark
                        .landmark
                        .label()
                ),
                polar(renderer, &landmark.position)
            )),
            Sighting::Player(player) => lines.push(describe_player(renderer, player)),
        }
    }

    for line in state.lines() {
        lines.push(format!(
            "{} {} to {}",
            label(renderer, "L"),
            polar(renderer, &line.start),
            polar(renderer, &line.end)
        ));
    }

    lines
}

fn describe_player(renderer: &impl Render, player: &PlayerSighting) -> String {
    let mut result = label(renderer, "P");

    if let Some(team) = &player.team {
        result.push(' ');
        result.push_str(&renderer.render(Syntax::Text, team));
    }
    if let Some(id) = player.id {
        result.push_str(&format!(" {}", id));
    }
    if player.is_team_mate {
        result.push_str(&format!(" {}", renderer.render(Syntax::Keyword, "mate")));
    }

    for part in &player.parts {
        result.push_str(&format!(
            ", {} {}",
            label(renderer, &part.label),
            polar(renderer, &part.position)
        ));
    }

    result
}

fn describe_heard(renderer: &impl Render, heard: &HeardMessage) -> String {
    let mut result = number(renderer, heard.heard_at);

    if let Some(team) = &heard.team {
        result.push(' ');
        result.push_str(&renderer.render(Syntax::Text, team));
    }

    match heard.direction {
        Some(direction) if !heard.from_self => {
            result.push(' ');
            result.push_str(&angle(renderer, direction));
        }
        _ => {
            result.push(' ');
            result.push_str(&renderer.render(Syntax::Keyword, "self"));
        }
    }

    result.push(' ');
    result.push_str(&renderer.render(Syntax::Text, &format!("\"{}\"", heard.text)));

    result
}
