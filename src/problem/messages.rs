use perceptor::parsing::{ParsingError, Tag};

/// Generate problem and detail messages for a diagnostic
pub fn generate_error_message(error: &ParsingError) -> (String, String) {
    match error {
        ParsingError::UnexpectedCharacter(_, c) => (
            format!("Unexpected character '{}'", c),
            r#"
Every reading in a perceptor message is enclosed in parentheses, as in
(HJ (n hj1) (ax -0.00)). Text found outside of any group, or where a group
was expected, cannot belong to a reading and was skipped.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnterminatedLiteral(_) => (
            "Unterminated quoted text".to_string(),
            "The text of a heard message opens with a quote but never closes it, or the other way around. The text was kept with its quotes removed.".to_string(),
        ),
        ParsingError::UnknownKeyword(_, keyword) => (
            format!("Unknown keyword '{}'", keyword),
            r#"
The value is not one of the play modes or field sides the server is known to
send. The play mode was decoded as Unknown.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnexpectedEndOfInput(_) => (
            "Unexpected end of input".to_string(),
            "The message ended while more content was still expected.".to_string(),
        ),
        ParsingError::UnclosedGroup(_) => (
            "Group is never closed".to_string(),
            r#"
A '(' here has no matching ')' before the end of the message. Everything from
this point on was abandoned; readings before it were kept.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnmatchedCloseParen(_) => (
            "Unmatched ')'".to_string(),
            r#"
This ')' closes a group that was never opened. It was skipped and decoding
carried on with whatever follows it.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::GroupEnded(_) => (
            "Group ends prematurely".to_string(),
            "The group closed before all of its expected content was seen.".to_string(),
        ),
        ParsingError::Expected(_, value) => (
            format!("Expected {}", value),
            format!(
                "The decoder was looking for {} but found something else.",
                value
            ),
        ),
        ParsingError::ExpectedField(_, name, found) => (
            format!("Expected field '{}'", name),
            format!(
                r#"
Fields within a reading come in a fixed order. At this point the field '{}'
should appear, but '{}' was found instead, so the reading was dropped.
                "#,
                name, found
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnknownTag(_, tag) => {
            let known = [
                Tag::Time,
                Tag::GameState,
                Tag::Gyro,
                Tag::Accelerometer,
                Tag::HingeJoint,
                Tag::UniversalJoint,
                Tag::Touch,
                Tag::ForceResistance,
                Tag::Vision,
                Tag::AgentState,
                Tag::Hear,
            ]
            .iter()
            .map(|tag| tag.keyword())
            .collect::<Vec<_>>()
            .join(", ");

            (
                format!("Unknown tag '{}'", tag),
                format!(
                    r#"
This group's tag is not one the decoder recognizes, so the group was skipped.
The tags understood are: {}. Within a vision group the landmarks F1L, F2L,
F1R, F2R, G1L, G2L, G1R, G2R as well as B, P, L and mypos are understood.
                    "#,
                    known
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::FieldCount(_, field, expected, found) => (
            format!("Wrong number of values for '{}'", field),
            format!(
                r#"
The field '{}' should carry {} value{} but {} found. Missing values
were taken to be zero and extra ones ignored.
                "#,
                field,
                expected,
                if *expected == 1 { "" } else { "s" },
                if *found == 1 {
                    "1 was".to_string()
                } else {
                    format!("{} were", found)
                }
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::ExtraFields(_, tag, count) => (
            format!("Unexpected content in '{}'", tag),
            format!(
                "{} item{} after the last known field of this group {} ignored.",
                count,
                if *count == 1 { "" } else { "s" },
                if *count == 1 { "was" } else { "were" }
            ),
        ),
        ParsingError::InvalidNumber(_, literal) => (
            format!("Invalid number '{}'", literal),
            r#"
Numbers are written as an optional sign, digits with an optional decimal
point, and an optional exponent. A sign directly after a number starts the
next one, so 111.69-9.57 is read as two values. The value was taken as zero.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::DuplicateReading(_, label) => (
            format!("Duplicate reading for '{}'", label),
            "The same sensor was reported twice in one message. The later reading was kept."
                .to_string(),
        ),
    }
}
