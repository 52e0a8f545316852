#[cfg(test)]
mod syntax {
    use perceptor::parsing::{decode, ParsingError};

    /// Helper function to check that decoding reports the expected kind of
    /// problem, while still returning whatever could be recovered.
    fn expect_error(content: &str, expected: ParsingError) {
        let result = decode(content);

        if result
            .diagnostics
            .is_empty()
        {
            panic!(
                "Expected decoding to report a problem, but none was found for input: {}",
                content
            );
        }

        let found_expected = result
            .diagnostics
            .iter()
            .any(|error| std::mem::discriminant(error) == std::mem::discriminant(&expected));

        if !found_expected {
            panic!(
                "Expected error type like {:?} but got: {:?} for input '{}'",
                expected, result.diagnostics, content
            );
        }
    }

    #[test]
    fn stray_text_between_groups() {
        expect_error(
            "(time (now 1.0)) oops (HJ (n hj1) (ax 1.0))",
            ParsingError::UnexpectedCharacter(0, ' '),
        );
    }

    #[test]
    fn unterminated_quote() {
        expect_error(
            "(hear 12.3 self 'hello)",
            ParsingError::UnterminatedLiteral(0),
        );
    }

    #[test]
    fn unclosed_group() {
        expect_error("(time (now 1.0)", ParsingError::UnclosedGroup(0));
    }

    #[test]
    fn unmatched_close() {
        expect_error("(time (now 1.0)))", ParsingError::UnmatchedCloseParen(0));
    }

    #[test]
    fn empty_group() {
        expect_error("()", ParsingError::GroupEnded(0));
    }

    #[test]
    fn fields_out_of_order() {
        expect_error(
            "(HJ (ax 1.0) (n hj1))",
            ParsingError::ExpectedField(0, "", "".to_string()),
        );
    }

    #[test]
    fn unknown_tag() {
        expect_error("(Compass (n c1) (h 90))", ParsingError::UnknownTag(0, "".to_string()));
    }

    #[test]
    fn unknown_sighting() {
        expect_error(
            "(See (F9X (pol 1 2 3)) (B (pol 1 2 3)))",
            ParsingError::UnknownTag(0, "".to_string()),
        );
    }

    #[test]
    fn too_few_values() {
        expect_error(
            "(ACC (n torso) (a 0.1 0.2))",
            ParsingError::FieldCount(0, "", 0, 0),
        );
    }

    #[test]
    fn too_many_values() {
        expect_error(
            "(UJ (n laj1_2) (ax1 1.0 2.0) (ax2 3.0))",
            ParsingError::FieldCount(0, "", 0, 0),
        );
    }

    #[test]
    fn trailing_fields() {
        expect_error(
            "(TCH (n bumper) (val 1) (extra 2))",
            ParsingError::ExtraFields(0, "", 0),
        );
    }

    #[test]
    fn missing_game_time() {
        expect_error("(GS (pm PlayOn))", ParsingError::FieldCount(0, "", 0, 0));
    }

    #[test]
    fn bad_literal() {
        expect_error(
            "(GYR (n torso) (rt 0.1 zero 0.3))",
            ParsingError::InvalidNumber(0, "".to_string()),
        );
    }

    #[test]
    fn dangling_sign() {
        expect_error(
            "(HJ (n hj1) (ax 1.5-))",
            ParsingError::InvalidNumber(0, "".to_string()),
        );
    }

    #[test]
    fn unknown_play_mode() {
        expect_error(
            "(GS (t 1.0) (pm Intermission))",
            ParsingError::UnknownKeyword(0, "".to_string()),
        );
    }

    #[test]
    fn second_ball() {
        expect_error(
            "(See (B (pol 1 2 3)) (B (pol 4 5 6)))",
            ParsingError::DuplicateReading(0, "".to_string()),
        );
    }

    #[test]
    fn second_game_state() {
        expect_error(
            "(GS (t 1.0) (pm PlayOn)) (GS (t 2.0) (pm PlayOn))",
            ParsingError::DuplicateReading(0, "".to_string()),
        );
    }
}

#[cfg(test)]
mod recovery {
    use perceptor::parsing::{decode, ErrorKind, ParsingError};

    #[test]
    fn kinds_are_classified() {
        let decoded = decode(
            "(XYZ 1) (HJ (n hj1) (ax one)) (GYR (n torso) (rt 1 2)) (hear 1.0 self 'x) stray",
        );

        let kinds = decoded
            .diagnostics
            .iter()
            .map(ParsingError::kind)
            .collect::<Vec<_>>();

        assert_eq!(
            kinds,
            vec![
                ErrorKind::UnknownTag,
                ErrorKind::NumericFormat,
                ErrorKind::FieldCount,
                ErrorKind::Lexical,
                ErrorKind::Lexical,
            ]
        );

        // every reading that could be salvaged still comes through
        assert_eq!(
            decoded
                .state
                .hinges()
                .len(),
            1
        );
        assert_eq!(
            decoded
                .state
                .gyros()
                .len(),
            1
        );
        assert_eq!(
            decoded
                .state
                .heard()
                .len(),
            1
        );
    }

    #[test]
    fn stray_close_does_not_stop_decoding() {
        let decoded = decode("(HJ (n hj1) (ax 1.0)) (HJ (n hj2) (ax 2.0)) ) (HJ (n hj3) (ax 3.0))");

        assert_eq!(
            decoded
                .state
                .hinges()
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["hj1", "hj2", "hj3"]
        );
        assert_eq!(
            decoded.diagnostics,
            vec![ParsingError::UnmatchedCloseParen(44)]
        );
        assert_eq!(
            decoded.diagnostics[0].kind(),
            ErrorKind::Structural
        );
    }

    #[test]
    fn unclosed_group_keeps_earlier_readings() {
        let decoded = decode("(HJ (n hj1) (ax 1.0)) (HJ (n hj2) (ax 2.0) (HJ (n hj3) (ax 3.0))");

        assert_eq!(
            decoded
                .state
                .hinges()
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["hj1"]
        );
        assert_eq!(decoded.diagnostics, vec![ParsingError::UnclosedGroup(22)]);
    }

    #[test]
    fn messages_are_readable() {
        let error = ParsingError::FieldCount(4, "rt", 3, 2);
        assert_eq!(error.message(), "'rt' should have 3 values but has 2");
        assert_eq!(error.offset(), 4);
    }
}
