#[cfg(test)]
mod verify {
    use perceptor::language::*;
    use perceptor::parsing::cursor::Cursor;
    use perceptor::parsing::{self, DecodeOptions, ErrorKind, ParsingError};
    use std::f64::consts::PI;
    use std::time::{Duration, Instant};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wire_message() {
        let decoded = parsing::decode(
            r#"
(time (now 417.65))(GS (t 0.00) (pm PlayOn))(GYR (n torso) (rt 0.01 0.07 0.46))
(HJ (n hj1) (ax -0.00))(See (F1L (pol 19.11 111.69 -9.57)) (B (pol 18.34 4.66 -9.90)))
            "#,
        );

        assert!(decoded
            .diagnostics
            .is_empty());

        let state = decoded.state;
        assert_eq!(state.simulation_time(), Some(417.65));
        assert_eq!(
            state
                .game()
                .map(|game| game.play_mode),
            Some(PlayMode::PlayOn)
        );
        assert_eq!(
            state.gyros()["torso"].rate,
            Vector3::new(0.01, 0.07, 0.46)
        );
        assert_eq!(
            state
                .landmarks()
                .count(),
            1
        );
        assert!(close(
            state
                .ball()
                .unwrap()
                .position
                .distance,
            18.34
        ));
    }

    #[test]
    fn hinge_angle_is_converted() {
        for value in [0.0, 12.5, -90.0, 179.0, 270.0] {
            let message = format!("(HJ (n hj3) (ax {}))", value);
            let decoded = parsing::decode(&message);

            assert!(decoded
                .diagnostics
                .is_empty());
            assert_eq!(
                decoded
                    .state
                    .hinges()
                    .len(),
                1
            );

            let hinge = &decoded
                .state
                .hinges()["hj3"];
            assert_eq!(hinge.angle, Angle::from_degrees(value));
        }

        // 270° lands in the normalized range as -90°
        let decoded = parsing::decode("(HJ (n hj3) (ax 270))");
        assert!(
            (decoded
                .state
                .hinges()["hj3"]
                .angle
                .degrees()
                + 90.0)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn game_state_before_kick_off() {
        let decoded = parsing::decode("(GS (t 0.00) (pm BeforeKickOff))");

        assert!(decoded
            .diagnostics
            .is_empty());
        assert_eq!(decoded.state.len(), 1);

        let game = decoded
            .state
            .game()
            .unwrap();
        assert_eq!(game.game_time, 0.0);
        assert_eq!(game.play_mode, PlayMode::BeforeKickOff);
        assert_eq!(game.side, None);
        assert_eq!(game.player_id, None);
    }

    #[test]
    fn game_state_with_player() {
        let decoded = parsing::decode("(GS (unum 7) (team right) (t 12.40) (pm KickOff_Left))");

        assert!(decoded
            .diagnostics
            .is_empty());

        let game = decoded
            .state
            .game()
            .unwrap();
        assert_eq!(game.player_id, Some(7));
        assert_eq!(game.side, Some(FieldSide::Right));
        assert_eq!(game.play_mode, PlayMode::KickOff(FieldSide::Left));
        assert!(close(game.game_time, 12.4));
    }

    #[test]
    fn unknown_play_mode() {
        let decoded = parsing::decode("(GS (t 3.00) (pm Halftime))");

        assert_eq!(
            decoded
                .state
                .game()
                .map(|game| game.play_mode),
            Some(PlayMode::Unknown)
        );
        assert_eq!(
            decoded.diagnostics,
            vec![ParsingError::UnknownKeyword(
                17,
                "Halftime".to_string()
            )]
        );
    }

    #[test]
    fn heard_from_self() {
        let decoded = parsing::decode("(hear 12.3 self ''helloworld'')");

        assert!(decoded
            .diagnostics
            .is_empty());

        let heard = decoded
            .state
            .heard();
        assert_eq!(heard.len(), 1);
        assert!(heard[0].from_self);
        assert_eq!(heard[0].text, "helloworld");
        assert!(close(heard[0].heard_at, 12.3));
        assert_eq!(heard[0].direction, None);
    }

    #[test]
    fn heard_from_elsewhere() {
        let decoded = parsing::decode("(hear 12.3 12.34 ''overhere'')");

        assert!(decoded
            .diagnostics
            .is_empty());

        let heard = &decoded
            .state
            .heard()[0];
        assert!(!heard.from_self);
        assert_eq!(heard.text, "overhere");
        assert!(
            (heard
                .direction
                .unwrap()
                .degrees()
                - 12.34)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn heard_with_team() {
        let decoded = parsing::decode("(hear Others 40.1 -20.0 'goforit')");

        assert!(decoded
            .diagnostics
            .is_empty());

        let heard = &decoded
            .state
            .heard()[0];
        assert_eq!(heard.team, Some("Others".to_string()));
        assert_eq!(heard.text, "goforit");
    }

    #[test]
    fn player_parts_keep_their_order() {
        let decoded = parsing::decode(
            "(See (P (team X) (id 2) (head (pol 9.04 -57.66 -28.25)) (rfoot (pol 9.01 -59.41 -30.45))))",
        );

        assert!(decoded
            .diagnostics
            .is_empty());

        let players = decoded
            .state
            .players()
            .collect::<Vec<_>>();
        assert_eq!(players.len(), 1);

        let player = players[0];
        assert_eq!(player.id, Some(2));
        assert!(!player.is_team_mate);
        assert_eq!(player.team, Some("X".to_string()));

        let labels = player
            .parts
            .iter()
            .map(|part| {
                part.label
                    .as_str()
            })
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["head", "rfoot"]);
        assert!(close(player.parts[0].position.distance, 9.04));
        assert!(close(player.parts[1].position.distance, 9.01));
    }

    #[test]
    fn team_mates_follow_options() {
        let options = DecodeOptions {
            team: Some("X".to_string()),
        };
        let decoded = parsing::decode_with(
            &options,
            "(See (P (team X) (id 2) (head (pol 9.04 -57.66 -28.25))) (P (team Y) (id 5)))",
        );

        let mates = decoded
            .state
            .players()
            .map(|player| player.is_team_mate)
            .collect::<Vec<_>>();
        assert_eq!(mates, vec![true, false]);
    }

    #[test]
    fn sightings_keep_arrival_order() {
        let decoded = parsing::decode(
            "(See (G2R (pol 8.9 10.0 1.9)) (P (team X) (id 1)) (F1L (pol 19.1 111.7 -9.6)))",
        );

        let kinds = decoded
            .state
            .sightings()
            .iter()
            .map(|sighting| match sighting {
                Sighting::Landmark(landmark) => landmark
                    .landmark
                    .label(),
                Sighting::Player(_) => "P",
            })
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec!["G2R", "P", "F1L"]);
    }

    #[test]
    fn unknown_group_spares_the_rest() {
        let decoded = parsing::decode("(XYZ (q 1) (r 2)) (ACC (n torso) (a 0.00 0.00 9.81))");

        assert_eq!(
            decoded
                .state
                .accelerometers()
                .len(),
            1
        );
        assert_eq!(
            decoded.state.accelerometers()["torso"].acceleration,
            Vector3::new(0.0, 0.0, 9.81)
        );

        let unknown = decoded
            .diagnostics
            .iter()
            .filter(|error| error.kind() == ErrorKind::UnknownTag)
            .count();
        assert_eq!(unknown, 1);
        assert_eq!(
            decoded.diagnostics,
            vec![ParsingError::UnknownTag(1, "XYZ".to_string())]
        );
    }

    #[test]
    fn gibberish() {
        let decoded = parsing::decode("gibberish");

        assert!(!decoded
            .diagnostics
            .is_empty());
        assert!(decoded
            .state
            .is_empty());
    }

    #[test]
    fn garbage_always_terminates() {
        let alphabet = b"()  abHJnpol1.-+e\t\n";

        // a small linear congruential generator keeps this reproducible
        let mut seed: u64 = 0x5eed;
        for _ in 0..500 {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let length = (seed >> 33) as usize % 80;
            let mut message = String::with_capacity(length);
            for _ in 0..length {
                seed = seed
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let i = (seed >> 33) as usize % alphabet.len();
                message.push(alphabet[i] as char);
            }

            let decoded = parsing::decode(&message);
            for error in &decoded.diagnostics {
                assert!(error.offset() <= message.len());
            }
        }

        for message in [")", "(", ")))(((", "((((((((", "(HJ (n", "(See (P (head (pol", "( ) ( ( ) )"] {
            let decoded = parsing::decode(message);
            assert!(
                !decoded
                    .diagnostics
                    .is_empty(),
                "no diagnostic for {:?}",
                message
            );
        }
    }

    #[test]
    fn entering_and_exiting() {
        let content = "(((x 1) 2) 3)";

        for k in 1..=3 {
            let mut cursor = Cursor::new(content);
            assert_eq!(cursor.depth(), 0);

            cursor
                .enter(k)
                .unwrap();
            assert_eq!(cursor.depth(), k);

            cursor
                .exit(k)
                .unwrap();
            assert_eq!(cursor.depth(), 0);
            assert!(cursor.is_finished());
        }

        let mut cursor = Cursor::new(content);
        assert_eq!(
            cursor.enter(4),
            Err(ParsingError::Expected(3, "an opening parenthesis"))
        );
    }

    #[test]
    fn negative_literal_run_together() {
        let decoded = parsing::decode("(See (F1L (pol 19.11 111.69-9.57)))");

        assert!(decoded
            .diagnostics
            .is_empty());

        let landmark = decoded
            .state
            .landmarks()
            .next()
            .unwrap();
        assert_eq!(landmark.landmark, Landmark::from_label("F1L").unwrap());
        assert!(close(landmark.position.distance, 19.11));
        assert_eq!(landmark.position.theta, Angle::from_degrees(111.69));
        assert_eq!(landmark.position.phi, Angle::from_degrees(-9.57));
    }

    #[test]
    fn duplicate_labels_are_reported() {
        let decoded = parsing::decode("(HJ (n hj1) (ax 1.0)) (HJ (n hj1) (ax 2.0))");

        assert_eq!(
            decoded
                .state
                .hinges()
                .len(),
            1
        );
        assert_eq!(
            decoded.state.hinges()["hj1"].angle,
            Angle::from_degrees(2.0)
        );
        assert_eq!(
            decoded.diagnostics,
            vec![ParsingError::DuplicateReading(
                22,
                "hj1".to_string()
            )]
        );
    }

    #[test]
    fn garbage_decodes_in_linear_time() {
        let message = "a ) ".repeat(100_000);

        let start = Instant::now();
        let decoded = parsing::decode(&message);
        let elapsed = start.elapsed();

        assert_eq!(
            decoded
                .diagnostics
                .len(),
            200_000
        );
        assert_eq!(decoded.diagnostics[0], ParsingError::UnexpectedCharacter(0, 'a'));
        assert_eq!(decoded.diagnostics[1], ParsingError::UnmatchedCloseParen(2));
        assert!(decoded
            .state
            .is_empty());
        assert!(
            elapsed < Duration::from_secs(10),
            "decoding took {:?}",
            elapsed
        );
    }

    #[test]
    fn simulation_time() {
        let decoded = parsing::decode("(time (now 102.30)) (GS (t 35.40) (pm PlayOn))");

        assert!(decoded
            .diagnostics
            .is_empty());
        assert_eq!(decoded.state.simulation_time(), Some(102.30));
        assert_eq!(
            decoded
                .state
                .game()
                .and_then(|game| game.simulation_time),
            Some(102.30)
        );

        let decoded = parsing::decode("(GS (t 35.40) (pm PlayOn))");
        assert_eq!(decoded.state.simulation_time(), None);
    }

    #[test]
    fn universal_joint_angles() {
        let decoded = parsing::decode("(UJ (n laj1_2) (ax1 -90.00) (ax2 12.50))");

        assert!(decoded
            .diagnostics
            .is_empty());

        let joint = &decoded
            .state
            .universal_joints()["laj1_2"];
        assert_eq!(joint.label, "laj1_2");
        assert!(close(
            joint
                .angle1
                .radians(),
            -PI / 2.0
        ));
        assert!(close(
            joint
                .angle2
                .degrees(),
            12.5
        ));
    }

    #[test]
    fn touch_layouts() {
        let decoded = parsing::decode("(TCH n bumper val 1)");
        assert!(decoded
            .diagnostics
            .is_empty());
        assert!(decoded.state.touches()["bumper"].touching);

        let decoded = parsing::decode("(TCH (n bumper) (val 1))");
        assert!(decoded
            .diagnostics
            .is_empty());
        assert!(decoded.state.touches()["bumper"].touching);

        let decoded = parsing::decode("(TCH n bumper val 0)");
        assert!(decoded
            .diagnostics
            .is_empty());
        assert!(!decoded.state.touches()["bumper"].touching);
    }

    #[test]
    fn force_resistance_vectors() {
        let decoded = parsing::decode("(FRP (n lf) (c -0.01 0.02 -0.04) (f 0.31 -0.12 22.57))");

        assert!(decoded
            .diagnostics
            .is_empty());

        let force = &decoded
            .state
            .forces()["lf"];
        assert_eq!(force.contact, Vector3::new(-0.01, 0.02, -0.04));
        assert_eq!(force.force, Vector3::new(0.31, -0.12, 22.57));
    }

    #[test]
    fn agent_state_values() {
        let decoded = parsing::decode("(AgentState (temp 41.00) (battery 87.50))");

        assert!(decoded
            .diagnostics
            .is_empty());

        let agent = decoded
            .state
            .agent()
            .unwrap();
        assert_eq!(agent.temperature, 41.0);
        assert_eq!(agent.battery, 87.5);
    }

    #[test]
    fn field_lines() {
        let decoded = parsing::decode("(See (L (pol 5.10 -30.00 -10.00) (pol 6.20 30.00 -9.00)))");

        assert!(decoded
            .diagnostics
            .is_empty());

        let lines = decoded
            .state
            .lines();
        assert_eq!(lines.len(), 1);
        assert!(close(lines[0].start.distance, 5.1));
        assert_eq!(lines[0].start.theta, Angle::from_degrees(-30.0));
        assert_eq!(lines[0].start.phi, Angle::from_degrees(-10.0));
        assert!(close(lines[0].end.distance, 6.2));
        assert_eq!(lines[0].end.theta, Angle::from_degrees(30.0));
        assert_eq!(lines[0].end.phi, Angle::from_degrees(-9.0));
        assert!(decoded
            .state
            .sightings()
            .is_empty());
    }

    #[test]
    fn own_position() {
        let decoded = parsing::decode("(See (mypos 1.20 -3.40 0.45) (B (pol 2.0 10.0 -5.0)))");

        assert!(decoded
            .diagnostics
            .is_empty());
        assert_eq!(
            decoded
                .state
                .own_position(),
            Some(Vector3::new(1.2, -3.4, 0.45))
        );
        assert_eq!(
            decoded
                .state
                .ball()
                .map(|ball| ball.position.theta),
            Some(Angle::from_degrees(10.0))
        );
    }
}
