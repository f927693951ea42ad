//! Integration tests for the typewriter engine driven like the front end

use derelict::clock::ShipClock;
use derelict::terminal::{
    boot_sequence, build_terminal, CommandOutcome, EngineState, ResponseLine, ScriptLine, PROMPT,
};
use derelict::{ComponentIntegrity, Config, TypewriterConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::helpers::{pristine_commands, run_until_input, seeded_engine, submit};

fn mother_script() -> Vec<ScriptLine> {
    let integrity = ComponentIntegrity::new(100, 70, 50).unwrap();
    boot_sequence("MOTHER MOT-210.70", &integrity, &TypewriterConfig::default())
}

#[test]
fn mother_boots_to_a_prompt() {
    let mut engine = seeded_engine(mother_script(), 21);
    run_until_input(&mut engine);

    assert!(engine.boot_completed());
    assert_eq!(engine.state(), EngineState::InputMode);
    let lines = engine.lines();
    assert_eq!(lines[0], "MOTHER MOT-210.70 rebooting .......");
    assert!(lines.contains(&"CPU ....100%".to_string()));
    assert!(lines.contains(&"Storage ....50%".to_string()));
    assert!(lines.contains(&"MOTHER 6000 OPERATING SYSTEM".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some(PROMPT));
}

#[test]
fn boot_prints_the_ship_clock() {
    let clock = ShipClock::default().shared();
    let mut engine = seeded_engine(mother_script(), 0)
        .with_timestamps(Box::new(std::rc::Rc::clone(&clock)));
    run_until_input(&mut engine);

    let expected = clock.borrow().timestamp();
    assert!(
        engine.lines().iter().any(|line| line == &expected),
        "missing {}",
        expected
    );
    assert!(!engine.lines().iter().any(|line| line == "TIME_STAMP"));
}

#[test]
fn configured_terminal_runs_end_to_end() {
    let config = Config::default();
    let spec = config.terminal("security").unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let build = build_terminal(spec, &config.typewriter, &mut rng).unwrap();
    assert_eq!(build.designation, "SECURITY terminal");

    let mut engine = seeded_engine(build.script, build.score.value());
    run_until_input(&mut engine);
    assert_eq!(engine.lines()[0], "SECURITY terminal rebooting .......");
}

#[test]
fn status_command_reports_degradation() {
    let mut engine = seeded_engine(Vec::new(), 0);
    let mut commands = derelict::terminal::TerminalCommands::new(
        ComponentIntegrity::new(100, 70, 50).unwrap(),
        derelict::DegradationScore::new(21),
    );
    submit(&mut engine, &mut commands, "STATUS");
    run_until_input(&mut engine);

    assert_eq!(
        engine.lines(),
        &[
            "> STATUS".to_string(),
            "System degradation: 21%".to_string(),
            "CPU: 100%   Memory: 70%   Storage: 50%".to_string(),
            PROMPT.to_string(),
        ]
    );
}

#[test]
fn unknown_command_is_answered() {
    let mut engine = seeded_engine(Vec::new(), 0);
    submit(&mut engine, &mut pristine_commands(), "xyzzy");
    run_until_input(&mut engine);
    assert!(engine
        .lines()
        .contains(&"Command not found: xyzzy".to_string()));
}

#[test]
fn clear_after_session_leaves_one_prompt() {
    let mut engine = seeded_engine(mother_script(), 21);
    run_until_input(&mut engine);
    let mut commands = pristine_commands();
    submit(&mut engine, &mut commands, "help");
    run_until_input(&mut engine);
    assert!(engine.lines().len() > 10);

    submit(&mut engine, &mut commands, "clear");
    assert_eq!(engine.lines(), &[PROMPT.to_string()]);
    assert_eq!(engine.input(), "");
    assert!(engine.is_accepting_input());
}

#[test]
fn empty_command_needs_no_ticks() {
    let mut engine = seeded_engine(Vec::new(), 0);
    submit(&mut engine, &mut pristine_commands(), "   ");
    assert!(engine.is_accepting_input());
    assert_eq!(engine.lines().len(), 2);
    assert_eq!(engine.lines()[1], PROMPT);
}

#[test]
fn typing_is_ignored_during_a_response() {
    let mut engine = seeded_engine(Vec::new(), 0);
    let mut slow = |_: &str| CommandOutcome::lines(["a very slow response"]);
    submit(&mut engine, &mut slow, "go");
    assert_eq!(engine.state(), EngineState::ResponseTyping);

    assert!(!engine.type_char('x', false));
    engine.backspace();
    assert_eq!(engine.input(), "");
}

#[test]
fn each_response_line_gets_its_own_row() {
    let mut engine = seeded_engine(Vec::new(), 0);
    engine.start_typing_response(vec![
        ResponseLine::new("one", 0.0),
        ResponseLine::new("two", 0.0),
        ResponseLine::new("three", 0.0),
    ]);
    engine.advance(0.0);
    assert_eq!(
        engine.lines(),
        &[
            PROMPT.to_string(),
            "one".to_string(),
            "two".to_string(),
            "three".to_string(),
            PROMPT.to_string(),
        ]
    );
}

#[test]
fn heavy_degradation_keeps_line_lengths() {
    let script = mother_script();
    let mut engine = seeded_engine(script.clone(), 262);
    run_until_input(&mut engine);

    let mut clean = seeded_engine(script, 0);
    run_until_input(&mut clean);

    let lengths = |lines: &[String]| -> Vec<usize> {
        lines.iter().map(|line| line.chars().count()).collect()
    };
    assert_eq!(lengths(engine.lines()), lengths(clean.lines()));
}

#[test]
fn degraded_boot_is_slower_on_average() {
    let healthy = {
        let mut engine = seeded_engine(mother_script(), 0);
        run_until_input(&mut engine)
    };
    let degraded = {
        let mut engine = seeded_engine(mother_script(), 150);
        run_until_input(&mut engine)
    };
    assert!(degraded > healthy, "{} <= {}", degraded, healthy);
}
