//! Input source integration tests: every source drives the same simulation.

use coinrunner::game::{Simulation, run_headless};
use coinrunner::input::joystick::JoystickSource;
use coinrunner::input::keyboard::KeyboardSource;
use coinrunner::input::script::{InputScript, ScriptedSource};
use coinrunner::input::touch::{TouchLayout, TouchSource};
use coinrunner::input::{CompositeSource, ControlSample, InputSource};
use coinrunner::resources::gameconfig::GameConfig;

const FRAME: f32 = 1.0 / 60.0;

fn config() -> GameConfig {
    let mut config = GameConfig::new();
    config.coins.seed = Some(5);
    config
}

fn drive(sim: &mut Simulation, source: &mut dyn InputSource, frames: u32) {
    for _ in 0..frames {
        let sample = source.sample();
        sim.advance(FRAME, sample);
    }
}

#[test]
fn scripted_run_moves_and_jumps() {
    let script = InputScript::from_json(
        r#"[
            { "frames": 30, "right": true },
            { "frames": 1, "right": true, "jump": true },
            { "frames": 10, "right": true }
        ]"#,
    )
    .unwrap();
    assert_eq!(script.total_frames(), 41);

    let config = config();
    let mut source = ScriptedSource::new(script);
    let sim = run_headless(&config, &mut source, 41, 60.0);
    let pose = sim.player_pose().unwrap();

    assert!(pose.x > config.player.start_x + 50.0);
    assert!(pose.jumping);
    assert!(source.is_finished());
    assert!(sim.snapshot().tick >= 40);
}

#[test]
fn scripted_run_is_reproducible() {
    let script = InputScript::from_json(
        r#"[{ "frames": 400, "right": true, "run": true }, { "frames": 200, "left": true }]"#,
    )
    .unwrap();
    let config = config();
    let a = run_headless(&config, &mut ScriptedSource::new(script.clone()), 660, 60.0);
    let b = run_headless(&config, &mut ScriptedSource::new(script), 660, 60.0);
    assert_eq!(a.snapshot(), b.snapshot());
    // 11 seconds of wall clock spawn two coins, collected or not.
    let snap = a.snapshot();
    assert_eq!(snap.coins.len() as u32 + snap.score, 2);
}

#[test]
fn malformed_script_is_an_error() {
    assert!(InputScript::from_json(r#"[{ "frames": "many" }]"#).is_err());
    assert!(InputScript::from_path("/nonexistent/script.json").is_err());
}

#[test]
fn keyboard_events_drive_the_player() {
    let mut sim = Simulation::new(&config());
    let start = sim.player_pose().unwrap().x;
    let mut keyboard = KeyboardSource::new();

    keyboard.key_down("ArrowRight");
    keyboard.key_down("KeyQ");
    drive(&mut sim, &mut keyboard, 20);
    assert!(sim.player_pose().unwrap().x > start);

    keyboard.key_down("Space");
    drive(&mut sim, &mut keyboard, 1);
    assert!(sim.player_pose().unwrap().jumping);

    keyboard.key_up("ArrowRight");
    keyboard.key_up("Space");
    assert_eq!(keyboard.sample(), ControlSample::NONE);
}

#[test]
fn touch_buttons_drive_the_player() {
    let config = config();
    let layout = TouchLayout::for_viewport(
        config.window_width as f32,
        config.window_height as f32,
        72.0,
        16.0,
    );
    let mut touch = TouchSource::new(layout);
    let mut sim = Simulation::new(&config);
    let start = sim.player_pose().unwrap().x;

    let right = layout.right;
    touch.touch_start(1, right.x + 10.0, right.y + 10.0);
    drive(&mut sim, &mut touch, 20);
    assert!(sim.player_pose().unwrap().x > start);

    let jump = layout.jump;
    touch.touch_start(2, jump.x + 10.0, jump.y + 10.0);
    drive(&mut sim, &mut touch, 1);
    assert!(sim.player_pose().unwrap().jumping);

    touch.touch_end(1);
    touch.touch_end(2);
    assert_eq!(touch.sample(), ControlSample::NONE);
}

#[test]
fn broken_joystick_reads_as_no_input() {
    let mut sim = Simulation::new(&config());
    let start = sim.player_pose().unwrap();
    let mut joystick = JoystickSource::default();
    joystick.set_axis(f32::NAN);
    drive(&mut sim, &mut joystick, 30);
    let end = sim.player_pose().unwrap();
    assert_eq!(end.x, start.x);
    assert_eq!(end.vx, 0.0);
}

#[test]
fn full_joystick_deflection_runs() {
    let mut joystick = JoystickSource::default();
    joystick.set_knob(-50.0, 50.0);
    let sample = joystick.sample();
    assert!(sample.left && sample.run && !sample.right);
}

#[test]
fn composite_merges_keyboard_and_touch() {
    let config = config();
    let layout = TouchLayout::for_viewport(1280.0, 720.0, 72.0, 16.0);
    let mut keyboard = KeyboardSource::new();
    keyboard.key_down("ShiftLeft");
    let mut touch = TouchSource::new(layout);
    touch.touch_start(7, layout.right.x + 1.0, layout.right.y + 1.0);

    let mut composite = CompositeSource::new().with(keyboard).with(touch);
    assert_eq!(composite.len(), 2);
    assert_eq!(
        composite.sample(),
        ControlSample {
            right: true,
            run: true,
            ..ControlSample::NONE
        }
    );

    let mut sim = Simulation::new(&config);
    drive(&mut sim, &mut composite, 60);
    assert!(sim.player_pose().unwrap().vx > config.player.max_speed);
}
