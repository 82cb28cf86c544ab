//! raylib window front-end.
//!
//! Owns everything the headless simulation does not: the window, textures,
//! music and raw device input. Each frame it polls the keyboard, mouse/touch
//! and gamepad into their [`InputSource`]s, advances the [`Simulation`] by
//! the frame time and draws the resulting snapshot.
//!
//! Keys: arrows move, space jumps, shift runs, `M` toggles music, `F1`
//! toggles the debug overlay.

mod audio;
mod render;
mod textures;

use log::{info, warn};
use raylib::prelude::*;

use crate::components::animation::AnimationClipId;
use crate::game::Simulation;
use crate::input::InputSource;
use crate::input::joystick::JoystickSource;
use crate::input::keyboard::{Key, KeyboardSource};
use crate::input::touch::{TouchLayout, TouchSource};
use crate::resources::gameconfig::GameConfig;

use audio::{MusicToggle, apply_toggle, load_music};
use render::{FrameStyle, draw_frame};
use textures::TextureStore;

const TOUCH_BUTTON_SIZE: f32 = 72.0;
const TOUCH_BUTTON_MARGIN: f32 = 16.0;
const GAMEPAD: i32 = 0;

/// Open the window and run until it is closed.
pub fn run(config: &GameConfig) {
    let (window_w, window_h) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_w as i32, window_h as i32)
        .resizable()
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let textures = TextureStore::load(&mut rl, &thread, &config.asset_dir);

    let mut sim = Simulation::new(config);
    for clip in AnimationClipId::ALL {
        let ready = textures.clip(clip).is_some();
        if !ready {
            warn!("Animation '{}' has no sprite sheet, it will not be drawn", clip.as_str());
        }
        sim.set_clip_ready(clip, ready);
    }

    let audio_device = match RaylibAudio::init_audio_device() {
        Ok(device) => Some(device),
        Err(e) => {
            warn!("Audio disabled: {}", e);
            None
        }
    };
    let music = audio_device
        .as_ref()
        .and_then(|device| load_music(device, &config.asset_dir.join("music.mp3")));
    let mut music_toggle = MusicToggle::new(music.is_some());

    let mut keyboard = KeyboardSource::new();
    let mut touch = TouchSource::new(touch_layout(window_w as f32, window_h as f32));
    let mut joystick = JoystickSource::default();
    let mut debug = false;

    info!("Window open, entering main loop");
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let (width, height) = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        sim.resize(width, height);
        if touch.layout() != &touch_layout(width, height) {
            touch.set_layout(touch_layout(width, height));
        }

        poll_keyboard(&rl, &mut keyboard);
        poll_pointer(&rl, &mut touch);
        poll_gamepad(&rl, &mut joystick);

        if rl.is_key_pressed(KeyboardKey::KEY_F1) {
            debug = !debug;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_M)
            && let (Some(track), Some(enabled)) = (music.as_ref(), music_toggle.toggle())
        {
            info!("Music {}", if enabled { "on" } else { "off" });
            apply_toggle(track, enabled);
        }
        if let Some(track) = music.as_ref()
            && music_toggle.is_enabled()
        {
            track.update_stream();
        }

        let sample = keyboard.sample() | touch.sample() | joystick.sample();
        sim.advance(dt, sample);

        let snapshot = sim.snapshot();
        let style = FrameStyle {
            tile_width: config.tile_width,
            tile_height: config.tile_height,
            debug,
        };
        let mut d = rl.begin_drawing(&thread);
        draw_frame(&mut d, &snapshot, &textures, touch.layout(), &style);
    }
    info!("Window closed, final score {}", sim.score());
}

fn touch_layout(width: f32, height: f32) -> TouchLayout {
    TouchLayout::for_viewport(width, height, TOUCH_BUTTON_SIZE, TOUCH_BUTTON_MARGIN)
}

fn poll_keyboard(rl: &RaylibHandle, keyboard: &mut KeyboardSource) {
    keyboard.set(Key::ArrowLeft, rl.is_key_down(KeyboardKey::KEY_LEFT));
    keyboard.set(Key::ArrowRight, rl.is_key_down(KeyboardKey::KEY_RIGHT));
    keyboard.set(Key::Space, rl.is_key_down(KeyboardKey::KEY_SPACE));
    keyboard.set(Key::ShiftLeft, rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT));
    keyboard.set(Key::ShiftRight, rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT));
}

/// Every active touch point is forwarded with its own id so holding a
/// direction and tapping jump work together. Without touches the left mouse
/// button stands in as pointer 0.
fn poll_pointer(rl: &RaylibHandle, touch: &mut TouchSource) {
    let count = u32::try_from(rl.get_touch_point_count()).unwrap_or(0);
    if count > 0 {
        touch.set_points(pointer_points((0..count).map(|i| {
            let pos = rl.get_touch_position(i);
            (i64::from(rl.get_touch_point_id(i)), pos.x, pos.y)
        })));
    } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        let pos = rl.get_mouse_position();
        touch.set_points([(0, pos.x, pos.y)]);
    } else {
        touch.set_points([]);
    }
}

/// Map raylib's signed touch ids onto [`TouchSource`] ids, dropping the
/// negative ids raylib reports for released slots.
fn pointer_points(raw: impl Iterator<Item = (i64, f32, f32)>) -> Vec<(u64, f32, f32)> {
    raw.filter_map(|(id, x, y)| u64::try_from(id).ok().map(|id| (id, x, y)))
        .collect()
}

fn poll_gamepad(rl: &RaylibHandle, joystick: &mut JoystickSource) {
    if !rl.is_gamepad_available(GAMEPAD) {
        joystick.reset();
        return;
    }
    joystick.set_axis(rl.get_gamepad_axis_movement(GAMEPAD, GamepadAxis::GAMEPAD_AXIS_LEFT_X));
    joystick.set_jump(
        rl.is_gamepad_button_down(GAMEPAD, GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN),
    );
    joystick.set_run(
        rl.is_gamepad_button_down(GAMEPAD, GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_LEFT),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ControlSample;

    #[test]
    fn test_pointer_points_drop_released_slots() {
        let points = pointer_points([(3, 1.0, 2.0), (-1, 5.0, 5.0), (0, 7.0, 8.0)].into_iter());
        assert_eq!(points, vec![(3, 1.0, 2.0), (0, 7.0, 8.0)]);
    }

    #[test]
    fn test_two_fingers_hold_direction_and_jump() {
        let layout = touch_layout(1280.0, 720.0);
        let mut touch = TouchSource::new(layout);
        let points = pointer_points(
            [
                (4, layout.right.x + 5.0, layout.right.y + 5.0),
                (9, layout.jump.x + 5.0, layout.jump.y + 5.0),
            ]
            .into_iter(),
        );
        touch.set_points(points);
        assert_eq!(
            touch.sample(),
            ControlSample {
                right: true,
                jump: true,
                ..ControlSample::NONE
            }
        );
    }
}
