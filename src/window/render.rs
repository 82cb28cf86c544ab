//! Draws a [`RenderSnapshot`] with raylib.
//!
//! Layers, back to front: background, ground tiles, player, coins, HUD,
//! touch buttons and the optional debug overlay.

use raylib::prelude::*;

use crate::input::touch::TouchLayout;
use crate::snapshot::{PlayerPose, RenderSnapshot};

use super::textures::TextureStore;

const GROUND_FALLBACK: Color = Color::new(110, 72, 40, 255);
const COIN_FALLBACK: Color = Color::GOLD;
const TOUCH_BUTTON: Color = Color::new(255, 255, 255, 48);

pub struct FrameStyle {
    pub tile_width: f32,
    pub tile_height: f32,
    pub debug: bool,
}

pub fn draw_frame(
    d: &mut RaylibDrawHandle,
    snapshot: &RenderSnapshot,
    textures: &TextureStore,
    touch: &TouchLayout,
    style: &FrameStyle,
) {
    let width = snapshot.viewport.width;
    let height = snapshot.viewport.height;

    d.clear_background(Color::SKYBLUE);
    if let Some(bg) = &textures.background {
        let src = Rectangle::new(0.0, 0.0, bg.width as f32, bg.height as f32);
        let dest = Rectangle::new(0.0, 0.0, width, height);
        d.draw_texture_pro(bg, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    draw_ground(d, snapshot, textures, style);

    if let Some(pose) = &snapshot.player {
        draw_player(d, pose, textures);
    }

    for coin in &snapshot.coins {
        let dest = Rectangle::new(coin.x + coin.w / 2.0, coin.y + coin.h / 2.0, coin.w, coin.h);
        let origin = Vector2::new(coin.w / 2.0, coin.h / 2.0);
        match &textures.coin {
            Some(tex) => {
                let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
                d.draw_texture_pro(
                    tex,
                    src,
                    dest,
                    origin,
                    snapshot.coin_angle.to_degrees(),
                    Color::WHITE,
                );
            }
            None => d.draw_circle(
                dest.x as i32,
                dest.y as i32,
                coin.w.min(coin.h) / 2.0,
                COIN_FALLBACK,
            ),
        }
    }

    d.draw_text(
        &format!("Coins: {}", snapshot.score),
        16,
        16,
        28,
        Color::BLACK,
    );

    for (_, rect) in touch.buttons() {
        d.draw_rectangle_rec(Rectangle::new(rect.x, rect.y, rect.w, rect.h), TOUCH_BUTTON);
    }

    if style.debug {
        if let Some(pose) = &snapshot.player {
            let hb = pose.hitbox;
            d.draw_rectangle_lines(hb.x as i32, hb.y as i32, hb.w as i32, hb.h as i32, Color::RED);
            d.draw_text(
                &format!(
                    "x {:.1} y {:.1} vx {:.2} vy {:.2} {} #{}",
                    pose.x,
                    pose.y,
                    pose.vx,
                    pose.vy,
                    pose.clip.as_str(),
                    pose.frame_index
                ),
                16,
                52,
                16,
                Color::BLACK,
            );
        }
        let fps = d.get_fps();
        d.draw_text(
            &format!("tick {} fps {}", snapshot.tick, fps),
            16,
            (height - 24.0) as i32,
            16,
            Color::BLACK,
        );
    }
}

fn draw_ground(
    d: &mut RaylibDrawHandle,
    snapshot: &RenderSnapshot,
    textures: &TextureStore,
    style: &FrameStyle,
) {
    let width = snapshot.viewport.width;
    let tile_w = style.tile_width.max(1.0);
    match &textures.ground {
        Some(tex) => {
            let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
            let mut x = 0.0;
            while x < width {
                let dest = Rectangle::new(x, snapshot.ground_y, tile_w, style.tile_height);
                d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
                x += tile_w;
            }
        }
        None => d.draw_rectangle_rec(
            Rectangle::new(0.0, snapshot.ground_y, width, style.tile_height),
            GROUND_FALLBACK,
        ),
    }
}

/// Slice the current frame out of the clip's sheet. A negative source width
/// mirrors the sprite in place when facing left.
fn draw_player(d: &mut RaylibDrawHandle, pose: &PlayerPose, textures: &TextureStore) {
    if !pose.clip_ready || pose.frame_index >= pose.frame_count {
        return;
    }
    let Some(tex) = textures.clip(pose.clip) else {
        return;
    };
    let frame_w = tex.width as f32 / pose.frame_count as f32;
    let src = Rectangle::new(
        pose.frame_index as f32 * frame_w,
        0.0,
        frame_w * f32::from(pose.facing.sign()),
        tex.height as f32,
    );
    let dest = Rectangle::new(pose.x, pose.y, pose.width, pose.height);
    d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
}
