//! Simulation setup and the per-frame driver.
//!
//! [`Simulation`] owns the ECS [`World`] and the schedules that advance it.
//! A front-end (the raylib window, the headless runner, a test) calls
//! [`Simulation::advance`] once per display frame with the frame time and
//! the held controls, then draws from [`Simulation::snapshot`].
//!
//! Each frame:
//! 1. frame time is recorded in [`WorldTime`]
//! 2. the control sample becomes [`InputState`] edges
//! 3. the coin spawner consumes wall-clock time
//! 4. the fixed-timestep accumulator decides how many ticks to run
//! 5. each tick: ground level, movement, coin collision, animation, coin spin
//!
//! Only whole ticks are simulated, so movement is identical on any display
//! refresh rate.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::animation::{Animation, AnimationClipId};
use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::PlayerController;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::events::collision::observe_coin_collected;
use crate::input::{ControlSample, InputSource};
use crate::resources::animationstore::AnimationStore;
use crate::resources::coinspawner::CoinSpawner;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{Coin, GameState};
use crate::resources::input::InputState;
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::{FixedTimestep, WorldTime};
use crate::snapshot::{PlayerPose, RenderSnapshot};
use crate::systems::animation::{animation, animation_controller, coin_spin};
use crate::systems::coinspawner::{coin_spawner, spawn_coin};
use crate::systems::collision::coin_collision;
use crate::systems::gamestate::update_ground_level;
use crate::systems::input::{consume_input_edges, update_input_state};
use crate::systems::movement::player_movement;
use crate::systems::time::{count_tick, update_world_time};

/// The running game: world, schedules and the player entity.
pub struct Simulation {
    world: World,
    /// Turns the latest control sample into input edges.
    input: Schedule,
    /// Wall-clock work done once per display frame.
    frame: Schedule,
    /// One fixed simulation tick.
    tick: Schedule,
    player: Entity,
}

/// Insert the game resources and spawn the player standing on the ground.
///
/// Returns the player entity.
pub fn setup(world: &mut World, config: &GameConfig) -> Entity {
    let viewport = Viewport::new(config.window_width as f32, config.window_height as f32);
    let state = GameState::new(viewport.height, config.tile_height);
    let ground_y = state.ground_y;
    let tuning = &config.player;

    let player = world
        .spawn((
            MapPosition::new(tuning.start_x, ground_y - tuning.height),
            RigidBody::new(tuning.gravity),
            Player::default(),
            PlayerController::from_tuning(tuning),
            BoxCollider::from_sprite_ratios(
                tuning.width,
                tuning.height,
                tuning.hitbox_width_ratio,
                tuning.hitbox_height_ratio,
            ),
            Sprite::new(tuning.width, tuning.height),
            Animation::new(AnimationClipId::Idle),
        ))
        .id();

    world.insert_resource(WorldTime::default());
    world.insert_resource(FixedTimestep::new(
        config.tick_rate,
        config.max_steps_per_frame,
    ));
    world.insert_resource(viewport);
    world.insert_resource(state);
    world.insert_resource(InputState::default());
    world.insert_resource(ControlSample::NONE);
    world.insert_resource(AnimationStore::new(config.frame_interval));
    world.insert_resource(CoinSpawner::new(&config.coins));
    world.insert_resource(config.clone());

    world.add_observer(observe_coin_collected);
    world.flush();

    info!(
        "Simulation ready: viewport {}x{}, {} ticks/s, player at ({:.1}, {:.1})",
        viewport.width,
        viewport.height,
        config.tick_rate,
        tuning.start_x,
        ground_y - tuning.height
    );
    player
}

impl Simulation {
    pub fn new(config: &GameConfig) -> Self {
        let mut world = World::new();
        let player = setup(&mut world, config);

        let mut input = Schedule::default();
        input.add_systems(update_input_state);

        let mut frame = Schedule::default();
        frame.add_systems(coin_spawner);

        let mut tick = Schedule::default();
        tick.add_systems(
            (
                update_ground_level,
                player_movement,
                coin_collision,
                animation_controller,
                animation,
                coin_spin,
                consume_input_edges,
                count_tick,
            )
                .chain(),
        );

        Self {
            world,
            input,
            frame,
            tick,
            player,
        }
    }

    /// Run one display frame of `dt` seconds with the given held controls.
    ///
    /// Returns the number of fixed ticks simulated.
    pub fn advance(&mut self, dt: f32, sample: ControlSample) -> u32 {
        update_world_time(&mut self.world, dt);
        self.world.insert_resource(sample);
        self.input.run(&mut self.world);
        self.frame.run(&mut self.world);

        let plan = self.world.resource_mut::<FixedTimestep>().plan(dt);
        if plan.dropped > 0.0 {
            warn!(
                "Frame of {:.3}s exceeded the tick cap, dropped {:.3}s of simulation",
                dt, plan.dropped
            );
        }
        for _ in 0..plan.ticks {
            self.tick.run(&mut self.world);
        }
        self.world.clear_trackers();
        plan.ticks
    }

    /// Run exactly one tick with the given held controls.
    ///
    /// Wall-clock work (the coin spawner) does not run.
    pub fn step(&mut self, sample: ControlSample) {
        self.world.insert_resource(sample);
        self.input.run(&mut self.world);
        self.tick.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Fire the coin spawner once, outside its timer.
    pub fn spawn_coin_now(&mut self) -> Option<Coin> {
        self.world
            .resource_scope(|world, mut spawner: Mut<CoinSpawner>| {
                let width = world.resource::<Viewport>().width;
                let mut state = world.resource_mut::<GameState>();
                spawn_coin(&mut spawner, &mut state, width)
            })
    }

    /// Report a new viewport size. The ground line follows immediately.
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if *self.world.resource::<Viewport>() == viewport {
            return;
        }
        debug!("Viewport resized to {}x{}", width, height);
        self.world.insert_resource(viewport);
        self.world
            .resource_mut::<GameState>()
            .refresh_ground(height);
    }

    /// Mark whether a clip's sprite sheet is available.
    pub fn set_clip_ready(&mut self, clip: AnimationClipId, ready: bool) {
        self.world
            .resource_mut::<AnimationStore>()
            .set_ready(clip, ready);
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<GameState>().score()
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn player_pose(&self) -> Option<PlayerPose> {
        let position = self.world.get::<MapPosition>(self.player)?;
        let body = self.world.get::<RigidBody>(self.player)?;
        let player = self.world.get::<Player>(self.player)?;
        let sprite = self.world.get::<Sprite>(self.player)?;
        let collider = self.world.get::<BoxCollider>(self.player)?;
        let anim = self.world.get::<Animation>(self.player)?;
        let store = self.world.resource::<AnimationStore>();
        let clip = store.get(anim.clip);

        Some(PlayerPose {
            x: position.x,
            y: position.y,
            width: sprite.width,
            height: sprite.height,
            vx: body.vx,
            vy: body.vy,
            facing: player.facing,
            jumping: player.jumping,
            clip: anim.clip,
            frame_index: anim.frame_index,
            frame_count: clip.map_or(0, |c| c.frame_count),
            clip_ready: store.is_ready(anim.clip),
            hitbox: collider.aabb(*position, sprite.width, player.facing),
        })
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let state = self.world.resource::<GameState>();
        RenderSnapshot {
            viewport: *self.world.resource::<Viewport>(),
            ground_y: state.ground_y,
            player: self.player_pose(),
            coins: state.coins.clone(),
            score: state.score(),
            coin_angle: state.coin_angle,
            tick: self.world.resource::<WorldTime>().tick_count,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

/// Drive a simulation for `frames` display frames at `fps` without a window.
pub fn run_headless(
    config: &GameConfig,
    source: &mut dyn InputSource,
    frames: u64,
    fps: f32,
) -> Simulation {
    let fps = if fps.is_finite() && fps > 0.0 {
        fps
    } else {
        config.target_fps.max(1) as f32
    };
    let dt = 1.0 / fps;
    let mut sim = Simulation::new(config);

    info!("Running {} headless frames at {} fps", frames, fps);
    let mut ticks: u64 = 0;
    for _ in 0..frames {
        let sample = source.sample();
        ticks += u64::from(sim.advance(dt, sample));
    }
    info!(
        "Headless run finished: {} ticks, score {}, {} coins active",
        ticks,
        sim.score(),
        sim.world.resource::<GameState>().coins.len()
    );
    sim
}
