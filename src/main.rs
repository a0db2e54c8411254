//! Lamb Dash entry point
//!
//! Thin front end: builds a fresh run, then once per display frame gathers
//! an input snapshot, advances the simulation one tick, and draws.

use macroquad::prelude::*;

use lamb_dash::consts::{VIEW_H, VIEW_W};
use lamb_dash::sim::{GameState, TickInput, tick};
use lamb_dash::{Tuning, hud, render};

/// Optional balance override file next to the executable
const TUNING_PATH: &str = "tuning.json";

fn window_conf() -> Conf {
    Conf {
        window_title: "Lamb Dash".to_owned(),
        window_width: VIEW_W as i32,
        window_height: VIEW_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Input adapter: movement is read as held state, everything else on the
/// press edge. Space or a click jumps, like the cabinet's single button.
fn gather_input() -> TickInput {
    TickInput {
        move_left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        move_right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        jump: is_key_pressed(KeyCode::Space) || is_mouse_button_pressed(MouseButton::Left),
        restart: is_key_pressed(KeyCode::R),
        end_run: is_key_pressed(KeyCode::Escape),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let tuning = Tuning::load_or_default(TUNING_PATH);
    let seed = miniquad::date::now() as u64;
    log::info!("starting run with seed {seed}");
    let mut state = GameState::new(seed, tuning);

    loop {
        let input = gather_input();
        tick(&mut state, &input);

        render::draw(&state);
        hud::draw(&state);

        next_frame().await;
    }
}
