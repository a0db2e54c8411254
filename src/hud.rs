//! UI adapter: score readout and terminal-state overlays

use macroquad::prelude::*;

use crate::consts::{VIEW_H, VIEW_W};
use crate::sim::{GamePhase, GameState};

/// Draw the HUD on top of the rendered world
pub fn draw(state: &GameState) {
    let ink = Color::new(0.1, 0.1, 0.1, 1.0);

    draw_text(&format!("Score: {}", state.score), 10.0, 24.0, 24.0, ink);
    let apples = match state.tuning.win {
        Some(win) => format!("Apples: {}/{}", state.apples_collected, win.apple_goal),
        None => format!("Apples: {}", state.apples_collected),
    };
    draw_text(&apples, 10.0, 48.0, 24.0, ink);
    draw_text(
        &format!("Muddiness: {}", state.player.muddiness),
        10.0,
        72.0,
        24.0,
        ink,
    );
    draw_text(
        &format!("Speed: {:.2}", state.difficulty),
        10.0,
        96.0,
        24.0,
        ink,
    );

    match state.phase {
        GamePhase::Complete => overlay("You found Mama!", state),
        GamePhase::GameOver => overlay("Game Over", state),
        GamePhase::Running | GamePhase::Won => {}
    }
}

fn overlay(title: &str, state: &GameState) {
    draw_rectangle(0.0, 0.0, VIEW_W, VIEW_H, Color::new(0.0, 0.0, 0.0, 0.55));
    centered(title, VIEW_H / 2.0 - 20.0, 48.0, WHITE);
    centered(
        &format!("Final score: {}", state.score),
        VIEW_H / 2.0 + 16.0,
        28.0,
        WHITE,
    );
    centered("Press R to restart", VIEW_H / 2.0 + 48.0, 22.0, LIGHTGRAY);
}

fn centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (VIEW_W - dims.width) / 2.0, y, size, color);
}
