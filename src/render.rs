//! Render adapter
//!
//! Pure output: reads the state snapshot, issues macroquad draw calls, and
//! mutates nothing. World x is translated by the camera offset; clouds are
//! already screen-space.

use macroquad::prelude::*;

use crate::consts::*;
use crate::sim::{Apple, Barrel, Cloud, GameState, Heart, Landmark, Puddle};

const SKY: Color = Color::new(0.53, 0.81, 0.92, 1.0);
const GRASS: Color = Color::new(0.13, 0.55, 0.13, 1.0);
const GRASS_LIGHT: Color = Color::new(0.20, 0.80, 0.20, 1.0);
const WOOD: Color = Color::new(0.55, 0.27, 0.07, 1.0);
const WOOD_DARK: Color = Color::new(0.40, 0.26, 0.13, 1.0);
const MUD: Color = WOOD;
const WATER: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const APPLE_RED: Color = Color::new(0.86, 0.08, 0.24, 1.0);
const LEAF: Color = Color::new(0.13, 0.55, 0.13, 1.0);
const FACE_PINK: Color = Color::new(1.0, 0.71, 0.76, 1.0);
const HEART_PINK: Color = Color::new(1.0, 0.08, 0.58, 1.0);

/// Is any part of a world-space span visible?
fn on_screen(world_x: f32, width: f32, cam: f32) -> bool {
    let sx = world_x - cam;
    sx > -width && sx < VIEW_W
}

/// Draw one frame of the world
pub fn draw(state: &GameState) {
    clear_background(SKY);

    for cloud in &state.clouds {
        draw_cloud(cloud);
    }
    draw_ground();

    let cam = state.camera.offset;
    for puddle in &state.puddles {
        draw_puddle(puddle, cam);
    }
    draw_sheep(state, cam);
    for barrel in &state.barrels {
        draw_barrel(barrel, cam);
    }
    for apple in &state.apples {
        draw_apple(apple, cam);
    }
    if let Some(flag) = &state.finish_line {
        draw_finish_flag(flag, cam);
    }
    if let Some(mama) = &state.mama {
        draw_mama(mama, cam);
    }
    for heart in &state.hearts {
        draw_heart(heart, cam);
    }
}

fn draw_cloud(cloud: &Cloud) {
    let puff = Color::new(1.0, 1.0, 1.0, 0.8);
    let (x, y, w) = (cloud.pos.x, cloud.pos.y, cloud.size.x);
    draw_circle(x, y, w / 4.0, puff);
    draw_circle(x + w / 3.0, y, w / 3.0, puff);
    draw_circle(x + w / 2.0, y, w / 4.0, puff);
}

fn draw_ground() {
    draw_rectangle(0.0, VIEW_H - GROUND_H, VIEW_W, GROUND_H, GRASS);
    // Grass tufts
    let mut x = 0.0;
    while x < VIEW_W {
        draw_rectangle(x, VIEW_H - GROUND_H + 5.0, 10.0, 5.0, GRASS_LIGHT);
        x += 20.0;
    }
}

fn draw_sheep(state: &GameState, cam: f32) {
    let p = &state.player;
    let sx = p.pos.x - cam;
    let sy = p.pos.y;

    // Fluffy body and head, facing right
    draw_circle(sx + 30.0, sy + 25.0, 22.0, WHITE);
    draw_circle(sx + 45.0, sy + 15.0, 16.0, WHITE);

    for splotch in &p.splotches {
        draw_circle(sx + splotch.offset.x, sy + splotch.offset.y, splotch.size, MUD);
    }

    // Legs
    for i in 0..4 {
        draw_rectangle(sx + 10.0 + i as f32 * 12.0, sy + 40.0, 4.0, 10.0, BLACK);
    }

    // Face, eyes, nose
    draw_circle(sx + 45.0, sy + 15.0, 11.0, FACE_PINK);
    draw_rectangle(sx + 40.0, sy + 10.0, 3.0, 3.0, BLACK);
    draw_rectangle(sx + 50.0, sy + 10.0, 3.0, 3.0, BLACK);
    draw_circle(sx + 45.0, sy + 18.0, 2.0, BLACK);
}

fn draw_barrel(barrel: &Barrel, cam: f32) {
    if !on_screen(barrel.pos.x, BARREL_W, cam) {
        return;
    }
    let (sx, sy) = (barrel.pos.x - cam, barrel.pos.y);
    draw_rectangle(sx, sy, BARREL_W, BARREL_H, WOOD);
    // Bands
    draw_rectangle(sx, sy + 5.0, BARREL_W, 3.0, WOOD_DARK);
    draw_rectangle(sx, sy + BARREL_H / 2.0 - 1.0, BARREL_W, 3.0, WOOD_DARK);
    draw_rectangle(sx, sy + BARREL_H - 8.0, BARREL_W, 3.0, WOOD_DARK);
}

fn draw_apple(apple: &Apple, cam: f32) {
    if !on_screen(apple.pos.x, APPLE_SIZE, cam) {
        return;
    }
    let (sx, sy) = (apple.pos.x - cam, apple.pos.y);
    draw_circle(sx + 15.0, sy + 18.0, 12.0, APPLE_RED);
    // Shine, stem, leaf
    draw_circle(sx + 11.0, sy + 14.0, 3.0, FACE_PINK);
    draw_rectangle(sx + 14.0, sy + 6.0, 2.0, 6.0, WOOD);
    draw_circle(sx + 18.0, sy + 8.0, 3.0, LEAF);
}

fn draw_puddle(puddle: &Puddle, cam: f32) {
    if !on_screen(puddle.pos.x, puddle.size.x, cam) {
        return;
    }
    let cx = puddle.pos.x - cam + puddle.size.x / 2.0;
    let cy = puddle.pos.y + puddle.size.y / 2.0;
    // Mud rim under the water
    draw_circle(cx, cy, puddle.size.x / 2.0 + 5.0, MUD);
    draw_circle(cx, cy, puddle.size.x / 2.0, WATER);
}

fn draw_finish_flag(flag: &Landmark, cam: f32) {
    if !on_screen(flag.pos.x, 70.0, cam) {
        return;
    }
    let (sx, sy) = (flag.pos.x - cam, flag.pos.y);
    draw_rectangle(sx, sy - 100.0, 8.0, 100.0, WOOD);

    // Checkered flag
    let square = 8.0;
    for row in 0..5 {
        for col in 0..7 {
            let color = if (row + col) % 2 == 0 { BLACK } else { WHITE };
            draw_rectangle(
                sx + 8.0 + col as f32 * square,
                sy - 100.0 + row as f32 * square,
                square,
                square,
                color,
            );
        }
    }
}

fn draw_mama(mama: &Landmark, cam: f32) {
    if !on_screen(mama.pos.x, 100.0, cam) {
        return;
    }
    let (sx, sy) = (mama.pos.x - cam, mama.pos.y);

    // Bigger and fluffier, facing left toward the player
    draw_circle(sx + 40.0, sy + 35.0, 30.0, WHITE);
    draw_circle(sx + 15.0, sy + 20.0, 20.0, WHITE);
    for i in 0..4 {
        draw_rectangle(sx + 15.0 + i as f32 * 15.0, sy + 55.0, 5.0, 12.0, BLACK);
    }
    draw_circle(sx + 15.0, sy + 20.0, 13.0, FACE_PINK);
    draw_rectangle(sx + 8.0, sy + 15.0, 4.0, 4.0, BLACK);
    draw_rectangle(sx + 20.0, sy + 15.0, 4.0, 4.0, BLACK);
    draw_circle(sx + 15.0, sy + 23.0, 2.0, BLACK);

    // Flower wreath
    let flowers = [
        (5.0, 5.0, GOLD),
        (12.0, 2.0, PINK),
        (20.0, 2.0, ORANGE),
        (27.0, 5.0, PURPLE),
        (30.0, 12.0, HEART_PINK),
    ];
    for (fx, fy, color) in flowers {
        draw_circle(sx + fx, sy + fy, 3.0, color);
    }
}

fn draw_heart(heart: &Heart, cam: f32) {
    if !on_screen(heart.pos.x - heart.size, heart.size * 2.0, cam) {
        return;
    }
    let color = Color::new(HEART_PINK.r, HEART_PINK.g, HEART_PINK.b, heart.opacity);
    let (sx, sy) = (heart.pos.x - cam, heart.pos.y);
    let r = heart.size / 4.0;

    // Two lobes and a point
    draw_circle(sx - r, sy, r, color);
    draw_circle(sx + r, sy, r, color);
    draw_triangle(
        vec2(sx - heart.size / 2.0, sy + r * 0.5),
        vec2(sx + heart.size / 2.0, sy + r * 0.5),
        vec2(sx, sy + heart.size),
        color,
    );
}
