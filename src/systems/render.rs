//! Drawing.
//!
//! Rendering runs outside the gameplay schedule. [`render_frame`] borrows the
//! raylib handle out of the world, opens the drawing scopes and calls
//! [`render_pass`] inside the 2D camera and [`render_debug_ui`] in screen
//! space. Entities are drawn back to front by [`ZIndex`]; those with
//! `Visible(false)` are skipped. A sprite whose texture is not loaded is drawn
//! as a rectangle of its fallback colour.
use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::fill::Fill;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::visible::Visible;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::difficulty::Difficulty;
use crate::resources::fontstore::FontStore;
use crate::resources::playerstate::PlayerState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

const TEXT_SPACING: f32 = 1.0;

enum DrawKind {
    Sprite(Sprite),
    Fill(Vector2),
    Text(DynamicText),
}

struct DrawItem {
    z: i32,
    pos: Vector2,
    scale: Vector2,
    rotation: f32,
    tint: Color,
    kind: DrawKind,
}

/// Draw one frame. Does nothing if the raylib handle is not in the world.
pub fn render_frame(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
    world.insert_resource(ScreenSize { w, h });
    {
        // Follow window resizes; the target belongs to the shake system.
        let fitted = Camera2DRes::centered(w as f32, h as f32).0;
        let mut cam = world.resource_mut::<Camera2DRes>();
        cam.0.offset = fitted.offset;
        cam.0.zoom = fitted.zoom;
    }
    let cam = world.resource::<Camera2DRes>().0;

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        {
            let mut d2 = d.begin_mode2D(cam);
            render_pass(world, &mut d2);
        }
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

fn collect_items(world: &mut World, view_min: Vector2, view_max: Vector2) -> Vec<DrawItem> {
    let mut items = Vec::new();
    let shown = |v: Option<&Visible>| v.is_none_or(|v| v.0);
    let look = |s: Option<&Scale>, r: Option<&Rotation>, t: Option<&Tint>| {
        (
            s.map(|s| s.scale).unwrap_or(Vector2::new(1.0, 1.0)),
            r.map(|r| r.degrees).unwrap_or(0.0),
            t.map(|t| t.color).unwrap_or(Color::WHITE),
        )
    };

    let mut sprites = world.query::<(
        &Sprite,
        &MapPosition,
        &ZIndex,
        Option<&Scale>,
        Option<&Rotation>,
        Option<&Tint>,
        Option<&Visible>,
    )>();
    for (sprite, pos, z, s, r, t, v) in sprites.iter(world) {
        if !shown(v) {
            continue;
        }
        let (scale, rotation, tint) = look(s, r, t);
        // Generous bound: rotation can only grow the box by sqrt(2).
        let reach = sprite.width.max(sprite.height) * scale.x.abs().max(scale.y.abs()) * 1.5;
        if pos.pos.x + reach < view_min.x
            || pos.pos.x - reach > view_max.x
            || pos.pos.y + reach < view_min.y
            || pos.pos.y - reach > view_max.y
        {
            continue;
        }
        items.push(DrawItem {
            z: z.0,
            pos: pos.pos,
            scale,
            rotation,
            tint,
            kind: DrawKind::Sprite(sprite.clone()),
        });
    }

    let mut fills = world.query::<(
        &Fill,
        &MapPosition,
        &ZIndex,
        Option<&Scale>,
        Option<&Tint>,
        Option<&Visible>,
    )>();
    for (fill, pos, z, s, t, v) in fills.iter(world) {
        if !shown(v) {
            continue;
        }
        let (scale, _, tint) = look(s, None, t);
        items.push(DrawItem {
            z: z.0,
            pos: pos.pos,
            scale,
            rotation: 0.0,
            tint,
            kind: DrawKind::Fill(fill.size),
        });
    }

    let mut texts = world.query::<(
        &DynamicText,
        &MapPosition,
        &ZIndex,
        Option<&Tint>,
        Option<&Visible>,
    )>();
    for (text, pos, z, t, v) in texts.iter(world) {
        if !shown(v) {
            continue;
        }
        let (_, _, tint) = look(None, None, t);
        items.push(DrawItem {
            z: z.0,
            pos: pos.pos,
            scale: Vector2::new(1.0, 1.0),
            rotation: 0.0,
            tint,
            kind: DrawKind::Text(text.clone()),
        });
    }

    // Stable: equal z keeps query order.
    items.sort_by_key(|item| item.z);
    items
}

fn text_position(font: impl AsRef<ffi::Font>, text: &DynamicText, pos: Vector2) -> Vector2 {
    if text.centered {
        let size = measure_text_ex(font, &text.content, text.font_size, TEXT_SPACING);
        pos - size.scale_by(0.5)
    } else {
        pos
    }
}

fn tinted(base: Color, tint: Color) -> Color {
    Tint::from_color(tint).multiply(base)
}

/// Draw the world inside the camera's 2D mode.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let cam = world.resource::<Camera2DRes>().0;
    let screen = *world.resource::<ScreenSize>();

    let tl = d2.get_screen_to_world2D(Vector2 { x: 0.0, y: 0.0 }, cam);
    let br = d2.get_screen_to_world2D(
        Vector2 {
            x: screen.w as f32,
            y: screen.h as f32,
        },
        cam,
    );
    let view_min = Vector2::new(tl.x.min(br.x), tl.y.min(br.y));
    let view_max = Vector2::new(tl.x.max(br.x), tl.y.max(br.y));

    let items = collect_items(world, view_min, view_max);
    let textures = world.resource::<TextureStore>();
    let fonts = world.get_non_send_resource::<FontStore>();

    for item in items.iter() {
        match &item.kind {
            DrawKind::Sprite(sprite) => {
                let dest = Rectangle {
                    x: item.pos.x,
                    y: item.pos.y,
                    width: sprite.width * item.scale.x,
                    height: sprite.height * item.scale.y,
                };
                let origin = Vector2::new(
                    sprite.origin.x * item.scale.x,
                    sprite.origin.y * item.scale.y,
                );
                if let Some(tex) = textures.get(sprite.tex_key) {
                    let mut src = Rectangle {
                        x: sprite.offset.x,
                        y: sprite.offset.y,
                        width: sprite.width,
                        height: sprite.height,
                    };
                    if sprite.flip_h {
                        src.width = -src.width;
                    }
                    if sprite.flip_v {
                        src.height = -src.height;
                    }
                    d2.draw_texture_pro(tex, src, dest, origin, item.rotation, item.tint);
                } else if sprite.fallback.a > 0 {
                    d2.draw_rectangle_pro(
                        dest,
                        origin,
                        item.rotation,
                        tinted(sprite.fallback, item.tint),
                    );
                }
            }
            DrawKind::Fill(size) => {
                if item.tint.a == 0 {
                    continue;
                }
                let w = size.x * item.scale.x;
                let h = size.y * item.scale.y;
                let dest = Rectangle {
                    x: item.pos.x,
                    y: item.pos.y,
                    width: w,
                    height: h,
                };
                d2.draw_rectangle_pro(dest, Vector2::new(w * 0.5, h * 0.5), 0.0, item.tint);
            }
            DrawKind::Text(text) => {
                let color = tinted(text.color, item.tint);
                if color.a == 0 || text.content.is_empty() {
                    continue;
                }
                match fonts.and_then(|f| f.get(text.font)) {
                    Some(font) => {
                        let at = text_position(font, text, item.pos);
                        d2.draw_text_ex(font, &text.content, at, text.font_size, TEXT_SPACING, color);
                    }
                    None => {
                        let font = d2.get_font_default();
                        let at = text_position(&font, text, item.pos);
                        d2.draw_text_ex(&font, &text.content, at, text.font_size, TEXT_SPACING, color);
                    }
                }
            }
        }
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
        let mut positions = world.query::<&MapPosition>();
        for position in positions.iter(world) {
            let (x, y) = (position.pos.x as i32, position.pos.y as i32);
            d2.draw_line(x - 5, y, x + 5, y, Color::GREEN);
            d2.draw_line(x, y - 5, x, y + 5, Color::GREEN);
        }
    }
}

/// Screen-space debug text. Drawn only while [`DebugMode`] is present.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::YELLOW);

    let text = format!("Entities: {}", world.entities().len());
    d.draw_text(&text, 10, 30, 10, Color::YELLOW);

    if let Some(ps) = world.get_resource::<PlayerState>() {
        let text = format!(
            "Soap: {} | People: {} | Slowdown: {} | Nuke: {} | Score: {}",
            ps.fuel.value(),
            ps.population.value(),
            ps.slowdown_charges.value(),
            ps.nuke_charges.value(),
            ps.score
        );
        d.draw_text(&text, 10, 50, 10, Color::YELLOW);
    }
    if let Some(diff) = world.get_resource::<Difficulty>() {
        let text = format!(
            "Speed mod: {:.1} | Slowdown level: {} | Spawn gate: {:.3}",
            diff.speed_mod,
            diff.slowdown_power,
            diff.spawn_threshold()
        );
        d.draw_text(&text, 10, 70, 10, Color::YELLOW);
    }

    let cam = world.resource::<Camera2DRes>().0;
    let cam_text = format!(
        "Camera pos: ({:.1}, {:.1}) Zoom: {:.2}",
        cam.target.x, cam.target.y, cam.zoom
    );
    d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::YELLOW);
}
