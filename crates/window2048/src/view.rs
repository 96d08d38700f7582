use bevy::prelude::*;
use window2048_core::{Position, WindowBounds};

use crate::Game;

const CELL_SIZE: f32 = 20.0;
const CELL_PITCH: f32 = 22.0;
const FRAME_MARGIN: f32 = 4.0;
const LABEL_FONT_SIZE: f32 = 9.0;

const EMPTY_COLOR: Color = Color::srgb(0.24, 0.22, 0.20);
const FRAME_COLOR: Color = Color::srgb(0.96, 0.80, 0.25);
const DARK_TEXT: Color = Color::srgb(0.47, 0.43, 0.40);
const LIGHT_TEXT: Color = Color::WHITE;
const OUTSIDE_WINDOW_ALPHA: f32 = 0.55;

// Indexed by log2(value) - 1, from 2 up to 2048
const TILE_COLORS: [Color; 11] = [
    Color::srgb(0.93, 0.89, 0.85),
    Color::srgb(0.93, 0.88, 0.78),
    Color::srgb(0.95, 0.69, 0.47),
    Color::srgb(0.96, 0.58, 0.39),
    Color::srgb(0.96, 0.49, 0.37),
    Color::srgb(0.96, 0.37, 0.23),
    Color::srgb(0.93, 0.81, 0.45),
    Color::srgb(0.93, 0.80, 0.38),
    Color::srgb(0.93, 0.78, 0.31),
    Color::srgb(0.93, 0.77, 0.25),
    Color::srgb(0.93, 0.76, 0.18),
];
const HIGH_TILE_COLOR: Color = Color::srgb(0.24, 0.23, 0.20);

#[derive(Component)]
struct MainCamera;

#[derive(Component)]
struct TileView(Position);

#[derive(Component)]
struct TileLabel(Position);

#[derive(Component)]
struct WindowFrame;

#[derive(Component)]
struct BestTileText;

pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_board)
            .add_systems(PostUpdate, redraw.run_if(resource_changed::<Game>));
    }
}

fn cell_translation(pos: Position, grid_size: usize, z: f32) -> Vec3 {
    let center = (grid_size as f32 - 1.0) * 0.5 * CELL_PITCH;
    Vec3::new(
        (pos.col as f32).mul_add(CELL_PITCH, -center),
        -(pos.row as f32).mul_add(CELL_PITCH, -center),
        z,
    )
}

fn window_center(bounds: WindowBounds, grid_size: usize) -> Vec3 {
    let top_left = cell_translation(Position::new(bounds.top, bounds.left), grid_size, -1.0);
    let bottom_right = cell_translation(
        Position::new(bounds.bottom - 1, bounds.right - 1),
        grid_size,
        -1.0,
    );
    top_left.lerp(bottom_right, 0.5)
}

fn tile_color(value: u32, in_window: bool) -> Color {
    let color = if value == 0 {
        EMPTY_COLOR
    } else {
        let rank = value.trailing_zeros() as usize;
        TILE_COLORS
            .get(rank.saturating_sub(1))
            .copied()
            .unwrap_or(HIGH_TILE_COLOR)
    };
    if in_window {
        color
    } else {
        color.with_alpha(OUTSIDE_WINDOW_ALPHA)
    }
}

fn setup_board(mut commands: Commands, game: Res<Game>) {
    commands.spawn(Camera2d).insert(MainCamera);

    let grid_size = game.board().size();
    let frame_side = (game.window().size() as f32).mul_add(CELL_PITCH, FRAME_MARGIN);
    commands.spawn((
        Sprite::from_color(FRAME_COLOR, Vec2::splat(frame_side)),
        Transform::from_translation(window_center(game.window_bounds(), grid_size)),
        WindowFrame,
    ));

    for row in 0..grid_size {
        for col in 0..grid_size {
            let pos = Position::new(row, col);
            commands
                .spawn((
                    Sprite::from_color(EMPTY_COLOR, Vec2::splat(CELL_SIZE)),
                    Transform::from_translation(cell_translation(pos, grid_size, 0.)),
                    TileView(pos),
                ))
                .with_child((
                    Text2d::default(),
                    TextFont {
                        font_size: LABEL_FONT_SIZE,
                        ..default()
                    },
                    TextColor(DARK_TEXT),
                    Transform::from_xyz(0., 0., 1.),
                    TileLabel(pos),
                ));
        }
    }

    commands.spawn((
        Text::new("WASD: move window\nArrows / swipe: slide tiles\nR: restart"),
        TextFont {
            font_size: 18.,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(5.0),
            width: Val::Percent(100.0),
            ..default()
        },
    ));

    commands.spawn((
        Text::new(best_tile_line(game.board().max_tile())),
        TextFont {
            font_size: 18.,
            ..default()
        },
        TextColor(FRAME_COLOR),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Percent(5.0),
            width: Val::Percent(100.0),
            ..default()
        },
        BestTileText,
    ));
}

fn best_tile_line(best: u32) -> String {
    format!("Best tile: {best}")
}

fn redraw(
    game: Res<Game>,
    mut tiles: Query<(&TileView, &mut Sprite)>,
    mut labels: Query<(&TileLabel, &mut Text2d, &mut TextColor)>,
    mut frame: Query<&mut Transform, With<WindowFrame>>,
    mut best_tile: Query<&mut Text, With<BestTileText>>,
) {
    let board = game.board();
    let bounds = game.window_bounds();

    for (TileView(pos), mut sprite) in &mut tiles {
        let value = board.get(*pos).unwrap_or(0);
        sprite.color = tile_color(value, bounds.contains(*pos));
    }

    for (TileLabel(pos), mut text, mut color) in &mut labels {
        let value = board.get(*pos).unwrap_or(0);
        text.0 = if value == 0 {
            String::new()
        } else {
            value.to_string()
        };
        color.0 = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    }

    if let Ok(mut transform) = frame.get_single_mut() {
        transform.translation = window_center(bounds, board.size());
    }

    if let Ok(mut text) = best_tile.get_single_mut() {
        text.0 = best_tile_line(board.max_tile());
    }
}
