//! Informational HUD: the scene-controls panel in the top-left corner.

use bevy::prelude::*;

use crate::settings::GameSettings;
use crate::states::GameState;

const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const PANEL_TITLE: Color = Color::srgb(0.95, 0.95, 0.95);
const PANEL_TEXT: Color = Color::srgb(0.85, 0.85, 0.85);

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_control_panel);
    }
}

/// Marker for the controls panel root
#[derive(Component)]
struct ControlPanel;

fn spawn_control_panel(mut commands: Commands, settings: Res<GameSettings>) {
    let bindings = &settings.bindings;
    let lines = [
        format!(
            "Move: {:?} {:?} {:?} {:?}",
            bindings.left, bindings.forward, bindings.backward, bindings.right
        ),
        format!("Rotate 45: {:?}", bindings.rotate),
        format!("Day / night: {:?}", bindings.day_night),
        "Orbit camera: drag mouse".to_string(),
        "Ambience: click to start".to_string(),
    ];

    commands
        .spawn((
            ControlPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                max_width: Val::Px(260.0),
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            BorderRadius::all(Val::Px(8.0)),
            GlobalZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Scene controls"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(PANEL_TITLE),
            ));
            for line in lines {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(PANEL_TEXT),
                ));
            }
        });
}
