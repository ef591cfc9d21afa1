//! Widget capabilities shared by screens and the menu controller.
//!
//! Bevy UI gives us `Button` and `Interaction`; these components add the two
//! capabilities the menu needs on top: a button that can be switched off, and
//! a slider with a value and a change event.

use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::menu::MenuSystems;

/// Whether a button reacts to presses. `true` at rest.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interactable(pub bool);

impl Default for Interactable {
    fn default() -> Self {
        Self(true)
    }
}

/// Horizontal slider holding a value in `[0, 1]`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct VolumeSlider {
    pub value: f32,
}

impl VolumeSlider {
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }
}

/// Marker for the filled part of a slider track.
#[derive(Component)]
pub struct SliderFill;

/// Sent when the user moves a slider.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SliderValueChanged {
    pub slider: Entity,
    pub value: f32,
}

/// Map a horizontal cursor position relative to the track (0 = left edge,
/// 1 = right edge, possibly outside while dragging) to a slider value.
pub fn slider_value_from_cursor(relative_x: f32) -> f32 {
    relative_x.clamp(0.0, 1.0)
}

/// System set for widget input handling.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetSystems;

/// Setup widget systems.
pub fn setup_widget_systems(app: &mut App) {
    app.add_event::<SliderValueChanged>()
        // Widgets feed the menu controller, so they run first
        .configure_sets(Update, WidgetSystems.before(MenuSystems::Volume))
        .add_systems(
            Update,
            (drag_volume_sliders, update_slider_fill)
                .chain()
                .in_set(WidgetSystems),
        );
}

/// Move sliders that are being pressed to follow the cursor.
fn drag_volume_sliders(
    mut sliders: Query<(Entity, &Interaction, &RelativeCursorPosition, &mut VolumeSlider)>,
    mut changed: EventWriter<SliderValueChanged>,
) {
    for (entity, interaction, cursor, mut slider) in sliders.iter_mut() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(position) = cursor.normalized else {
            continue;
        };

        let value = slider_value_from_cursor(position.x);
        if (value - slider.value).abs() > f32::EPSILON {
            slider.value = value;
            changed.send(SliderValueChanged {
                slider: entity,
                value,
            });
        }
    }
}

/// Resize slider fills to match their slider's value.
fn update_slider_fill(
    sliders: Query<(&VolumeSlider, &Children), Changed<VolumeSlider>>,
    mut fills: Query<&mut Node, With<SliderFill>>,
) {
    for (slider, children) in sliders.iter() {
        for &child in children.iter() {
            if let Ok(mut node) = fills.get_mut(child) {
                node.width = Val::Percent(slider.value * 100.0);
            }
        }
    }
}
