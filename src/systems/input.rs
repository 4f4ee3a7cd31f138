//! Input controller - maps key presses to control commands.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

use crate::events::ControlCommand;
use crate::resources::KeyBindings;

/// Translate key presses into [`ControlCommand`] messages.
///
/// Reads raw keyboard messages rather than `ButtonInput<KeyCode>` so that OS
/// key repeat produces repeated increments. Unbound keys are ignored.
///
/// # Arguments
/// * `keyboard` - Raw keyboard input messages
/// * `bindings` - Key to command mapping
/// * `commands` - Writer for the resulting control commands
pub fn read_keyboard_commands(
    mut keyboard: MessageReader<KeyboardInput>,
    bindings: Res<KeyBindings>,
    mut commands: MessageWriter<ControlCommand>,
) {
    for input in keyboard.read() {
        if input.state != ButtonState::Pressed {
            continue;
        }
        if let Some(command) = bindings.command_for(input.key_code) {
            commands.write(ControlCommand::new(command));
        }
    }
}
