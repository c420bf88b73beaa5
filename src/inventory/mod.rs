pub mod components;
pub mod events;
pub mod ops;
mod systems;

#[cfg(test)]
mod tests;

use crate::core::states::AppState;
use bevy::prelude::*;
use components::*;
use events::*;
use systems::*;

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Backpack>()
            .add_event::<GiveItemEvent>()
            .add_event::<TakeItemEvent>()
            .add_event::<ListInventoryEvent>()
            .add_systems(OnEnter(AppState::InGame), setup_backpack)
            .add_systems(
                Update,
                (give_item, take_item, print_inventory).run_if(in_state(AppState::InGame)),
            );
    }
}
