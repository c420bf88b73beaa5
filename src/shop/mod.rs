pub mod components;
pub mod events;
mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use components::*;
use events::*;
use systems::*;

pub struct ShopPlugin;
impl Plugin for ShopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Shop>()
            .init_resource::<Wallet>()
            .add_event::<BuyItemEvent>()
            .add_event::<SellItemEvent>()
            .add_event::<ListShopEvent>()
            .add_systems(OnEnter(AppState::InGame), (build_catalog, setup_wallet))
            .add_systems(
                Update,
                (buy_item, sell_item, print_catalog).run_if(in_state(AppState::InGame)),
            );
    }
}
