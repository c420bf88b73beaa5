use bevy::prelude::*;

mod core;
mod data;
mod interface;
mod inventory;
mod shop;

use crate::core::events::LogEvent;
use crate::core::states::AppState;
use crate::core::CorePlugin;
use interface::debug_cli::DebugCliPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                visible: false,
                ..default()
            }), // 隐藏窗口,纯终端交互
            ..default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(data::DataPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(shop::ShopPlugin)
        .add_plugins(DebugCliPlugin)
        .add_systems(Update, forward_log_event) // 简单打印
        .add_systems(Startup, |mut next: ResMut<NextState<AppState>>| {
            next.set(AppState::Loading);
        })
        .run();
}

fn forward_log_event(mut reader: EventReader<LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
