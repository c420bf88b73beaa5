use bevy::prelude::*;

/// 游戏运行的大状态:启动 → 载入物品表 → 游戏中
#[derive(States, Debug, Clone, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Startup,
    Loading,
    InGame,
}
