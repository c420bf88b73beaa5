pub mod loader;
pub mod schema;

use bevy::app::AppExit;
use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::states::AppState;
use schema::ItemList;

// --------------------------- 资源 ---------------------------
/// 物品表资产句柄
#[derive(Resource, Default)]
pub struct ItemAssets {
    pub handle: Option<Handle<ItemList>>,
}

impl ItemAssets {
    /// 取出已载入的物品表,Loading 完成前为 None
    pub fn list<'a>(&self, lists: &'a Assets<ItemList>) -> Option<&'a ItemList> {
        self.handle.as_ref().and_then(|handle| lists.get(handle))
    }
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<ItemList>()
            .register_asset_loader(loader::RonItemLoader::default())
            .init_resource::<ItemAssets>()
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(Update, check_loaded.run_if(in_state(AppState::Loading)));
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(mut item_assets: ResMut<ItemAssets>, asset_server: Res<AssetServer>) {
    let handle: Handle<ItemList> = asset_server.load("data/items.ron");
    item_assets.handle = Some(handle);
}

fn check_loaded(
    mut next: ResMut<NextState<AppState>>,
    mut app_exit: EventWriter<AppExit>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
    asset_server: Res<AssetServer>,
) {
    let Some(handle) = &item_assets.handle else {
        return;
    };

    if let Some(list) = lists.get(handle) {
        info!("物品表载入完成:{} 条", list.items.len());
        next.set(AppState::InGame);
    } else if let LoadState::Failed(err) = asset_server.load_state(handle) {
        error!("物品表载入失败:{err}");
        app_exit.write(AppExit::error());
    }
}
