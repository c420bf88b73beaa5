use super::{components::*, events::*, ops};
use crate::core::events::LogEvent;
use crate::core::resources::GameConfig;
use crate::data::{schema::ItemList, ItemAssets};
use bevy::prelude::*;

/// 进入游戏时按配置初始化背包
pub fn setup_backpack(mut backpack: ResMut<Backpack>, config: Res<GameConfig>) {
    backpack.container = Container::with_slots(config.backpack_slots);
    backpack.location = config
        .enable_world_drops
        .then(|| Vec3::from(config.spawn_point));
    info!("背包初始化:{} 格", config.backpack_slots);
}

/// 处理"give"——往背包里塞物品,装不下的掉在地上
pub fn give_item(
    mut ev_give: EventReader<GiveItemEvent>,
    mut backpack: ResMut<Backpack>,
    mut commands: Commands,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
) {
    let list = item_assets.list(&lists).expect("items must be loaded");

    for ev in ev_give.read() {
        let Some(proto) = list.find(&ev.id) else {
            warn!("不存在物品 ID {}", ev.id);
            continue;
        };

        let location = backpack.location;
        let outcome = match location {
            Some(pos) => {
                let mut drop_to_ground = |stack: ItemStack| {
                    commands.spawn(DroppedItem { stack, pos });
                };
                ops::give_items(
                    &mut backpack.container,
                    proto,
                    ev.count,
                    Some(&mut drop_to_ground),
                )
            }
            None => ops::give_items(&mut backpack.container, proto, ev.count, None),
        };

        info!("获得 {} ×{}", proto.name, outcome.placed);
        if outcome.sunk > 0 {
            warn!("背包已满,{} ×{} 掉落在地上", proto.name, outcome.sunk);
        }
        if outcome.lost > 0 {
            warn!("背包已满,{} ×{} 已丢失", proto.name, outcome.lost);
        }
    }
}

/// 处理"take"——count 为 None 时取出全部
pub fn take_item(
    mut ev_take: EventReader<TakeItemEvent>,
    mut backpack: ResMut<Backpack>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
    mut log_event: EventWriter<LogEvent>,
) {
    let list = item_assets.list(&lists).expect("items must be loaded");

    for ev in ev_take.read() {
        let Some(proto) = list.find(&ev.id) else {
            log_event.write(LogEvent(format!("不存在物品 ID {}", ev.id)));
            continue;
        };

        let taken = match ev.count {
            Some(count) => ops::take_items_of(&mut backpack.container, &proto.id, count),
            None => ops::take_all_items(&mut backpack.container, |slot| slot.proto.id == proto.id),
        };

        match (taken, ev.count) {
            (0, _) => log_event.write(LogEvent(format!("背包里没有 {}", proto.name))),
            (taken, Some(count)) if taken < count => log_event.write(LogEvent(format!(
                "仅移除 {} ×{}(请求 {})",
                proto.name, taken, count
            ))),
            _ => log_event.write(LogEvent(format!("移除 {} ×{}", proto.name, taken))),
        };
    }
}

/// 打印背包内容
pub fn print_inventory(mut ev_list: EventReader<ListInventoryEvent>, backpack: Res<Backpack>) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    let mut empty = true;
    for (idx, stack) in backpack.container.slots.iter().enumerate() {
        if !stack.is_empty() {
            empty = false;
            println!(
                "[{idx}] {} ×{} (id={})",
                stack.proto.name, stack.count, stack.proto.id
            );
        }
    }

    if empty {
        println!("  (empty)");
    }
}
