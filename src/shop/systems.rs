use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::core::resources::GameConfig;
use crate::data::{schema::ItemList, ItemAssets};
use crate::inventory::components::{Backpack, DroppedItem, ItemStack};
use crate::inventory::ops;
use bevy::prelude::*;

/// 进入游戏时从物品表生成商品目录
pub fn build_catalog(
    mut shop: ResMut<Shop>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
) {
    let list = item_assets.list(&lists).expect("items must be loaded");

    shop.products = list
        .items
        .iter()
        .filter(|entry| entry.buy_price > 0 || entry.sell_price > 0)
        .map(|entry| Product {
            item_id: entry.id.clone(),
            buy_price: entry.buy_price,
            sell_price: entry.sell_price,
        })
        .collect();
    info!("商店上架 {} 种商品", shop.products.len());
}

pub fn setup_wallet(mut wallet: ResMut<Wallet>, config: Res<GameConfig>) {
    wallet.gold = config.starting_gold;
}

/// 购买:先验钱和背包空间,通过后才入包
pub fn buy_item(
    mut ev_buy: EventReader<BuyItemEvent>,
    mut backpack: ResMut<Backpack>,
    mut wallet: ResMut<Wallet>,
    mut commands: Commands,
    shop: Res<Shop>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
    mut log_event: EventWriter<LogEvent>,
) {
    let list = item_assets.list(&lists).expect("items must be loaded");

    for ev in ev_buy.read() {
        if ev.count == 0 {
            continue;
        }

        let Some(proto) = list.find(&ev.id) else {
            log_event.write(LogEvent(format!("不存在物品 ID {}", ev.id)));
            continue;
        };
        let Some(product) = shop.find(&proto.id) else {
            log_event.write(LogEvent(format!("{} 不在商店目录里", proto.name)));
            continue;
        };
        if !product.is_buyable() {
            log_event.write(LogEvent(format!("{} 不出售", proto.name)));
            continue;
        }

        let cost = product.buy_price * i64::from(ev.count);
        if wallet.gold < cost {
            log_event.write(LogEvent(format!(
                "金币不足:需要 {},持有 {}",
                cost, wallet.gold
            )));
            continue;
        }

        // 交易前校验:背包装不下就拒绝成交,而不是让溢出掉在地上
        let sample = ItemStack::new(proto.clone(), 1);
        let space = ops::count_item_space_like(&backpack.container, &sample);
        if space < ev.count {
            log_event.write(LogEvent(format!(
                "背包空间不足:还能装 {},要买 {}",
                space, ev.count
            )));
            continue;
        }

        wallet.gold -= cost;
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

        log_event.write(LogEvent(format!(
            "购买 {} ×{},花费 {} 金币(余额 {})",
            proto.name, outcome.placed, cost, wallet.gold
        )));
    }
}

/// 出售:先验持有量,不做部分成交
pub fn sell_item(
    mut ev_sell: EventReader<SellItemEvent>,
    mut backpack: ResMut<Backpack>,
    mut wallet: ResMut<Wallet>,
    shop: Res<Shop>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
    mut log_event: EventWriter<LogEvent>,
) {
    let list = item_assets.list(&lists).expect("items must be loaded");

    for ev in ev_sell.read() {
        if ev.count == 0 {
            continue;
        }

        let Some(proto) = list.find(&ev.id) else {
            log_event.write(LogEvent(format!("不存在物品 ID {}", ev.id)));
            continue;
        };
        let Some(product) = shop.find(&proto.id) else {
            log_event.write(LogEvent(format!("{} 不在商店目录里", proto.name)));
            continue;
        };
        if !product.is_sellable() {
            log_event.write(LogEvent(format!("{} 不回收", proto.name)));
            continue;
        }

        let held = ops::count_items_of(&backpack.container, &proto.id);
        if held < ev.count {
            log_event.write(LogEvent(format!(
                "{} 不足:持有 {},要卖 {}",
                proto.name, held, ev.count
            )));
            continue;
        }

        let taken = ops::take_items_of(&mut backpack.container, &proto.id, ev.count);
        let gain = product.sell_price * i64::from(taken);
        wallet.gold += gain;
        log_event.write(LogEvent(format!(
            "出售 {} ×{},获得 {} 金币(余额 {})",
            proto.name, taken, gain, wallet.gold
        )));
    }
}

/// 打印商品目录
pub fn print_catalog(
    mut ev_list: EventReader<ListShopEvent>,
    shop: Res<Shop>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    let Some(list) = item_assets.list(&lists) else {
        return;
    };
    if shop.products.is_empty() {
        println!("  (商店没有商品)");
        return;
    }

    for product in &shop.products {
        let name = list
            .find(&product.item_id)
            .map_or(product.item_id.as_str(), |entry| entry.name.as_str());
        let buy = if product.is_buyable() {
            format!("买 {}", product.buy_price)
        } else {
            "不出售".to_string()
        };
        let sell = if product.is_sellable() {
            format!("卖 {}", product.sell_price)
        } else {
            "不回收".to_string()
        };
        println!("{} ({}) | {} | {}", name, product.item_id, buy, sell);
    }
}
