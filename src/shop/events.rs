use bevy::prelude::*;

#[derive(Event)]
pub struct BuyItemEvent {
    pub id:    String,
    pub count: u32,
}

#[derive(Event)]
pub struct SellItemEvent {
    pub id:    String,
    pub count: u32,
}

#[derive(Event)]
pub struct ListShopEvent;   // 让 CLI 请求打印商品目录
