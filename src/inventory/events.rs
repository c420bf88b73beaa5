use bevy::prelude::*;

#[derive(Event)]
pub struct GiveItemEvent {
    pub id:    String,
    pub count: u32,
}

/// count 为 None 表示取出全部
#[derive(Event)]
pub struct TakeItemEvent {
    pub id:    String,
    pub count: Option<u32>,
}

#[derive(Event)]
pub struct ListInventoryEvent;   // 让 CLI 请求打印背包
