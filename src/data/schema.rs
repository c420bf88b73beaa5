use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde_derive::{Deserialize, Serialize};

/// 物品静态表条目;max_stack 是该物品固有的堆叠上限
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub id:   String,
    pub name: String,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// 买入单价,0 表示商店不出售
    #[serde(default)]
    pub buy_price: i64,
    /// 卖出单价,0 表示商店不回收
    #[serde(default)]
    pub sell_price: i64,
}

fn default_max_stack() -> u32 {
    64
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemList {
    pub items: Vec<ItemEntry>,
}

impl ItemList {
    /// 按 id 查找(忽略大小写)
    pub fn find(&self, id: &str) -> Option<&ItemEntry> {
        self.items.iter().find(|entry| entry.id.eq_ignore_ascii_case(id))
    }
}
