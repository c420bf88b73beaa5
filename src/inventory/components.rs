use bevy::prelude::*;
use serde_derive::{Deserialize, Serialize};

use crate::data::schema::ItemEntry;

/// 玩家背包(挂在 Resource);location 为空时溢出物品直接消失
#[derive(Resource, Default)]
pub struct Backpack {
    pub container: Container,
    pub location: Option<Vec3>,
}

/// 固定槽位数的容器,空位用 count=0 的占位堆表示。
/// 槽位顺序即扫描顺序,本体只负责放置,计数和取出见 ops。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub slots: Vec<ItemStack>,
}

impl Container {
    pub fn with_slots(count: usize) -> Self {
        Self {
            slots: vec![ItemStack::default(); count],
        }
    }

    /// 先并入同类未满的槽位,再占用空槽;装不下的部分原样返回
    pub fn add_stack(&mut self, mut stack: ItemStack) -> Option<ItemStack> {
        if stack.is_empty() {
            return None;
        }
        let max_size = stack.max_stack().max(1);

        for slot in self.slots.iter_mut() {
            if stack.count == 0 {
                break;
            }
            if slot.is_empty() || !slot.is_similar(&stack) || slot.count >= max_size {
                continue;
            }
            let moved = (max_size - slot.count).min(stack.count);
            slot.count += moved;
            stack.count -= moved;
        }

        for slot in self.slots.iter_mut() {
            if stack.count == 0 {
                break;
            }
            if !slot.is_empty() {
                continue;
            }
            let moved = max_size.min(stack.count);
            *slot = ItemStack::new(stack.proto.clone(), moved);
            stack.count -= moved;
        }

        (stack.count > 0).then_some(stack)
    }
}

/// 运行时物品堆
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub proto: ItemEntry,
    pub count: u32,
}

impl ItemStack {
    pub fn new(proto: ItemEntry, count: u32) -> Self {
        Self { proto, count }
    }

    /// 空堆:没有数量,或原型是"空"物品
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.proto.id.is_empty()
    }

    /// 同类判定:按物品 id,空物品与任何东西都不同类
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        !self.proto.id.is_empty() && self.proto.id == other.proto.id
    }

    pub fn max_stack(&self) -> u32 {
        self.proto.max_stack
    }

    /// 清空为占位空堆
    pub fn clear(&mut self) {
        *self = ItemStack::default();
    }
}

/// 掉在地上的物品(背包溢出的去处)
#[derive(Component, Debug)]
pub struct DroppedItem {
    pub stack: ItemStack,
    pub pos: Vec3,
}
