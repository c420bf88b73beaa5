//! 容器核心运算:剩余空间、持有数量、按条件取出、分堆放入。
//! 纯函数操作 `Container`,不碰 ECS,方便单测。
//! 容器在一次调用期间以 `&mut` 独占借用,内部不加锁;并发访问由调用方串行化。

use super::components::{Container, ItemStack};
use crate::data::schema::ItemEntry;

/// 一次放入操作的结算
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GiveOutcome {
    /// 成功进入容器的数量
    pub placed: u32,
    /// 容器装不下,交给 Sink 的数量
    pub sunk: u32,
    /// 没有 Sink 可用,直接消失的数量
    pub lost: u32,
}

/// 统计还能装下多少满足 predicate 的物品。
/// 空槽按 max_size 计,匹配槽按 max_size 减已有数量计,其余为 0。
pub fn count_item_space(
    container: &Container,
    predicate: impl Fn(&ItemStack) -> bool,
    max_size: u32,
) -> u32 {
    container
        .slots
        .iter()
        .map(|slot| {
            if slot.is_empty() {
                max_size
            } else if predicate(slot) {
                max_size.saturating_sub(slot.count)
            } else {
                0
            }
        })
        .sum()
}

/// 以样本堆推导判定条件与堆叠上限
pub fn count_item_space_like(container: &Container, sample: &ItemStack) -> u32 {
    count_item_space(container, |slot| slot.is_similar(sample), sample.max_stack())
}

/// 统计满足 predicate 的持有总量
pub fn count_items(container: &Container, predicate: impl Fn(&ItemStack) -> bool) -> u32 {
    container
        .slots
        .iter()
        .filter(|slot| !slot.is_empty() && predicate(slot))
        .map(|slot| slot.count)
        .sum()
}

pub fn count_items_like(container: &Container, sample: &ItemStack) -> u32 {
    count_items(container, |slot| slot.is_similar(sample))
}

pub fn count_items_of(container: &Container, id: &str) -> u32 {
    count_items(container, |slot| slot.proto.id == id)
}

/// 按槽位顺序取出最多 amount 个满足 predicate 的物品,返回实际取出数。
/// 持有量不足时取空所有匹配槽位;调用方用返回值识别部分取出。
pub fn take_items(
    container: &mut Container,
    predicate: impl Fn(&ItemStack) -> bool,
    amount: u32,
) -> u32 {
    if amount == 0 {
        return 0;
    }

    let mut taken = 0u32;
    for slot in container.slots.iter_mut() {
        if slot.is_empty() || !predicate(slot) {
            continue;
        }

        let has = slot.count;
        if taken + has > amount {
            // 这一槽比还差的多:留下差额,结束扫描
            slot.count = taken + has - amount;
            taken = amount;
            break;
        }

        slot.clear();
        taken += has;
        if taken == amount {
            break;
        }
    }
    taken
}

/// 取出全部满足 predicate 的物品
pub fn take_all_items(container: &mut Container, predicate: impl Fn(&ItemStack) -> bool) -> u32 {
    let total = count_items(container, &predicate);
    take_items(container, predicate, total)
}

pub fn take_items_like(container: &mut Container, sample: &ItemStack, amount: u32) -> u32 {
    take_items(container, |slot| slot.is_similar(sample), amount)
}

pub fn take_items_of(container: &mut Container, id: &str, amount: u32) -> u32 {
    take_items(container, |slot| slot.proto.id == id, amount)
}

/// 放入 amount 个 proto 物品:按堆叠上限分块,逐块走容器的放置逻辑。
/// 溢出交给 sink;没有 sink 时计入 lost。
pub fn give_items(
    container: &mut Container,
    proto: &ItemEntry,
    amount: u32,
    mut sink: Option<&mut dyn FnMut(ItemStack)>,
) -> GiveOutcome {
    let mut outcome = GiveOutcome::default();
    if amount == 0 || proto.id.is_empty() {
        return outcome;
    }

    // max_stack 异常为 0 时按 1 处理,保证每轮都有进展
    let max_size = proto.max_stack.max(1);
    let mut remaining = amount;

    while remaining > 0 {
        let chunk = max_size.min(remaining);
        let leftover = container.add_stack(ItemStack::new(proto.clone(), chunk));

        let left_count = leftover.as_ref().map_or(0, |stack| stack.count);
        outcome.placed += chunk - left_count;

        if let Some(left) = leftover {
            match sink.as_mut() {
                Some(sink) => {
                    outcome.sunk += left.count;
                    sink(left);
                }
                None => outcome.lost += left.count,
            }
        }

        remaining -= chunk;
    }
    outcome
}

/// 逐堆放入,每堆用自己声明的数量,结算汇总
pub fn give_stacks(
    container: &mut Container,
    stacks: impl IntoIterator<Item = ItemStack>,
    mut sink: Option<&mut dyn FnMut(ItemStack)>,
) -> GiveOutcome {
    let mut total = GiveOutcome::default();
    for stack in stacks {
        let one = give_items(container, &stack.proto, stack.count, sink.as_deref_mut());
        total.placed += one.placed;
        total.sunk += one.sunk;
        total.lost += one.lost;
    }
    total
}
