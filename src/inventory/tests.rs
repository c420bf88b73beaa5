//! 容器核心的行为测试:空间/数量互补、放入守恒、溢出分流、按条件取出。

use super::components::{Container, ItemStack};
use super::ops::{self, GiveOutcome};
use crate::data::schema::ItemEntry;
use proptest::prelude::*;

fn entry(id: &str, max_stack: u32) -> ItemEntry {
    ItemEntry {
        id: id.to_string(),
        name: id.to_string(),
        max_stack,
        buy_price: 0,
        sell_price: 0,
    }
}

fn stack(id: &str, max_stack: u32, count: u32) -> ItemStack {
    ItemStack::new(entry(id, max_stack), count)
}

#[test]
fn space_and_quantity_are_complementary() {
    let mut container = Container::with_slots(3);
    container.slots[0] = stack("coal", 64, 10);
    container.slots[2] = stack("coal", 64, 40);

    let sample = stack("coal", 64, 1);
    let space = ops::count_item_space_like(&container, &sample);
    let held = ops::count_items_like(&container, &sample);
    // 所有槽位都能装 coal:空间 + 持有 = 槽数 × 堆叠上限
    assert_eq!(space + held, 3 * 64);
}

#[test]
fn incompatible_slots_offer_no_space() {
    let mut container = Container::with_slots(2);
    container.slots[0] = stack("iron", 64, 1);

    let sample = stack("coal", 64, 1);
    assert_eq!(ops::count_item_space_like(&container, &sample), 64);
    assert_eq!(ops::count_items_like(&container, &sample), 0);
}

#[test]
fn give_splits_across_slots() {
    // 2 格 × 64:放 100 → 64 + 36,无溢出
    let mut container = Container::with_slots(2);
    let mut dropped = Vec::new();
    let mut sink = |s: ItemStack| dropped.push(s);

    let outcome = ops::give_items(&mut container, &entry("coal", 64), 100, Some(&mut sink));

    assert_eq!(
        outcome,
        GiveOutcome {
            placed: 100,
            sunk: 0,
            lost: 0
        }
    );
    assert_eq!(container.slots[0].count, 64);
    assert_eq!(container.slots[1].count, 36);
    assert!(dropped.is_empty());
}

#[test]
fn give_overflow_reaches_sink() {
    // 已有 (64, 36):再放 30 → 第二格补满,剩 2 个进 Sink
    let mut container = Container::with_slots(2);
    container.slots[0] = stack("coal", 64, 64);
    container.slots[1] = stack("coal", 64, 36);
    let mut dropped = Vec::new();
    let mut sink = |s: ItemStack| dropped.push(s);

    let outcome = ops::give_items(&mut container, &entry("coal", 64), 30, Some(&mut sink));

    assert_eq!(
        outcome,
        GiveOutcome {
            placed: 28,
            sunk: 2,
            lost: 0
        }
    );
    assert_eq!(container.slots[1].count, 64);
    assert_eq!(dropped.iter().map(|s| s.count).sum::<u32>(), 2);
}

#[test]
fn give_without_sink_counts_loss() {
    let mut container = Container::with_slots(1);
    container.slots[0] = stack("coal", 64, 64);

    let outcome = ops::give_items(&mut container, &entry("coal", 64), 5, None);

    assert_eq!(
        outcome,
        GiveOutcome {
            placed: 0,
            sunk: 0,
            lost: 5
        }
    );
    assert_eq!(container.slots[0].count, 64);
}

#[test]
fn give_merges_before_opening_new_slots() {
    let mut container = Container::with_slots(3);
    container.slots[1] = stack("coal", 64, 60);

    let outcome = ops::give_items(&mut container, &entry("coal", 64), 10, None);

    assert_eq!(outcome.placed, 10);
    // 先补满已有的堆,剩余才进第一个空槽
    assert_eq!(container.slots[1].count, 64);
    assert_eq!(container.slots[0].count, 6);
}

#[test]
fn give_zero_or_nothing_is_noop() {
    let mut container = Container::with_slots(2);
    container.slots[0] = stack("coal", 64, 10);
    let before = container.clone();

    assert_eq!(
        ops::give_items(&mut container, &entry("coal", 64), 0, None),
        GiveOutcome::default()
    );
    assert_eq!(
        ops::give_items(&mut container, &entry("", 64), 9, None),
        GiveOutcome::default()
    );
    assert_eq!(container, before);
}

#[test]
fn take_exact_leaves_rest_untouched() {
    let mut container = Container::with_slots(4);
    container.slots[0] = stack("coal", 64, 5);
    container.slots[1] = stack("iron", 64, 7);
    container.slots[2] = stack("coal", 64, 5);
    container.slots[3] = stack("coal", 64, 5);

    let taken = ops::take_items(&mut container, |s| s.proto.id == "coal", 7);

    assert_eq!(taken, 7);
    // 第一个匹配槽清空,第二个留下差额,后面的不动
    assert!(container.slots[0].is_empty());
    assert_eq!(container.slots[2].count, 3);
    assert_eq!(container.slots[3].count, 5);
    assert_eq!(container.slots[1], stack("iron", 64, 7));
    assert_eq!(ops::count_items_of(&container, "coal"), 8);
}

#[test]
fn take_more_than_held_is_partial() {
    let mut container = Container::with_slots(2);
    container.slots[0] = stack("pearl", 16, 10);

    let taken = ops::take_items(&mut container, |s| s.proto.id == "pearl", 15);

    // 持有量不足:取空全部匹配槽位,返回值让调用方识别部分取出
    assert_eq!(taken, 10);
    assert_eq!(ops::count_items_of(&container, "pearl"), 0);
    assert!(container.slots[0].is_empty());
}

#[test]
fn take_zero_is_noop() {
    let mut container = Container::with_slots(2);
    container.slots[0] = stack("coal", 64, 10);
    let before = container.clone();

    assert_eq!(ops::take_items(&mut container, |s| s.proto.id == "coal", 0), 0);
    assert_eq!(container, before);
}

#[test]
fn take_all_empties_matching_slots() {
    let mut container = Container::with_slots(3);
    container.slots[0] = stack("coal", 64, 12);
    container.slots[1] = stack("iron", 64, 3);
    container.slots[2] = stack("coal", 64, 30);

    let taken = ops::take_all_items(&mut container, |s| s.proto.id == "coal");

    assert_eq!(taken, 42);
    assert_eq!(ops::count_items_of(&container, "coal"), 0);
    assert_eq!(ops::count_items_of(&container, "iron"), 3);
}

#[test]
fn bulk_give_uses_each_stacks_own_count() {
    let mut container = Container::with_slots(3);
    let mut dropped = Vec::new();
    let mut sink = |s: ItemStack| dropped.push(s);

    let outcome = ops::give_stacks(
        &mut container,
        [stack("coal", 64, 70), stack("pearl", 16, 20)],
        Some(&mut sink),
    );

    // coal 占两格(64+6),pearl 只剩一格(16),溢出 4 个进 Sink
    assert_eq!(
        outcome,
        GiveOutcome {
            placed: 86,
            sunk: 4,
            lost: 0
        }
    );
    assert_eq!(ops::count_items_of(&container, "coal"), 70);
    assert_eq!(ops::count_items_of(&container, "pearl"), 16);
    assert_eq!(dropped.iter().map(|s| s.count).sum::<u32>(), 4);
}

#[test]
fn space_accepts_arbitrary_predicates() {
    // "任意食物"这类跨 id 的判定:apple 与 bread 槽都计入剩余空间
    let mut container = Container::with_slots(2);
    container.slots[0] = stack("apple", 64, 10);
    container.slots[1] = stack("bread", 64, 20);

    let food = |s: &ItemStack| s.proto.id == "apple" || s.proto.id == "bread";
    assert_eq!(ops::count_item_space(&container, food, 64), 54 + 44);
    assert_eq!(ops::count_items(&container, food), 30);
}

#[test]
fn sample_conveniences_match_predicate_forms() {
    let mut container = Container::with_slots(2);
    container.slots[0] = stack("coal", 64, 33);
    let sample = stack("coal", 64, 1);

    assert_eq!(
        ops::count_items_like(&container, &sample),
        ops::count_items(&container, |s| s.is_similar(&sample))
    );
    assert_eq!(ops::take_items_like(&mut container, &sample, 3), 3);
    assert_eq!(ops::count_items_of(&container, "coal"), 30);
}

proptest! {
    /// 放入守恒:placed + sunk + lost == 请求量,placed 恰好吃满事前空间
    #[test]
    fn prop_give_conserves_units(
        slots in 1usize..8,
        prefill in proptest::collection::vec(0u32..=64, 1..8),
        amount in 0u32..512,
    ) {
        let mut container = Container::with_slots(slots);
        for (slot, count) in container.slots.iter_mut().zip(&prefill) {
            if *count > 0 {
                *slot = stack("coal", 64, *count);
            }
        }
        let sample = stack("coal", 64, 1);
        let space_before = ops::count_item_space_like(&container, &sample);
        let held_before = ops::count_items_like(&container, &sample);

        let mut dropped = Vec::new();
        let mut sink = |s: ItemStack| dropped.push(s);
        let outcome = ops::give_items(&mut container, &entry("coal", 64), amount, Some(&mut sink));

        prop_assert_eq!(outcome.placed + outcome.sunk + outcome.lost, amount);
        prop_assert_eq!(outcome.lost, 0);
        prop_assert_eq!(outcome.placed, space_before.min(amount));
        prop_assert_eq!(ops::count_items_like(&container, &sample), held_before + outcome.placed);
        prop_assert_eq!(dropped.iter().map(|s| s.count).sum::<u32>(), outcome.sunk);
        for slot in &container.slots {
            prop_assert!(slot.count <= 64);
        }
    }

    /// 取出恰好移除 min(请求, 持有)
    #[test]
    fn prop_take_removes_exactly(
        prefill in proptest::collection::vec(0u32..=64, 1..8),
        amount in 0u32..512,
    ) {
        let mut container = Container::with_slots(prefill.len());
        for (slot, count) in container.slots.iter_mut().zip(&prefill) {
            if *count > 0 {
                *slot = stack("coal", 64, *count);
            }
        }
        let held_before = ops::count_items_of(&container, "coal");

        let taken = ops::take_items(&mut container, |s| s.proto.id == "coal", amount);

        prop_assert_eq!(taken, held_before.min(amount));
        prop_assert_eq!(ops::count_items_of(&container, "coal"), held_before - taken);
    }
}
