//! 文字 CLI:读取 stdin → 解析命令 → 执行并打印

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::core::{events::LogEvent, states::AppState};
use crate::data::{schema::ItemList, ItemAssets};
use crate::inventory::components::{Backpack, DroppedItem};
use crate::inventory::events::{GiveItemEvent, ListInventoryEvent, TakeItemEvent};
use crate::shop::components::Wallet;
use crate::shop::events::{BuyItemEvent, ListShopEvent, SellItemEvent};

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line_result in stdin.lock().lines() {
                    if let Ok(line) = line_result {
                        let line = line.trim();
                        if !line.is_empty() {
                            let mut buf = buffer.lock().unwrap();
                            buf.push_back(line.to_string());
                        }
                    }
                }
            });
        }
        app
            // 事件:原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands.run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部;Some(token)=按 id/uuid/name 查询
    Give { id: String, count: u32 },
    Take { id: String, count: Option<u32> },
    Inventory,
    Drops,
    Shop,
    Buy { id: String, count: u32 },
    Sell { id: String, count: u32 },
    Wallet,
    Export,
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let mut buffer = CLI_BUFFER.lock().unwrap();
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
    backpack: Res<Backpack>,
    wallet: Res<Wallet>,
    drops: Query<&DroppedItem>,
    mut ev_give: EventWriter<GiveItemEvent>,
    mut ev_take: EventWriter<TakeItemEvent>,
    mut ev_list: EventWriter<ListInventoryEvent>,
    mut ev_shop: EventWriter<ListShopEvent>,
    mut ev_buy: EventWriter<BuyItemEvent>,
    mut ev_sell: EventWriter<SellItemEvent>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(
                    "命令列表:
  help                   查看帮助
  status                 查看当前状态
  exit / quit            退出程序
  items                  列出所有物品
  items <token>          用 id / uuid / 名称 查询单个物品
  give <id> [count]      给予物品
  take <id> [count]      移除物品,省略数量表示全部
  inventory              查看背包
  drops                  查看地上的掉落物
  shop                   查看商品目录
  buy <id> [count]       购买物品
  sell <id> [count]      出售物品
  wallet                 查看金币
  export                 以 JSON 导出背包
  "
                    .into(),
                ));
            }

            Command::Status => {
                let cnt = item_assets
                    .list(&lists)
                    .map_or(0, |list| list.items.len());
                log.write(LogEvent(format!(
                    "State: {:?}, Items Loaded: {}, Gold: {}",
                    state.get(),
                    cnt,
                    wallet.gold
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Success);
            }

            Command::Items(token) => {
                if let Some(list) = item_assets.list(&lists) {
                    match token {
                        None => {
                            // 全部列出
                            for entry in &list.items {
                                let uuid = uuid_from_id(&entry.id);
                                log.write(LogEvent(format!(
                                    "{} | {} | {}",
                                    uuid, entry.id, entry.name
                                )));
                            }
                        }
                        Some(t) => {
                            // 按三种字段模糊匹配
                            let t_low = t.to_lowercase();
                            if let Some(e) = list.items.iter().find(|e| {
                                e.id.eq_ignore_ascii_case(&t_low)
                                    || e.name.eq_ignore_ascii_case(&t_low)
                                    || uuid_from_id(&e.id).to_string() == t_low
                            }) {
                                let uuid = uuid_from_id(&e.id);
                                log.write(LogEvent(format!(
                                    "==================================================
UUID  : {uuid}
ID    : {}
Name  : {}
Stack : {}
Buy   : {}
Sell  : {}
==================================================",
                                    e.id, e.name, e.max_stack, e.buy_price, e.sell_price
                                )));
                            } else {
                                log.write(LogEvent("未找到匹配物品".into()));
                            }
                        }
                    }
                }
            }

            Command::Give { id, count } => {
                ev_give.write(GiveItemEvent { id, count });
            }

            Command::Take { id, count } => {
                ev_take.write(TakeItemEvent { id, count });
            }

            Command::Inventory => {
                ev_list.write(ListInventoryEvent);
            }

            Command::Drops => {
                if drops.is_empty() {
                    log.write(LogEvent("  (地上没有掉落物)".into()));
                } else {
                    let mut total = 0u32;
                    for dropped in drops.iter() {
                        total += dropped.stack.count;
                        log.write(LogEvent(format!(
                            "{} ×{} @ ({:.1}, {:.1}, {:.1})",
                            dropped.stack.proto.name,
                            dropped.stack.count,
                            dropped.pos.x,
                            dropped.pos.y,
                            dropped.pos.z
                        )));
                    }
                    log.write(LogEvent(format!("掉落物合计 {} 个", total)));
                }
            }

            Command::Shop => {
                ev_shop.write(ListShopEvent);
            }

            Command::Buy { id, count } => {
                ev_buy.write(BuyItemEvent { id, count });
            }

            Command::Sell { id, count } => {
                ev_sell.write(SellItemEvent { id, count });
            }

            Command::Wallet => {
                log.write(LogEvent(format!("金币:{}", wallet.gold)));
            }

            Command::Export => {
                match serde_json::to_string_pretty(&backpack.container) {
                    Ok(json) => log.write(LogEvent(json)),
                    Err(err) => log.write(LogEvent(format!("导出失败: {err}"))),
                };
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => {
            let token = parts.next().map(|s| s.to_string());
            Command::Items(token)
        }
        "give" => {
            let id = parts.next().unwrap_or("").to_string();
            let count = parts.next().unwrap_or("1").parse().unwrap_or(1);
            Command::Give { id, count }
        }
        "take" => {
            let id = parts.next().unwrap_or("").to_string();
            let count = parts.next().and_then(|s| s.parse().ok());
            Command::Take { id, count }
        }
        "inventory" | "inv" => Command::Inventory,
        "drops" | "drop" => Command::Drops,
        "shop" => Command::Shop,
        "buy" => {
            let id = parts.next().unwrap_or("").to_string();
            let count = parts.next().unwrap_or("1").parse().unwrap_or(1);
            Command::Buy { id, count }
        }
        "sell" => {
            let id = parts.next().unwrap_or("").to_string();
            let count = parts.next().unwrap_or("1").parse().unwrap_or(1);
            Command::Sell { id, count }
        }
        "wallet" | "gold" => Command::Wallet,
        "export" => Command::Export,
        other => Command::Unsupported(other.into()),
    }
}

fn uuid_from_id(id: &str) -> Uuid {
    // 用固定 namespace + id 字节生成版本 5 UUID,保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes())
}
