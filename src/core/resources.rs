use anyhow::Context;
use bevy::prelude::*;
use serde_derive::Deserialize;

/// 配置文件路径(工作目录下)
pub const CONFIG_PATH: &str = "config.toml";

/// 全局游戏配置,缺失字段用默认值补齐
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 背包槽位数
    pub backpack_slots: usize,
    /// 初始金币
    pub starting_gold: i64,
    /// 玩家出生点,也是背包溢出物品的掉落点
    pub spawn_point: [f32; 3],
    /// 关闭后背包溢出的物品直接消失
    pub enable_world_drops: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            backpack_slots: 30,
            starting_gold: 100,
            spawn_point: [0.0, 0.0, 0.0],
            enable_world_drops: true,
        }
    }
}

impl GameConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置失败: {path}"))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("解析配置失败: {path}"))?;
        Ok(config)
    }

    /// 读取失败时退回默认配置,不阻塞启动
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err:#},使用默认配置");
                Self::default()
            }
        }
    }
}
