use bevy::prelude::*;

/// 商店商品:价格为 0 的方向不开放交易
#[derive(Debug, Clone)]
pub struct Product {
    pub item_id: String,
    pub buy_price: i64,
    pub sell_price: i64,
}

impl Product {
    pub fn is_buyable(&self) -> bool {
        self.buy_price > 0
    }

    pub fn is_sellable(&self) -> bool {
        self.sell_price > 0
    }
}

/// 商品目录(进入游戏时从物品表生成)
#[derive(Resource, Default)]
pub struct Shop {
    pub products: Vec<Product>,
}

impl Shop {
    pub fn find(&self, item_id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.item_id == item_id)
    }
}

/// 玩家钱包
#[derive(Resource, Default)]
pub struct Wallet {
    pub gold: i64,
}
