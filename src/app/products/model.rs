//! 产品数据模型

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Default product";
pub const DEFAULT_PRICE: f64 = 10.0;
/// 计算总价时附加在基础价格上的固定费用
pub const EXTRA_CHARGE: f64 = 5.0;
/// 只有高于该值的价格才会被记录
pub const MIN_RECORDED_PRICE: f64 = 10.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProductError {
    #[error("价格必须提供且不能为 0")]
    MissingPrice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub price: f64,
    /// 通过 [`Product::set_price`] 记录的价格
    pub value: Option<f64>,
}

impl Default for Product {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Product {
    /// 空标题、缺失或为 0 的价格使用默认值
    pub fn new(title: Option<String>, price: Option<f64>) -> Self {
        Self {
            title: title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            price: price.filter(|price| is_set(*price)).unwrap_or(DEFAULT_PRICE),
            value: None,
        }
    }

    pub fn get_price(&self) -> f64 {
        self.price + EXTRA_CHARGE
    }

    /// 记录新价格；低于或等于 10 的值被忽略
    pub fn set_price(&mut self, value: Option<f64>) -> Result<(), ProductError> {
        let value = value.filter(|v| is_set(*v)).ok_or(ProductError::MissingPrice)?;

        if value > MIN_RECORDED_PRICE {
            self.value = Some(value);
        }

        Ok(())
    }
}

fn is_set(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
