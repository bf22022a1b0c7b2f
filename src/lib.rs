//! # user-selector
//!
//! 用户列表工具服务：
//! - 成年用户过滤（年龄严格大于 18）
//! - 随机返回用户列表的前半段或后半段
//! - 星期名称查询、产品价格模型
//! - 远程用户 API 客户端
//!
//! 核心选择逻辑见 [`app::users::selection`]。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, AppState};
pub use app::users::{bisect_random, filter_adults, Aged, RandomSource, Selection, User};
pub use config::Config;
