//! 用户数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 带年龄字段的记录，选择逻辑只关心这一项
pub trait Aged {
    fn age(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub age: f64,
    #[serde(default = "now_rfc3339")]
    pub created_at: String,
    #[serde(default = "now_rfc3339")]
    pub updated_at: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: f64) -> Self {
        let now = now_rfc3339();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            age,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl Aged for User {
    fn age(&self) -> f64 {
        self.age
    }
}

/// 创建用户请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub age: f64,
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
