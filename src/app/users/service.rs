//! 用户业务服务

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::model::{CreateUserRequest, User};
use super::random::RandomSource;
use super::selection::{bisect_random, filter_adults, Selection};
use crate::core::error::CoreError;

/// 内存中的用户列表，保持插入顺序
#[derive(Clone, Default)]
pub struct UserService {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// 预置九个示例用户
    pub fn with_sample_users() -> Self {
        let samples = [
            ("Alice", "alice@example.com", 25.0),
            ("Bob", "bob@example.com", 17.0),
            ("Carol", "carol@example.com", 18.0),
            ("Dave", "dave@example.com", 32.0),
            ("Eve", "eve@example.com", 19.0),
            ("Frank", "frank@example.com", 12.0),
            ("Grace", "grace@example.com", 45.0),
            ("Heidi", "heidi@example.com", 16.0),
            ("Ivan", "ivan@example.com", 28.0),
        ];

        let users = samples
            .into_iter()
            .map(|(name, email, age)| User::new(name, email, age))
            .collect();

        Self::with_users(users)
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn create_user(&self, payload: CreateUserRequest) -> Result<User, CoreError> {
        if payload.name.trim().is_empty() {
            return Err(CoreError::BadRequest("用户名不能为空".to_string()));
        }

        let email = payload.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::BadRequest("请提供有效的邮箱地址".to_string()));
        }

        let mut users = self.users.write().await;
        if users.iter().any(|user| user.email == email) {
            return Err(CoreError::Conflict("邮箱地址已存在".to_string()));
        }

        let user = User::new(payload.name.trim(), email, payload.age);
        users.push(user.clone());

        info!(id = %user.id, total = users.len(), "已创建用户");
        Ok(user)
    }

    pub async fn adult_users(&self) -> Vec<User> {
        let users = self.users.read().await;
        filter_adults(users.as_slice())
    }

    pub async fn random_users(&self, rng: &dyn RandomSource) -> Selection<User> {
        let users = self.users.read().await;
        bisect_random(Some(users.as_slice()), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::users::random::FixedDraw;

    fn request(name: &str, email: &str, age: f64) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn sample_users_are_nine() {
        let service = UserService::with_sample_users();
        assert_eq!(service.count().await, 9);
    }

    #[tokio::test]
    async fn create_appends_in_order() {
        let service = UserService::new();
        service.create_user(request("a", "a@x.io", 20.0)).await.unwrap();
        service.create_user(request("b", "B@X.io ", 10.0)).await.unwrap();

        let users = service.list_users().await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "a");
        assert_eq!(users[1].email, "b@x.io");
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let service = UserService::new();
        assert!(matches!(
            service.create_user(request(" ", "a@x.io", 20.0)).await,
            Err(CoreError::BadRequest(_))
        ));
        assert!(matches!(
            service.create_user(request("a", "nope", 20.0)).await,
            Err(CoreError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email() {
        let service = UserService::new();
        service.create_user(request("a", "a@x.io", 20.0)).await.unwrap();
        assert!(matches!(
            service.create_user(request("b", "a@x.io", 30.0)).await,
            Err(CoreError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn adult_users_from_samples() {
        let service = UserService::with_sample_users();
        let names: Vec<String> = service
            .adult_users()
            .await
            .into_iter()
            .map(|user| user.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Dave", "Eve", "Grace", "Ivan"]);
    }

    #[tokio::test]
    async fn random_users_from_samples() {
        let service = UserService::with_sample_users();
        let first = service.random_users(&FixedDraw(0.6)).await;
        let second = service.random_users(&FixedDraw(0.3)).await;
        assert_eq!(first.picked().map(<[User]>::len), Some(5));
        assert_eq!(second.picked().map(<[User]>::len), Some(4));
    }
}
