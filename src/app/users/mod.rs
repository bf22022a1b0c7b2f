//! 用户管理：成年过滤与随机二分

pub mod handler;
pub mod model;
pub mod random;
pub mod selection;
pub mod service;

pub use model::{Aged, CreateUserRequest, User};
pub use random::{FixedDraw, RandomSource, ThreadRandom};
pub use selection::{bisect_random, filter_adults, Selection, ADULT_AGE};
pub use service::UserService;
