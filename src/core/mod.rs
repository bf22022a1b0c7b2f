//! 核心层：错误、响应封装、请求体解析与中间件

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
