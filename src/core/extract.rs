//! 可选 JSON 请求体解析

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use super::error::CoreError;

/// 解析可以省略的 JSON 请求体
///
/// 空请求体（或只有空白）以及 `null` 视为未提供，返回 `Ok(None)`；
/// 其余内容必须能完整解析为 `T`，否则返回 `BadRequest`。
pub fn optional_json<T: DeserializeOwned>(body: &Bytes) -> Result<Option<T>, CoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Option<T>>(body)
        .map_err(|e| CoreError::BadRequest(format!("请求体解析失败: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_null_are_absent() {
        for raw in ["", "  \n", "null"] {
            let parsed: Option<Vec<u32>> = optional_json(&Bytes::from(raw)).unwrap();
            assert_eq!(parsed, None, "body {:?}", raw);
        }
    }

    #[test]
    fn valid_body_is_parsed() {
        let parsed: Option<Vec<u32>> = optional_json(&Bytes::from("[1, 2]")).unwrap();
        assert_eq!(parsed, Some(vec![1, 2]));
    }

    #[test]
    fn malformed_body_is_rejected() {
        for raw in ["[1,", "{\"a\": 1}", "[1, \"x\"]"] {
            let result: Result<Option<Vec<u32>>, _> = optional_json(&Bytes::from(raw));
            assert!(matches!(result, Err(CoreError::BadRequest(_))), "body {:?}", raw);
        }
    }
}
