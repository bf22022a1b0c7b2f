//! 用户选择逻辑
//!
//! - [`filter_adults`]：保留年龄严格大于 18 的用户
//! - [`bisect_random`]：按一次随机抽样返回前半段或后半段
//!
//! 两个函数都不修改输入，结果保持原有的相对顺序。

use serde::{Serialize, Serializer};

use super::model::Aged;
use super::random::RandomSource;

/// 成年年龄界限，等于该值的用户不算成年
pub const ADULT_AGE: f64 = 18.0;

/// 抽样值大于该阈值时取前半段，否则取后半段
pub const PREFIX_THRESHOLD: f64 = 0.5;

/// 随机二分的结果
///
/// `Absent` 表示调用方根本没有提供序列，与"提供了序列但选出为空"区分开。
/// 序列化时 `Absent` 输出为 JSON `false`，`Picked` 输出为数组。
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Absent,
    Picked(Vec<T>),
}

impl<T> Selection<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Selection::Absent)
    }

    /// 选中的元素；`Absent` 时返回 `None`
    pub fn picked(&self) -> Option<&[T]> {
        match self {
            Selection::Absent => None,
            Selection::Picked(items) => Some(items),
        }
    }

    pub fn into_picked(self) -> Option<Vec<T>> {
        match self {
            Selection::Absent => None,
            Selection::Picked(items) => Some(items),
        }
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::Absent => serializer.serialize_bool(false),
            Selection::Picked(items) => items.serialize(serializer),
        }
    }
}

/// 过滤出成年用户（`age > 18`），保持原顺序
pub fn filter_adults<T: Aged + Clone>(users: &[T]) -> Vec<T> {
    users
        .iter()
        .filter(|user| user.age() > ADULT_AGE)
        .cloned()
        .collect()
}

/// 二分点：`len / 2` 四舍五入（半数向上取整）
pub fn split_point(len: usize) -> usize {
    len.div_ceil(2)
}

/// 随机返回序列的前半段或后半段
///
/// 每次调用恰好消耗一次抽样，即使 `users` 为 `None`。
/// 抽样值 `> 0.5` 返回 `[0, mid)`，否则（包括恰好 0.5）返回 `[mid, len)`。
pub fn bisect_random<T: Clone>(users: Option<&[T]>, rng: &dyn RandomSource) -> Selection<T> {
    let draw = rng.next_f64();

    let Some(users) = users else {
        return Selection::Absent;
    };

    let mid = split_point(users.len());
    let picked = if draw > PREFIX_THRESHOLD {
        &users[..mid]
    } else {
        &users[mid..]
    };

    tracing::debug!(
        draw,
        len = users.len(),
        mid,
        picked = picked.len(),
        "随机二分用户列表"
    );

    Selection::Picked(picked.to_vec())
}
