//! 随机数来源
//!
//! 随机二分选择需要一个 [0, 1) 区间内的均匀随机数。
//! 通过 trait 注入，测试时可以替换成固定值。

use rand::Rng;

/// 均匀分布随机数来源，返回值位于 [0, 1)
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;
}

/// 基于线程本地 RNG 的默认实现
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// 每次都返回同一个值，用于确定性测试
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub f64);

impl RandomSource for FixedDraw {
    fn next_f64(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_unit_interval() {
        let rng = ThreadRandom;
        for _ in 0..1000 {
            let draw = rng.next_f64();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn fixed_draw_repeats() {
        let rng = FixedDraw(0.5);
        assert_eq!(rng.next_f64(), 0.5);
        assert_eq!(rng.next_f64(), 0.5);
    }
}
