//! リスト操作のエラー型

use thiserror::Error;

/// このクレートの操作結果
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// 操作ごとの有効範囲の外にある位置が渡された
    #[error("index {index} out of bounds for list of size {size}")]
    OutOfBounds { index: usize, size: usize },

    /// 空のリストに対してpop/pop_lastが呼ばれた
    #[error("list is empty")]
    EmptyCollection,
}

impl Error {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::OutOfBounds { .. })
    }

    pub fn is_empty_collection(&self) -> bool {
        matches!(self, Error::EmptyCollection)
    }
}
