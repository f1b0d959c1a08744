// map結果 - 入力順に並んだ要素ごとの結果

use crate::core::{PoolError, PoolSummary};

/// 入力順に並んだmap結果
///
/// 失敗した要素のエラーは、その要素を取り出した時点で呼び出し側に届く。
#[derive(Debug)]
pub struct MapResults<T> {
    results: std::vec::IntoIter<Result<T, PoolError>>,
    summary: PoolSummary,
}

impl<T> MapResults<T> {
    pub(crate) fn new(results: Vec<Result<T, PoolError>>, summary: PoolSummary) -> Self {
        Self {
            results: results.into_iter(),
            summary,
        }
    }

    /// ワーカーを起動しなかった空の結果
    pub fn empty() -> Self {
        Self::new(Vec::new(), PoolSummary::default())
    }

    pub fn summary(&self) -> &PoolSummary {
        &self.summary
    }

    /// 全要素を取り出す。最初に失敗した要素のエラーで止まる
    pub fn into_vec(self) -> Result<Vec<T>, PoolError> {
        self.collect()
    }
}

impl<T> Iterator for MapResults<T> {
    type Item = Result<T, PoolError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.results.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.results.size_hint()
    }
}

impl<T> ExactSizeIterator for MapResults<T> {}
