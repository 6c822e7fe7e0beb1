//! Scoped worker pool for batch conversions.

use rayon::ThreadPool;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::error::{DataError, Result};

/// A fixed-size pool of worker threads.
///
/// The pool lives only as long as the value; threads are released on drop.
pub struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    pub fn new(size: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(size.max(1))
            .thread_name(|i| format!("molvec-worker-{i}"))
            .build()
            .map_err(|err| DataError::WorkerPool {
                message: err.to_string(),
            })?;
        Ok(Self { pool })
    }

    pub fn size(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Apply `f` to every item on the pool. Output order matches input order
    /// and the first error is returned.
    pub fn map<T, U, F>(&self, items: &[T], f: F) -> Result<Vec<U>>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Result<U> + Sync + Send,
    {
        self.pool.install(|| items.par_iter().map(f).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_order() {
        let pool = WorkerPool::new(4).unwrap();
        assert_eq!(pool.size(), 4);
        let items: Vec<u32> = (0..100).collect();
        let doubled = pool.map(&items, |x| Ok(x * 2)).unwrap();
        assert_eq!(doubled, items.iter().map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_map_propagates_errors() {
        let pool = WorkerPool::new(2).unwrap();
        let err = pool
            .map(&[1, 2, 3], |x| {
                if *x == 2 {
                    Err(DataError::validation("two"))
                } else {
                    Ok(*x)
                }
            })
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_zero_size_runs_single_thread() {
        assert_eq!(WorkerPool::new(0).unwrap().size(), 1);
    }
}
