//! Parallel analysis of independent texts

use rayon::prelude::*;

use crate::api::{Analysis, Error, PlaceFinder};

impl PlaceFinder {
    /// Analyze each text independently on the global rayon pool
    ///
    /// Results are returned in input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Analysis>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    /// Analyze each text on a dedicated pool of `threads` workers
    ///
    /// `None` or `Some(0)` sizes the pool to the number of logical CPUs.
    pub fn analyze_batch_with_threads<S>(
        &self,
        texts: &[S],
        threads: Option<usize>,
    ) -> Result<Vec<Analysis>, Error>
    where
        S: AsRef<str> + Sync,
    {
        let threads = threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| Error::Infrastructure(format!("Failed to build thread pool: {e}")))?;

        Ok(pool.install(|| self.analyze_batch(texts)))
    }
}
