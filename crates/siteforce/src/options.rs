/// How a cluster-pair reduction spreads its pairwise evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    Sequential,
    Parallel,
    /// Parallel once the number of building pairs reaches
    /// [`ReductionOptions::parallel_min_pairs`].
    #[default]
    Auto,
}

impl std::str::FromStr for Parallelism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Parallelism::Sequential),
            "parallel" => Ok(Parallelism::Parallel),
            "auto" => Ok(Parallelism::Auto),
            other => Err(format!("unknown parallelism: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReductionOptions {
    pub parallelism: Parallelism,
    /// Pair count at which `Parallelism::Auto` switches to the rayon pool.
    pub parallel_min_pairs: usize,
}

impl Default for ReductionOptions {
    fn default() -> Self {
        Self {
            parallelism: Parallelism::Auto,
            parallel_min_pairs: 4096,
        }
    }
}

impl ReductionOptions {
    pub fn sequential() -> Self {
        Self {
            parallelism: Parallelism::Sequential,
            ..Default::default()
        }
    }

    pub fn parallel() -> Self {
        Self {
            parallelism: Parallelism::Parallel,
            ..Default::default()
        }
    }

    /// Defaults, overridden by `SITEFORCE_PARALLELISM` (`sequential|parallel|auto`) and
    /// `SITEFORCE_PARALLEL_MIN_PAIRS`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(p) = std::env::var("SITEFORCE_PARALLELISM")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            opts.parallelism = p;
        }
        if let Some(n) = std::env::var("SITEFORCE_PARALLEL_MIN_PAIRS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            opts.parallel_min_pairs = n;
        }
        opts
    }

    pub(crate) fn use_parallel(&self, pair_count: usize) -> bool {
        match self.parallelism {
            Parallelism::Sequential => false,
            Parallelism::Parallel => true,
            Parallelism::Auto => pair_count >= self.parallel_min_pairs,
        }
    }
}
