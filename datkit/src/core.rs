use datkit_types::{Bounds, DatkitConfig, DatkitError};

/// Time-series analyser that applies a fixed set of defaults to every call.
///
/// A `Datkit` is immutable once built and can be shared freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Datkit {
    pub(crate) cfg: DatkitConfig,
}

/// Builder for constructing a `Datkit` analyser with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct DatkitBuilder {
    cfg: DatkitConfig,
}

impl DatkitBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: `ttol = 1e-9`, half-open `[t0, t1)` bounds, and a relative
    /// regularity tolerance of `1e-6`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: DatkitConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one loaded from JSON.
    ///
    /// Later builder calls still override individual fields.
    #[must_use]
    pub const fn config(mut self, cfg: DatkitConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the tolerance used when matching query times to sample times.
    ///
    /// Behavior and trade-offs:
    /// - Applies to `locate`, `locate_range`, `value_at` and `mean_around`.
    /// - A larger tolerance accepts noisier timestamps but may match a sample
    ///   that is not the one intended when it approaches half the sampling
    ///   interval.
    #[must_use]
    pub const fn ttol(mut self, ttol: f64) -> Self {
        self.cfg.ttol = ttol;
        self
    }

    /// Set the default interval bounds for selections and aggregates.
    #[must_use]
    pub const fn bounds(mut self, bounds: Bounds) -> Self {
        self.cfg.bounds = bounds;
        self
    }

    /// Include or exclude a sample lying exactly at the interval start.
    #[must_use]
    pub const fn include_left(mut self, include: bool) -> Self {
        self.cfg.bounds = self.cfg.bounds.with_left(include);
        self
    }

    /// Include or exclude a sample lying exactly at the interval end.
    #[must_use]
    pub const fn include_right(mut self, include: bool) -> Self {
        self.cfg.bounds = self.cfg.bounds.with_right(include);
        self
    }

    /// Set the relative tolerance used by `is_regularly_increasing`.
    #[must_use]
    pub const fn regularity_rtol(mut self, rtol: f64) -> Self {
        self.cfg.regularity_rtol = rtol;
        self
    }

    /// Build the `Datkit` analyser.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either tolerance is negative or not finite.
    pub fn build(self) -> Result<Datkit, DatkitError> {
        self.cfg.validate()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "datkit::core",
            ttol = self.cfg.ttol,
            include_left = self.cfg.bounds.include_left,
            include_right = self.cfg.bounds.include_right,
            regularity_rtol = self.cfg.regularity_rtol,
            "built analyser"
        );
        Ok(Datkit { cfg: self.cfg })
    }
}

impl Datkit {
    /// Analyser with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a new `Datkit` instance.
    ///
    /// ```
    /// use datkit::{Bounds, Datkit};
    ///
    /// let dk = Datkit::builder()
    ///     .ttol(1e-6)
    ///     .bounds(Bounds::CLOSED)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(dk.config().ttol, 1e-6);
    /// ```
    #[must_use]
    pub fn builder() -> DatkitBuilder {
        DatkitBuilder::new()
    }

    /// The configuration this analyser applies.
    #[must_use]
    pub const fn config(&self) -> &DatkitConfig {
        &self.cfg
    }
}
