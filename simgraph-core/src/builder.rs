//! Builder utilities for configuring multi-group generation.
//!
//! Collects the group layout, per-group completion and inter-group edge bound,
//! validates them together, and produces a [`GroupsGraphConfig`] that can be
//! run repeatedly against different random sources.

use std::num::NonZeroUsize;

use crate::{
    error::{GenerationError, Result},
    generators::{DEFAULT_COMPLETION, GroupCompletion, GroupsGraph, compose_groups},
    primitives::validate_probability,
    random::RandomSource,
};

/// Configures and validates [`GroupsGraphConfig`] instances.
///
/// # Examples
/// ```
/// use simgraph_core::{GroupsGraphBuilder, seeded_rng};
///
/// let config = GroupsGraphBuilder::new()
///     .with_group_size(5)
///     .with_group_size(8)
///     .with_completion(0.4)
///     .with_max_connections(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(config.node_count(), 13);
///
/// let result = config.generate(&mut seeded_rng(1)).expect("generation succeeds");
/// assert_eq!(result.groups().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GroupsGraphBuilder {
    group_sizes: Vec<usize>,
    completion: GroupCompletion,
    max_connections: usize,
}

impl Default for GroupsGraphBuilder {
    fn default() -> Self {
        Self {
            group_sizes: Vec::new(),
            completion: GroupCompletion::Uniform(DEFAULT_COMPLETION),
            max_connections: 1,
        }
    }
}

impl GroupsGraphBuilder {
    /// Creates a builder with no groups, completion `0.5` and one connection
    /// per group pair.
    ///
    /// # Examples
    /// ```
    /// use simgraph_core::{GroupCompletion, GroupsGraphBuilder};
    ///
    /// let builder = GroupsGraphBuilder::new();
    /// assert!(builder.group_sizes().is_empty());
    /// assert_eq!(builder.completion(), &GroupCompletion::Uniform(0.5));
    /// assert_eq!(builder.max_connections(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the group sizes.
    #[must_use]
    pub fn with_group_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.group_sizes = sizes.into();
        self
    }

    /// Appends one group of `size` nodes.
    #[must_use]
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_sizes.push(size);
        self
    }

    /// Returns the configured group sizes.
    #[must_use]
    pub fn group_sizes(&self) -> &[usize] {
        &self.group_sizes
    }

    /// Sets the edge probability, either shared or per group.
    ///
    /// # Examples
    /// ```
    /// use simgraph_core::{GroupCompletion, GroupsGraphBuilder};
    ///
    /// let builder = GroupsGraphBuilder::new().with_completion(vec![0.2, 0.9]);
    /// assert_eq!(builder.completion(), &GroupCompletion::PerGroup(vec![0.2, 0.9]));
    /// ```
    #[must_use]
    pub fn with_completion(mut self, completion: impl Into<GroupCompletion>) -> Self {
        self.completion = completion.into();
        self
    }

    /// Returns the configured completion.
    #[must_use]
    pub fn completion(&self) -> &GroupCompletion {
        &self.completion
    }

    /// Sets the upper bound on edges drawn between each pair of groups.
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Returns the configured inter-group edge bound.
    #[must_use]
    pub fn max_connections(&self) -> usize {
        self.max_connections
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`GenerationError::Configuration`] when a per-group completion
    /// list does not match the number of groups, and
    /// [`GenerationError::InvalidParameter`] for a zero group size, a
    /// completion outside `[0, 1]`, or a zero `max_connections`.
    ///
    /// # Examples
    /// ```
    /// use simgraph_core::{GenerationError, GroupsGraphBuilder};
    ///
    /// let err = GroupsGraphBuilder::new()
    ///     .with_group_sizes([10, 20])
    ///     .with_completion([0.5, 0.5, 0.5])
    ///     .build()
    ///     .expect_err("three completions for two groups must fail");
    /// assert_eq!(err, GenerationError::Configuration { group_sizes: 2, completions: 3 });
    /// ```
    pub fn build(self) -> Result<GroupsGraphConfig> {
        let completions = self.completion.resolve(self.group_sizes.len())?;
        for &completion in &completions {
            validate_probability("group_completion", completion)?;
        }
        let group_sizes = self
            .group_sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| {
                NonZeroUsize::new(size).ok_or_else(|| {
                    GenerationError::invalid("group_sizes", format!("group {index} has size 0"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let max_connections = NonZeroUsize::new(self.max_connections).ok_or_else(|| {
            GenerationError::invalid("max_connections", "must be at least 1 (got 0)")
        })?;

        Ok(GroupsGraphConfig {
            group_sizes,
            completions,
            max_connections,
        })
    }
}

/// Validated parameters for multi-group generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupsGraphConfig {
    group_sizes: Vec<NonZeroUsize>,
    completions: Vec<f64>,
    max_connections: NonZeroUsize,
}

impl GroupsGraphConfig {
    /// Group sizes in generation order.
    #[must_use]
    pub fn group_sizes(&self) -> &[NonZeroUsize] {
        &self.group_sizes
    }

    /// One completion probability per group.
    #[must_use]
    pub fn completions(&self) -> &[f64] {
        &self.completions
    }

    /// Upper bound on edges drawn between each pair of groups.
    #[must_use]
    pub fn max_connections(&self) -> NonZeroUsize {
        self.max_connections
    }

    /// Total node count of the generated graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.group_sizes.iter().map(|size| size.get()).sum()
    }

    /// Generates a graph for this configuration.
    ///
    /// # Errors
    /// Only graph-structure failures can surface here; parameters were checked
    /// by [`GroupsGraphBuilder::build`].
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Result<GroupsGraph> {
        let sizes: Vec<usize> = self.group_sizes.iter().map(|size| size.get()).collect();
        compose_groups(rng, &sizes, &self.completions, self.max_connections.get())
    }
}
