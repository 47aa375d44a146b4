//! Composable recipes.
//!
//! A recipe is either a direct function of the design-system parameters, or a
//! composition that first resolves an upstream color recipe and then derives
//! its own value from that color. Composition is how a foreground recipe is
//! evaluated against a background that is itself computed.

use std::fmt;
use std::sync::Arc;

use swatch_core::Color;

use crate::params::DesignSystemParams;

/// A resolver from parameters to a value.
pub type Resolver<T> = Arc<dyn Fn(&DesignSystemParams) -> T + Send + Sync>;

/// A step applied to an upstream color.
pub type Transform<T> = Arc<dyn Fn(Color, &DesignSystemParams) -> T + Send + Sync>;

pub enum Recipe<T> {
    /// `params -> value`
    Direct(Resolver<T>),
    /// `params -> upstream color -> value`
    Composed {
        upstream: Box<Recipe<Color>>,
        apply: Transform<T>,
    },
}

impl<T> Recipe<T> {
    pub fn direct<F>(f: F) -> Self
    where
        F: Fn(&DesignSystemParams) -> T + Send + Sync + 'static,
    {
        Recipe::Direct(Arc::new(f))
    }

    pub fn composed<F>(upstream: Recipe<Color>, apply: F) -> Self
    where
        F: Fn(Color, &DesignSystemParams) -> T + Send + Sync + 'static,
    {
        Recipe::Composed {
            upstream: Box::new(upstream),
            apply: Arc::new(apply),
        }
    }

    /// Evaluate against a parameter set.
    pub fn resolve(&self, params: &DesignSystemParams) -> T {
        match self {
            Recipe::Direct(resolver) => resolver(params),
            Recipe::Composed { upstream, apply } => apply(upstream.resolve(params), params),
        }
    }

    /// Number of recipes chained to produce this value, counting this one.
    pub fn depth(&self) -> usize {
        match self {
            Recipe::Direct(_) => 1,
            Recipe::Composed { upstream, .. } => 1 + upstream.depth(),
        }
    }
}

impl<T> Clone for Recipe<T> {
    fn clone(&self) -> Self {
        match self {
            Recipe::Direct(resolver) => Recipe::Direct(Arc::clone(resolver)),
            Recipe::Composed { upstream, apply } => Recipe::Composed {
                upstream: upstream.clone(),
                apply: Arc::clone(apply),
            },
        }
    }
}

impl<T> fmt::Debug for Recipe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipe::Direct(_) => f.write_str("Recipe::Direct"),
            Recipe::Composed { upstream, .. } => {
                f.debug_struct("Recipe::Composed").field("upstream", upstream).finish()
            }
        }
    }
}
