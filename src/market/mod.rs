//! Shared probability math and weighted outcome sampling

pub mod odds;
pub mod sampler;

#[cfg(test)]
mod property_tests;

pub use odds::*;
pub use sampler::*;

/// A member of a weighted collection
///
/// Only strictly positive weights carry probability mass. Zero, negative and
/// NaN weights keep the member in its collection but exclude it from
/// sampling and normalization.
pub trait Weighted {
    fn weight(&self) -> f64;

    #[inline]
    fn is_active(&self) -> bool {
        self.weight() > 0.0
    }
}

impl Weighted for f64 {
    #[inline]
    fn weight(&self) -> f64 {
        *self
    }
}

impl<T: Weighted + ?Sized> Weighted for &T {
    #[inline]
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}
