//! Fixed-length weight vectors.
//!
//! A [`Weights`] value holds exactly one weight per [`BoardFeature`], in
//! [`BoardFeature::ALL`] order. Slices of any other length are rejected with
//! [`InvalidWeightsError`] at construction time.

use std::ops::Index;

use crate::board_feature::BoardFeature;

/// A weight vector was built from the wrong number of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected {} weights, found {len}", BoardFeature::COUNT)]
pub struct InvalidWeightsError {
    pub len: usize,
}

/// One weight per board feature.
///
/// ```
/// use tactoe_evaluator::{board_feature::BoardFeature, weights::Weights};
///
/// let weights = Weights::try_from(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0][..])?;
/// assert_eq!(weights[BoardFeature::WinningLineCount], 4.0);
///
/// assert!(Weights::try_from(&[1.0, 2.0][..]).is_err());
/// # Ok::<(), tactoe_evaluator::weights::InvalidWeightsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Weights([f32; BoardFeature::COUNT]);

impl Weights {
    pub const ZERO: Self = Self([0.0; BoardFeature::COUNT]);

    #[must_use]
    pub const fn from_array(values: [f32; BoardFeature::COUNT]) -> Self {
        Self(values)
    }

    /// Builds a weight vector by computing each weight from its index.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self(std::array::from_fn(f))
    }

    #[must_use]
    pub fn as_array(&self) -> &[f32; BoardFeature::COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().copied()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f32> {
        self.0.iter_mut()
    }

    /// Pairs each weight with its feature.
    pub fn features(&self) -> impl Iterator<Item = (BoardFeature, f32)> + '_ {
        BoardFeature::ALL.into_iter().zip(self.iter())
    }

    /// Returns every weight multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self(self.0.map(|w| w * factor))
    }
}

impl Index<BoardFeature> for Weights {
    type Output = f32;

    fn index(&self, feature: BoardFeature) -> &f32 {
        &self.0[feature.index()]
    }
}

impl TryFrom<&[f32]> for Weights {
    type Error = InvalidWeightsError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        values
            .try_into()
            .map(Self)
            .map_err(|_| InvalidWeightsError { len: values.len() })
    }
}

impl TryFrom<Vec<f32>> for Weights {
    type Error = InvalidWeightsError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}
