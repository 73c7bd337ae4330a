//! Orientation classification for media files.
//!
//! Maps probed dimensions to the label stored in the manifest:
//!
//! - **landscape**: wider than tall
//! - **portrait**: taller than wide
//! - **square**: equal sides, routed through [`SquarePolicy`]
//! - **unknown**: dimensions could not be determined
//!
//! Square files are reported as portrait unless a different policy is
//! configured. The `square` label stays in [`Orientation`] so consumers can
//! match on it.

use mediacatalog_common::{Dimensions, Orientation, SquarePolicy};

/// Policy applied to files with equal width and height.
pub const DEFAULT_SQUARE_POLICY: SquarePolicy = SquarePolicy::Portrait;

/// Orientation classifier for media files.
#[derive(Debug, Clone, Copy)]
pub struct OrientationClassifier {
    square: SquarePolicy,
}

impl OrientationClassifier {
    /// Create a classifier with an explicit square policy.
    pub fn new(square: SquarePolicy) -> Self {
        Self { square }
    }

    /// The square policy in effect.
    pub fn square_policy(&self) -> SquarePolicy {
        self.square
    }

    /// Classify a file from its (possibly unknown) dimensions.
    pub fn classify(&self, dimensions: Option<Dimensions>) -> Orientation {
        let Some(Dimensions { width, height }) = dimensions else {
            return Orientation::Unknown;
        };

        match width.cmp(&height) {
            std::cmp::Ordering::Greater => Orientation::Landscape,
            std::cmp::Ordering::Less => Orientation::Portrait,
            std::cmp::Ordering::Equal => self.square.orientation(),
        }
    }
}

impl Default for OrientationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_SQUARE_POLICY)
    }
}

/// Classify with the default square policy.
pub fn classify(dimensions: Option<Dimensions>) -> Orientation {
    OrientationClassifier::default().classify(dimensions)
}
