use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stellar_color::StellarColor;

/// Harvard spectral classes used to color galaxy stars.
///
/// Declaration order (hottest to coolest) is significant: classification
/// accumulates weights in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    /// All classes in declaration order
    pub const ALL: [SpectralType; 7] = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
    ];

    /// Position of this class in [`SpectralType::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display color of the class as a packed 0xRRGGBB value
    pub fn packed_color(self) -> u32 {
        match self {
            SpectralType::O => 0x5D99E1, // Blue
            SpectralType::B => 0xA8C0E8, // Light blue
            SpectralType::A => 0xFFFFFF, // White
            SpectralType::F => 0xFFD700, // Gold
            SpectralType::G => 0xFFFACD, // Light yellow
            SpectralType::K => 0xFF8C00, // Orange
            SpectralType::M => 0xFF4500, // Red
        }
    }

    /// Display color of the class
    pub fn color(self) -> StellarColor {
        StellarColor::from_packed(self.packed_color())
    }

    /// Default selection weight of the class.
    ///
    /// The table is skewed towards warm colors and sums to 1.18, so the
    /// cumulative weight passes 1.0 before `M` is reached.
    pub fn default_weight(self) -> f64 {
        match self {
            SpectralType::O => 0.01,
            SpectralType::B => 0.02,
            SpectralType::A => 0.20,
            SpectralType::F => 0.35,
            SpectralType::G => 0.25,
            SpectralType::K => 0.20,
            SpectralType::M => 0.15,
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}
