//! Visual attributes of class-relationship edges.
//!
//! Class and use-case diagrams distinguish their relationships (dependency,
//! inheritance, aggregation, «extend», ...) purely by these attributes, so
//! they take part in edge compatibility checks.

use std::{fmt, str::FromStr};

use crate::error::ParseVariantError;

/// Stroke pattern of a relationship line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
}

impl FromStr for LineStyle {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dotted" => Ok(Self::Dotted),
            _ => Err(ParseVariantError::new("line style", s)),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dotted => write!(f, "dotted"),
        }
    }
}

/// Marker drawn at one end of a relationship line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowHead {
    #[default]
    None,
    Triangle,
    V,
    HalfV,
    Diamond,
    BlackDiamond,
}

impl FromStr for ArrowHead {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "triangle" => Ok(Self::Triangle),
            "v" => Ok(Self::V),
            "half_v" => Ok(Self::HalfV),
            "diamond" => Ok(Self::Diamond),
            "black_diamond" => Ok(Self::BlackDiamond),
            _ => Err(ParseVariantError::new("arrow head", s)),
        }
    }
}

impl fmt::Display for ArrowHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Triangle => "triangle",
            Self::V => "v",
            Self::HalfV => "half_v",
            Self::Diamond => "diamond",
            Self::BlackDiamond => "black_diamond",
        };
        write!(f, "{s}")
    }
}

/// Routing of a relationship line between its endpoints.
///
/// `HV` bends once (horizontal then vertical), `HVH` bends twice, and so on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BentStyle {
    #[default]
    Straight,
    HV,
    VH,
    HVH,
    VHV,
}

impl FromStr for BentStyle {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "hv" => Ok(Self::HV),
            "vh" => Ok(Self::VH),
            "hvh" => Ok(Self::HVH),
            "vhv" => Ok(Self::VHV),
            _ => Err(ParseVariantError::new("bent style", s)),
        }
    }
}

impl fmt::Display for BentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Straight => "straight",
            Self::HV => "hv",
            Self::VH => "vh",
            Self::HVH => "hvh",
            Self::VHV => "vhv",
        };
        write!(f, "{s}")
    }
}
