//! Visual styling tables for markers and pipe lines

use serde::{Deserialize, Serialize};

use crate::models::{AssetStatus, AssetType};

/// Marker diameter in pixels
pub const MARKER_SIZE_PX: u32 = 28;

/// Status color, shared by markers and both pipe bands
pub fn status_color(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Active => "hsl(152, 60%, 42%)",
        AssetStatus::Faulty => "hsl(0, 72%, 55%)",
        AssetStatus::UnderMaintenance => "hsl(38, 92%, 50%)",
        AssetStatus::Inactive => "hsl(215, 12%, 45%)",
    }
}

/// Point marker style: status color disc with the type initial
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub initial: char,
}

pub fn marker_style(asset_type: AssetType, status: AssetStatus) -> MarkerStyle {
    MarkerStyle {
        color: status_color(status),
        initial: asset_type.marker_initial(),
    }
}

/// The two stacked bands every line asset renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBand {
    /// Wide translucent underlay
    Glow,
    /// Crisp interactive line on top
    Main,
}

/// Line rendering style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolylineStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f32,
    /// Dash pattern; `None` renders solid
    pub dash_array: Option<&'static str>,
    pub rounded_ends: bool,
}

/// Band style for a pipe. Transmission pipes are thick and solid,
/// distribution pipes thinner and dashed; hover emphasizes both bands.
pub fn polyline_style(
    asset_type: AssetType,
    status: AssetStatus,
    band: LineBand,
    hovered: bool,
) -> PolylineStyle {
    let transmission = asset_type == AssetType::TransmissionPipe;
    let weight = match (band, hovered) {
        (LineBand::Main, false) => {
            if transmission {
                4
            } else {
                3
            }
        }
        (LineBand::Main, true) => {
            if transmission {
                6
            } else {
                5
            }
        }
        (LineBand::Glow, false) => {
            if transmission {
                8
            } else {
                5
            }
        }
        (LineBand::Glow, true) => {
            if transmission {
                12
            } else {
                9
            }
        }
    };
    let opacity = match (band, hovered) {
        (LineBand::Main, false) => 0.85,
        (LineBand::Main, true) => 1.0,
        (LineBand::Glow, false) => 0.2,
        (LineBand::Glow, true) => 0.35,
    };
    PolylineStyle {
        color: status_color(status),
        weight,
        opacity,
        dash_array: match asset_type {
            AssetType::DistributionPipe => Some("8 6"),
            _ => None,
        },
        rounded_ends: band == LineBand::Main,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmission_is_thicker_and_solid() {
        let main = polyline_style(
            AssetType::TransmissionPipe,
            AssetStatus::Active,
            LineBand::Main,
            false,
        );
        let dist = polyline_style(
            AssetType::DistributionPipe,
            AssetStatus::Active,
            LineBand::Main,
            false,
        );
        assert!(main.weight > dist.weight);
        assert_eq!(main.dash_array, None);
        assert_eq!(dist.dash_array, Some("8 6"));
    }

    #[test]
    fn test_hover_emphasizes_both_bands() {
        for band in [LineBand::Glow, LineBand::Main] {
            let rest = polyline_style(
                AssetType::DistributionPipe,
                AssetStatus::Faulty,
                band,
                false,
            );
            let hover =
                polyline_style(AssetType::DistributionPipe, AssetStatus::Faulty, band, true);
            assert!(hover.weight > rest.weight);
            assert!(hover.opacity > rest.opacity);
            assert_eq!(hover.color, rest.color);
        }
    }

    #[test]
    fn test_bands_share_status_color() {
        let glow = polyline_style(
            AssetType::TransmissionPipe,
            AssetStatus::UnderMaintenance,
            LineBand::Glow,
            false,
        );
        assert_eq!(glow.color, status_color(AssetStatus::UnderMaintenance));
    }
}
