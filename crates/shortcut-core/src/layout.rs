//! Form layout orientation.
//!
//! Presentation-only: in a landscape window the preview sits beside the form
//! inputs, in a portrait window it goes underneath them.

use crate::config::LayoutConfig;
use serde::{Deserialize, Serialize};

/// Direction the form and preview are stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Pick an orientation for a window client area.
    pub fn for_client_size(width: f64, height: f64) -> Self {
        let effective_width = width - width * LayoutConfig::LANDSCAPE_WIDTH_DISCOUNT;
        if effective_width > height {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}
