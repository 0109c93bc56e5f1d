//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent across the wasm boundary.
//! The canvas places sun sprites by their top-left corner and contact nodes
//! by their center, so the conversion from layout centers happens here.

use std::collections::HashMap;

use serde::Serialize;

use crate::contact::Contact;
use crate::layout::{LayoutConfig, SolarLayout};

/// A cluster sun ready for the canvas to draw.
#[derive(Debug, Clone, Serialize)]
pub struct SunOutput {
    pub tag: String,
    pub contact_count: usize,
    /// Sprite diameter, from the same footprint function the spacing uses.
    pub size: f64,
    /// Top-left corner: the sun center shifted by half the sprite size.
    pub x: f64,
    pub y: f64,
}

/// A positioned contact node (center coordinates).
#[derive(Debug, Clone, Serialize)]
pub struct ContactOutput {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Error information surfaced to the frontend when boundary input is bad.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub line: usize,   // 1-based line number
    pub column: usize, // 1-based column number
}

/// The combined output sent to React.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suns: Vec<SunOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<ContactOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl LayoutOutput {
    /// Build the render payload from a computed layout.
    ///
    /// Suns come out in first-encounter order of their tag and contacts in
    /// input order, so the payload is deterministic for a given input.
    pub fn from_layout(contacts: &[Contact], layout: &SolarLayout, cfg: &LayoutConfig) -> Self {
        // Tally members per primary tag, keeping encounter order.
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index_of: HashMap<&str, usize> = HashMap::new();
        for contact in contacts {
            if let Some(tag) = contact.primary_tag() {
                let idx = *index_of.entry(tag).or_insert_with(|| {
                    counts.push((tag.to_string(), 0));
                    counts.len() - 1
                });
                counts[idx].1 += 1;
            }
        }

        let suns = counts
            .into_iter()
            .filter_map(|(tag, count)| {
                let center = layout.sun_positions.get(&tag).copied()?;
                let size = cfg.sun_size(count);
                Some(SunOutput {
                    x: center.x - size / 2.0,
                    y: center.y - size / 2.0,
                    tag,
                    contact_count: count,
                    size,
                })
            })
            .collect();

        let contacts = contacts
            .iter()
            .filter_map(|c| {
                let p = layout.contact_positions.get(&c.id).copied()?;
                Some(ContactOutput {
                    id: c.id.clone(),
                    x: p.x,
                    y: p.y,
                })
            })
            .collect();

        Self {
            suns,
            contacts,
            error: None,
        }
    }

    /// Error payload for boundary input that failed to parse.
    pub fn from_parse_error(e: &serde_json::Error) -> Self {
        Self {
            suns: vec![],
            contacts: vec![],
            error: Some(ErrorInfo {
                message: e.to_string(),
                line: e.line(),
                column: e.column(),
            }),
        }
    }
}
