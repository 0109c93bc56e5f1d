//! WASM bindings for the orbital-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use serde_json::to_string;
use wasm_bindgen::prelude::*;

use crate::contact::Contact;
use crate::layout::{LayoutConfig, compute_solar_layout};
use crate::output::LayoutOutput;

#[wasm_bindgen]
extern "C" {
    pub fn alert(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Compute the solar layout for a JSON array of contacts
/// (`[{ "id": "...", "categoryTags": ["...", ...] }, ...]`).
/// Returns a `LayoutOutput` JSON string; malformed input yields an error
/// payload instead of a panic across the boundary.
#[wasm_bindgen]
pub fn compute_layout(contacts_json: &str) -> String {
    let contacts: Vec<Contact> = match serde_json::from_str(contacts_json) {
        Ok(contacts) => contacts,
        Err(e) => {
            console_error(&format!("Error parsing contacts: {:?}", e));
            return to_string(&LayoutOutput::from_parse_error(&e)).unwrap();
        }
    };

    let cfg = LayoutConfig::default();
    let layout = compute_solar_layout(&contacts, &cfg);
    let output = LayoutOutput::from_layout(&contacts, &layout, &cfg);
    to_string(&output).unwrap()
}

/// Sun sprite diameter for a cluster of `contact_count` members.
/// Exposed so the frontend sizes sprites with the same footprint the
/// spacing math is built on.
#[wasm_bindgen]
pub fn sun_display_size(contact_count: usize) -> f64 {
    LayoutConfig::default().sun_size(contact_count)
}
