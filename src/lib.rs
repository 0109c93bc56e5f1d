//! Orbital layout core.
//!
//! Deterministic "solar" mind-map layout for contacts: one sun per primary
//! tag on an outer ring, cluster members on per-cluster orbits, untagged
//! contacts on a fallback grid below. Compiled to WebAssembly and consumed
//! by the React canvas through the functions in [`wasm`].

pub mod contact;
pub mod layout;
pub mod output;
pub mod wasm;

pub use contact::Contact;
pub use layout::{LayoutConfig, Point, SolarLayout, compute_solar_layout, orbit_radius};
pub use output::{ContactOutput, ErrorInfo, LayoutOutput, SunOutput};
