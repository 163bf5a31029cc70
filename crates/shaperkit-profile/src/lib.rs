//! # ShaperKit Profile
//!
//! This crate turns the raw boundary data of a planar face into ordered,
//! classified cut profiles ready for emission:
//!
//! - **element** - the `PathElement` model (line segments and elliptical
//!   arcs) with reversal-aware endpoints
//! - **order** - boundary reordering into a single consistently-chained
//!   closed cycle
//! - **arc** - canonical SVG arc parameters (radii, rotation, sweep,
//!   large-arc splitting) from a general ellipse definition
//! - **classify** - loop roles (outer/inner/pocket/guide) and their fixed
//!   rendering attributes
//! - **layout** - greedy shelf packing of face bounding boxes onto sheets
//! - **face** - the face/job input model consumed from collaborators

pub mod arc;
pub mod classify;
pub mod element;
pub mod face;
pub mod layout;
pub mod order;

pub use arc::ArcParameters;
pub use classify::{LoopAttributes, LoopRole};
pub use element::{ArcElement, PathElement, Segment};
pub use face::{loop_bounds, FaceMaterial, FaceProfile, ProfileJob};
pub use layout::{Placement, ShelfPacker};
pub use order::{reorder, OrderedLoop};
