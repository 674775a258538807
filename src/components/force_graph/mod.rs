//! Force-directed network chart: deterministic seeding, link resolution,
//! a fixed-iteration force simulation and a canvas view with drag support.

mod component;
mod config;
mod error;
mod interaction;
mod layout;
mod render;
mod resolve;
mod seed;
mod simulation;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use config::LayoutConfig;
pub use error::LayoutError;
pub use interaction::{DragController, NodeState};
pub use layout::{Layout, NodeInfo, build_layout};
pub use render::{CirclePrimitive, LinePrimitive, Scene, scene};
pub use resolve::ResolvedLink;
pub use simulation::{SimNode, Simulation};
pub use state::ForceGraphState;
pub use types::{GraphData, GraphLink, GraphNode, LinkEndpoint, NodeIdx, Point};
