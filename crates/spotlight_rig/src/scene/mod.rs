//! Scene management
//!
//! The scene is the mutable container both light factories attach to. It is
//! always passed explicitly as `&mut`; there is no global scene.

mod scene_graph;

pub use scene_graph::{Scene, SceneGraph, SceneNode};
