//! Scene graph trait and implementations
//!
//! A scene is an arena of nodes plus an ordered list of root children.
//! Attaching a node is the only mutation the light factories perform;
//! nothing here removes nodes.

use crate::debug::SpotLightHelper;
use crate::error::RigError;
use crate::foundation::collections::{NodeArena, NodeId};
use crate::lighting::{AimTarget, SpotLight};

/// Node stored in a scene
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    /// Positionable node a spotlight aims at
    AimTarget(AimTarget),
    /// Cone-shaped light source
    SpotLight(SpotLight),
    /// Debug overlay of a spotlight's cone
    SpotLightHelper(SpotLightHelper),
}

impl SceneNode {
    /// Human-readable kind, used in lookup errors
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AimTarget(_) => "aim target",
            Self::SpotLight(_) => "spot light",
            Self::SpotLightHelper(_) => "spot light helper",
        }
    }
}

macro_rules! typed_lookup {
    ($get:ident, $get_mut:ident, $variant:ident, $ty:ty, $label:literal) => {
        #[doc = concat!("Look up a node that must be a ", $label)]
        fn $get(&self, id: NodeId) -> Result<&$ty, RigError> {
            match self.get(id) {
                Some(SceneNode::$variant(node)) => Ok(node),
                Some(other) => Err(RigError::UnexpectedNode {
                    id,
                    expected: $label,
                    found: other.kind(),
                }),
                None => Err(RigError::MissingNode(id)),
            }
        }

        #[doc = concat!("Mutable lookup of a node that must be a ", $label)]
        fn $get_mut(&mut self, id: NodeId) -> Result<&mut $ty, RigError> {
            match self.get_mut(id) {
                Some(SceneNode::$variant(node)) => Ok(node),
                Some(other) => Err(RigError::UnexpectedNode {
                    id,
                    expected: $label,
                    found: other.kind(),
                }),
                None => Err(RigError::MissingNode(id)),
            }
        }
    };
}

/// Trait for scene containers the light factories attach to
///
/// Allows the factories to run against any container that can hand out
/// stable node keys and keep an ordered child list.
pub trait SceneGraph {
    /// Attach a node as a child of the scene root, returning its key
    fn add(&mut self, node: SceneNode) -> NodeId;

    /// Get a node by key
    fn get(&self, id: NodeId) -> Option<&SceneNode>;

    /// Get a node by key for mutation
    fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode>;

    /// Root children in attachment order
    fn children(&self) -> &[NodeId];

    /// Get the total number of nodes in the scene
    fn node_count(&self) -> usize;

    /// Clear all nodes from the scene
    fn clear(&mut self);

    /// Whether `id` is a child of this scene
    fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    typed_lookup!(spot_light, spot_light_mut, SpotLight, SpotLight, "spot light");
    typed_lookup!(aim_target, aim_target_mut, AimTarget, AimTarget, "aim target");
    typed_lookup!(helper, helper_mut, SpotLightHelper, SpotLightHelper, "spot light helper");
}

/// Arena-backed scene (no spatial structure, flat child list)
#[derive(Debug, Default)]
pub struct Scene {
    nodes: NodeArena<SceneNode>,
    children: Vec<NodeId>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over every spot light with its key, in attachment order
    pub fn spot_lights(&self) -> impl Iterator<Item = (NodeId, &SpotLight)> + '_ {
        self.children.iter().filter_map(|id| match self.nodes.get(*id) {
            Some(SceneNode::SpotLight(light)) => Some((*id, light)),
            _ => None,
        })
    }

    /// Iterate over every debug helper with its key, in attachment order
    pub fn helpers(&self) -> impl Iterator<Item = (NodeId, &SpotLightHelper)> + '_ {
        self.children.iter().filter_map(|id| match self.nodes.get(*id) {
            Some(SceneNode::SpotLightHelper(helper)) => Some((*id, helper)),
            _ => None,
        })
    }
}

impl SceneGraph for Scene {
    fn add(&mut self, node: SceneNode) -> NodeId {
        let id = self.nodes.insert(node);
        self.children.push(id);
        id
    }

    fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.children.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_add_keeps_attachment_order() {
        let mut scene = Scene::new();
        let a = scene.add(SceneNode::AimTarget(AimTarget::new(Vec3::zeros())));
        let b = scene.add(SceneNode::AimTarget(AimTarget::new(Vec3::x())));

        assert_eq!(scene.children(), &[a, b]);
        assert_eq!(scene.node_count(), 2);
        assert!(scene.contains(a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_typed_lookup_errors() {
        let mut scene = Scene::new();
        let target = scene.add(SceneNode::AimTarget(AimTarget::new(Vec3::y())));

        assert_eq!(scene.aim_target(target).unwrap().position, Vec3::y());
        assert!(matches!(
            scene.spot_light(target),
            Err(RigError::UnexpectedNode { expected: "spot light", found: "aim target", .. })
        ));

        scene.clear();
        assert_eq!(scene.node_count(), 0);
        assert!(scene.children().is_empty());
        assert!(matches!(scene.aim_target(target), Err(RigError::MissingNode(id)) if id == target));
    }

    #[test]
    fn test_aim_target_mut_moves_node() {
        let mut scene = Scene::new();
        let target = scene.add(SceneNode::AimTarget(AimTarget::new(Vec3::zeros())));

        scene.aim_target_mut(target).unwrap().position = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(scene.aim_target(target).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
    }
}
