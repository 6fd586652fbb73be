//! A minimal stand-in for the host's scene graph: named objects in a hierarchy, the components
//! attached to them and the discovery lists that say which components to expose

use super::*;

mod component;
mod component_list;
#[allow(clippy::module_inception)]
mod scene;

pub use component::{
    downcast_component, downcast_component_mut, into_component_ref, AsAny, Component,
    ComponentRef,
};
pub use component_list::{ComponentList, ListKey};
pub use scene::{ObjectKey, Scene, SceneObject};
