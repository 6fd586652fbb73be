use super::*;

/// A component with one member of every kind generic extraction cares about
#[derive(Debug, Clone)]
pub struct MockLamp {
    pub brightness: f32,
    pub tint: ColorRGBA,
    pub on: bool,
    /// No converter exists for strings, so this is always skipped
    pub label: String,
    pub hidden_level: f32,
    pub dimmer: f32,
    pub debug_level: f32,
}

impl Default for MockLamp {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            tint: ColorRGBA::default(),
            on: true,
            label: "lamp".to_string(),
            hidden_level: 0.0,
            dimmer: 0.0,
            debug_level: 0.0,
        }
    }
}

impl Component for MockLamp {
    fn members(&self) -> Vec<Member> {
        vec![
            Member::field(
                "brightness",
                |l: &MockLamp| l.brightness,
                |l, v| l.brightness = v,
            ),
            Member::field("tint", |l: &MockLamp| l.tint, |l, v| l.tint = v),
            Member::field("on", |l: &MockLamp| l.on, |l, v| l.on = v),
            Member::field("label", |l: &MockLamp| l.label.clone(), |l, v| l.label = v),
            Member::field(
                "hidden_level",
                |l: &MockLamp| l.hidden_level,
                |l, v| l.hidden_level = v,
            )
            .private(),
            Member::field("secret_dimmer", |l: &MockLamp| l.dimmer, |l, v| l.dimmer = v)
                .private()
                .exposed(),
            Member::field(
                "debug_level",
                |l: &MockLamp| l.debug_level,
                |l, v| l.debug_level = v,
            )
            .ignored(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct MockDial {
    pub level: f32,
    pub offsets: Vec<f32>,
}

impl Default for MockDial {
    fn default() -> Self {
        Self {
            level: 0.0,
            offsets: vec![0.0, 0.0],
        }
    }
}

impl Component for MockDial {
    fn members(&self) -> Vec<Member> {
        vec![
            Member::field("level", |d: &MockDial| d.level, |d, v| d.level = v)
                .bounds(0.0, 1.0),
            Member::field(
                "offsets",
                |d: &MockDial| d.offsets.clone(),
                |d, v| d.offsets = v,
            )
            .vector_length(2),
        ]
    }
}

pub fn read_component<T: Component, R>(component: &ComponentRef, f: impl FnOnce(&T) -> R) -> R {
    let guard = component.read().expect("failed to lock component");
    f(downcast_component::<T>(&*guard).expect("component has unexpected type"))
}

pub fn write_component<T: Component, R>(
    component: &ComponentRef,
    f: impl FnOnce(&mut T) -> R,
) -> R {
    let mut guard = component.write().expect("failed to lock component");
    f(downcast_component_mut::<T>(&mut *guard).expect("component has unexpected type"))
}
