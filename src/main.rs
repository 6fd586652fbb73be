#[macro_use]
extern crate log;

use scene_mapper::{
    helpers::{build_config, Metronome, OrLog},
    *,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Turns at a configurable speed. Exposed through its member table rather than an extractor.
#[derive(Debug)]
struct Spinner {
    speed: f32,
    paused: bool,
    angle: f32,
}

impl Component for Spinner {
    fn members(&self) -> Vec<Member> {
        vec![
            Member::field("speed", |s: &Spinner| s.speed, |s, v| s.speed = v)
                .units("rpm")
                .bounds(0.0, 60.0)
                .enforce_bounds()
                .with_default(10.0f32),
            Member::field("paused", |s: &Spinner| s.paused, |s, v| s.paused = v),
            Member::field("angle", |s: &Spinner| s.angle, |s, v| s.angle = v).private(),
        ]
    }
}

fn add_lamp(scene: &mut Scene, device: &mut Device, name: &str, parent: ObjectKey) {
    let lamp = scene.add_object(name, Some(parent));
    let list = ComponentList::new(lamp)
        .with_component(into_component_ref(Transform::default()))
        .with_component(into_component_ref(Light::default()));
    device.add_component_list(list);
}

fn main() {
    env_logger::init();
    let conf = match build_config() {
        Ok(conf) => conf,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if conf.happy_exit {
        return;
    }

    let quit = Arc::new(AtomicBool::new(false));
    let quit_handler = quit.clone();
    ctrlc::set_handler(move || quit_handler.store(true, Ordering::SeqCst))
        .or_log_error("failed to install Ctrl+C handler");

    let mut scene = Scene::new();
    let room = scene.add_object("Room", None);
    let mut device = Device::new(conf.device, room);

    let spinner = into_component_ref(Spinner {
        speed: 10.0,
        paused: false,
        angle: 0.0,
    });
    add_lamp(&mut scene, &mut device, "Lamp.001", room);
    add_lamp(&mut scene, &mut device, "Lamp.002", room);
    let camera = scene.add_object("Camera", Some(room));
    device.add_component_list(
        ComponentList::new(camera)
            .with_component(into_component_ref(Camera::default()))
            .with_direction(SignalDirection::ReadOnly),
    );

    let network = LoopbackNetwork::new();
    if let Err(e) = device.start(&network, |device| {
        device.add_component(spinner.clone())
    }) {
        error!("failed to start device: {}", e);
        std::process::exit(1);
    }

    let mut metronome = Metronome::new(conf.tick_rate, conf.min_sleep);
    info!("ticking at {} per second", conf.tick_rate);
    while !quit.load(Ordering::SeqCst) {
        if let Some(max) = conf.max_session_time {
            if metronome.elapsed() > max {
                info!("max session time reached");
                break;
            }
        }
        {
            let mut guard = spinner.write().expect("failed to lock spinner");
            if let Ok(spinner) = downcast_component_mut::<Spinner>(&mut *guard) {
                if !spinner.paused {
                    let degrees = spinner.speed * 6.0 * metronome.period().as_secs_f32();
                    spinner.angle = (spinner.angle + degrees) % 360.0;
                }
            }
        }
        device.tick(&scene).or_log_error("tick failed");
        metronome.wait();
    }
    info!(
        "exiting after {} ticks, {} signals on the network",
        metronome.ticks(),
        network.signal_names().len()
    );
}
