use super::*;

/// These entries will be applied in order of returned vec (NOT in the order the user specifies the
/// entry). All entries will always be applied.
pub fn config_entries() -> Vec<Box<dyn ConfigEntry>> {
    vec![
        <dyn ConfigEntry>::new(
            "device_name",
            "name of the session other peers on the mapping graph see",
            "scene_mapper".to_string(),
            |conf, name: String, source| {
                if name.is_empty() || name.contains(char::is_whitespace) {
                    Err(format!(
                        "{} should be a non-empty name without spaces",
                        source.unwrap_or("default")
                    )
                    .into())
                } else {
                    conf.device.name = name;
                    Ok(())
                }
            },
        ),
        <dyn ConfigEntry>::new(
            "tick_rate",
            "synchronization ticks per second",
            50.0,
            |conf, rate: f64, source| {
                if rate > 0.0 {
                    conf.tick_rate = rate;
                    Ok(())
                } else {
                    Err(format!("{} should be positive", source.unwrap_or("default")).into())
                }
            },
        ),
        <dyn ConfigEntry>::new(
            "min_sleep",
            concat!(
                "seconds to always sleep between ticks, even if the tick ran long, so peers get a ",
                "chance to respond"
            ),
            0.0,
            |conf, seconds: f64, source| {
                if seconds >= 0.0 {
                    conf.min_sleep = seconds;
                    Ok(())
                } else {
                    Err(format!("{} should not be negative", source.unwrap_or("default")).into())
                }
            },
        ),
        <dyn ConfigEntry>::new(
            "poll_time_ms",
            "milliseconds a background poll of the transport may block for",
            1i64,
            |conf, millis: i64, source| {
                if millis >= 0 {
                    conf.device.poll_time = Duration::from_millis(millis as u64);
                    Ok(())
                } else {
                    Err(format!("{} should not be negative", source.unwrap_or("default")).into())
                }
            },
        ),
        <dyn ConfigEntry>::new_enum(
            "polling",
            "how the transport is advanced each tick",
            vec![
                <dyn ConfigEntry>::new_enum_variant(
                    "background",
                    "poll on a worker thread between ticks, joined at the start of the next tick",
                    |conf| conf.device.polling = PollingMode::Background,
                ),
                <dyn ConfigEntry>::new_enum_variant(
                    "immediate",
                    "non-blocking poll at the start of every tick",
                    |conf| conf.device.polling = PollingMode::Immediate,
                ),
            ],
        ),
        <dyn ConfigEntry>::new(
            "use_api",
            concat!(
                "keep registration open after start until freeze() is called, instead of freezing ",
                "automatically"
            ),
            false,
            |conf, use_api: bool, _| {
                conf.device.use_api = use_api;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new(
            "max_session_seconds",
            "seconds to run before exiting, or 0 to run until interrupted",
            0.0,
            |conf, time: f64, source| {
                if time > 0.0 {
                    conf.max_session_time = Some(Duration::from_secs_f64(time));
                    Ok(())
                } else if time == 0.0 {
                    conf.max_session_time = None;
                    Ok(())
                } else {
                    Err(format!("{} should not be negative", source.unwrap_or("default")).into())
                }
            },
        ),
        <dyn ConfigEntry>::new(
            "help",
            "show this help and exit",
            false,
            |conf, help: bool, _| {
                conf.happy_exit = help;
                Ok(())
            },
        ),
    ]
}
