use super::*;

use std::{
    sync::mpsc::{
        channel,
        RecvTimeoutError::{Disconnected, Timeout},
    },
    thread,
};

mod mock_components;
mod mock_filesystem;
mod mock_property;
mod run_with_timeout;

pub use mock_components::*;
pub use mock_filesystem::*;
pub use mock_property::*;
pub use run_with_timeout::*;
