//! Exposes live properties of scene objects as instanced network signals and keeps them in sync
//! with a distributed mapping graph, one tick at a time.

#[macro_use(new_key_type)]
extern crate slotmap;
#[macro_use]
extern crate log;

mod builtin;
mod convert;
mod device;
mod extract;
pub mod helpers;
mod mapper_error;
mod property;
mod scene;
mod signal;
mod transport;
mod value;

pub use builtin::*;
pub use convert::*;
pub use device::{Device, DeviceConfig, PollingMode};
pub use extract::*;
pub use mapper_error::{MapperError, MapperResult};
pub use property::*;
pub use scene::*;
pub use signal::*;
pub use transport::*;
pub use value::*;

use helpers::*;

use cgmath::{Deg, Euler, Quaternion, Rad, Vector2, Vector3};
use slotmap::SlotMap;
use std::{
    any::{type_name, Any, TypeId},
    collections::{BTreeMap, HashMap},
    error::Error,
    fmt::{self, Debug},
    sync::{Arc, Mutex, RwLock},
    time::Duration,
};
