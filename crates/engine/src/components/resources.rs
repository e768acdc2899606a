use crate::prelude::*;

use std::time::Duration;

/// Frame delta, refreshed by the layer before its schedule runs
#[derive(Resource, Default)]
pub struct Time(pub Duration);
