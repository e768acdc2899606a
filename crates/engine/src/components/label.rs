use crate::prelude::*;

/// Human readable name attached to every entity spawned through the application
#[derive(Component, Clone, Debug)]
pub struct Tag {
    pub label: String,
}
