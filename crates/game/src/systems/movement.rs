use crate::prelude::*;

/// Move every character along the velocity its controls produced this frame
pub fn integrate_characters(mut query: Query<&mut Character>, time: Res<Time>) {
    let dt = time.0.as_secs_f32();

    for mut character in query.iter_mut() {
        character.advance(dt);
    }
}
