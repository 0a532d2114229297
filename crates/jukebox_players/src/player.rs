//! The `Player` capability shared by every media player.

/// Operations every player exposes regardless of its medium.
///
/// Volume steps are per-player (video moves in fives, music in ones, radio in twos); the
/// contract only fixes the operation names.
pub trait Player {
    /// Turn the player on.
    fn start(&mut self);

    /// Turn the player off.
    fn stop(&mut self);

    fn volume_up(&mut self);

    fn volume_down(&mut self);
}
