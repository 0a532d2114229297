#![forbid(unsafe_code)]
//! Reflective conformance suite for media player implementations.
//!
//! The suite never calls the players directly. Each scenario under `tests/` resolves the
//! subject class, its constructor, and its operations by canonical name through
//! [`jukebox_core`]'s registry, constructs a fresh instance, drives it through a fixed
//! sequence of operations, and asserts on the observed values. A missing class,
//! constructor, or operation therefore fails that one scenario with a descriptive message;
//! it never aborts sibling scenarios or the run.
//!
//! This crate only re-exports the probing surface the scenarios share.

pub use jukebox_core::{CallError, ClassSpec, Instance, ParamTy, Registry, Value, probe, testing};
pub use jukebox_players::{
    MUSIC_PLAYER, MusicPlayer, PLAYER, Player, RADIO_PLAYER, RadioPlayer, VIDEO_PLAYER,
    VideoPlayer, media_registry,
};
