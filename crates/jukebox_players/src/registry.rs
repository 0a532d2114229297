//! Reflective registration of the player classes.
//!
//! The conformance scenarios resolve players by canonical name through a [`Registry`]
//! instead of calling them directly, so a missing class, constructor, or operation surfaces
//! as a lookup miss the probing helpers reduce to absence. Each registered body validates
//! its arguments, downcasts the receiver, and forwards to the real inherent method.

use std::any::Any;

use jukebox_core::errors::CallError;
use jukebox_core::mirror::{ClassSpec, Instance, Registry};
use jukebox_core::value::{self, ParamTy, Value};

use crate::music::MusicPlayer;
use crate::player::Player;
use crate::radio::RadioPlayer;
use crate::video::VideoPlayer;

/// Canonical name of the shared capability contract.
pub const PLAYER: &str = "Player";
/// Canonical name of the video player class.
pub const VIDEO_PLAYER: &str = "VideoPlayer";
/// Canonical name of the music player class.
pub const MUSIC_PLAYER: &str = "MusicPlayer";
/// Canonical name of the radio player class.
pub const RADIO_PLAYER: &str = "RadioPlayer";

/// Build a fresh registry exposing the capability contract and the three player classes.
///
/// Every caller gets its own registry; nothing is shared between scenarios.
pub fn media_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(player_capability());
    registry.register(video_class());
    registry.register(music_class());
    registry.register(radio_class());
    registry
}

fn player_capability() -> ClassSpec {
    ClassSpec::capability(PLAYER)
        .requirement("start", &[])
        .requirement("stop", &[])
        .requirement("volume_up", &[])
        .requirement("volume_down", &[])
}

fn video_class() -> ClassSpec {
    ClassSpec::class(VIDEO_PLAYER)
        .implements(PLAYER)
        .constructor(&[ParamTy::Str], construct_video)
        .method("start", &[], shared::start::<VideoPlayer>)
        .method("stop", &[], shared::stop::<VideoPlayer>)
        .method("volume_up", &[], shared::volume_up::<VideoPlayer>)
        .method("volume_down", &[], shared::volume_down::<VideoPlayer>)
        .method("fast_forward", &[], video::fast_forward)
        .method("rewind", &[], video::rewind)
        .method("video", &[], video::video)
        .method("set_video", &[ParamTy::Str], video::set_video)
        .method("is_on", &[], video::is_on)
        .method("volume", &[], video::volume)
        .method("current_time", &[], video::current_time)
}

fn music_class() -> ClassSpec {
    ClassSpec::class(MUSIC_PLAYER)
        .implements(PLAYER)
        .constructor(&[ParamTy::StrList], construct_music)
        .method("start", &[], shared::start::<MusicPlayer>)
        .method("stop", &[], shared::stop::<MusicPlayer>)
        .method("volume_up", &[], shared::volume_up::<MusicPlayer>)
        .method("volume_down", &[], shared::volume_down::<MusicPlayer>)
        .method("next", &[], music::next)
        .method("previous", &[], music::previous)
        .method("current_song", &[], music::current_song)
        .method("is_on", &[], music::is_on)
        .method("volume", &[], music::volume)
}

fn radio_class() -> ClassSpec {
    ClassSpec::class(RADIO_PLAYER)
        .implements(PLAYER)
        .constructor(&[ParamTy::FloatList], construct_radio)
        .method("start", &[], shared::start::<RadioPlayer>)
        .method("stop", &[], shared::stop::<RadioPlayer>)
        .method("volume_up", &[], shared::volume_up::<RadioPlayer>)
        .method("volume_down", &[], shared::volume_down::<RadioPlayer>)
        .method("next", &[], radio::next)
        .method("previous", &[], radio::previous)
        .method("station", &[], radio::station)
        .method("is_on", &[], radio::is_on)
        .method("volume", &[], radio::volume)
}

fn construct_video(args: &[Value]) -> Result<Instance, CallError> {
    value::expect_arity(args, 1)?;
    let video = value::str_arg(args, 0)?;
    Ok(Instance::new(VideoPlayer::new(video)))
}

fn construct_music(args: &[Value]) -> Result<Instance, CallError> {
    value::expect_arity(args, 1)?;
    let songs = value::str_list_arg(args, 0)?.to_vec();
    Ok(Instance::new(MusicPlayer::new(songs)))
}

fn construct_radio(args: &[Value]) -> Result<Instance, CallError> {
    value::expect_arity(args, 1)?;
    let stations = value::float_list_arg(args, 0)?.to_vec();
    Ok(Instance::new(RadioPlayer::new(stations)))
}

/// Bodies for the shared `Player` operations, generic over the concrete receiver.
mod shared {
    use super::*;

    pub fn start<T: Player + Any>(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(T::start)?;
        Ok(None)
    }

    pub fn stop<T: Player + Any>(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(T::stop)?;
        Ok(None)
    }

    pub fn volume_up<T: Player + Any>(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(T::volume_up)?;
        Ok(None)
    }

    pub fn volume_down<T: Player + Any>(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(T::volume_down)?;
        Ok(None)
    }
}

mod video {
    use super::*;

    pub fn fast_forward(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(VideoPlayer::fast_forward)?;
        Ok(None)
    }

    pub fn rewind(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(VideoPlayer::rewind)?;
        Ok(None)
    }

    pub fn video(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let title = recv.with(|p: &mut VideoPlayer| p.video().to_string())?;
        Ok(Some(Value::Str(title)))
    }

    pub fn set_video(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 1)?;
        let title = value::str_arg(args, 0)?.to_string();
        recv.with(|p: &mut VideoPlayer| p.set_video(title))?;
        Ok(None)
    }

    pub fn is_on(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let on = recv.with(|p: &mut VideoPlayer| p.is_on())?;
        Ok(Some(Value::Bool(on)))
    }

    pub fn volume(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let volume = recv.with(|p: &mut VideoPlayer| p.volume())?;
        Ok(Some(Value::Int(volume)))
    }

    pub fn current_time(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let time = recv.with(|p: &mut VideoPlayer| p.current_time())?;
        Ok(Some(Value::Int(time)))
    }
}

mod music {
    use super::*;

    pub fn next(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(MusicPlayer::next)?;
        Ok(None)
    }

    pub fn previous(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(MusicPlayer::previous)?;
        Ok(None)
    }

    pub fn current_song(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let song = recv.with(|p: &mut MusicPlayer| p.current_song())?;
        Ok(Some(Value::Str(song)))
    }

    pub fn is_on(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let on = recv.with(|p: &mut MusicPlayer| p.is_on())?;
        Ok(Some(Value::Bool(on)))
    }

    pub fn volume(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let volume = recv.with(|p: &mut MusicPlayer| p.volume())?;
        Ok(Some(Value::Int(volume)))
    }
}

mod radio {
    use super::*;

    pub fn next(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(RadioPlayer::next)?;
        Ok(None)
    }

    pub fn previous(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        recv.with(RadioPlayer::previous)?;
        Ok(None)
    }

    pub fn station(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let station = recv.with(|p: &mut RadioPlayer| p.station())?;
        Ok(Some(Value::Float(station)))
    }

    pub fn is_on(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let on = recv.with(|p: &mut RadioPlayer| p.is_on())?;
        Ok(Some(Value::Bool(on)))
    }

    pub fn volume(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
        value::expect_arity(args, 0)?;
        let volume = recv.with(|p: &mut RadioPlayer| p.volume())?;
        Ok(Some(Value::Int(volume)))
    }
}
