// SPDX-License-Identifier: MPL-2.0
//! Turntable viewer: a frame pane that rotates under the pointer and a
//! control bar below it.

pub mod component;
pub mod controls;
pub mod pane;
pub mod pointer;

pub use component::{
    Effect, FrameContent, Message, State, ViewEnv, ViewerProps, ViewerSettings, SCROLLABLE_ID,
};
