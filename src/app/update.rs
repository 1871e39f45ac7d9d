// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the handlers behind `App::update`: forwarding to the
//! viewer, turning viewer effects into tasks, storing fetched frames and
//! window bookkeeping.

use super::{paths, Message, Notice, Viewer};
use crate::application::port::{FrameUrl, FrameUrlResolver};
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::frame::FrameIndex;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{FetchResult, FrameCache, FrameImage, TemplateResolver};
use crate::ui::design_tokens::sizing;
use crate::ui::viewer::component::{self, Effect, FrameContent};
use iced::{window, Size, Task};
use std::time::Instant;

/// File name of the exported diagnostics report.
const DIAGNOSTICS_FILE: &str = "diagnostics.json";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a mut Viewer,
    pub frames: &'a mut FrameCache,
    pub resolver: &'a TemplateResolver,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub notice: &'a mut Option<Notice>,
}

pub fn handle_viewer_message(ctx: &mut UpdateContext<'_>, message: component::Message) -> Task<Message> {
    if matches!(message, component::Message::FullscreenChanged(_)) {
        ctx.viewer.fullscreen_port_mut().acknowledge();
    }

    let (effect, task) = ctx.viewer.handle_message(message);
    let effect_task = handle_effect(ctx, effect);
    let window_task = ctx
        .viewer
        .fullscreen_port_mut()
        .take_task(fullscreen_changed);
    ctx.diagnostics.process_pending();

    Task::batch([task.map(Message::Viewer), effect_task, window_task])
}

fn handle_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None | Effect::FullscreenRequested => Task::none(),
        Effect::FrameChanged(index) => request_around(ctx, index),
        Effect::FullscreenRejected(error) => {
            show_notice(ctx.notice, ctx.i18n.tr(error.i18n_key()));
            Task::none()
        }
    }
}

/// Requests the shown frame and its two neighbours.
fn request_around(ctx: &mut UpdateContext<'_>, index: FrameIndex) -> Task<Message> {
    let viewer: &Viewer = ctx.viewer;
    let frames = &mut *ctx.frames;
    let resolver = ctx.resolver;
    let count = viewer.frames().count();
    let tasks: Vec<Task<Message>> = [0, 1, -1]
        .into_iter()
        .filter_map(|steps| {
            let url = frame_url(viewer, resolver, index.offset(steps, count));
            frames.request(url, Message::FrameLoaded)
        })
        .collect();
    Task::batch(tasks)
}

pub fn handle_frame_loaded(frames: &mut FrameCache, url: FrameUrl, result: FetchResult) {
    frames.finish(url, result);
}

pub fn handle_window_resized(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    size: Size,
) -> Task<Message> {
    ctx.viewer.fullscreen_port_mut().set_window(id);
    // The window manager may have changed the mode on its own
    let mode_task = ctx.viewer.fullscreen_port().query_task(fullscreen_changed);
    let resize_task =
        handle_viewer_message(ctx, component::Message::ViewportResized(pane_size(size)));
    Task::batch([resize_task, mode_task])
}

fn fullscreen_changed(active: bool) -> Message {
    Message::Viewer(component::Message::FullscreenChanged(active))
}

pub fn handle_export_diagnostics(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.diagnostics.process_pending();
    let Some(dir) = paths::get_app_config_dir() else {
        show_notice(ctx.notice, ctx.i18n.tr("notification-diagnostics-export-error"));
        return Task::none();
    };

    let path = dir.join(DIAGNOSTICS_FILE);
    let result = std::fs::create_dir_all(&dir)
        .map_err(crate::error::Error::from)
        .and_then(|()| ctx.diagnostics.export_to_file(&path));
    let text = match result {
        Ok(()) => ctx.i18n.tr_with_args(
            "notification-diagnostics-exported",
            &[("path", path.display().to_string().as_str())],
        ),
        Err(err) => {
            eprintln!("[WARN] Diagnostics export failed: {err}");
            ctx.i18n.tr("notification-diagnostics-export-error")
        }
    };
    show_notice(ctx.notice, text);
    Task::none()
}

pub fn handle_tick(notice: &mut Option<Notice>, now: Instant) {
    if notice.as_ref().is_some_and(|n| n.is_expired(now)) {
        *notice = None;
    }
}

pub fn show_notice(notice: &mut Option<Notice>, text: String) {
    *notice = Some(Notice::new(text, Instant::now()));
}

/// Location of frame `index` of the mounted object.
pub fn frame_url(viewer: &Viewer, resolver: &TemplateResolver, index: FrameIndex) -> FrameUrl {
    resolver.resolve(viewer.frames().object_id(), index)
}

/// What the pane should show for the given frame location.
pub fn frame_content(frames: &FrameCache, url: &FrameUrl) -> FrameContent {
    match frames.peek(url) {
        Some(FrameImage::Ready(handle)) => FrameContent::Ready(handle.clone()),
        Some(FrameImage::Failed(err)) => FrameContent::Unavailable(err.i18n_key()),
        Some(FrameImage::Pending) | None => FrameContent::Loading,
    }
}

/// Size left for the frame pane once the control bar is laid out.
pub fn pane_size(window: Size) -> Size {
    Size::new(
        window.width,
        (window.height - sizing::CONTROL_BAR_HEIGHT).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_excludes_control_bar() {
        let size = pane_size(Size::new(800.0, 600.0));
        assert_eq!(size, Size::new(800.0, 600.0 - sizing::CONTROL_BAR_HEIGHT));
        assert_eq!(pane_size(Size::new(800.0, 10.0)).height, 0.0);
    }

    #[test]
    fn tick_keeps_fresh_notice() {
        let mut notice = None;
        show_notice(&mut notice, "hello".into());
        handle_tick(&mut notice, Instant::now());
        assert!(notice.is_some());
    }
}
