// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the turntable viewer.
//!
//! The `App` struct wires together the viewer, the frame cache, localization
//! and diagnostics, and translates viewer effects into side effects like
//! frame fetches or window mode changes.

mod message;
pub mod paths;
mod subscription;
mod update;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector, WarningEvent, WarningType};
use crate::domain::frame::{FrameCount, ObjectId};
use crate::domain::ui::ZoomLimits;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{
    FrameCache, SubscriptionScheduler, TemplateResolver, WindowFullscreen,
};
use crate::ui::state::RotationSettings;
use crate::ui::viewer::component::{self, ViewEnv, ViewerProps, ViewerSettings};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Viewer component wired to the Iced runtime adapters.
pub type Viewer = component::State<SubscriptionScheduler, WindowFullscreen>;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Object shown when neither the CLI nor the config names one.
pub const DEFAULT_OBJECT_ID: &str = "object";

/// How long a notice stays in the control bar.
const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Transient message shown in the control bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    text: String,
    shown_at: Instant,
}

impl Notice {
    fn new(text: String, shown_at: Instant) -> Self {
        Self { text, shown_at }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTICE_DURATION
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: Viewer,
    frames: FrameCache,
    resolver: TemplateResolver,
    diagnostics: DiagnosticsCollector,
    notice: Option<Notice>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("object", self.viewer.frames().object_id())
            .field("current", &self.viewer.current())
            .field("mode", &self.viewer.mode().name())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Viewer tuning derived from the configuration.
fn viewer_settings(config: &Config) -> ViewerSettings {
    ViewerSettings {
        rotation: RotationSettings {
            drag_threshold: config.rotation.drag_threshold(),
            auto_rotate_period: config.rotation.auto_rotate_period(),
        },
        windowed_zoom: ZoomLimits::TURNTABLE.with_step(config.zoom.step()),
        fullscreen_zoom: ZoomLimits::GALLERY.with_step(config.zoom.gallery_step()),
    }
}

/// Viewer props: CLI flags win over the configuration.
fn viewer_props(flags: &Flags, config: &Config) -> ViewerProps {
    let object = flags.object.as_deref().unwrap_or(DEFAULT_OBJECT_ID);
    ViewerProps {
        object_id: ObjectId::new(object),
        frame_count: flags
            .frames
            .map_or_else(|| config.rotation.frame_count(), FrameCount::new),
        auto_rotate: flags.auto_rotate || config.rotation.auto_rotate,
        start_index: flags.start.unwrap_or(1),
        allow_fullscreen: !flags.no_fullscreen && config.fullscreen.allow,
    }
}

impl App {
    /// Loads the configuration and mounts the viewer described by `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        Self::boot(flags, &config, config_warning)
    }

    /// Mounts the viewer and starts preloading every frame, beginning with
    /// the one shown first.
    fn boot(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let template = flags
            .template
            .clone()
            .unwrap_or_else(|| config.frames.url_template.clone());

        let viewer = Viewer::mount(
            viewer_props(&flags, config),
            viewer_settings(config),
            SubscriptionScheduler::new(),
            WindowFullscreen::new(),
            Some(diagnostics.handle()),
        );

        let mut app = App {
            i18n,
            viewer,
            frames: FrameCache::new(config.frames.cache_capacity()),
            resolver: TemplateResolver::new(template),
            diagnostics,
            notice: None,
        };

        if let Some(key) = config_warning {
            app.diagnostics.handle().log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                key.clone(),
            ));
            update::show_notice(&mut app.notice, app.i18n.tr(&key));
        }
        app.diagnostics.process_pending();

        let task = app.preload_frames();
        (app, task)
    }

    fn preload_frames(&mut self) -> Task<Message> {
        let start = self.viewer.current();
        let count = self.viewer.frames().count();
        let urls: Vec<_> = (0..i64::from(count.get()))
            .map(|steps| update::frame_url(&self.viewer, &self.resolver, start.offset(steps, count)))
            .collect();
        self.frames.preload(urls, Message::FrameLoaded)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            viewer: &mut self.viewer,
            frames: &mut self.frames,
            resolver: &self.resolver,
            diagnostics: &mut self.diagnostics,
            notice: &mut self.notice,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr_with_args(
            "window-title-object",
            &[("object", self.viewer.frames().object_id().as_str())],
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_rotation_subscription(self.viewer.scheduler()),
            subscription::create_tick_subscription(self.notice.is_some()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut self.context(), viewer_message)
            }
            Message::FrameLoaded(url, result) => {
                update::handle_frame_loaded(&mut self.frames, url, result);
                Task::none()
            }
            Message::WindowResized { id, size } => {
                update::handle_window_resized(&mut self.context(), id, size)
            }
            Message::ExportDiagnostics => update::handle_export_diagnostics(&mut self.context()),
            Message::Tick(now) => {
                update::handle_tick(&mut self.notice, now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let url = update::frame_url(&self.viewer, &self.resolver, self.viewer.current());
        self.viewer
            .view(ViewEnv {
                i18n: &self.i18n,
                frame: update::frame_content(&self.frames, &url),
                notice: self.notice.as_ref().map(|notice| notice.text().to_string()),
            })
            .map(Message::Viewer)
    }
}
