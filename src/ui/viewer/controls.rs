// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: frame stepping and progress, auto-rotate, zoom and
//! fullscreen buttons.

use crate::domain::frame::{FrameCount, FrameIndex};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::zoom::ZoomState;
use iced::{
    alignment::Vertical,
    widget::{button, slider, Container, Row, Space, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct ViewModel<'a> {
    pub current: FrameIndex,
    pub count: FrameCount,
    pub auto_rotating: bool,
    pub zoom: &'a ZoomState,
    pub zoom_in_enabled: bool,
    pub fullscreen: bool,
    pub fullscreen_allowed: bool,
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    /// Slider moved to this 1-based frame.
    Seek(u32),
    ToggleAutoRotate,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleFullscreen,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let previous = button(Text::new("◀").size(typography::BODY))
        .on_press(Message::Previous)
        .padding([6, 12]);
    let next = button(Text::new("▶").size(typography::BODY))
        .on_press(Message::Next)
        .padding([6, 12]);

    let progress = slider(
        1..=model.count.get(),
        model.current.value(),
        Message::Seek,
    )
    .width(Length::Fixed(sizing::PROGRESS_SLIDER_WIDTH));

    let counter = Text::new(i18n.tr_with_args(
        "viewer-frame-counter",
        &[
            ("current", model.current.value().to_string().as_str()),
            ("total", model.count.get().to_string().as_str()),
        ],
    ))
    .size(typography::BODY)
    .width(Length::Fixed(sizing::READOUT_WIDTH));

    let auto_rotate_label = if model.auto_rotating {
        i18n.tr("viewer-auto-rotate-stop")
    } else {
        i18n.tr("viewer-auto-rotate-start")
    };
    let auto_rotate = button(Text::new(auto_rotate_label).size(typography::BODY))
        .on_press(Message::ToggleAutoRotate)
        .padding([6, 12]);

    let zoom_out = button(Text::new(i18n.tr("viewer-zoom-out-button")).size(typography::BODY))
        .on_press_maybe(model.zoom.is_zoomed().then_some(Message::ZoomOut))
        .padding([6, 12]);
    let zoom_in = button(Text::new(i18n.tr("viewer-zoom-in-button")).size(typography::BODY))
        .on_press_maybe(model.zoom_in_enabled.then_some(Message::ZoomIn))
        .padding([6, 12]);
    let reset = button(Text::new(i18n.tr("viewer-zoom-reset-button")).size(typography::BODY))
        .on_press_maybe(model.zoom.is_zoomed().then_some(Message::ResetZoom))
        .padding([6, 12]);

    let zoom_readout = Text::new(format_zoom(model.zoom.level().value()))
        .size(typography::BODY)
        .width(Length::Fixed(sizing::READOUT_WIDTH));

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(previous)
        .push(progress)
        .push(next)
        .push(counter)
        .push(auto_rotate)
        .push(Space::new().width(Length::Fixed(spacing::MD)))
        .push(zoom_out)
        .push(zoom_readout)
        .push(zoom_in)
        .push(reset);

    if model.fullscreen_allowed {
        let label = if model.fullscreen {
            i18n.tr("viewer-fullscreen-exit")
        } else {
            i18n.tr("viewer-fullscreen-enter")
        };
        row = row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::ToggleFullscreen)
                .padding([6, 12]),
        );
    }

    if let Some(notice) = model.notice {
        row = row.push(
            Text::new(notice)
                .size(typography::CAPTION)
                .color(palette::WARNING_500),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CONTROL_BAR_HEIGHT))
        .padding([0.0, spacing::SM])
        .align_y(Vertical::Center)
        .style(|_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(palette::GRAY_700)),
            ..Default::default()
        })
        .into()
}

/// Zoom factor as shown in the control bar (`1.4×`).
fn format_zoom(level: f32) -> String {
    format!("{level:.1}×")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;
    use crate::ui::state::zoom::ZoomState;

    #[test]
    fn controls_view_renders() {
        let i18n = I18n::default();
        let zoom = ZoomState::default();
        let _element = view(
            ViewContext { i18n: &i18n },
            ViewModel {
                current: FrameIndex::FIRST,
                count: FrameCount::default(),
                auto_rotating: false,
                zoom: &zoom,
                zoom_in_enabled: true,
                fullscreen: false,
                fullscreen_allowed: true,
                notice: Some("notice".into()),
            },
        );
    }

    #[test]
    fn zoom_readout_has_one_decimal() {
        assert_eq!(format_zoom(1.0), "1.0×");
        assert_eq!(format_zoom(2.5), "2.5×");
    }
}
