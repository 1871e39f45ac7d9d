// SPDX-License-Identifier: MPL-2.0
//! Frame pane: draws the current frame inside a scrollable area sized by the
//! zoom level, with the grab cursor and pointer routing.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::viewer::component::{FrameContent, Message};
use crate::ui::viewer::pointer::PointerInput;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{image, mouse_area, responsive, Column, Container, Id, Scrollable, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, Background, ContentFit, Element, Length, Size, Theme, Vector,
};

pub struct ViewModel<'a> {
    pub frame: FrameContent,
    pub zoom_level: f32,
    pub cursor: mouse::Interaction,
    pub scrollable_id: &'static str,
    pub i18n: &'a I18n,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let ViewModel {
        frame,
        zoom_level,
        cursor,
        scrollable_id,
        i18n,
    } = model;

    let surface = responsive(move |available: Size| {
        let content = frame_content(&frame, i18n);
        let zoomed = zoomed_size(available, zoom_level);

        let sized = Container::new(content)
            .width(Length::Fixed(zoomed.width))
            .height(Length::Fixed(zoomed.height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        Scrollable::new(sized)
            .id(Id::new(scrollable_id))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Both {
                vertical: Scrollbar::hidden(),
                horizontal: Scrollbar::hidden(),
            })
            .on_scroll(|viewport: Viewport| {
                let relative = viewport.relative_offset();
                Message::Scrolled {
                    viewport: viewport.bounds().size(),
                    relative: Vector::new(relative.x, relative.y),
                }
            })
            .into()
    });

    let interactive = mouse_area(surface)
        .on_press(Message::Pointer(PointerInput::MousePressed))
        .on_release(Message::Pointer(PointerInput::MouseReleased))
        .on_move(|position| Message::Pointer(PointerInput::MouseMoved(position)))
        .on_exit(Message::Pointer(PointerInput::MouseLeft))
        .interaction(cursor);

    Container::new(interactive)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            ..Default::default()
        })
        .into()
}

/// Size of the drawn frame: the pane scaled by the zoom level.
fn zoomed_size(available: Size, zoom_level: f32) -> Size {
    let scale = zoom_level.max(1.0);
    Size::new(
        (available.width * scale).max(1.0),
        (available.height * scale).max(1.0),
    )
}

fn frame_content<'a>(frame: &FrameContent, i18n: &I18n) -> Element<'a, Message> {
    match frame {
        FrameContent::Ready(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        FrameContent::Loading => placeholder(i18n.tr("viewer-frame-loading"), None),
        FrameContent::Unavailable(reason_key) => placeholder(
            i18n.tr("viewer-frame-unavailable"),
            Some(i18n.tr(reason_key)),
        ),
    }
}

/// Panel drawn instead of a frame image; rotation keeps working underneath.
fn placeholder<'a>(heading: String, detail: Option<String>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(heading)
                .size(typography::TITLE_MD)
                .color(palette::GRAY_200),
        );

    if let Some(detail) = detail {
        column = column.push(
            Text::new(detail)
                .size(typography::BODY)
                .color(palette::GRAY_200),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoomed_size_scales_viewport() {
        let size = zoomed_size(Size::new(400.0, 300.0), 2.0);
        assert_eq!(size, Size::new(800.0, 600.0));
    }

    #[test]
    fn zoomed_size_never_shrinks_below_viewport() {
        let size = zoomed_size(Size::new(400.0, 300.0), 0.5);
        assert_eq!(size, Size::new(400.0, 300.0));
    }

    #[test]
    fn pane_renders_every_frame_state() {
        let i18n = I18n::default();
        for frame in [
            FrameContent::Loading,
            FrameContent::Unavailable("error-frame-not-found"),
            FrameContent::Ready(image::Handle::from_rgba(1, 1, vec![0_u8, 0, 0, 255])),
        ] {
            let _element = view(ViewModel {
                frame,
                zoom_level: 1.0,
                cursor: mouse::Interaction::Grab,
                scrollable_id: "test-scrollable",
                i18n: &i18n,
            });
        }
    }
}
