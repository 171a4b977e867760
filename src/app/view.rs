// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo.
//!
//! The control panel fills the window; the banner is stacked on top and
//! positioned element by element from the controller's geometry.

use super::host::{IcedSurface, SUBTITLE_FONT_SIZE, TITLE_FONT_SIZE};
use super::message::{Message, Sample};
use crate::domain::banner::PresentationState;
use iced::widget::image::Image;
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{Background, Border, Color, Element, Length, Padding, Rectangle, Theme};

const BANNER_BACKGROUND: Color = Color::from_rgb(0.1, 0.1, 0.1);
const INDICATOR_COLOR: Color = Color::from_rgb(0.4, 0.4, 0.4);
const TITLE_COLOR: Color = Color::WHITE;
const SUBTITLE_COLOR: Color = Color::from_rgb(0.85, 0.85, 0.85);

/// Context required to render the demo.
pub struct ViewContext<'a> {
    pub surface: &'a IcedSurface,
    pub state: PresentationState,
    pub current_height: f32,
    pub pan_active: bool,
    pub should_silent: bool,
    pub status_bar_hidden: bool,
    pub taps: usize,
    pub completions: usize,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new().push(control_panel(&ctx));
    if let Some(banner) = banner_overlay(ctx.surface) {
        stack = stack.push(banner);
    }
    stack.into()
}

fn control_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let presets = Sample::ALL.iter().fold(Row::new().spacing(8), |row, sample| {
        row.push(button(Text::new(sample.label())).on_press(Message::Present(*sample)))
    });
    let controls = Row::new()
        .spacing(8)
        .push(button(Text::new("Dismiss")).on_press(Message::Dismiss))
        .push(
            button(Text::new(if ctx.status_bar_hidden {
                "Show status bar"
            } else {
                "Hide status bar"
            }))
            .on_press(Message::ToggleStatusBar),
        );

    let mut column = Column::new()
        .spacing(12)
        .push(presets)
        .push(controls)
        .push(text(format!("state: {}", ctx.state)))
        .push(text(format!("height: {:.1}", ctx.current_height)))
        .push(text(format!(
            "pan active: {}  silent: {}",
            ctx.pan_active, ctx.should_silent
        )))
        .push(text(format!(
            "taps: {}  completions: {}",
            ctx.taps, ctx.completions
        )));
    if let Some(warning) = ctx.config_warning {
        column = column.push(text(format!("config: {warning}")));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 140.0,
            right: 16.0,
            bottom: 16.0,
            left: 16.0,
        })
        .into()
}

/// Offsets `content` to (`x`, `y`) inside the banner.
fn place<'a>(content: impl Into<Element<'a, Message>>, x: f32, y: f32) -> Element<'a, Message> {
    Container::new(content)
        .padding(Padding {
            top: y.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: x.max(0.0),
        })
        .into()
}

fn filled<'a>(width: Length, height: f32, color: Color, radius: f32) -> Container<'a, Message> {
    Container::new(text(""))
        .width(width)
        .height(Length::Fixed(height.max(0.0)))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..Default::default()
        })
}

fn banner_overlay(surface: &IcedSurface) -> Option<Element<'_, Message>> {
    let content = surface.content()?;
    let geometry = surface.geometry()?;
    let frame = surface.frame();
    if frame.banner_height <= 0.0 {
        return None;
    }

    let mut layers = Stack::new().push(filled(
        Length::Fill,
        frame.background_height,
        BANNER_BACKGROUND,
        0.0,
    ));

    if let Some(handle) = &content.image {
        let Rectangle {
            x, y, width, height, ..
        } = geometry.image;
        layers = layers.push(place(
            Image::new(handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height)),
            x,
            y,
        ));
    }

    layers = layers.push(place(
        Text::new(content.title.as_str())
            .size(TITLE_FONT_SIZE)
            .color(TITLE_COLOR)
            .width(Length::Fixed(geometry.title.width)),
        geometry.title.x,
        geometry.title.y,
    ));

    if !content.subtitle.is_empty() {
        let subtitle = Text::new(content.subtitle.as_str())
            .size(SUBTITLE_FONT_SIZE)
            .color(SUBTITLE_COLOR)
            .width(Length::Fixed(geometry.subtitle.width));
        // A line limit clips to the measured height; without one it grows.
        let subtitle = match surface.subtitle_line_limit() {
            Some(_) => Container::new(subtitle)
                .height(Length::Fixed(geometry.subtitle.height))
                .clip(true),
            None => Container::new(subtitle),
        };
        layers = layers.push(place(subtitle, geometry.subtitle.x, geometry.subtitle.y));
    }

    layers = layers.push(place(
        filled(
            Length::Fixed(geometry.indicator.width),
            geometry.indicator.height,
            INDICATOR_COLOR,
            geometry.indicator.height / 2.0,
        ),
        geometry.indicator.x,
        frame.indicator_y,
    ));

    Some(
        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fixed(frame.banner_height))
            .clip(true)
            .into(),
    )
}
