// SPDX-License-Identifier: MPL-2.0
//! Banner geometry.
//!
//! [`LayoutEngine`] turns already-measured content sizes and the current
//! viewport into frames for every banner element. It performs no text
//! measurement itself and has no side effects.

use crate::config::defaults::{
    BASE_HEIGHT_STATUS_BAR_HIDDEN, BASE_HEIGHT_STATUS_BAR_VISIBLE, IMAGE_NUDGE_STATUS_BAR_HIDDEN,
    IMAGE_NUDGE_STATUS_BAR_VISIBLE, IMAGE_OFFSET, IMAGE_SIZE, INDICATOR_BOTTOM_MARGIN,
    INDICATOR_HEIGHT, INDICATOR_WIDTH, LONE_TITLE_SHIFT, TEXT_OFFSET, TITLE_SUBTITLE_GAP,
};
use iced::Rectangle;

/// Everything the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub has_image: bool,
    pub subtitle_empty: bool,
    /// Title height measured at [`LayoutEngine::text_column_width`].
    pub title_height: f32,
    /// Subtitle height measured at [`LayoutEngine::text_column_width`].
    pub subtitle_height: f32,
    pub viewport_width: f32,
    pub status_bar_hidden: bool,
}

/// Frames for every banner element, in banner-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f32,
    /// Resting height of the banner.
    pub height: f32,
    pub background: Rectangle,
    pub indicator: Rectangle,
    pub image: Rectangle,
    pub title: Rectangle,
    pub subtitle: Rectangle,
}

impl Geometry {
    /// Height of the banner without any subtitle lines.
    #[must_use]
    pub fn base_height(&self) -> f32 {
        self.height - self.subtitle.height
    }
}

/// Pure layout rules for the banner.
pub struct LayoutEngine;

impl LayoutEngine {
    /// Height of an empty banner for the given status-bar visibility.
    #[must_use]
    pub fn base_height(status_bar_hidden: bool) -> f32 {
        if status_bar_hidden {
            BASE_HEIGHT_STATUS_BAR_HIDDEN
        } else {
            BASE_HEIGHT_STATUS_BAR_VISIBLE
        }
    }

    /// Width available to the title and subtitle. Never negative.
    #[must_use]
    pub fn text_column_width(viewport_width: f32, has_image: bool) -> f32 {
        let image_size = if has_image { IMAGE_SIZE } else { 0.0 };
        (viewport_width - image_size - IMAGE_OFFSET * 2.0).max(0.0)
    }

    /// Vertical origin of the drag indicator for a banner of `height`.
    #[must_use]
    pub fn indicator_y(height: f32) -> f32 {
        height - INDICATOR_HEIGHT - INDICATOR_BOTTOM_MARGIN
    }

    /// Computes the frames of every element.
    #[must_use]
    pub fn compute_geometry(input: &LayoutInput) -> Geometry {
        let width = input.viewport_width;
        let height = Self::base_height(input.status_bar_hidden) + input.subtitle_height;

        let nudge = if input.status_bar_hidden {
            IMAGE_NUDGE_STATUS_BAR_HIDDEN
        } else {
            IMAGE_NUDGE_STATUS_BAR_VISIBLE
        };
        let text_x = if input.has_image {
            TEXT_OFFSET
        } else {
            IMAGE_OFFSET
        };
        let image_size = if input.has_image { IMAGE_SIZE } else { 0.0 };
        let column_width = Self::text_column_width(width, input.has_image);

        let background = Rectangle {
            x: 0.0,
            y: 0.0,
            width,
            height,
        };
        let indicator = Rectangle {
            x: (width - INDICATOR_WIDTH) / 2.0,
            y: Self::indicator_y(height),
            width: INDICATOR_WIDTH,
            height: INDICATOR_HEIGHT,
        };
        let image = Rectangle {
            x: IMAGE_OFFSET,
            y: (height - image_size) / 2.0 + nudge,
            width: image_size,
            height: image_size,
        };

        // The image's x origin doubles as the title's y seed.
        let title_y = if input.has_image {
            image.x + 3.0
        } else {
            text_x + 5.0
        };
        let mut title = Rectangle {
            x: text_x,
            y: title_y,
            width: column_width,
            height: input.title_height,
        };
        let subtitle = Rectangle {
            x: text_x,
            y: title.y + title.height + TITLE_SUBTITLE_GAP,
            width: column_width,
            height: input.subtitle_height,
        };

        if input.subtitle_empty {
            let image_center_y = image.y + image.height / 2.0;
            title.y = image_center_y - LONE_TITLE_SHIFT - title.height / 2.0;
        }

        Geometry {
            width,
            height,
            background,
            indicator,
            image,
            title,
            subtitle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn input(has_image: bool, subtitle_empty: bool) -> LayoutInput {
        LayoutInput {
            has_image,
            subtitle_empty,
            title_height: 20.0,
            subtitle_height: if subtitle_empty { 0.0 } else { 34.0 },
            viewport_width: 375.0,
            status_bar_hidden: false,
        }
    }

    fn center_y(rect: &Rectangle) -> f32 {
        rect.y + rect.height / 2.0
    }

    #[test]
    fn column_width_accounts_for_image_and_margins() {
        for has_image in [true, false] {
            for subtitle_empty in [true, false] {
                let geometry = LayoutEngine::compute_geometry(&input(has_image, subtitle_empty));
                let expected = if has_image { 375.0 - 84.0 } else { 375.0 - 36.0 };
                assert_abs_diff_eq!(geometry.title.width, expected);
                assert_abs_diff_eq!(geometry.subtitle.width, expected);
            }
        }
    }

    #[test]
    fn height_adds_subtitle_to_base() {
        let geometry = LayoutEngine::compute_geometry(&input(true, false));
        assert_abs_diff_eq!(geometry.height, 65.0 + 34.0);
        assert_abs_diff_eq!(geometry.base_height(), 65.0);

        let hidden = LayoutEngine::compute_geometry(&LayoutInput {
            status_bar_hidden: true,
            ..input(true, false)
        });
        assert_abs_diff_eq!(hidden.height, 55.0 + 34.0);
    }

    #[test]
    fn image_is_centered_with_status_bar_nudge() {
        let geometry = LayoutEngine::compute_geometry(&input(true, false));
        assert_abs_diff_eq!(geometry.image.x, 18.0);
        assert_abs_diff_eq!(geometry.image.y, (99.0 - 48.0) / 2.0 + 5.0);
        assert_abs_diff_eq!(geometry.image.width, 48.0);

        let hidden = LayoutEngine::compute_geometry(&LayoutInput {
            status_bar_hidden: true,
            ..input(true, false)
        });
        assert_abs_diff_eq!(hidden.image.y, (89.0 - 48.0) / 2.0 + 2.5);
    }

    #[test]
    fn title_seed_reuses_horizontal_offsets() {
        let with_image = LayoutEngine::compute_geometry(&input(true, false));
        assert_abs_diff_eq!(with_image.title.x, 75.0);
        assert_abs_diff_eq!(with_image.title.y, 21.0);

        let without_image = LayoutEngine::compute_geometry(&input(false, false));
        assert_abs_diff_eq!(without_image.title.x, 18.0);
        assert_abs_diff_eq!(without_image.title.y, 23.0);
    }

    #[test]
    fn subtitle_follows_title_bottom() {
        let geometry = LayoutEngine::compute_geometry(&input(true, false));
        assert_abs_diff_eq!(geometry.subtitle.y, 21.0 + 20.0 + 2.5);
    }

    #[test]
    fn lone_title_is_centered_on_image() {
        for has_image in [true, false] {
            for status_bar_hidden in [true, false] {
                let geometry = LayoutEngine::compute_geometry(&LayoutInput {
                    status_bar_hidden,
                    title_height: 17.0,
                    ..input(has_image, true)
                });
                assert_abs_diff_eq!(
                    center_y(&geometry.title),
                    center_y(&geometry.image) - 2.5,
                    epsilon = 1e-4
                );
            }
        }
    }

    #[test]
    fn indicator_sits_above_bottom_edge() {
        let geometry = LayoutEngine::compute_geometry(&input(false, false));
        assert_abs_diff_eq!(geometry.indicator.x, (375.0 - 50.0) / 2.0);
        assert_abs_diff_eq!(geometry.indicator.y, geometry.height - 11.0);
        assert_abs_diff_eq!(geometry.indicator.width, 50.0);
        assert_abs_diff_eq!(geometry.indicator.height, 6.0);
    }

    #[test]
    fn narrow_viewport_never_yields_negative_column() {
        assert_abs_diff_eq!(LayoutEngine::text_column_width(40.0, true), 0.0);
    }
}
