use fltk::{
    browser::HoldBrowser,
    button::Button,
    enums::Color,
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::main_window::MainWidgets;
use crate::app::controllers::theme::ThemeSurface;
use crate::app::domain::theme::EffectiveTheme;

/// The widgets that carry theme colors. FLTK widgets are cheap handles, so
/// this holds clones of the ones in [`MainWidgets`].
pub struct FltkThemeSurface {
    window: Window,
    sidebar: HoldBrowser,
    toolbar: Flex,
    buttons: Vec<Button>,
    location: Frame,
    content: Frame,
    notifications: HoldBrowser,
    marker: Option<EffectiveTheme>,
}

impl FltkThemeSurface {
    pub fn new(widgets: &MainWidgets) -> Self {
        Self {
            window: widgets.wind.clone(),
            sidebar: widgets.sidebar.clone(),
            toolbar: widgets.toolbar.clone(),
            buttons: vec![
                widgets.theme_button.clone(),
                widgets.language_button.clone(),
                widgets.user_button.clone(),
            ],
            location: widgets.location.clone(),
            content: widgets.content.clone(),
            notifications: widgets.notifications.clone(),
            marker: None,
        }
    }

    fn paint(&mut self, is_dark: bool) {
        if is_dark {
            // Dark mode colors
            self.window.set_color(Color::from_rgb(25, 25, 25));
            self.window.set_label_color(Color::from_rgb(220, 220, 220));
            self.toolbar.set_color(Color::from_rgb(35, 35, 35));
            for list in [&mut self.sidebar, &mut self.notifications] {
                list.set_color(Color::from_rgb(30, 30, 30));
                list.set_text_color(Color::from_rgb(220, 220, 220));
                list.set_selection_color(Color::from_rgb(70, 70, 100));
            }
            for button in &mut self.buttons {
                button.set_color(Color::from_rgb(45, 45, 45));
                button.set_label_color(Color::from_rgb(220, 220, 220));
            }
            self.location.set_color(Color::from_rgb(40, 40, 40));
            self.location.set_label_color(Color::from_rgb(150, 150, 150));
            self.content.set_color(Color::from_rgb(30, 30, 30));
            self.content.set_label_color(Color::from_rgb(220, 220, 220));
        } else {
            // Light mode colors
            self.window.set_color(Color::from_rgb(240, 240, 240));
            self.window.set_label_color(Color::Black);
            self.toolbar.set_color(Color::from_rgb(240, 240, 240));
            for list in [&mut self.sidebar, &mut self.notifications] {
                list.set_color(Color::White);
                list.set_text_color(Color::Black);
                list.set_selection_color(Color::from_rgb(173, 216, 230));
            }
            for button in &mut self.buttons {
                button.set_color(Color::from_rgb(225, 225, 225));
                button.set_label_color(Color::Black);
            }
            self.location.set_color(Color::from_rgb(240, 240, 240));
            self.location.set_label_color(Color::from_rgb(100, 100, 100));
            self.content.set_color(Color::White);
            self.content.set_label_color(Color::Black);
        }

        self.window.redraw();
    }
}

impl ThemeSurface for FltkThemeSurface {
    fn remove_marker(&mut self, theme: EffectiveTheme) {
        if self.marker == Some(theme) {
            self.marker = None;
        }
    }

    fn apply_marker(&mut self, theme: EffectiveTheme) {
        self.paint(theme.is_dark());
        self.marker = Some(theme);
    }
}
