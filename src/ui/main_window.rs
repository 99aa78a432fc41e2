use fltk::{
    app::Sender,
    browser::HoldBrowser,
    button::Button,
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::messages::Message;
use crate::app::domain::notification::NotificationKind;
use crate::app::domain::routes::RouteTable;

pub const SIDEBAR_WIDTH: i32 = 230;
const TOOLBAR_HEIGHT: i32 = 32;
const LOCATION_HEIGHT: i32 = 26;
const NOTIFICATIONS_HEIGHT: i32 = 150;

pub struct MainWidgets {
    pub wind: Window,
    pub sidebar: HoldBrowser,
    pub toolbar: Flex,
    pub theme_button: Button,
    pub language_button: Button,
    pub user_button: Button,
    pub location: Frame,
    pub content: Frame,
    pub notifications: HoldBrowser,
}

fn toolbar_button(
    toolbar: &mut Flex,
    label: &str,
    width: i32,
    sender: Sender<Message>,
    msg: Message,
) -> Button {
    let mut button = Button::default().with_label(label);
    button.set_callback(move |_| sender.send(msg.clone()));
    toolbar.fixed(&button, width);
    button
}

pub fn build_main_window(table: &RouteTable, sender: Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1024, 680, "Dashboard");
    wind.set_xclass("DashboardShell");

    let mut root = Flex::new(0, 0, 1024, 680, None);
    root.set_type(FlexType::Row);

    let mut sidebar = HoldBrowser::default();
    for section in table.sections() {
        sidebar.add(section);
    }
    sidebar.set_callback(move |b| {
        let line = b.value();
        if let Some(section) = b.text(line) {
            sender.send(Message::SelectSection(section));
        }
    });
    root.fixed(&sidebar, SIDEBAR_WIDTH);

    let mut column = Flex::default();
    column.set_type(FlexType::Column);

    let mut toolbar = Flex::default();
    toolbar.set_type(FlexType::Row);
    toolbar_button(&mut toolbar, "@<-", 36, sender, Message::NavigateBack);
    let theme_button = toolbar_button(&mut toolbar, "Theme", 110, sender, Message::CycleTheme);
    let language_button = toolbar_button(&mut toolbar, "AR", 50, sender, Message::ToggleLanguage);
    let user_button = toolbar_button(&mut toolbar, "Sign in", 90, sender, Message::ToggleSignIn);
    Frame::default();
    let success = Message::Notify(NotificationKind::Success);
    toolbar_button(&mut toolbar, "Success", 80, sender, success);
    let error = Message::Notify(NotificationKind::Error);
    toolbar_button(&mut toolbar, "Error", 70, sender, error);
    toolbar_button(&mut toolbar, "Dismiss", 80, sender, Message::DismissNotification);
    toolbar_button(&mut toolbar, "Clear", 70, sender, Message::ClearNotifications);
    toolbar.end();
    column.fixed(&toolbar, TOOLBAR_HEIGHT);

    let mut location = Frame::default();
    location.set_frame(FrameType::FlatBox);
    location.set_align(Align::Left | Align::Inside);
    location.set_label_size(12);
    column.fixed(&location, LOCATION_HEIGHT);

    let mut content = Frame::default();
    content.set_frame(FrameType::FlatBox);
    content.set_label_size(22);

    let notifications = HoldBrowser::default();
    column.fixed(&notifications, NOTIFICATIONS_HEIGHT);

    column.end();
    root.end();
    wind.resizable(&root);
    wind.end();

    MainWidgets {
        wind,
        sidebar,
        toolbar,
        theme_button,
        language_button,
        user_button,
        location,
        content,
        notifications,
    }
}
