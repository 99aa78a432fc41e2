use crate::app::domain::notification::NotificationKind;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SelectSection(String),
    NavigateBack,

    // Preferences
    CycleTheme,
    ToggleLanguage,
    ToggleSignIn,

    // Notifications
    Notify(NotificationKind),
    DismissNotification,
    ClearNotifications,

    // Platform
    PollColorScheme,
    WindowClose,
}
