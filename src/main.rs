use fltk::{app, prelude::*};
use tracing::error;
use tracing_subscriber::EnvFilter;

use dashboard_shell::app::{
    AppState, AppStore, ColorSchemeSignal, JsonPreferenceFile, RouteTable,
    SectionRouteSynchronizer, ThemeResolver, store_scope, theme_scope,
};
use dashboard_shell::ui::main_window::build_main_window;
use dashboard_shell::ui::messages::Message;
use dashboard_shell::ui::shell::ShellState;
use dashboard_shell::ui::theme::FltkThemeSurface;

const INITIAL_PATH: &str = "/dashboard";
const COLOR_SCHEME_POLL_SECS: f64 = 3.0;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(e) = run() {
        error!(error = %e, "dashboard shell failed");
        std::process::exit(1);
    }
}

fn run() -> dashboard_shell::Result<()> {
    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let table = RouteTable::dashboard()?;
    let mut widgets = build_main_window(&table, sender);

    let signal = ColorSchemeSignal::from_platform();
    let resolver = ThemeResolver::new(
        JsonPreferenceFile::open_default(),
        FltkThemeSurface::new(&widgets),
        signal.clone(),
    );

    let stores = store_scope();
    stores.mount(AppStore::new(AppState::with_theme(resolver.preference())));
    let themes = theme_scope();
    themes.mount(resolver);

    let sync = SectionRouteSynchronizer::new(table);
    let mut shell = ShellState::new(&widgets, sync, INITIAL_PATH, stores, themes, signal)?;

    widgets.wind.set_callback(move |_| {
        if app::event() == fltk::enums::Event::Close {
            sender.send(Message::WindowClose);
        }
    });
    widgets.wind.show();

    app::add_timeout3(COLOR_SCHEME_POLL_SECS, move |handle| {
        sender.send(Message::PollColorScheme);
        app::repeat_timeout3(COLOR_SCHEME_POLL_SECS, handle);
    });

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            shell.handle(msg)?;
        }
    }

    Ok(())
}
