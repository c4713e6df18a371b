//! Screen enum and main menu
//!
//! Defines the screen being displayed and the options offered on the main screen.

/// Current screen being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing menu
    #[default]
    Main,
    /// Logger install confirmation
    Install,
    /// Log files of the local project or of a selected global project
    LogList,
    /// Formatted content of one log file
    LogView,
    /// Retention setting and logger configuration
    Settings,
    /// Projects found under the global log root
    GlobalProjectSelect,
}

impl Screen {
    /// Title used in the header breadcrumb
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Main => "Home",
            Screen::Install => "Install",
            Screen::LogList => "Logs",
            Screen::LogView => "View",
            Screen::Settings => "Settings",
            Screen::GlobalProjectSelect => "Global Projects",
        }
    }
}

/// Options on the main screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Install,
    ViewLogs,
    GlobalLogs,
    Settings,
    Quit,
}

/// Main menu in display order; the cursor indexes into this
pub const MAIN_MENU: [MenuItem; 5] = [
    MenuItem::Install,
    MenuItem::ViewLogs,
    MenuItem::GlobalLogs,
    MenuItem::Settings,
    MenuItem::Quit,
];

impl MenuItem {
    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Install => "Install/Setup Logger",
            MenuItem::ViewLogs => "View Logs",
            MenuItem::GlobalLogs => "View All Logs (Global)",
            MenuItem::Settings => "Settings",
            MenuItem::Quit => "Quit",
        }
    }

    /// Menu item at a cursor position
    pub fn at(index: usize) -> Option<MenuItem> {
        MAIN_MENU.get(index).copied()
    }
}
