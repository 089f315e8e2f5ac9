/// User-intent actions produced by input mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Date navigation (the Ctrl+d / Ctrl+p / Ctrl+n chords, plus arrows)
    GoToToday,
    GoToPrev,
    GoToNext,

    // Calendar popover
    OpenCalendar,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    PrevMonth,
    NextMonth,
    DrillIn,
    NavigateBack,

    // Content viewport
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,

    // Chrome
    ToggleSidebar,
    ToggleHelp,
    CycleTheme,
    SaveConfig,

    Resize(u16, u16),
    Tick,
    None,
}
