use crate::app::command::Command;
use crate::domain::models::CommandGroup;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Visibility ---
    TogglePalette, // Global chord, delivered in every mode
    OpenPalette,
    ClosePalette,
    ClickOutside, // Pointer pressed outside the panel
    CancelMode,   // ESC: leave parameter entry, or close
    FocusNext,    // Tab / BackTab

    // --- Query ---
    QueryInput(crossterm::event::KeyEvent), // Editing key for the query field
    SetQuery(String),                       // Replace the query outright

    // --- Navigation ---
    SelectNext,
    SelectPrev,
    SelectIndex(usize), // Pointer hover

    // --- Execution ---
    Execute,               // Enter
    ActivateResult(usize), // Pointer click on a result row

    // --- Command Sources ---
    RegisterGroup(CommandGroup),
    UnregisterGroup(String),

    // --- Host Page ---
    ScrollPage(i16),

    // --- Async Results ---
    ExecutionFinished {
        command_id: String,
        outcome: Result<(), String>,
    },
}
