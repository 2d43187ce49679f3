use crate::domain::models::{CommandArgs, CommandRecord};

/// Side effects requested by the reducer, carried out by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Palette became visible: remember host focus, lock page scroll, focus the query.
    Opened,
    /// Palette hidden: unlock page scroll, give focus back.
    Closed,
    RefocusQuery,
    FocusNextHost,
    ScrollPage(i16),
    Invoke {
        command: CommandRecord,
        args: Option<CommandArgs>,
    },
}
