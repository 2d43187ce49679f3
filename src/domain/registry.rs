use crate::domain::models::{CommandGroup, CommandRecord};

/// Named command groups, kept in registration order.
///
/// Re-registering a name replaces that group in its original slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandRegistry {
    groups: Vec<CommandGroup>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, group: CommandGroup) {
        match self.groups.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    /// Returns false when no group was registered under `name`.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.name != name);
        self.groups.len() != before
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Flat list of every registered command, group by group.
    #[must_use]
    pub fn commands(&self) -> Vec<CommandRecord> {
        self.groups
            .iter()
            .flat_map(|g| g.commands.iter().cloned())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.commands.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
