use crate::domain::action::CommandAction;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Parameter id -> submitted value.
pub type CommandArgs = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterKind {
    #[default]
    Text,
    Number,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParameter {
    pub id: String,
    pub label: String,
    pub kind: ParameterKind,
    pub options: Vec<ParameterOption>,
    pub required: bool,
}

impl CommandParameter {
    #[must_use]
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ParameterKind::Text,
            options: Vec::new(),
            required: false,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(ParameterOption {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Maps submitted text to the value an action receives. Select inputs
    /// match an option's label or value ignoring case; numbers must parse.
    pub fn resolve(&self, input: &str) -> anyhow::Result<String> {
        let input = input.trim();
        if input.is_empty() && self.required {
            anyhow::bail!("{} is required", self.label);
        }
        match self.kind {
            ParameterKind::Text => Ok(input.to_string()),
            ParameterKind::Number => input
                .parse::<f64>()
                .map(|_| input.to_string())
                .map_err(|_| anyhow::anyhow!("{} must be a number, got `{input}`", self.label)),
            ParameterKind::Select => self
                .options
                .iter()
                .find(|o| o.label.eq_ignore_ascii_case(input) || o.value.eq_ignore_ascii_case(input))
                .map(|o| o.value.clone())
                .ok_or_else(|| anyhow::anyhow!("`{input}` is not a valid {}", self.label)),
        }
    }
}

/// An invocable entry shown in the palette.
///
/// Records compare by metadata only; the action is opaque.
#[derive(Clone)]
pub struct CommandRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub category: Option<String>,
    pub shortcut: Vec<String>, // e.g. ["mod", "k"]
    pub parameters: Vec<CommandParameter>,
    pub action: Arc<dyn CommandAction>,
}

impl CommandRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        action: Arc<dyn CommandAction>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            keywords: Vec::new(),
            category: None,
            shortcut: Vec::new(),
            parameters: Vec::new(),
            action,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_shortcut<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shortcut = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: CommandParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Only the first declared parameter is ever collected.
    #[must_use]
    pub fn first_parameter(&self) -> Option<&CommandParameter> {
        self.parameters.first()
    }

    /// Title, description and keywords joined into the secondary search text.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or_default(),
            self.keywords.join(" ")
        )
    }
}

impl fmt::Debug for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRecord")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("keywords", &self.keywords)
            .field("category", &self.category)
            .field("shortcut", &self.shortcut)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CommandRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.description == other.description
            && self.keywords == other.keywords
            && self.category == other.category
            && self.shortcut == other.shortcut
            && self.parameters == other.parameters
    }
}

/// A ranked match. `matches` are half-open char ranges into `command.title`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub command: CommandRecord,
    pub score: f64,
    pub matches: Vec<(usize, usize)>,
}

/// A named set of commands contributed by one source.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandGroup {
    pub name: String,
    pub commands: Vec<CommandRecord>,
}

impl CommandGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, commands: Vec<CommandRecord>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }
}
