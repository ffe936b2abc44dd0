use serde::{Deserialize, Serialize};

use crate::condition::ConditionKind;

/// The kind of a form field input, determining its widget and value semantics.
///
/// This set is closed: the catalog of applicable conditions and the
/// evaluator's dispatch are paired invariants, so adding an input kind and
/// deciding its conditions is a single simultaneous change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Textarea,
    Email,
    Folder,
    Note,
    Tel,
    Slider,
    Number,
    Toggle,
    Date,
    Time,
    Datetime,
    Select,
    Multiselect,
    Tag,
    Dataview,
    DocumentBlock,
    MarkdownBlock,
    Image,
    File,
}

impl InputKind {
    /// The conditions a field of this kind may declare against a dependency.
    #[must_use]
    pub fn available_conditions(&self) -> &'static [ConditionKind] {
        use ConditionKind::*;

        const STRING: &[ConditionKind] = &[IsSet, StartsWith, EndsWith, IsExactly, Contains];
        const NUMERIC: &[ConditionKind] = &[IsSet, Above, AboveOrEqual, Below, BelowOrEqual, Exactly];
        const PRESENCE: &[ConditionKind] = &[IsSet];

        match self {
            Self::Text | Self::Textarea | Self::Email | Self::Folder | Self::Note | Self::Tel => {
                STRING
            }
            Self::Slider | Self::Number => NUMERIC,
            Self::Toggle => &[Boolean],
            Self::Date | Self::Time | Self::Datetime => PRESENCE,
            // Select values are always set, so no IsSet condition.
            Self::Select => &[StartsWith, EndsWith, IsExactly, Contains],
            Self::Multiselect
            | Self::Tag
            | Self::Dataview
            | Self::DocumentBlock
            | Self::MarkdownBlock => &[],
            Self::Image | Self::File => PRESENCE,
        }
    }

    /// Whether fields of this kind can be the target of dependency conditions.
    #[must_use]
    pub fn supports_conditions(&self) -> bool {
        !self.available_conditions().is_empty()
    }

    /// Whether this kind carries a string value.
    #[must_use]
    pub fn is_text_based(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Textarea | Self::Email | Self::Folder | Self::Note | Self::Tel
        )
    }

    /// Whether this kind carries a numeric value.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Slider | Self::Number)
    }

    /// Whether this kind deals with date/time values.
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Datetime)
    }

    /// String identifier for serialization/logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Folder => "folder",
            Self::Note => "note",
            Self::Tel => "tel",
            Self::Slider => "slider",
            Self::Number => "number",
            Self::Toggle => "toggle",
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Tag => "tag",
            Self::Dataview => "dataview",
            Self::DocumentBlock => "document_block",
            Self::MarkdownBlock => "markdown_block",
            Self::Image => "image",
            Self::File => "file",
        }
    }
}

/// All input kinds, in declaration order. Handy for catalog-wide checks.
pub const ALL_INPUT_KINDS: &[InputKind] = &[
    InputKind::Text,
    InputKind::Textarea,
    InputKind::Email,
    InputKind::Folder,
    InputKind::Note,
    InputKind::Tel,
    InputKind::Slider,
    InputKind::Number,
    InputKind::Toggle,
    InputKind::Date,
    InputKind::Time,
    InputKind::Datetime,
    InputKind::Select,
    InputKind::Multiselect,
    InputKind::Tag,
    InputKind::Dataview,
    InputKind::DocumentBlock,
    InputKind::MarkdownBlock,
    InputKind::Image,
    InputKind::File,
];
