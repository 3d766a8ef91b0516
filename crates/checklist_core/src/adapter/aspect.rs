//! Display aspects, their values, and per-row capability flags.

/// Facet of display state requested by a surface for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    /// Text rendered in the row.
    Display,
    /// Checkbox state.
    Check,
    /// Background highlight hint.
    Background,
    /// Text offered to an inline editor.
    Edit,
}

impl Aspect {
    /// Stable name used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Check => "check",
            Self::Background => "background",
            Self::Edit => "edit",
        }
    }
}

/// Checkbox state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckState {
    Unchecked,
    Checked,
}

impl CheckState {
    pub fn from_finished(finished: bool) -> Self {
        if finished {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Opposite state, used by toggle intents.
    pub fn toggled(self) -> Self {
        match self {
            Self::Checked => Self::Unchecked,
            Self::Unchecked => Self::Checked,
        }
    }
}

/// Background highlight hint for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Row belongs to a finished record.
    Finished,
}

impl Highlight {
    /// Color name a surface may use to paint the hint.
    pub fn color(self) -> &'static str {
        match self {
            Self::Finished => "green",
        }
    }
}

/// Value carried in and out of the adapter for one aspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AspectValue {
    Text(String),
    Check(CheckState),
    Highlight(Highlight),
}

impl AspectValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_check(&self) -> Option<CheckState> {
        match self {
            Self::Check(state) => Some(*state),
            _ => None,
        }
    }

    pub fn as_highlight(&self) -> Option<Highlight> {
        match self {
            Self::Highlight(hint) => Some(*hint),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Interactions a surface may offer for a row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemFlags: u32 {
        /// Row can be selected.
        const SELECTABLE = 1 << 0;
        /// Row accepts interaction at all.
        const ENABLED = 1 << 1;
        /// Row text can be edited in place.
        const EDITABLE = 1 << 2;
        /// Row checkbox can be toggled by the user.
        const USER_CHECKABLE = 1 << 3;
    }
}

impl ItemFlags {
    /// Flags advertised for every existing to-do row.
    pub const TODO_ROW: Self = Self::SELECTABLE
        .union(Self::ENABLED)
        .union(Self::EDITABLE)
        .union(Self::USER_CHECKABLE);
}
