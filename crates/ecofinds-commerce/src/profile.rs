//! The signed-in user's profile and its read-only/editing toggle.

use crate::error::CommerceError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Profile record shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub location: String,
}

impl UserProfile {
    /// "January 2024".
    pub fn member_since(&self) -> String {
        self.join_date.format("%B %Y").to_string()
    }

    /// First character of the username for the avatar fallback.
    pub fn avatar_initial(&self) -> String {
        self.username.chars().next().map(String::from).unwrap_or_default()
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::Email => &self.email,
            ProfileField::Location => &self.location,
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Username => &mut self.username,
            ProfileField::Email => &mut self.email,
            ProfileField::Location => &mut self.location,
        }
    }
}

/// Profile fields editable from the dashboard. The join date is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Username,
    Email,
    Location,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Username,
        ProfileField::Email,
        ProfileField::Location,
    ];

    /// Input id.
    pub fn id(&self) -> &'static str {
        match self {
            ProfileField::Username => "username",
            ProfileField::Email => "email",
            ProfileField::Location => "location",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Username => "Username",
            ProfileField::Email => "Email",
            ProfileField::Location => "Location",
        }
    }
}

impl FromStr for ProfileField {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| CommerceError::UnknownProfileField(s.to_string()))
    }
}

/// Presentation state of the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    ReadOnly,
    Editing,
}

/// Holds the profile and whether it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    profile: UserProfile,
    mode: EditMode,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            mode: EditMode::ReadOnly,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Switch to editing. Already editing is a no-op.
    pub fn begin_edit(&mut self) {
        self.mode = EditMode::Editing;
    }

    /// Change one field. Ignored unless editing; returns whether applied.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        *self.profile.field_mut(field) = value.into();
        true
    }

    /// Commit the edits and return to read-only. Returns whether a save
    /// happened, i.e. whether the editor was editing.
    pub fn save(&mut self) -> bool {
        let was_editing = self.is_editing();
        self.mode = EditMode::ReadOnly;
        was_editing
    }

    /// The single Edit/Save control: edits when read-only, saves when
    /// editing. Returns the new mode.
    pub fn toggle(&mut self) -> EditMode {
        match self.mode {
            EditMode::ReadOnly => self.begin_edit(),
            EditMode::Editing => {
                self.save();
            }
        }
        self.mode
    }
}
