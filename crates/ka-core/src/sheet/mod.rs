//! Accessory sheet data model
//! 附件面板数据模型
//!
//! One sheet is a title, an ordered list of [`UserInfo`] entries (each with
//! ordered fields) and an ordered list of [`FooterCommand`]s. Values are built
//! by the backend through [`AccessorySheetBuilder`] and are read-only after
//! [`AccessorySheetBuilder::build`].

mod builder;
mod error;

pub use builder::AccessorySheetBuilder;
pub use error::SheetBuildError;

use serde::{Deserialize, Serialize};

/// A single fillable value inside a [`UserInfo`], e.g. a username or a password.
/// 用户信息中的单个可填充字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoField {
    display_text: String,
    a11y_description: String,
    is_obfuscated: bool,
    selectable: bool,
}

impl UserInfoField {
    pub fn new(
        display_text: impl Into<String>,
        a11y_description: impl Into<String>,
        is_obfuscated: bool,
        selectable: bool,
    ) -> Self {
        Self {
            display_text: display_text.into(),
            a11y_description: a11y_description.into(),
            is_obfuscated,
            selectable,
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn a11y_description(&self) -> &str {
        &self.a11y_description
    }

    /// Whether the value is a secret that must be rendered masked.
    pub fn is_obfuscated(&self) -> bool {
        self.is_obfuscated
    }

    /// Whether tapping the field fills it into the focused input.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }
}

/// One grouped credential record (e.g. one account).
/// 一组凭据记录（例如一个账号）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    fields: Vec<UserInfoField>,
}

impl UserInfo {
    pub fn new(fields: Vec<UserInfoField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[UserInfoField] {
        &self.fields
    }

    pub(crate) fn push_field(&mut self, field: UserInfoField) {
        self.fields.push(field);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterCommand {
    display_text: String,
}

impl FooterCommand {
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}

/// Root aggregate for one sheet of suggestions.
/// 一个建议面板的根聚合。
///
/// Owns its entries and footer commands exclusively. Ordering is exactly the
/// order in which the backend appended them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorySheetData {
    title: String,
    #[serde(default)]
    user_info_list: Vec<UserInfo>,
    #[serde(default)]
    footer_commands: Vec<FooterCommand>,
}

impl AccessorySheetData {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn user_info_list(&self) -> &[UserInfo] {
        &self.user_info_list
    }

    pub fn footer_commands(&self) -> &[FooterCommand] {
        &self.footer_commands
    }

    /// Total number of fields across all entries.
    pub fn field_count(&self) -> usize {
        self.user_info_list.iter().map(|info| info.fields().len()).sum()
    }
}
