//! Staged builder for [`AccessorySheetData`].
//!
//! The backend fills a sheet through an append-only protocol:
//! create sheet → add user info → add field to the last user info → add
//! footer command → build. Once built, the sheet cannot change.

use super::{AccessorySheetData, FooterCommand, SheetBuildError, UserInfo, UserInfoField};

#[derive(Debug, Clone)]
pub struct AccessorySheetBuilder {
    sheet: AccessorySheetData,
}

impl AccessorySheetBuilder {
    /// Start a new sheet with the given title.
    /// 创建带标题的新面板。
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            sheet: AccessorySheetData {
                title: title.into(),
                user_info_list: Vec::new(),
                footer_commands: Vec::new(),
            },
        }
    }

    /// Append an empty user info. Subsequent [`add_field`](Self::add_field)
    /// calls target it.
    pub fn add_user_info(&mut self) -> &mut Self {
        self.sheet.user_info_list.push(UserInfo::default());
        self
    }

    /// Append a field to the most recently added user info.
    ///
    /// # Errors / 错误
    ///
    /// Returns [`SheetBuildError::NoUserInfo`] if no user info was added yet.
    pub fn add_field(&mut self, field: UserInfoField) -> Result<&mut Self, SheetBuildError> {
        match self.sheet.user_info_list.last_mut() {
            Some(user_info) => {
                user_info.push_field(field);
                Ok(self)
            }
            None => Err(SheetBuildError::NoUserInfo {
                title: self.sheet.title.clone(),
            }),
        }
    }

    pub fn add_footer_command(&mut self, command: FooterCommand) -> &mut Self {
        self.sheet.footer_commands.push(command);
        self
    }

    /// Append a complete user info in one step.
    pub fn with_user_info(mut self, fields: Vec<UserInfoField>) -> Self {
        self.sheet.user_info_list.push(UserInfo::new(fields));
        self
    }

    pub fn with_footer_command(mut self, display_text: impl Into<String>) -> Self {
        self.sheet
            .footer_commands
            .push(FooterCommand::new(display_text));
        self
    }

    /// Finalize into an immutable sheet.
    pub fn build(self) -> AccessorySheetData {
        self.sheet
    }
}
