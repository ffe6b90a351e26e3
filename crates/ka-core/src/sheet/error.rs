/// 面板构建错误：违反了 builder 的追加顺序
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetBuildError {
    #[error("cannot add a field before any user info was added to sheet '{title}'")]
    NoUserInfo { title: String },
}
