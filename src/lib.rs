//! transtext-sync
//!
//! TRANSTEXT 形式 (タブ・引用符区切りの CSV 方言) の文字列カタログと、
//! gettext ベースの翻訳サービスの間でカタログを相互変換・同期するツール

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod gettext;
pub mod locale;
pub mod transifex;
pub mod transtext;

// Catalog と CliError を再エクスポート
pub use catalog::Catalog;
pub use error::CliError;
