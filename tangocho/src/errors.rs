//! エラー型の定義
//!
//! このモジュールは、Tangochoライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Tangocho専用のResult型
///
/// エラー型としてデフォルトで[`TangochoError`]を使用します。
pub type Result<T, E = TangochoError> = std::result::Result<T, E>;

/// Tangochoのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// 入力ファイルの読み込みに関するエラーは実行全体を中断する致命的なものであり、
/// 個々のエントリの変換に関する問題はエラーとして扱われず、実行統計に集計されます。
#[derive(Debug, thiserror::Error)]
pub enum TangochoError {
    /// 入力ファイルが見つからないエラー
    ///
    /// 指定されたパスに辞書ファイルが存在しない場合に発生します。
    #[error("The source file '{0}' was not found.")]
    SourceNotFound(PathBuf),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    /// 辞書ファイルが期待される構造として解析できない場合に発生します。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 標準I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// JSONシリアライゼーションエラー
    ///
    /// [`serde_json::Error`]のエラーバリアント。
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// 一時ファイルの永続化エラー
    ///
    /// [`tempfile::PersistError`](tempfile::PersistError)のエラーバリアント。
    #[error(transparent)]
    PathPersist(#[from] tempfile::PersistError),
}

impl TangochoError {
    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }
}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}
