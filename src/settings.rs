// パス: src/settings.rs
// 役割: 設定ファイル (JSON) からヘッダ・プロンプトを読み込み SessionOptions へ変換する
// 意図: config モジュールが返すパスの利用側として、CLI 既定値を永続化できるようにする
// 関連ファイル: src/config.rs, src/prompt/session.rs, src/bin/lineprompt.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::prompt::SessionOptions;

/// 設定ファイル名。
pub const SETTINGS_FILE: &str = "settings.json";

/// 設定ファイルの読み込みで発生しうるエラー種別。
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("設定ファイルを読み込めません: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("設定ファイルの形式が不正です: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 永続化される対話設定。未指定の項目は無効として扱う。
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub header: Option<String>,
    pub prompt: Option<String>,
}

impl Settings {
    /// `<設定ディレクトリ>/<app_name>/settings.json` の場所を返す。
    pub fn location(app_name: &str) -> Option<PathBuf> {
        config::path(app_name, SETTINGS_FILE)
    }

    /// ファイルから読み込む。ファイルが無ければ既定値を返す。
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "settings file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 指定された値で上書きした設定を返す。`None` の項目は元の値を保つ。
    pub fn merge(self, header: Option<String>, prompt: Option<String>) -> Self {
        Self {
            header: header.or(self.header),
            prompt: prompt.or(self.prompt),
        }
    }

    /// セッション設定へ変換する。端末でなければプロンプトは外す。
    pub fn into_options(self, interactive: bool) -> SessionOptions {
        SessionOptions {
            header: self.header,
            prompt: self.prompt.filter(|_| interactive),
        }
    }
}
