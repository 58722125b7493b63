// パス: src/config.rs
// 役割: アプリケーションごとの設定ディレクトリ・設定ファイルのパスを組み立てる
// 意図: OS 標準の設定ディレクトリを優先し、無ければホームディレクトリへ退避する
// 関連ファイル: src/settings.rs, src/bin/lineprompt.rs
//! 設定ファイルの置き場所の解決。
//!
//! パスを組み立てるだけで、ディレクトリやファイルは作らない。
//! 名前にパス区切り文字が含まれる場合や、基準ディレクトリが得られない場合は
//! エラーではなく `None` を返す。

use std::path::{is_separator, PathBuf};

/// `<設定ディレクトリ>/<app_name>` を返す。
///
/// # Examples
/// ```
/// assert_eq!(lineprompt::config::dir("a/b"), None);
/// ```
pub fn dir(app_name: &str) -> Option<PathBuf> {
    dir_with(app_name, dirs::config_dir, dirs::home_dir)
}

/// `<設定ディレクトリ>/<app_name>/<file_name>` を返す。`file_name` は空であってはならない。
pub fn path(app_name: &str, file_name: &str) -> Option<PathBuf> {
    path_with(app_name, file_name, dirs::config_dir, dirs::home_dir)
}

/// 基準ディレクトリの取得方法を差し替えられる `dir`。
pub fn dir_with<C, H>(app_name: &str, config_dir: C, home_dir: H) -> Option<PathBuf>
where
    C: FnOnce() -> Option<PathBuf>,
    H: FnOnce() -> Option<PathBuf>,
{
    if contains_separator(app_name) {
        return None;
    }
    let base = config_dir()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| home_dir().filter(|p| !p.as_os_str().is_empty()))?;
    if app_name.is_empty() {
        return Some(base);
    }
    Some(base.join(app_name))
}

/// 基準ディレクトリの取得方法を差し替えられる `path`。
pub fn path_with<C, H>(
    app_name: &str,
    file_name: &str,
    config_dir: C,
    home_dir: H,
) -> Option<PathBuf>
where
    C: FnOnce() -> Option<PathBuf>,
    H: FnOnce() -> Option<PathBuf>,
{
    if file_name.is_empty() || contains_separator(file_name) {
        return None;
    }
    let dir = dir_with(app_name, config_dir, home_dir)?;
    Some(dir.join(file_name))
}

/// Windows では `\` も区切り文字として扱う。
fn contains_separator(name: &str) -> bool {
    name.chars().any(is_separator)
}

#[cfg(test)]
mod tests {
    use super::{contains_separator, dir_with, path_with};
    use std::path::PathBuf;

    fn some(p: &str) -> impl FnOnce() -> Option<PathBuf> + '_ {
        move || Some(PathBuf::from(p))
    }

    fn none() -> Option<PathBuf> {
        None
    }

    #[test]
    /// 設定ディレクトリが得られればホームディレクトリより優先されることを確認する。
    fn config_dir_takes_precedence_over_home() {
        let dir = dir_with("app", some("/cfg"), some("/home/u"));
        assert_eq!(dir, Some(PathBuf::from("/cfg").join("app")));
    }

    #[test]
    /// 設定ディレクトリが無い・空の場合にホームへ退避することを検証する。
    fn falls_back_to_home_dir() {
        let dir = dir_with("app", none, some("/home/u"));
        assert_eq!(dir, Some(PathBuf::from("/home/u").join("app")));
        let dir = dir_with("app", some(""), some("/home/u"));
        assert_eq!(dir, Some(PathBuf::from("/home/u").join("app")));
    }

    #[test]
    /// どちらの基準ディレクトリも無ければ結果も無いことを確かめる。
    fn no_base_directory_yields_none() {
        assert_eq!(dir_with("app", none, none), None);
        assert_eq!(path_with("app", "f.json", none, none), None);
    }

    #[test]
    /// 区切り文字を含む名前や空のファイル名が拒否されることを確認する。
    fn rejects_names_with_separators() {
        assert_eq!(dir_with("a/b", some("/cfg"), none), None);
        assert_eq!(path_with("a/b", "f", some("/cfg"), none), None);
        assert_eq!(path_with("app", "x/f", some("/cfg"), none), None);
        assert_eq!(path_with("app", "", some("/cfg"), none), None);
    }

    #[test]
    /// アプリ名が空なら基準ディレクトリ直下を指すことを検証する。
    fn empty_app_name_uses_base_directory() {
        assert_eq!(dir_with("", some("/cfg"), none), Some(PathBuf::from("/cfg")));
        assert_eq!(
            path_with("", "f.json", some("/cfg"), none),
            Some(PathBuf::from("/cfg").join("f.json"))
        );
    }

    #[test]
    /// 組み立てたパスが `<基準>/<app>/<file>` になることを確認する。
    fn path_joins_app_and_file() {
        let p = path_with("app", "settings.json", some("/cfg"), none);
        assert_eq!(
            p,
            Some(PathBuf::from("/cfg").join("app").join("settings.json"))
        );
    }

    #[cfg(windows)]
    #[test]
    /// Windows ではバックスラッシュも区切り文字として扱われることを確かめる。
    fn backslash_is_a_separator_on_windows() {
        assert!(contains_separator("a\\b"));
    }

    #[test]
    /// 通常の名前は区切り文字を含まないと判定されることを確認する。
    fn plain_names_have_no_separator() {
        assert!(!contains_separator("lineprompt"));
        assert!(!contains_separator(""));
        assert!(contains_separator("a/b"));
    }
}
