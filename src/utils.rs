//! Repository URL classification helpers

use std::path::Path;

/// Check if a path is a local filesystem path (not a remote URL)
///
/// Returns true for:
/// - Absolute paths on Unix: /path/to/repo
/// - Absolute paths on Windows: C:\path\to\repo or C:/path/to/repo
/// - Relative paths: ./path or ../path
/// - UNC paths on Windows: \\server\share
///
/// Returns false for:
/// - SSH URLs: git@github.com:user/repo.git
/// - HTTPS URLs: <https://github.com/user/repo.git>
pub fn is_local_path(path: &str) -> bool {
  if path.starts_with("./") || path.starts_with("../") {
    return true;
  }

  // Windows drive letter; must run before the URL checks since it contains ':'
  let bytes = path.as_bytes();
  if bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && (bytes[2] == b'\\' || bytes[2] == b'/')
  {
    return true;
  }

  if path.starts_with("\\\\") {
    return true;
  }

  if path.starts_with('/') && !path.contains("://") && !path.contains('@') {
    return true;
  }

  if path.contains("://") || path.contains('@') {
    return false;
  }

  Path::new(path).is_absolute()
}

/// Check if a URL looks like a git remote the release engine can push to
///
/// Accepts ssh (`git@host:o/r.git`, `ssh://`), http(s), `git+https://` /
/// `git+ssh://` forms used in package.json, `file://` URLs and local paths.
pub fn is_valid_remote_url(url: &str) -> bool {
  if url.is_empty() || url.chars().any(char::is_whitespace) {
    return false;
  }

  const SCHEMES: [&str; 6] = ["ssh://", "https://", "http://", "git://", "git+https://", "git+ssh://"];
  if let Some(rest) = SCHEMES.iter().find_map(|s| url.strip_prefix(s)) {
    return !rest.is_empty() && !rest.starts_with('/');
  }

  // file:// may omit the host (file:///srv/git/r.git)
  if let Some(rest) = url.strip_prefix("file://") {
    return rest.contains('/') && rest.len() > 1;
  }

  // scp-like syntax: user@host:path
  if let Some((user_host, repo)) = url.split_once(':')
    && let Some((user, host)) = user_host.split_once('@')
  {
    return !user.is_empty() && !host.is_empty() && !repo.is_empty();
  }

  is_local_path(url)
}
