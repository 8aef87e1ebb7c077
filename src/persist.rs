use std::path::Path;

/// Writes `contents` verbatim to `path`, creating the file if absent and
/// truncating it otherwise. The handle is closed on all paths.
pub(crate) async fn persist(path: &Path, contents: &[u8]) -> crate::Result<()> {
  tokio::fs::write(path, contents).await?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use crate::persist::persist;

  #[tokio::test]
  async fn writes_exact_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.txt");
    persist(&path, b"hello").await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"hello");
  }

  #[tokio::test]
  async fn second_run_overwrites_completely() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.txt");
    persist(&path, &[0; 128]).await.unwrap();
    persist(&path, b"hi").await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"hi");
  }

  #[tokio::test]
  async fn propagates_filesystem_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("test.txt");
    assert!(persist(&path, b"hello").await.is_err());
  }
}
