use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, FixtureError>;

/// The `fixtures/` directory shipped alongside this crate.
pub fn fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    })
}

/// Read the fixture at `relative_path` (e.g. `core/variablesFlat.graphql`)
/// under `fixtures_dir`.
pub fn read_fixture<P: AsRef<Path>>(
    fixtures_dir: &Path,
    relative_path: P,
) -> Result<String> {
    let file_path = fixtures_dir.join(relative_path);
    if !file_path.is_file() {
        return Err(FixtureError::PathIsNotAFile(file_path));
    }

    let bytes = std::fs::read(&file_path)
        .map_err(|err| FixtureError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| FixtureError::FileDecodeError {
            file_path,
            err,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Fixture `{}` is not valid UTF-8: {err}", .file_path.display())]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read fixture `{}`: {err}", .file_path.display())]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Fixture path `{}` is not a file", .0.display())]
    PathIsNotAFile(PathBuf),
}
impl std::cmp::PartialEq for FixtureError {
    fn eq(&self, other: &Self) -> bool {
        use FixtureError::*;
        match (self, other) {
            (FileDecodeError {
                file_path: self_file_path,
                err: self_err,
            }, FileDecodeError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path == other_file_path
                && self_err == other_err
            },

            (FileReadError {
                file_path: self_file_path,
                err: self_err,
            }, FileReadError {
                file_path: other_file_path,
                err: other_err,
            }) => {
                self_file_path == other_file_path
                && self_err.kind() == other_err.kind()
            },

            (PathIsNotAFile(self_path), PathIsNotAFile(other_path)) => {
                self_path == other_path
            },

            _ => false,
        }
    }
}
