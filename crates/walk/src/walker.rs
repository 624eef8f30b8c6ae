use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::entry::WalkEntry;
use crate::error::WalkError;

/// Depth-first iterator over the regular files below a root directory.
///
/// Directories are traversal state and never yielded. Sibling entries are
/// visited in lexicographic order, so the sequence is deterministic
/// regardless of the underlying filesystem's iteration order.
#[derive(Debug)]
pub struct Walker {
    follow_symlinks: bool,
    max_depth: Option<usize>,
    stack: Vec<DirFrame>,
    visited: HashSet<PathBuf>,
    finished: bool,
}

impl Walker {
    pub(crate) fn start(
        root: PathBuf,
        follow_symlinks: bool,
        max_depth: Option<usize>,
    ) -> Result<Self, WalkError> {
        let mut visited = HashSet::new();
        if follow_symlinks {
            let canonical = fs::canonicalize(&root)
                .map_err(|error| WalkError::metadata(root.clone(), error))?;
            visited.insert(canonical);
        }
        let frame = DirFrame::open(root, PathBuf::new(), 0)?;
        Ok(Self {
            follow_symlinks,
            max_depth,
            stack: vec![frame],
            visited,
            finished: false,
        })
    }

    fn descend(&mut self, full: PathBuf, relative: PathBuf, depth: usize) -> Result<(), WalkError> {
        if self.max_depth.is_some_and(|bound| depth >= bound) {
            return Ok(());
        }
        if self.follow_symlinks {
            let canonical = fs::canonicalize(&full)
                .map_err(|error| WalkError::metadata(full.clone(), error))?;
            if !self.visited.insert(canonical) {
                debug!(path = %full.display(), "skipping already visited directory");
                return Ok(());
            }
        }
        let frame = DirFrame::open(full, relative, depth)?;
        self.stack.push(frame);
        Ok(())
    }

    fn step(&mut self) -> Result<Option<WalkEntry>, WalkError> {
        loop {
            let (full, relative, depth) = {
                let Some(frame) = self.stack.last_mut() else {
                    return Ok(None);
                };
                let Some(name) = frame.next_name() else {
                    self.stack.pop();
                    continue;
                };
                (
                    frame.full.join(&name),
                    frame.relative.join(&name),
                    frame.depth + 1,
                )
            };

            let metadata = fs::symlink_metadata(&full)
                .map_err(|error| WalkError::metadata(full.clone(), error))?;
            let file_type = metadata.file_type();

            if file_type.is_file() {
                return Ok(Some(WalkEntry {
                    full_path: full,
                    relative_path: relative,
                    depth,
                }));
            }
            if file_type.is_dir() {
                self.descend(full, relative, depth)?;
                continue;
            }
            if file_type.is_symlink() && self.follow_symlinks {
                match fs::metadata(&full) {
                    Ok(target) if target.is_dir() => {
                        self.descend(full, relative, depth)?;
                    }
                    Ok(_) => {
                        return Ok(Some(WalkEntry {
                            full_path: full,
                            relative_path: relative,
                            depth,
                        }));
                    }
                    Err(error) => {
                        debug!(path = %full.display(), %error, "skipping broken symlink");
                    }
                }
                continue;
            }
            debug!(path = %full.display(), "skipping non-file entry");
        }
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.step() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => None,
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

#[derive(Debug)]
struct DirFrame {
    full: PathBuf,
    relative: PathBuf,
    names: Vec<OsString>,
    index: usize,
    depth: usize,
}

impl DirFrame {
    fn open(full: PathBuf, relative: PathBuf, depth: usize) -> Result<Self, WalkError> {
        let mut names = Vec::new();
        let entries =
            fs::read_dir(&full).map_err(|error| WalkError::read_dir(full.clone(), error))?;
        for entry in entries {
            let entry = entry.map_err(|error| WalkError::read_dir(full.clone(), error))?;
            names.push(entry.file_name());
        }
        names.sort();
        Ok(Self {
            full,
            relative,
            names,
            index: 0,
            depth,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        let name = self.names.get(self.index)?.clone();
        self.index += 1;
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::WalkBuilder;
    use crate::error::WalkErrorKind;

    fn collect(walker: Walker) -> Vec<PathBuf> {
        walker
            .map(|entry| entry.expect("walk entry").relative_path().to_path_buf())
            .collect()
    }

    #[test]
    fn missing_root_is_an_error() {
        let error = WalkBuilder::new("/nonexistent/walk/root")
            .build()
            .expect_err("must fail");
        assert!(matches!(error.kind(), WalkErrorKind::Root { .. }));
    }

    #[test]
    fn file_root_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("en.yml");
        fs::write(&file, b"en:\n").expect("write");

        let error = WalkBuilder::new(&file).build().expect_err("must fail");
        assert!(matches!(error.kind(), WalkErrorKind::NotADirectory { .. }));
    }

    #[test]
    fn yields_files_in_sorted_depth_first_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::create_dir_all(root.join("b/nested")).expect("mkdir");
        fs::write(root.join("b/nested/deep.yml"), b"x").expect("write");
        fs::write(root.join("b/first.yml"), b"x").expect("write");
        fs::write(root.join("a.yml"), b"x").expect("write");

        let walker = WalkBuilder::new(root).build().expect("build");
        assert_eq!(
            collect(walker),
            vec![
                PathBuf::from("a.yml"),
                PathBuf::from("b/first.yml"),
                PathBuf::from("b/nested/deep.yml"),
            ]
        );
    }

    #[test]
    fn directories_are_not_yielded() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("empty")).expect("mkdir");

        let walker = WalkBuilder::new(temp.path()).build().expect("build");
        assert!(collect(walker).is_empty());
    }

    #[test]
    fn max_depth_bounds_descent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::create_dir_all(root.join("one/two")).expect("mkdir");
        fs::write(root.join("shallow.yml"), b"x").expect("write");
        fs::write(root.join("one/middle.yml"), b"x").expect("write");
        fs::write(root.join("one/two/deep.yml"), b"x").expect("write");

        let walker = WalkBuilder::new(root).max_depth(2).build().expect("build");
        assert_eq!(
            collect(walker),
            vec![PathBuf::from("one/middle.yml"), PathBuf::from("shallow.yml")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_skipped_by_default() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("root");
        let target = temp.path().join("target");
        fs::create_dir(&root).expect("mkdir");
        fs::create_dir(&target).expect("mkdir");
        fs::write(target.join("inner.yml"), b"x").expect("write");
        symlink(&target, root.join("link")).expect("symlink");

        let walker = WalkBuilder::new(&root).build().expect("build");
        assert!(collect(walker).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_followed_when_enabled() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("root");
        let target = temp.path().join("target");
        fs::create_dir(&root).expect("mkdir");
        fs::create_dir(&target).expect("mkdir");
        fs::write(target.join("inner.yml"), b"x").expect("write");
        symlink(&target, root.join("link")).expect("symlink");

        let walker = WalkBuilder::new(&root)
            .follow_symlinks(true)
            .build()
            .expect("build");
        assert_eq!(collect(walker), vec![PathBuf::from("link/inner.yml")]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_cycles_terminate() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("root");
        fs::create_dir(&root).expect("mkdir");
        fs::write(root.join("file.yml"), b"x").expect("write");
        symlink(&root, root.join("loop")).expect("symlink");

        let walker = WalkBuilder::new(&root)
            .follow_symlinks(true)
            .build()
            .expect("build");
        assert_eq!(collect(walker), vec![PathBuf::from("file.yml")]);
    }
}
