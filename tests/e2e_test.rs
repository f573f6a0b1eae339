use diff_unmove::{HeaderMode, MoveFilter};
use git2::{DiffFormat, DiffOptions, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Test fixture for a git repository
struct Fixture {
    dir: TempDir,
    repo: Repository,
}

impl Fixture {
    /// Create a new empty repo with deterministic config
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("Failed to init repo");

        // Deterministic config
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        Self { dir, repo }
    }

    /// Write a file to the repo
    fn write_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Stage a file
    fn stage_file(&self, name: &str) {
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    /// Create a commit
    fn commit(&self, message: &str) {
        let sig = Signature::new(
            "Test User",
            "test@example.com",
            &git2::Time::new(1234567890, 0),
        )
        .unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        if self.repo.head().is_ok() {
            let parent = self.repo.head().unwrap().peel_to_commit().unwrap();
            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
                .unwrap();
        } else {
            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap();
        }
    }

    /// Unified diff text (zero context) between HEAD and the working tree
    fn workdir_patch(&self) -> String {
        let head = self.repo.head().unwrap().peel_to_tree().unwrap();
        let mut opts = DiffOptions::new();
        opts.context_lines(0);
        let diff = self
            .repo
            .diff_tree_to_workdir(Some(&head), Some(&mut opts))
            .expect("Failed to diff workdir");

        let mut patch = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            match line.origin() {
                '+' | '-' | ' ' => patch.push(line.origin()),
                _ => {}
            }
            patch.push_str(std::str::from_utf8(line.content()).unwrap());
            true
        })
        .unwrap();

        patch
    }
}

// =============================================================================
// Case 1: Moved Line Plus Genuine Edit
// =============================================================================

#[test]
fn case_01_move_cancels_but_edit_survives() {
    let fixture = Fixture::new();

    let initial = "\
alpha
moved line payload
bravo
charlie
old setting value
delta
";
    fixture.write_file("notes.txt", initial);
    fixture.stage_file("notes.txt");
    fixture.commit("initial");

    // Move one line to the end, edit another in place
    let modified = "\
alpha
bravo
charlie
new setting value
delta
moved line payload
";
    fixture.write_file("notes.txt", modified);

    let patch = fixture.workdir_patch();

    // Sanity: the raw patch reports the move as a remove/add pair
    assert!(patch.contains("-moved line payload"));
    assert!(patch.contains("+moved line payload"));

    let filtered = MoveFilter::new(HeaderMode::Keep).filter_str(&patch);

    // The move pair is gone, the real edit is not
    assert!(!filtered.contains("-moved line payload"));
    assert!(!filtered.contains("+moved line payload"));
    assert!(filtered.contains("-old setting value"));
    assert!(filtered.contains("+new setting value"));

    // Headers survive in Keep mode
    assert!(filtered.contains("--- a/notes.txt"));
    assert!(filtered.contains("+++ b/notes.txt"));
}

// =============================================================================
// Case 2: Pure Move Leaves No Change Lines
// =============================================================================

#[test]
fn case_02_pure_move_filters_to_noise_only() {
    let fixture = Fixture::new();

    fixture.write_file("list.txt", "one\ntwo\nthree\nfour\n");
    fixture.stage_file("list.txt");
    fixture.commit("initial");

    // Relocate "one" without changing anything else
    fixture.write_file("list.txt", "two\nthree\none\nfour\n");

    let patch = fixture.workdir_patch();
    let filtered = MoveFilter::new(HeaderMode::Keep).filter_str(&patch);

    // Only headers and context (diff/index/hunk lines) may remain
    for line in filtered.lines() {
        let is_header = line.starts_with("---") || line.starts_with("+++");
        assert!(
            is_header || (!line.starts_with('+') && !line.starts_with('-')),
            "unexpected change line survived: {line}"
        );
    }
}

// =============================================================================
// Case 3: Header-Less Mode Over a Real Patch
// =============================================================================

#[test]
fn case_03_no_headers_mode_drops_file_headers() {
    let fixture = Fixture::new();

    fixture.write_file("config.txt", "keep me\nstale entry\n");
    fixture.stage_file("config.txt");
    fixture.commit("initial");

    fixture.write_file("config.txt", "keep me\nfresh entry\n");

    let patch = fixture.workdir_patch();
    let filtered = MoveFilter::new(HeaderMode::Strip).filter_str(&patch);

    assert!(!filtered.contains("--- a/config.txt"));
    assert!(!filtered.contains("+++ b/config.txt"));
    assert!(filtered.contains("-stale entry"));
    assert!(filtered.contains("+fresh entry"));
}
