//! Push-side discovery against fixture trees.

use std::fs;
use std::path::{Path, PathBuf};

use engine::{FileDiscoverer, Source, SourceParams, TraversalMode, traversal_mode};
use locales::{FileFormat, RemoteLocale, TagSet};
use patterns::PathPattern;

fn write(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, b"---\n").expect("write");
}

fn relative_paths(root: &Path, files: &[locales::LocaleFile]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|file| {
            file.path
                .strip_prefix(root)
                .expect("discovered under root")
                .to_path_buf()
        })
        .collect()
}

#[test]
fn recursive_pattern_discovers_the_fixture_tree() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "config/locales/application.en.yml");
    write(root, "config/locales/devise.en.yml");
    write(root, "config/locales/landing.en.yml");
    // Outside the pattern: wrong extension and wrong directory.
    write(root, "config/locales/application.de.json");
    write(root, "config/initializers/locale.en.yml");

    let source = Source::new(
        "./config/locales/**/*.en.yml",
        None,
        SourceParams::default(),
    )
    .expect("valid source");
    let files = source.discover(root).expect("discovery succeeds");

    assert_eq!(
        relative_paths(root, &files),
        vec![
            PathBuf::from("config/locales/application.en.yml"),
            PathBuf::from("config/locales/devise.en.yml"),
            PathBuf::from("config/locales/landing.en.yml"),
        ]
    );
}

#[test]
fn recursive_pattern_descends_into_subdirectories() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "config/locales/admin/users.en.yml");
    write(root, "config/locales/app.en.yml");

    let source = Source::new(
        "./config/locales/**/*.en.yml",
        None,
        SourceParams::default(),
    )
    .expect("valid source");
    let files = source.discover(root).expect("discovery succeeds");

    assert_eq!(
        relative_paths(root, &files),
        vec![
            PathBuf::from("config/locales/admin/users.en.yml"),
            PathBuf::from("config/locales/app.en.yml"),
        ]
    );
}

#[test]
fn placeholder_pattern_extracts_locale_codes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "config/locales/de/app.yml");
    write(root, "config/locales/en/app.yml");
    // Deeper than the pattern reaches.
    write(root, "config/locales/en/nested/app.yml");

    let source = Source::new(
        "./config/locales/<locale_code>/app.yml",
        None,
        SourceParams::default(),
    )
    .expect("valid source");
    let files = source.discover(root).expect("discovery succeeds");

    let codes: Vec<&str> = files.iter().map(|file| file.locale_code.as_str()).collect();
    assert_eq!(codes, vec!["de", "en"]);
    assert!(files.iter().all(|file| file.locale_name.is_empty()));
    assert!(files.iter().all(|file| !file.remote_exists));
}

#[test]
fn literal_pattern_names_exactly_one_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "config/locales/en.yml");

    let source = Source::new("./config/locales/en.yml", None, SourceParams::default())
        .expect("valid source");
    let files = source.discover(root).expect("discovery succeeds");

    assert_eq!(
        relative_paths(root, &files),
        vec![PathBuf::from("config/locales/en.yml")]
    );
    assert!(files[0].locale_code.is_empty());
}

#[test]
fn literal_pattern_does_not_consult_the_filesystem() {
    let temp = tempfile::tempdir().expect("tempdir");

    let source = Source::new("./config/locales/en.yml", None, SourceParams::default())
        .expect("valid source");
    let files = source.discover(temp.path()).expect("discovery succeeds");

    // The candidate is produced either way; a missing file surfaces at
    // upload time.
    assert_eq!(files.len(), 1);
}

#[test]
fn unresolvable_candidates_are_skipped_not_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "en_en.yml");
    write(root, "en_foo.yml");

    // The repeated placeholder is rejected by source validation, so drive
    // the discoverer directly the way externally matched glob results
    // would reach it.
    let pattern = PathPattern::parse("<locale_code>_<locale_code>.yml").expect("compiles");
    let discoverer = FileDiscoverer::new(&pattern, root, None);
    let files = discoverer.discover().expect("discovery succeeds");

    assert_eq!(relative_paths(root, &files), vec![PathBuf::from("en_en.yml")]);
    assert_eq!(files[0].locale_code, "en");
}

#[test]
fn recursive_walks_filter_by_format_extension() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "locales/en.yml");
    write(root, "locales/en.json");

    let format = FileFormat::new("yml", "yml");
    let pattern = PathPattern::parse("./locales/**/*").expect("compiles");
    let discoverer = FileDiscoverer::new(&pattern, root, Some(&format));
    let files = discoverer.discover().expect("discovery succeeds");

    assert_eq!(relative_paths(root, &files), vec![PathBuf::from("locales/en.yml")]);
    assert_eq!(files[0].file_format, "yml");
}

#[test]
fn traversal_mode_derivation() {
    let literal = PathPattern::parse("./config/en.yml").expect("compiles");
    let single = PathPattern::parse("./config/<locale_code>.yml").expect("compiles");
    let recursive = PathPattern::parse("./config/**/*.yml").expect("compiles");

    assert_eq!(traversal_mode(&literal), TraversalMode::Literal);
    assert_eq!(traversal_mode(&single), TraversalMode::Single);
    assert_eq!(traversal_mode(&recursive), TraversalMode::Recursive);
}

#[test]
fn discovered_files_correlate_against_the_remote_list() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "locales/de.yml");
    write(root, "locales/fr.yml");

    let source = Source::new("./locales/<locale_code>.yml", None, SourceParams::default())
        .expect("valid source");
    let mut files = source.discover(root).expect("discovery succeeds");

    let remotes = vec![RemoteLocale {
        id: "id-de".into(),
        name: "German".into(),
        code: "de".into(),
    }];
    source.correlate(&mut files, &remotes);

    let de = files.iter().find(|file| file.locale_code == "de").expect("de");
    assert!(de.remote_exists);
    assert_eq!(de.locale_id.as_deref(), Some("id-de"));
    assert!(!source.should_create_locale(de));

    let fr = files.iter().find(|file| file.locale_code == "fr").expect("fr");
    assert!(!fr.remote_exists);
    assert!(fr.locale_id.is_none());
    assert!(source.should_create_locale(fr));
}

#[test]
fn upload_tags_merge_the_resolved_tag() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "checkout/de.yml");

    let params = SourceParams {
        locale_id: None,
        tags: TagSet::parse("release"),
    };
    let source = Source::new("./<tag>/<locale_code>.yml", None, params).expect("valid source");
    let files = source.discover(root).expect("discovery succeeds");

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].tag, "checkout");
    assert_eq!(source.upload_tags(&files[0]).as_slice(), ["release", "checkout"]);
}
