//! Pull-side expansion of patterns over remote locales and tags.

use std::path::{Path, PathBuf};

use engine::{EngineError, Target, TargetParams};
use locales::{RemoteLocale, TagSet};
use patterns::{PathPattern, Placeholder};

fn remotes() -> Vec<RemoteLocale> {
    vec![
        RemoteLocale {
            id: "id-en".into(),
            name: "English".into(),
            code: "en".into(),
        },
        RemoteLocale {
            id: "id-de".into(),
            name: "German".into(),
            code: "de".into(),
        },
    ]
}

fn paths(files: &[locales::LocaleFile]) -> Vec<&Path> {
    files.iter().map(|file| file.path.as_path()).collect()
}

#[test]
fn expands_the_cartesian_product_of_locales_and_tags() {
    let params = TargetParams {
        locale_id: None,
        tags: TagSet::parse("checkout,onboarding"),
    };
    let target =
        Target::new("./locales/<tag>/<locale_code>.yml", None, params).expect("valid target");

    let files = target
        .files(Path::new("/project"), &remotes())
        .expect("expansion succeeds");

    assert_eq!(
        paths(&files),
        vec![
            Path::new("/project/locales/checkout/en.yml"),
            Path::new("/project/locales/onboarding/en.yml"),
            Path::new("/project/locales/checkout/de.yml"),
            Path::new("/project/locales/onboarding/de.yml"),
        ]
    );
    assert!(files.iter().all(|file| file.remote_exists));
    assert_eq!(files[0].tag, "checkout");
    assert_eq!(files[0].locale_code, "en");
    assert_eq!(files[0].locale_id.as_deref(), Some("id-en"));
}

#[test]
fn without_tag_placeholder_each_locale_expands_once() {
    let params = TargetParams {
        locale_id: None,
        // Tags are configured but the pattern has no <tag>, so they do not
        // multiply the output.
        tags: TagSet::parse("checkout,onboarding"),
    };
    let target = Target::new("./locales/<locale_code>.yml", None, params).expect("valid target");

    let files = target
        .files(Path::new("/project"), &remotes())
        .expect("expansion succeeds");

    assert_eq!(
        paths(&files),
        vec![
            Path::new("/project/locales/en.yml"),
            Path::new("/project/locales/de.yml"),
        ]
    );
    assert!(files.iter().all(|file| file.tag.is_empty()));
}

#[test]
fn locale_name_placeholder_substitutes_the_name() {
    let target = Target::new(
        "./locales/<locale_name>.yml",
        None,
        TargetParams::default(),
    )
    .expect("valid target");

    let files = target
        .files(Path::new("/project"), &remotes())
        .expect("expansion succeeds");

    assert_eq!(
        paths(&files),
        vec![
            Path::new("/project/locales/English.yml"),
            Path::new("/project/locales/German.yml"),
        ]
    );
}

#[test]
fn explicit_identifier_selects_a_single_locale() {
    let params = TargetParams {
        locale_id: Some("de".to_owned()),
        tags: TagSet::default(),
    };
    let target = Target::new("./locales/default.yml", None, params).expect("valid target");

    let files = target
        .files(Path::new("/project"), &remotes())
        .expect("expansion succeeds");

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, PathBuf::from("/project/locales/default.yml"));
    assert_eq!(files[0].locale_code, "de");
    assert_eq!(files[0].locale_id.as_deref(), Some("id-de"));
}

#[test]
fn unknown_identifier_is_an_error() {
    let params = TargetParams {
        locale_id: Some("fr".to_owned()),
        tags: TagSet::default(),
    };
    let target = Target::new("./locales/default.yml", None, params).expect("valid target");

    let error = target
        .files(Path::new("/project"), &remotes())
        .expect_err("must fail");
    assert!(matches!(error, EngineError::UnknownLocale { .. }));
    assert!(error.to_string().contains("fr"));
}

#[test]
fn generated_paths_resolve_back_to_their_inputs() {
    let params = TargetParams {
        locale_id: None,
        tags: TagSet::parse("mobile"),
    };
    let raw = "./locales/<locale_name>-<locale_code>_<tag>.yml";
    let target = Target::new(raw, None, params).expect("valid target");
    let pattern = PathPattern::parse(raw).expect("compiles");

    let root = Path::new("/project");
    for file in target.files(root, &remotes()).expect("expansion succeeds") {
        let relative = file
            .path
            .strip_prefix(root)
            .expect("generated under root")
            .to_str()
            .expect("utf-8 path");
        let values = pattern.resolve(relative).expect("round trip resolves");

        assert_eq!(values.get(Placeholder::LocaleName), Some(file.locale_name.as_str()));
        assert_eq!(values.get(Placeholder::LocaleCode), Some(file.locale_code.as_str()));
        assert_eq!(values.get(Placeholder::Tag), Some(file.tag.as_str()));
    }
}
