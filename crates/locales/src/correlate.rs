use crate::file::LocaleFile;
use crate::format::FileFormat;
use crate::remote::RemoteLocale;

/// Finds the remote locale matching a file's extracted metadata.
///
/// An explicit id takes precedence and matches by id only. Otherwise the
/// extracted name and code are compared against the remote list: when both
/// were extracted, a single locale must match both; when only one was
/// extracted, that field alone decides. A file without any extracted
/// locale identity is never correlated; its identity is left to the remote
/// service's own detection during upload.
///
/// Ambiguity (several remote locales matching) yields `None`, exactly
/// like no match at all; both are normal results.
#[must_use]
pub fn find_remote_locale<'a>(
    file: &LocaleFile,
    explicit_id: Option<&str>,
    remotes: &'a [RemoteLocale],
) -> Option<&'a RemoteLocale> {
    if let Some(id) = explicit_id.filter(|id| !id.is_empty()) {
        return remotes.iter().find(|locale| locale.id == id);
    }

    let name = (!file.locale_name.is_empty()).then_some(file.locale_name.as_str());
    let code = (!file.locale_code.is_empty()).then_some(file.locale_code.as_str());

    match (name, code) {
        (Some(name), Some(code)) => {
            single(remotes, |locale| locale.name == name && locale.code == code)
        }
        (Some(name), None) => single(remotes, |locale| locale.name == name),
        (None, Some(code)) => single(remotes, |locale| locale.code == code),
        (None, None) => None,
    }
}

/// Looks up a locale by a configuration-supplied identifier.
///
/// Pull configurations frequently name a locale by its code or name
/// instead of the opaque id, so the lookup tries id first, then code,
/// then name.
#[must_use]
pub fn locale_by_identifier<'a>(
    remotes: &'a [RemoteLocale],
    identifier: &str,
) -> Option<&'a RemoteLocale> {
    remotes
        .iter()
        .find(|locale| locale.id == identifier)
        .or_else(|| remotes.iter().find(|locale| locale.code == identifier))
        .or_else(|| remotes.iter().find(|locale| locale.name == identifier))
}

/// Correlates a file against the remote list in place, setting
/// `remote_exists` and the canonical `locale_id` on success.
pub fn correlate(file: &mut LocaleFile, explicit_id: Option<&str>, remotes: &[RemoteLocale]) {
    if let Some(locale) = find_remote_locale(file, explicit_id, remotes) {
        file.remote_exists = true;
        file.locale_id = Some(locale.id.clone());
    }
}

/// Decides whether the uploader should create a new remote locale for the
/// file: it carries locale identity, nothing remote matched, and the
/// format does not embed locale information in file content.
#[must_use]
pub fn should_create_locale(file: &LocaleFile, format: Option<&FileFormat>) -> bool {
    if format.is_some_and(|format| format.includes_locale_information) {
        return false;
    }
    file.has_locale_identity() && !file.remote_exists
}

fn single<'a, F>(remotes: &'a [RemoteLocale], matches: F) -> Option<&'a RemoteLocale>
where
    F: Fn(&RemoteLocale) -> bool,
{
    let mut found = remotes.iter().filter(|locale| matches(locale));
    let first = found.next()?;
    found.next().is_none().then_some(first)
}
