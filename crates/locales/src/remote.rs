use serde::Deserialize;

/// Authoritative locale record from the remote translation service.
///
/// Supplied read-only by the API client; the engine only queries the list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RemoteLocale {
    /// Opaque remote identifier.
    pub id: String,
    /// Human readable locale name, unique within a project.
    pub name: String,
    /// RFC 5646 style locale code.
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_api_listing() {
        let json = r#"{"id": "0f1a", "name": "German", "code": "de-DE"}"#;
        let locale: RemoteLocale = serde_json::from_str(json).expect("valid payload");
        assert_eq!(locale.id, "0f1a");
        assert_eq!(locale.name, "German");
        assert_eq!(locale.code, "de-DE");
    }
}
