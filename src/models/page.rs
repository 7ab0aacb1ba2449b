use serde::Deserialize;

/// List endpoints answer either with a bare array or with an envelope
/// object carrying the records under `results`. Both decode to the same
/// canonical sequence before any caller sees the data.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Envelope { results: Vec<T> },
}

impl<T> ListResponse<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            ListResponse::Bare(records) => records,
            ListResponse::Envelope { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    const RECORDS: &str = r#"[
        {"_id": "u1", "username": "alice", "name": "Alice", "email": "alice@example.com"},
        {"_id": "u2", "username": "bob", "name": "Bob", "email": "bob@example.com"}
    ]"#;

    #[test]
    fn test_bare_array_decodes() {
        let page: ListResponse<User> = serde_json::from_str(RECORDS).unwrap();
        assert_eq!(page.into_records().len(), 2);
    }

    #[test]
    fn test_envelope_decodes() {
        let body = format!(r#"{{"results": {}}}"#, RECORDS);
        let page: ListResponse<User> = serde_json::from_str(&body).unwrap();
        assert_eq!(page.into_records().len(), 2);
    }

    #[test]
    fn test_bare_and_envelope_produce_identical_records() {
        let bare: ListResponse<User> = serde_json::from_str(RECORDS).unwrap();
        let enveloped: ListResponse<User> =
            serde_json::from_str(&format!(r#"{{"results": {}}}"#, RECORDS)).unwrap();

        let bare = bare.into_records();
        let enveloped = enveloped.into_records();
        assert_eq!(bare.len(), enveloped.len());
        for (a, b) in bare.iter().zip(enveloped.iter()) {
            assert_eq!(a.username, b.username);
            assert_eq!(a.email, b.email);
        }
    }
}
