use std::fmt;

use serde::{Deserialize, Serialize};

/// Room identifier as entered by a user, normally six alphanumeric
/// characters. Uppercased on construction and on every deserialization, so
/// the websocket boundary and the HTTP directory can never disagree on which
/// room a code names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SessionCode(String);

impl SessionCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SessionCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<SessionCode> for String {
    fn from(value: SessionCode) -> Self {
        value.0
    }
}

impl fmt::Display for SessionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionCode;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(SessionCode::new("ab12cd").as_str(), "AB12CD");
        assert_eq!(SessionCode::new(" Ab12Cd "), SessionCode::new("AB12CD"));
    }

    #[test]
    fn normalizes_on_deserialization() {
        let code: SessionCode = serde_json::from_str("\"ab12cd\"").unwrap();
        assert_eq!(code, SessionCode::new("AB12CD"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&SessionCode::new("ab12cd")).unwrap();
        assert_eq!(json, "\"AB12CD\"");
    }
}
