use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::auth::storage::LocalStorage;

/// The two authentication domains found in local storage. They are never
/// mixed: staff views only ever send the staff token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CredentialScope {
    Staff,
    Student,
}

impl CredentialScope {
    pub const ALL: [CredentialScope; 2] = [CredentialScope::Staff, CredentialScope::Student];

    pub fn storage_key(self) -> &'static str {
        match self {
            CredentialScope::Staff => "token",
            CredentialScope::Student => "studentToken",
        }
    }
}

/// Source of bearer tokens, handed to every component that talks to the backend.
pub trait CredentialProvider: Send + Sync {
    fn bearer(&self, scope: CredentialScope) -> Option<String>;
}

impl CredentialProvider for LocalStorage {
    fn bearer(&self, scope: CredentialScope) -> Option<String> {
        self.get(scope.storage_key()).filter(|token| !token.is_empty())
    }
}
