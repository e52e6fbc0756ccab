use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("malformed directory entry '{0}', expected NAME=HOST:PORT")]
    MalformedEntry(String),

    #[error("bank '{0}' listed twice in the directory")]
    DuplicateBank(String),
}

/// Static mapping from bank name to network address.
///
/// Owned by the gateway, loaded at startup, never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankDirectory {
    banks: HashMap<String, String>,
}

impl BankDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from `NAME=HOST:PORT` entries, the form the
    /// gateway accepts on its command line.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut directory = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            let (name, address) = entry
                .split_once('=')
                .filter(|(name, address)| !name.is_empty() && !address.is_empty())
                .ok_or_else(|| DirectoryError::MalformedEntry(entry.to_string()))?;
            if directory
                .banks
                .insert(name.to_string(), address.to_string())
                .is_some()
            {
                return Err(DirectoryError::DuplicateBank(name.to_string()));
            }
        }
        Ok(directory)
    }

    pub fn address(&self, bank: &str) -> Option<&str> {
        self.banks.get(bank).map(String::as_str)
    }

    pub fn contains(&self, bank: &str) -> bool {
        self.banks.contains_key(bank)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.banks
            .iter()
            .map(|(name, address)| (name.as_str(), address.as_str()))
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}
