use super::DEFAULT_HASH_BUCKETS;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
    /// Settings could not be parsed
    #[cfg(feature = "serde")]
    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Symbol table implementation selected by [`TableSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TableKind {
    /// binary search tree, ordered by key
    #[default]
    Bst,
    /// linked list with sequential search
    List,
    /// hash table with separate chaining
    Hash,
}

/// Settings for constructing a symbol table and its session.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableSettings {
    ///table implementation
    #[builder(default = "TableKind::Bst")]
    pub kind: TableKind,

    ///number of buckets for hash tables
    #[builder(default = "DEFAULT_HASH_BUCKETS")]
    pub hash_buckets: usize,

    ///log every table operation to the print target
    #[builder(default = "false")]
    pub verbose: bool,
}

impl Default for TableSettings {
    fn default() -> TableSettings {
        TableSettings {
            kind: TableKind::Bst,
            hash_buckets: DEFAULT_HASH_BUCKETS,
            verbose: false,
        }
    }
}

impl TableSettings {
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_hash_buckets(self.hash_buckets)
    }

    /// Parses settings from a JSON object.  Missing fields take their
    /// default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: TableSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for TableSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        TableSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl TableSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(hash_buckets) = self.hash_buckets {
            validate_hash_buckets(hash_buckets)?;
        }
        Ok(())
    }
}

fn validate_hash_buckets(hash_buckets: usize) -> Result<(), SettingsError> {
    if hash_buckets > 0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("hash_buckets"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = TableSettingsBuilder::default().build().unwrap();
    assert_eq!(settings, TableSettings::default());

    // fail on empty hash tables
    assert!(TableSettingsBuilder::default()
        .hash_buckets(0)
        .build()
        .is_err());

    let settings = TableSettingsBuilder::default()
        .kind(TableKind::Hash)
        .hash_buckets(101)
        .verbose(true)
        .build()
        .unwrap();
    assert_eq!(settings.kind, TableKind::Hash);
    assert_eq!(settings.hash_buckets, 101);

    // directly construct bad settings and manually check
    let settings = TableSettings {
        hash_buckets: 0,
        ..TableSettings::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("hash_buckets"))
    ));
}

#[test]
fn test_settings_json() {
    cfg_if::cfg_if! {
        if #[cfg(feature = "serde")] {
            let json = r#"{"kind": "hash", "hash_buckets": 11}"#;
            let settings = TableSettings::from_json(json).unwrap();
            assert_eq!(settings.kind, TableKind::Hash);
            assert_eq!(settings.hash_buckets, 11);
            assert!(!settings.verbose);

            // missing fields take defaults
            assert_eq!(TableSettings::from_json("{}").unwrap(), TableSettings::default());

            assert!(matches!(
                TableSettings::from_json(r#"{"hash_buckets": 0}"#),
                Err(SettingsError::BadFieldValue("hash_buckets"))
            ));
            assert!(matches!(
                TableSettings::from_json(r#"{"kind": "heap"}"#),
                Err(SettingsError::Parse(_))
            ));
        }
    }
}
