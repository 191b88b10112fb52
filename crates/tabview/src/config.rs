//! View configuration.
//!
//! Page sizing rules and, optionally, static column definitions can be loaded
//! from YAML or JSON:
//!
//! ```yaml
//! page_sizes: [5, 10, 25, 50]
//! default_page_size: 10
//! page_size_policy: clamp
//! columns:
//!   - { id: amount, label: Amount, sortable: true }
//!   - { id: description, label: Description }
//! ```

use serde::{Deserialize, Serialize};

use crate::column::ColumnDef;
use crate::error::{Result, ViewError};
use crate::page::{PageSizePolicy, PageSizes, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
    pub page_size_policy: PageSizePolicy,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnDef>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_policy: PageSizePolicy::default(),
            columns: Vec::new(),
        }
    }
}

impl ViewConfig {
    /// Parses and validates a YAML configuration.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: ViewConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: ViewConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The allowed page sizes as a validated set.
    pub fn page_sizes(&self) -> Result<PageSizes> {
        PageSizes::new(self.page_sizes.iter().copied())
    }

    /// Checks that the page sizes are usable and include the default.
    pub fn validate(&self) -> Result<()> {
        let sizes = self.page_sizes()?;
        if !sizes.contains(self.default_page_size) {
            return Err(ViewError::InvalidConfig(format!(
                "default page size {} is not one of {:?}",
                self.default_page_size,
                sizes.as_slice()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.page_sizes, vec![5, 10, 25, 50]);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.page_size_policy, PageSizePolicy::Clamp);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn yaml_partial_uses_defaults() {
        let config = ViewConfig::from_yaml_str("page_size_policy: reject\n").unwrap();
        assert_eq!(config.page_size_policy, PageSizePolicy::Reject);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn yaml_with_columns() {
        let source = r#"
page_sizes: [20, 40]
default_page_size: 20
columns:
  - { id: amount, label: Amount, sortable: true }
  - { id: description, label: Description }
"#;
        let config = ViewConfig::from_yaml_str(source).unwrap();
        assert_eq!(config.page_sizes, vec![20, 40]);
        assert_eq!(config.columns.len(), 2);
        assert!(config.columns[0].sortable);
        assert!(!config.columns[1].sortable);
    }

    #[test]
    fn json_config() {
        let config =
            ViewConfig::from_json_str(r#"{"page_sizes": [5, 15], "default_page_size": 15}"#)
                .unwrap();
        assert_eq!(config.page_sizes().unwrap().as_slice(), &[5, 15]);
    }

    #[test]
    fn default_must_be_allowed() {
        let result = ViewConfig::from_yaml_str("page_sizes: [5, 25]\n");
        assert!(matches!(result, Err(ViewError::InvalidConfig(_))));
    }

    #[test]
    fn zero_size_rejected() {
        let result = ViewConfig::from_json_str(r#"{"page_sizes": [0, 10]}"#);
        assert!(matches!(result, Err(ViewError::InvalidConfig(_))));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!(
            ViewConfig::from_yaml_str("page_sizes: nope"),
            Err(ViewError::Yaml(_))
        ));
        assert!(matches!(
            ViewConfig::from_json_str("{"),
            Err(ViewError::Json(_))
        ));
    }
}
