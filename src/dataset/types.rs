//! Dataset records and the resolved registry

use serde::{Deserialize, Deserializer, de};
use serde_value::Value as SerdeValue;
use std::collections::BTreeMap;

/// One downloadable resource listed in the dataset.
///
/// Only `name` is required. Scalar values of any YAML type are accepted for
/// the descriptive fields and kept as text, so `version: 1.0` stays `1.0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "deserialize_required_scalar")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub url: Option<String>,
    /// Tag selecting the presentation icon
    #[serde(default, rename = "type", deserialize_with = "deserialize_scalar")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub version: Option<String>,
    #[serde(default, rename = "package-type", deserialize_with = "deserialize_scalar")]
    pub package_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub password: Option<String>,
    #[serde(default, rename = "DOI", deserialize_with = "deserialize_scalar")]
    pub doi: Option<String>,
    #[serde(default, rename = "DOI_img", deserialize_with = "deserialize_scalar")]
    pub doi_img: Option<String>,
}

impl Item {
    /// Create an item with only its key set
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Loaded dataset: the flat item collection plus eagerly resolved subsets.
///
/// Immutable once built; callers load a fresh registry for every resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pub(crate) items: Vec<Item>,
    pub(crate) sets: Option<BTreeMap<String, Vec<Item>>>,
}

impl Registry {
    /// Flat item collection in declaration order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Names of all declared subsets
    pub fn set_names(&self) -> Vec<&str> {
        self.sets
            .iter()
            .flat_map(|sets| sets.keys().map(String::as_str))
            .collect()
    }
}

fn scalar_to_string(value: SerdeValue) -> Result<Option<String>, String> {
    let text = match value {
        SerdeValue::Unit | SerdeValue::Option(None) => return Ok(None),
        SerdeValue::Option(Some(inner)) | SerdeValue::Newtype(inner) => {
            return scalar_to_string(*inner);
        }
        SerdeValue::String(s) => s,
        SerdeValue::Char(c) => c.to_string(),
        SerdeValue::Bool(b) => b.to_string(),
        SerdeValue::U8(n) => n.to_string(),
        SerdeValue::U16(n) => n.to_string(),
        SerdeValue::U32(n) => n.to_string(),
        SerdeValue::U64(n) => n.to_string(),
        SerdeValue::I8(n) => n.to_string(),
        SerdeValue::I16(n) => n.to_string(),
        SerdeValue::I32(n) => n.to_string(),
        SerdeValue::I64(n) => n.to_string(),
        // Debug keeps the fractional part: 1.0 renders as "1.0", not "1"
        SerdeValue::F32(n) => format!("{n:?}"),
        SerdeValue::F64(n) => format!("{n:?}"),
        other => return Err(format!("expected a scalar value, found {other:?}")),
    };
    Ok(Some(text))
}

fn deserialize_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SerdeValue::deserialize(deserializer)?;
    scalar_to_string(value).map_err(de::Error::custom)
}

fn deserialize_required_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_scalar(deserializer)?.ok_or_else(|| de::Error::custom("item name must not be empty"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize_all_fields() {
        let item: Item = serde_yaml::from_str(
            r#"
name: dataset
title: Dataset
url: http://example.org/dataset.zip
type: audio
size: 1.2 GB
version: "2.0"
package-type: zip
password: secret
DOI: https://doi.org/10.5281/zenodo.1
DOI_img: <img src="badge.svg">
"#,
        )
        .unwrap();

        assert_eq!(item.name, "dataset");
        assert_eq!(item.title.as_deref(), Some("Dataset"));
        assert_eq!(item.kind.as_deref(), Some("audio"));
        assert_eq!(item.package_type.as_deref(), Some("zip"));
        assert_eq!(item.doi.as_deref(), Some("https://doi.org/10.5281/zenodo.1"));
        assert_eq!(item.doi_img.as_deref(), Some(r#"<img src="badge.svg">"#));
    }

    #[test]
    fn test_item_scalars_become_text() {
        let item: Item =
            serde_yaml::from_str("name: 42\nversion: 1.0\nsize: 3\npassword: true\n").unwrap();

        assert_eq!(item.name, "42");
        assert_eq!(item.version.as_deref(), Some("1.0"));
        assert_eq!(item.size.as_deref(), Some("3"));
        assert_eq!(item.password.as_deref(), Some("true"));
    }

    #[test]
    fn test_item_null_field_is_absent() {
        let item: Item = serde_yaml::from_str("name: tool\ntitle: ~\n").unwrap();
        assert!(item.title.is_none());
    }

    #[test]
    fn test_item_requires_name() {
        let result: Result<Item, _> = serde_yaml::from_str("title: Nameless\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_item_rejects_nested_values() {
        let result: Result<Item, _> = serde_yaml::from_str("name: tool\ntitle: [a, b]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_set_names() {
        let registry = Registry {
            items: vec![Item::named("tool")],
            sets: Some(BTreeMap::from([("featured".to_string(), vec![])])),
        };
        assert_eq!(registry.set_names(), vec!["featured"]);
        assert!(Registry::default().set_names().is_empty());
    }
}
