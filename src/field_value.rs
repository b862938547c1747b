use serde::{Deserialize, Serialize, Serializer};
use std::{collections::HashMap, iter::FromIterator};

/// The payload of a single row: field names mapped to values.
pub type Fields = HashMap<String, String>;

/// A row's contents, built from a sequence of `(field, value)` pairs.
///
/// When a field name occurs more than once, the last occurrence wins.
/// Deserializes from a sequence of `[field, value]` pairs with the same
/// rule and serializes as a plain map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct FieldValuePairs {
    fields: Fields,
}

impl FieldValuePairs {
    /// Collects `pairs` into a new `FieldValuePairs`.
    pub fn new<I, K, V>(pairs: I) -> FieldValuePairs
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// The materialized field mapping.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes `self`, returning the field mapping.
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValuePairs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(field, value)| (field.into(), value.into()))
            .collect();
        FieldValuePairs { fields }
    }
}

impl From<Fields> for FieldValuePairs {
    fn from(fields: Fields) -> Self {
        FieldValuePairs { fields }
    }
}

impl From<Vec<(String, String)>> for FieldValuePairs {
    fn from(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl Serialize for FieldValuePairs {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_mapping_from_pairs() {
        let fvs = FieldValuePairs::new(vec![("state", "up"), ("speed", "100G")]);
        assert_eq!(fvs.fields().len(), 2);
        assert_eq!(fvs.fields()["state"], "up");
        assert_eq!(fvs.fields()["speed"], "100G");
    }

    #[test]
    fn last_duplicate_wins() {
        let fvs = FieldValuePairs::new(vec![
            ("state", "down"),
            ("speed", "40G"),
            ("state", "up"),
        ]);
        assert_eq!(fvs.fields().len(), 2);
        assert_eq!(fvs.fields()["state"], "up");
    }

    #[test]
    fn empty_pairs() {
        let fvs = FieldValuePairs::new(Vec::<(String, String)>::new());
        assert!(fvs.fields().is_empty());
        assert_eq!(fvs, FieldValuePairs::default());
    }

    #[test]
    fn accepts_owned_and_borrowed_strings() {
        let owned = FieldValuePairs::new(vec![(String::from("mtu"), String::from("9100"))]);
        let borrowed: FieldValuePairs = [("mtu", "9100")].iter().copied().collect();
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn from_existing_map() {
        let mut map = Fields::new();
        map.insert("admin_status".to_owned(), "up".to_owned());
        let fvs = FieldValuePairs::from(map.clone());
        assert_eq!(fvs.into_fields(), map);
    }

    #[test]
    fn deserializes_from_pair_list() {
        let json = r#"[["state", "up"], ["speed", "100G"], ["state", "down"]]"#;
        let fvs: FieldValuePairs = serde_json::from_str(json).unwrap();
        assert_eq!(
            fvs,
            FieldValuePairs::new(vec![("state", "down"), ("speed", "100G")])
        );
    }

    #[test]
    fn serializes_as_map() {
        let fvs = FieldValuePairs::new(vec![("state", "up")]);
        let value = serde_json::to_value(&fvs).unwrap();
        assert_eq!(value, serde_json::json!({ "state": "up" }));
    }

    #[test]
    fn rejects_non_pair_elements() {
        let json = r#"[["state", "up", "extra"]]"#;
        assert!(serde_json::from_str::<FieldValuePairs>(json).is_err());
    }
}
