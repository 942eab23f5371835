use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::ServiceError;
use super::domain::{MenuItem, DEFAULT_CATEGORY};

/// Raw request body for create/update.
///
/// Every field is kept as an untyped JSON value so that "absent" can be told
/// apart from "present but wrong type". JSON `null` deserializes to `None`
/// and is treated as absent, except for `available`, where an explicit
/// `null` is kept as `Some(Value::Null)` and coerces to `false`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MenuItemPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub ingredients: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub available: Option<Value>,
}

/// Validated input for creating an item; only the id is missing.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub ingredients: Vec<String>,
    pub available: bool,
}

impl NewMenuItem {
    pub fn into_item(self, id: u64) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            ingredients: self.ingredients,
            available: self.available,
        }
    }
}

/// Validated partial update. `None` leaves the stored field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub available: Option<bool>,
}

impl MenuItemPatch {
    pub fn apply(self, item: &mut MenuItem) {
        if let Some(name) = self.name { item.name = name; }
        if let Some(description) = self.description { item.description = description; }
        if let Some(price) = self.price { item.price = price; }
        if let Some(category) = self.category { item.category = category; }
        if let Some(ingredients) = self.ingredients { item.ingredients = ingredients; }
        if let Some(available) = self.available { item.available = available; }
    }
}

impl MenuItemPayload {
    /// Create rules: `name` must be a non-empty string and `price` a number.
    /// Optional fields fall back to their defaults when missing, empty or mistyped.
    pub fn into_new_item(self) -> Result<NewMenuItem, ServiceError> {
        let name = non_empty_string(self.name).ok_or_else(ServiceError::invalid_create)?;
        let price = self
            .price
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or_else(ServiceError::invalid_create)?;

        Ok(NewMenuItem {
            name,
            description: non_empty_string(self.description).unwrap_or_default(),
            price,
            category: non_empty_string(self.category)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            ingredients: self.ingredients.and_then(string_list).unwrap_or_default(),
            available: self.available.as_ref().map(truthy).unwrap_or(true),
        })
    }

    /// Update rules: only provided fields are validated and applied.
    /// Malformed `ingredients` are ignored rather than rejected.
    pub fn into_patch(self) -> Result<MenuItemPatch, ServiceError> {
        let name = match self.name {
            None => None,
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            Some(_) => return Err(ServiceError::invalid_payload(
                "Invalid payload: `name` must be a non-empty string",
            )),
        };
        let price = match self.price {
            None => None,
            Some(v) => Some(v.as_f64().ok_or_else(|| {
                ServiceError::invalid_payload("Invalid payload: `price` must be a number")
            })?),
        };

        Ok(MenuItemPatch {
            name,
            description: optional_string(self.description, "description")?,
            price,
            category: optional_string(self.category, "category")?,
            ingredients: self.ingredients.and_then(string_list),
            available: self.available.as_ref().map(truthy),
        })
    }
}

/// Keep a present field even when it is `null`; only a missing key stays `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn optional_string(value: Option<Value>, field: &str) -> Result<Option<String>, ServiceError> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ServiceError::invalid_payload(format!(
            "Invalid payload: `{field}` must be a string"
        ))),
    }
}

/// An array whose elements are all strings; anything else is malformed.
fn string_list(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

/// JSON truthiness: `false`, `0`, `""` and `null` are false, everything else true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: Value) -> MenuItemPayload {
        serde_json::from_value(v).expect("payload deserializes")
    }

    #[test]
    fn create_fills_defaults() {
        let item = payload(json!({"name": "Soup", "price": 5.5})).into_new_item().unwrap();
        assert_eq!(item.description, "");
        assert_eq!(item.category, "entree");
        assert!(item.ingredients.is_empty());
        assert!(item.available);
    }

    #[test]
    fn create_requires_name_and_numeric_price() {
        for body in [
            json!({"price": 5.5}),
            json!({"name": "", "price": 5.5}),
            json!({"name": 42, "price": 5.5}),
            json!({"name": "Soup"}),
            json!({"name": "Soup", "price": "5.5"}),
            json!({"name": "Soup", "price": null}),
        ] {
            let err = payload(body.clone()).into_new_item().unwrap_err();
            assert!(matches!(err, ServiceError::InvalidPayload(_)), "{body}");
        }
    }

    #[test]
    fn create_falls_back_on_empty_or_malformed_optionals() {
        let item = payload(json!({
            "name": "Tea",
            "price": 2,
            "description": 7,
            "category": "",
            "ingredients": "leaves",
            "available": 0
        }))
        .into_new_item()
        .unwrap();
        assert_eq!(item.price, 2.0);
        assert_eq!(item.description, "");
        assert_eq!(item.category, "entree");
        assert!(item.ingredients.is_empty());
        assert!(!item.available);
    }

    #[test]
    fn ingredients_with_non_strings_are_malformed() {
        let item = payload(json!({"name": "Tea", "price": 2, "ingredients": ["leaf", 3]}))
            .into_new_item()
            .unwrap();
        assert!(item.ingredients.is_empty());
    }

    #[test]
    fn patch_only_carries_provided_fields() {
        let patch = payload(json!({"price": 9.99})).into_patch().unwrap();
        assert_eq!(patch, MenuItemPatch { price: Some(9.99), ..Default::default() });
    }

    #[test]
    fn patch_drops_malformed_ingredients_and_coerces_available() {
        let patch = payload(json!({"ingredients": "not-an-array", "available": "yes"}))
            .into_patch()
            .unwrap();
        assert_eq!(patch.ingredients, None);
        assert_eq!(patch.available, Some(true));
    }

    #[test]
    fn explicit_null_available_counts_as_false() {
        let body = json!({"name": "Soup", "price": 5.5, "available": null});
        assert_eq!(payload(body.clone()).available, Some(Value::Null));
        assert!(!payload(body).into_new_item().unwrap().available);

        let patch = payload(json!({"available": null})).into_patch().unwrap();
        assert_eq!(patch.available, Some(false));

        let patch = payload(json!({"price": 1})).into_patch().unwrap();
        assert_eq!(patch.available, None);
    }

    #[test]
    fn patch_rejects_mistyped_fields() {
        assert!(payload(json!({"price": "cheap"})).into_patch().is_err());
        assert!(payload(json!({"name": ""})).into_patch().is_err());
        assert!(payload(json!({"category": ["a"]})).into_patch().is_err());
        assert!(payload(json!({"description": false})).into_patch().is_err());
    }

    #[test]
    fn patch_allows_empty_description() {
        let patch = payload(json!({"description": ""})).into_patch().unwrap();
        assert_eq!(patch.description.as_deref(), Some(""));
    }

    #[test]
    fn truthiness_matches_json_conventions() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("false")));
        assert!(truthy(&json!([])));
        assert!(truthy(&json!({})));
    }
}
