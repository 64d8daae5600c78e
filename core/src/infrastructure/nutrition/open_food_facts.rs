use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::Ingredient,
    risk::{entities::ProductFacts, ports::NutritionLookup},
};

pub const DEFAULT_OPEN_FOOD_FACTS_URL: &str = "https://world.openfoodfacts.org";

const USER_AGENT: &str = concat!("LabelGuard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct IngredientResponse {
    #[serde(default)]
    products: Vec<ProductResponse>,
}

/// Every field is read on its own: a null or oddly typed value drops that
/// signal only, never the whole product.
#[derive(Debug, Deserialize)]
struct ProductResponse {
    nutriscore_grade: Option<Value>,
    nova_group: Option<Value>,
    additives_tags: Option<Value>,
}

impl OpenFoodFactsClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn ingredient_url(&self, ingredient: &Ingredient) -> String {
        format!(
            "{}/ingredient/{}.json",
            self.base_url,
            urlencoding::encode(ingredient.as_str())
        )
    }
}

/// The database sends NOVA groups as numbers or numeric strings.
fn nova_group(value: Option<&Value>) -> Option<u8> {
    let group = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (group >= 0.0).then(|| group.min(f64::from(u8::MAX)) as u8)
}

fn nutriscore_grade(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(grade) if !grade.is_empty() => Some(grade.to_lowercase()),
        _ => None,
    }
}

fn additives_tags(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(tags)) => tags
            .into_iter()
            .filter_map(|tag| match tag {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn first_product_from_body(body: &str) -> Result<Option<ProductFacts>, CoreError> {
    let response: IngredientResponse = serde_json::from_str(body).map_err(|e| {
        CoreError::ExternalServiceError(format!("Failed to parse nutrition response: {}", e))
    })?;

    Ok(response.products.into_iter().next().map(|product| ProductFacts {
        nutriscore_grade: nutriscore_grade(product.nutriscore_grade),
        nova_group: nova_group(product.nova_group.as_ref()),
        additives_tags: additives_tags(product.additives_tags),
    }))
}

impl NutritionLookup for OpenFoodFactsClient {
    #[instrument(skip(self, ingredient), fields(ingredient = %ingredient))]
    async fn lookup(&self, ingredient: &Ingredient) -> Result<Option<ProductFacts>, CoreError> {
        let response = self
            .client
            .get(self.ingredient_url(ingredient))
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("Nutrition API error: {}", e)))?;

        if !response.status().is_success() {
            return Err(CoreError::ExternalServiceError(format!(
                "Nutrition API returned {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to read nutrition response: {}", e))
        })?;

        first_product_from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::{entities::RiskTier, policies::classify_product};

    #[test]
    fn test_ingredient_url_is_escaped() {
        let client = OpenFoodFactsClient::new("https://world.openfoodfacts.org/".to_string());
        let url = client.ingredient_url(&Ingredient::parse("sodium nitrate/E251").unwrap());
        assert_eq!(
            url,
            "https://world.openfoodfacts.org/ingredient/sodium%20nitrate%2FE251.json"
        );
    }

    #[test]
    fn test_first_product_is_used() {
        let body = r#"{"count":2,"products":[
            {"nutriscore_grade":"d","nova_group":4,"additives_tags":["en:e621"]},
            {"nutriscore_grade":"a","nova_group":1,"additives_tags":[]}
        ]}"#;

        let product = first_product_from_body(body).unwrap().unwrap();
        assert_eq!(product.nutriscore_grade.as_deref(), Some("d"));
        assert_eq!(product.nova_group, Some(4));
        assert_eq!(product.additives_tags, vec!["en:e621".to_string()]);
    }

    #[test]
    fn test_no_products() {
        assert_eq!(first_product_from_body(r#"{"products":[]}"#).unwrap(), None);
        assert_eq!(first_product_from_body(r#"{}"#).unwrap(), None);
    }

    #[test]
    fn test_nova_group_as_string_and_missing_fields() {
        let body = r#"{"products":[{"nova_group":"4"}]}"#;
        let product = first_product_from_body(body).unwrap().unwrap();
        assert_eq!(product.nova_group, Some(4));
        assert_eq!(product.nutriscore_grade, None);
        assert!(product.additives_tags.is_empty());
    }

    #[test]
    fn test_null_additives_keep_the_grade() {
        let body = r#"{"products":[{"nutriscore_grade":"a","nova_group":1,"additives_tags":null}]}"#;
        let product = first_product_from_body(body).unwrap();

        assert_eq!(
            product.as_ref().and_then(|p| p.nutriscore_grade.as_deref()),
            Some("a")
        );
        assert_eq!(classify_product(product.as_ref()), RiskTier::Good);
    }

    #[test]
    fn test_wrongly_typed_fields_are_skipped() {
        let body = r#"{"products":[{"nutriscore_grade":3,"nova_group":null,"additives_tags":["en:e951",7,null]}]}"#;
        let product = first_product_from_body(body).unwrap().unwrap();

        assert_eq!(product.nutriscore_grade, None);
        assert_eq!(product.nova_group, None);
        assert_eq!(product.additives_tags, vec!["en:e951".to_string()]);
        assert_eq!(classify_product(Some(&product)), RiskTier::Bad);
    }

    #[test]
    fn test_unexpected_shape_is_an_error() {
        assert!(first_product_from_body(r#"{"products":"none"}"#).is_err());
    }
}
