use serde::{Deserialize, Serialize};

/// Core product entity. Wire keys stay Portuguese (`nome`, `preco`,
/// `estoque`) for compatibility with existing API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "estoque")]
    pub stock: u32,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Creation payload. `name` and `price` are required but modeled as Option so
/// presence checks produce a 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<f64>,
    /// Defaults to 0 when omitted.
    #[serde(rename = "estoque")]
    pub stock: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_portuguese_keys() {
        let p = Product {
            id: 1,
            name: "Notebook".to_string(),
            price: 3500.0,
            stock: 10,
        };
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "nome": "Notebook", "preco": 3500.0, "estoque": 10})
        );
    }

    #[test]
    fn create_payload_accepts_missing_stock() {
        let payload: CreateProduct =
            serde_json::from_str(r#"{"nome": "Monitor", "preco": 800}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Monitor"));
        assert_eq!(payload.price, Some(800.0));
        assert_eq!(payload.stock, None);
    }

    #[test]
    fn create_payload_tolerates_missing_required_fields() {
        // Presence is validated in the handler, not by serde
        let payload: CreateProduct = serde_json::from_str(r#"{"nome": "Monitor"}"#).unwrap();
        assert_eq!(payload.price, None);
    }

    #[test]
    fn create_payload_rejects_non_numeric_price() {
        let result = serde_json::from_str::<CreateProduct>(r#"{"nome": "Monitor", "preco": "abc"}"#);
        assert!(result.is_err());
    }
}
