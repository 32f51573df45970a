//! Corpos JSON enviados ao worker externo.
//!
//! Cada etapa do job corresponde a um endpoint `POST` no worker.
//! Os valores em wei são serializados como string decimal, pois excedem
//! a faixa segura de inteiros em JSON.

use serde::Serialize;

use super::funding::{SpamKind, Wei};

/// Corpo de `POST /setup`. Vazio por enquanto.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetupRequest {}

/// Corpo de `POST /fund`.
#[derive(Debug, Clone, Serialize)]
pub struct FundRequest {
    /// Valor a distribuir, em wei, como string decimal.
    pub amount_wei: String,
}

impl FundRequest {
    pub fn new(amount: Wei) -> Self {
        Self {
            amount_wei: amount.to_string(),
        }
    }
}

/// Corpo de `POST /work`.
#[derive(Debug, Clone, Serialize)]
pub struct WorkRequest {
    /// Tipo de transações a enviar.
    pub kind: SpamKind,
}

/// Corpo de `POST /create`: quantas contas efêmeras o worker deve gerar.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRequest {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fund_request_uses_decimal_string() {
        let req = FundRequest::new(Wei(340_282_366_920_938_463_463_374_607_431_768_211_455));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json["amount_wei"],
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn setup_request_is_empty_object() {
        let json = serde_json::to_string(&SetupRequest::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn work_request_shape() {
        let json = serde_json::to_string(&WorkRequest {
            kind: SpamKind::Blobs,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"blobs"}"#);
    }

    #[test]
    fn create_request_shape() {
        let json = serde_json::to_string(&CreateRequest { count: 100 }).unwrap();
        assert_eq!(json, r#"{"count":100}"#);
    }
}
