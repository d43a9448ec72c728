use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::bill::{BillError, BillRequest, PaymentMethod};

/// Raw field values as posted by the bill form.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BillForm {
    pub num_pessoas: String,
    pub valor_conta: String,
    pub metodo_pagamento: String,
}

impl BillForm {
    pub fn parse(&self) -> Result<BillRequest, BillError> {
        let party_size = self
            .num_pessoas
            .trim()
            .parse::<i64>()
            .map_err(|_| BillError::InvalidInput)?;

        let total_amount = Decimal::from_str(&normalize_decimal(&self.valor_conta))
            .map_err(|_| BillError::InvalidInput)?;

        Ok(BillRequest {
            party_size,
            total_amount,
            payment_method: PaymentMethod::from(self.metodo_pagamento.as_str()),
        })
    }
}

/// Accepts the Brazilian decimal comma by turning the first `,` into a `.`.
pub fn normalize_decimal(raw: &str) -> String {
    raw.trim().replacen(',', ".", 1)
}
