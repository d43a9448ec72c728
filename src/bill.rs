use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Flat discount granted to [`PaymentMethod::Pix`] and [`PaymentMethod::Dinheiro`]: 10%.
pub const DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

const CURRENCY_DP: u32 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillError {
    #[error("Dados inválidos. Preencha os dados corretamente.")]
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Pix,
    Dinheiro,
    Cartao,
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pix => "pix",
            Self::Dinheiro => "dinheiro",
            Self::Cartao => "cartao",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "pix" => Self::Pix,
            "dinheiro" => Self::Dinheiro,
            "cartao" | "cartão" => Self::Cartao,
            _ => Self::Other(value.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRequest {
    pub party_size: i64,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillSplit {
    pub discounted_total: Decimal,
    pub per_person: Decimal,
}

pub type BillResult = Result<BillSplit, BillError>;

pub fn is_discount_eligible(method: &PaymentMethod) -> bool {
    matches!(method, PaymentMethod::Pix | PaymentMethod::Dinheiro)
}

pub fn apply_discount(total: Decimal, method: &PaymentMethod) -> Decimal {
    if is_discount_eligible(method) {
        total * (Decimal::ONE - DISCOUNT_RATE)
    } else {
        total
    }
}

/// Splits `total` evenly. A non-positive party size yields zero instead of dividing.
pub fn per_person(total: Decimal, party_size: i64) -> Decimal {
    if party_size > 0 {
        total / Decimal::from(party_size)
    } else {
        Decimal::ZERO
    }
}

pub fn validate(request: &BillRequest) -> Result<(), BillError> {
    if request.party_size > 0 && request.total_amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(BillError::InvalidInput)
    }
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

pub fn calculate_bill(request: &BillRequest) -> BillResult {
    validate(request)?;

    let discounted = apply_discount(request.total_amount, &request.payment_method);
    let share = per_person(discounted, request.party_size);

    Ok(BillSplit {
        discounted_total: round_currency(discounted),
        per_person: round_currency(share),
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn request(party_size: i64, total: &str, method: &str) -> BillRequest {
        BillRequest {
            party_size,
            total_amount: dec(total),
            payment_method: PaymentMethod::from(method),
        }
    }

    #[test]
    fn pix_party_of_four() {
        let split = calculate_bill(&request(4, "100.00", "pix")).unwrap();
        assert_eq!(split.discounted_total, dec("90.00"));
        assert_eq!(split.per_person, dec("22.50"));
    }

    #[test]
    fn card_party_of_three() {
        let split = calculate_bill(&request(3, "100.00", "cartao")).unwrap();
        assert_eq!(split.discounted_total, dec("100.00"));
        assert_eq!(split.per_person, dec("33.33"));
    }

    #[test]
    fn zero_party_size_is_rejected() {
        assert_eq!(
            calculate_bill(&request(0, "50.00", "dinheiro")),
            Err(BillError::InvalidInput)
        );
    }

    #[test]
    fn negative_total_is_rejected() {
        assert_eq!(
            calculate_bill(&request(2, "-10", "pix")),
            Err(BillError::InvalidInput)
        );
    }

    #[test]
    fn zero_total_and_negative_party_are_rejected() {
        assert!(calculate_bill(&request(2, "0", "pix")).is_err());
        assert!(calculate_bill(&request(-3, "10", "cartao")).is_err());
    }

    #[test]
    fn error_message_is_generic_and_non_empty() {
        let msg = BillError::InvalidInput.to_string();
        assert_eq!(msg, "Dados inválidos. Preencha os dados corretamente.");
    }

    #[test]
    fn discount_ignores_case() {
        for method in ["pix", "PIX", "dinheiro", "Dinheiro", " Pix "] {
            let split = calculate_bill(&request(1, "57.35", method)).unwrap();
            // 57.35 * 0.9 = 51.615
            assert_eq!(split.discounted_total, dec("51.62"), "method {method}");
        }
    }

    #[test]
    fn other_methods_pay_full_price() {
        for method in ["cartao", "CARTAO", "credito", "", "vale"] {
            let split = calculate_bill(&request(2, "80.456", method)).unwrap();
            assert_eq!(split.discounted_total, dec("80.46"), "method {method}");
            assert_eq!(split.per_person, dec("40.23"), "method {method}");
        }
    }

    #[test]
    fn unknown_method_keeps_its_text() {
        assert_eq!(
            PaymentMethod::from("Vale Refeição"),
            PaymentMethod::Other("Vale Refeição".to_owned())
        );
        assert_eq!(PaymentMethod::from("CARTÃO"), PaymentMethod::Cartao);
    }

    #[test]
    fn share_is_rounded_from_the_discounted_total() {
        let split = calculate_bill(&request(7, "250", "dinheiro")).unwrap();
        assert_eq!(split.discounted_total, dec("225.00"));
        // 225 / 7 = 32.142857...
        assert_eq!(split.per_person, dec("32.14"));

        let split = calculate_bill(&request(8, "1", "cartao")).unwrap();
        // 0.125 rounds away from zero
        assert_eq!(split.per_person, dec("0.13"));
    }

    #[test]
    fn per_person_guards_non_positive_party() {
        assert_eq!(per_person(dec("90"), 0), Decimal::ZERO);
        assert_eq!(per_person(dec("90"), -2), Decimal::ZERO);
        assert_eq!(per_person(dec("90"), 4), dec("22.5"));
    }

    #[test]
    fn apply_discount_only_for_eligible_methods() {
        assert_eq!(apply_discount(dec("10"), &PaymentMethod::Pix), dec("9"));
        assert_eq!(apply_discount(dec("10"), &PaymentMethod::Cartao), dec("10"));
        assert!(!is_discount_eligible(&PaymentMethod::Other("pix ".into())));
    }

    #[test]
    fn repeated_calls_agree() {
        let req = request(5, "123.45", "pix");
        assert_eq!(calculate_bill(&req), calculate_bill(&req));
    }

    #[test]
    fn discount_rate_is_ten_percent() {
        assert_eq!(DISCOUNT_RATE, dec("0.10"));
    }
}
