use serde::{Deserialize, Serialize};

/// Physical condition of the offered goods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Used,
}

impl Default for Condition {
    fn default() -> Self {
        Condition::New
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::New => write!(f, "NEW"),
            Condition::LikeNew => write!(f, "LIKE_NEW"),
            Condition::Good => write!(f, "GOOD"),
            Condition::Fair => write!(f, "FAIR"),
            Condition::Used => write!(f, "USED"),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Condition::New),
            "LIKE_NEW" => Ok(Condition::LikeNew),
            "GOOD" => Ok(Condition::Good),
            "FAIR" => Ok(Condition::Fair),
            "USED" => Ok(Condition::Used),
            _ => Err(format!("Invalid condition: {}", s)),
        }
    }
}

/// Sale status of a listing. New listings start as `Available`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Available,
    Reserved,
    Sold,
    Expired,
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Available
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStatus::Available => write!(f, "AVAILABLE"),
            ListingStatus::Reserved => write!(f, "RESERVED"),
            ListingStatus::Sold => write!(f, "SOLD"),
            ListingStatus::Expired => write!(f, "EXPIRED"),
        }
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(ListingStatus::Available),
            "RESERVED" => Ok(ListingStatus::Reserved),
            "SOLD" => Ok(ListingStatus::Sold),
            "EXPIRED" => Ok(ListingStatus::Expired),
            _ => Err(format!("Invalid listing status: {}", s)),
        }
    }
}

/// Payment methods a seller accepts. The set is fixed; listings link to it
/// through a many-to-many join against the persisted lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    MobilePayment,
    Card,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "CASH"),
            PaymentMethod::BankTransfer => write!(f, "BANK_TRANSFER"),
            PaymentMethod::MobilePayment => write!(f, "MOBILE_PAYMENT"),
            PaymentMethod::Card => write!(f, "CARD"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH" => Ok(PaymentMethod::Cash),
            "BANK_TRANSFER" => Ok(PaymentMethod::BankTransfer),
            "MOBILE_PAYMENT" => Ok(PaymentMethod::MobilePayment),
            "CARD" => Ok(PaymentMethod::Card),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}
