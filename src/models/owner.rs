use serde::{Deserialize, Serialize};

/// Cuerpo de POST /owners
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerCreate {
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub phone_number: String,
}
