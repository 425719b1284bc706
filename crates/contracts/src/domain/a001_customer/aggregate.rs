use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::csv_export::CsvExportable;
use crate::shared::error::ValidationError;
use crate::shared::list_query::{Searchable, SortValue, Sortable};

/// Customer a project is sold to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AggregateRoot for Customer {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.industry.as_str(), self.region.as_str()]
    }
}

impl Sortable for Customer {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "industry" => SortValue::text(self.industry.as_str()),
            "region" => SortValue::text(self.region.as_str()),
            _ => SortValue::text(self.name.as_str()),
        }
    }
}

impl CsvExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Industry", "Region"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.industry.clone(), self.region.clone()]
    }
}

/// Create / update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub name: String,
    pub industry: String,
    pub region: String,
}

impl CustomerDto {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            industry: customer.industry.clone(),
            region: customer.region.clone(),
        }
    }

    /// Trim every field and require a name
    pub fn validate(&self) -> Result<CustomerDto, ValidationError> {
        let dto = CustomerDto {
            name: self.name.trim().to_string(),
            industry: self.industry.trim().to_string(),
            region: self.region.trim().to_string(),
        };
        if dto.name.is_empty() {
            return Err(ValidationError::Required("Customer name"));
        }
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, industry: &str, region: &str) -> Customer {
        Customer {
            id: 1,
            name: name.into(),
            industry: industry.into(),
            region: region.into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_search_covers_name_industry_region() {
        let c = customer("PT Telkom", "Telecommunication", "Jakarta");
        assert!(c.matches_search("telkom"));
        assert!(c.matches_search("TELECOM"));
        assert!(c.matches_search("jakar"));
        assert!(!c.matches_search("surabaya"));
    }

    #[test]
    fn test_decode_with_missing_optional_fields() {
        let c: Customer = serde_json::from_str(r#"{"id":3,"name":"Pertamina"}"#).unwrap();
        assert_eq!(c.name, "Pertamina");
        assert!(c.industry.is_empty());
    }

    #[test]
    fn test_name_required() {
        let dto = CustomerDto {
            name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(
            dto.validate().unwrap_err().to_string(),
            "Customer name is required."
        );

        let ok = CustomerDto {
            name: " PLN ".into(),
            industry: "Energy".into(),
            region: " ".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(ok.name, "PLN");
        assert_eq!(ok.region, "");
    }

    #[test]
    fn test_item_path() {
        assert_eq!(Customer::item_path(12), "/customers/12");
        assert_eq!(Customer::collection_path(), "/customers");
    }
}
