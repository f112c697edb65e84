use serde::{Deserialize, Serialize};

/// Stock item (modems, fiber drops, connectors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub serial_no: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub reorder_level: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl InventoryItem {
    pub fn total_value(&self) -> f64 {
        self.quantity as f64 * self.unit_cost
    }

    pub fn is_low_stock(&self) -> bool {
        self.reorder_level.map_or(false, |level| self.quantity <= level)
    }
}

/// Create/update form for an inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InventoryItemDto {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    pub item_name: String,
    pub category: Option<String>,
    pub quantity: i64,
    pub unit: Option<String>,
    pub serial_no: Option<String>,
    pub supplier: Option<String>,
    pub unit_cost: f64,
    pub reorder_level: Option<i64>,
    pub description: Option<String>,
}

impl InventoryItemDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.item_name.trim().is_empty() {
            return Err("Item name is required".into());
        }
        if self.quantity < 0 {
            return Err("Quantity cannot be negative".into());
        }
        if self.unit_cost < 0.0 || !self.unit_cost.is_finite() {
            return Err("Unit cost must be a non-negative number".into());
        }
        if matches!(self.reorder_level, Some(level) if level < 0) {
            return Err("Reorder level cannot be negative".into());
        }
        Ok(())
    }
}

impl From<InventoryItem> for InventoryItemDto {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: Some(item.id),
            item_name: item.item_name,
            category: item.category,
            quantity: item.quantity,
            unit: item.unit,
            serial_no: item.serial_no,
            supplier: item.supplier,
            unit_cost: item.unit_cost,
            reorder_level: item.reorder_level,
            description: item.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut dto = InventoryItemDto {
            item_name: "ONU Router".into(),
            quantity: 12,
            unit_cost: 1450.0,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.quantity = -1;
        assert_eq!(dto.validate().unwrap_err(), "Quantity cannot be negative");

        dto.quantity = 1;
        dto.item_name = " ".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_low_stock() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":5,"item_name":"Drop cable","quantity":3,"reorder_level":5,"unit_cost":12.5}"#,
        )
        .unwrap();
        assert!(item.is_low_stock());
        assert_eq!(item.total_value(), 37.5);
    }

    #[test]
    fn test_dto_id_not_sent() {
        let dto = InventoryItemDto {
            id: Some(3),
            item_name: "Splitter".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
    }
}
