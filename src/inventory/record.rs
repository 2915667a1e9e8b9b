use std::fmt;

use super::error::InventoryError;

/// One inventory entry describing a physical tool.
///
/// The serial number is the store key and cannot change once the record
/// exists; every other field is replaced through [`ToolRecord::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRecord {
    serial_number: String,
    pub name: String,
    pub quantity: u32,
    pub location: String,
    /// Kept as typed (`YYYY-MM-DD` by convention), never parsed
    pub last_maintenance: String,
    pub category: String,
}

impl ToolRecord {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        location: impl Into<String>,
        last_maintenance: impl Into<String>,
        serial_number: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            name: name.into(),
            quantity,
            location: location.into(),
            last_maintenance: last_maintenance.into(),
            category: category.into(),
        }
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Overwrite every field present in `update`, leaving the rest alone
    pub fn apply(&mut self, update: &ToolUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(location) = &update.location {
            self.location = location.clone();
        }
        if let Some(last_maintenance) = &update.last_maintenance {
            self.last_maintenance = last_maintenance.clone();
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
    }
}

impl fmt::Display for ToolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): {} in {}, Serial: {}, Last Maintenance: {}",
            self.name,
            self.category,
            self.quantity,
            self.location,
            self.serial_number,
            self.last_maintenance
        )
    }
}

/// Partial update for a [`ToolRecord`]. `None` means "no change".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolUpdate {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub location: Option<String>,
    pub last_maintenance: Option<String>,
    pub category: Option<String>,
}

impl ToolUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn last_maintenance(mut self, last_maintenance: impl Into<String>) -> Self {
        self.last_maintenance = Some(last_maintenance.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.location.is_none()
            && self.last_maintenance.is_none()
            && self.category.is_none()
    }
}

/// Parse a quantity typed by the user.
///
/// Surrounding whitespace is ignored; anything that is not a whole number
/// in `u32` range (negatives included) is rejected.
pub fn parse_quantity(input: &str) -> Result<u32, InventoryError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| InventoryError::InvalidQuantity(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill() -> ToolRecord {
        ToolRecord::new("Drill", 3, "A1", "2024-01-01", "S1", "Power")
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            drill().to_string(),
            "Drill(Power): 3 in A1, Serial: S1, Last Maintenance: 2024-01-01"
        );
    }

    #[test]
    fn test_apply_empty_update_is_noop() {
        let mut record = drill();
        let update = ToolUpdate::new();
        assert!(update.is_empty());

        record.apply(&update);
        assert_eq!(record, drill());
    }

    #[test]
    fn test_apply_only_location() {
        let mut record = drill();
        record.apply(&ToolUpdate::new().location("Shelf 9"));

        assert_eq!(record.location, "Shelf 9");
        assert_eq!(record.name, "Drill");
        assert_eq!(record.quantity, 3);
        assert_eq!(record.last_maintenance, "2024-01-01");
        assert_eq!(record.category, "Power");
        assert_eq!(record.serial_number(), "S1");
    }

    #[test]
    fn test_apply_zero_quantity() {
        let mut record = drill();
        record.apply(&ToolUpdate::new().quantity(0));
        assert_eq!(record.quantity, 0);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12").unwrap(), 12);
        assert_eq!(parse_quantity(" 7 ").unwrap(), 7);
        assert_eq!(parse_quantity("0").unwrap(), 0);

        assert!(matches!(
            parse_quantity("-1"),
            Err(InventoryError::InvalidQuantity(s)) if s == "-1"
        ));
        assert!(parse_quantity("three").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("2.5").is_err());
    }
}
