use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier assigned by the record store, starting at 1.
pub type RecordId = u32;

/// A single sale as exposed over the wire.
///
/// Prices travel as JSON numbers carrying every decimal digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub id: RecordId,
    pub order_date: NaiveDateTime,
    pub region: String,
    pub city: String,
    pub category: String,
    pub product: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// Every field of a [SalesRecord] except its id.
///
/// This is the payload of create and update; an `id` sent by the caller is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecordData {
    pub order_date: NaiveDateTime,
    pub region: String,
    pub city: String,
    pub category: String,
    pub product: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl SalesRecord {
    pub fn new(id: RecordId, data: SalesRecordData) -> Self {
        SalesRecord {
            id,
            order_date: data.order_date,
            region: data.region,
            city: data.city,
            category: data.category,
            product: data.product,
            quantity: data.quantity,
            unit_price: data.unit_price,
            total_price: data.total_price,
        }
    }

    /// Overwrites every field except the id.
    pub fn apply(&mut self, data: SalesRecordData) {
        self.order_date = data.order_date;
        self.region = data.region;
        self.city = data.city;
        self.category = data.category;
        self.product = data.product;
        self.quantity = data.quantity;
        self.unit_price = data.unit_price;
        self.total_price = data.total_price;
    }

    pub fn data(&self) -> SalesRecordData {
        SalesRecordData {
            order_date: self.order_date,
            region: self.region.clone(),
            city: self.city.clone(),
            category: self.category.clone(),
            product: self.product.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price: self.total_price,
        }
    }
}
