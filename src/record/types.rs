//! Sales record definition and field enumerations
//!
//! A record is immutable once loaded. String fields are never absent
//! (they default to `""`); numeric and date fields are `None` when the
//! source value is missing or unparsable.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the sales dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    // Customer
    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub gender: String,
    pub age: Option<i64>,
    pub customer_region: String,
    pub customer_type: String,

    // Product
    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub product_category: String,
    /// Single scalar value, matched exactly by the tag filter
    pub tags: String,

    // Commerce
    pub quantity: Option<i64>,
    pub price_per_unit: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub total_amount: Option<f64>,
    pub final_amount: Option<f64>,

    // Operational
    pub date: Option<NaiveDateTime>,
    pub payment_method: String,
    pub order_status: String,
    pub delivery_type: String,
    pub store_id: String,
    pub store_location: String,
    pub salesperson_id: String,
    pub employee_name: String,
}

impl SalesRecord {
    /// Returns the value of a text field
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::CustomerId => &self.customer_id,
            TextField::CustomerName => &self.customer_name,
            TextField::PhoneNumber => &self.phone_number,
            TextField::Gender => &self.gender,
            TextField::CustomerRegion => &self.customer_region,
            TextField::CustomerType => &self.customer_type,
            TextField::ProductId => &self.product_id,
            TextField::ProductName => &self.product_name,
            TextField::Brand => &self.brand,
            TextField::ProductCategory => &self.product_category,
            TextField::Tags => &self.tags,
            TextField::PaymentMethod => &self.payment_method,
            TextField::OrderStatus => &self.order_status,
            TextField::DeliveryType => &self.delivery_type,
            TextField::StoreId => &self.store_id,
            TextField::StoreLocation => &self.store_location,
            TextField::SalespersonId => &self.salesperson_id,
            TextField::EmployeeName => &self.employee_name,
        }
    }

    /// Returns the value of a numeric field widened to `f64`
    pub fn number(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::Age => self.age.map(|v| v as f64),
            NumericField::Quantity => self.quantity.map(|v| v as f64),
            NumericField::PricePerUnit => self.price_per_unit,
            NumericField::DiscountPercentage => self.discount_percentage,
            NumericField::TotalAmount => self.total_amount,
            NumericField::FinalAmount => self.final_amount,
        }
    }
}

/// String-valued fields of a [`SalesRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    CustomerId,
    CustomerName,
    PhoneNumber,
    Gender,
    CustomerRegion,
    CustomerType,
    ProductId,
    ProductName,
    Brand,
    ProductCategory,
    Tags,
    PaymentMethod,
    OrderStatus,
    DeliveryType,
    StoreId,
    StoreLocation,
    SalespersonId,
    EmployeeName,
}

impl TextField {
    /// Every text field, in record order
    pub const ALL: [TextField; 18] = [
        TextField::CustomerId,
        TextField::CustomerName,
        TextField::PhoneNumber,
        TextField::Gender,
        TextField::CustomerRegion,
        TextField::CustomerType,
        TextField::ProductId,
        TextField::ProductName,
        TextField::Brand,
        TextField::ProductCategory,
        TextField::Tags,
        TextField::PaymentMethod,
        TextField::OrderStatus,
        TextField::DeliveryType,
        TextField::StoreId,
        TextField::StoreLocation,
        TextField::SalespersonId,
        TextField::EmployeeName,
    ];

    /// Returns the camelCase field name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::CustomerId => "customerId",
            TextField::CustomerName => "customerName",
            TextField::PhoneNumber => "phoneNumber",
            TextField::Gender => "gender",
            TextField::CustomerRegion => "customerRegion",
            TextField::CustomerType => "customerType",
            TextField::ProductId => "productId",
            TextField::ProductName => "productName",
            TextField::Brand => "brand",
            TextField::ProductCategory => "productCategory",
            TextField::Tags => "tags",
            TextField::PaymentMethod => "paymentMethod",
            TextField::OrderStatus => "orderStatus",
            TextField::DeliveryType => "deliveryType",
            TextField::StoreId => "storeId",
            TextField::StoreLocation => "storeLocation",
            TextField::SalespersonId => "salespersonId",
            TextField::EmployeeName => "employeeName",
        }
    }

    /// Looks a text field up by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

/// Numeric fields of a [`SalesRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    Quantity,
    PricePerUnit,
    DiscountPercentage,
    TotalAmount,
    FinalAmount,
}

impl NumericField {
    pub const ALL: [NumericField; 6] = [
        NumericField::Age,
        NumericField::Quantity,
        NumericField::PricePerUnit,
        NumericField::DiscountPercentage,
        NumericField::TotalAmount,
        NumericField::FinalAmount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NumericField::Age => "age",
            NumericField::Quantity => "quantity",
            NumericField::PricePerUnit => "pricePerUnit",
            NumericField::DiscountPercentage => "discountPercentage",
            NumericField::TotalAmount => "totalAmount",
            NumericField::FinalAmount => "finalAmount",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}
