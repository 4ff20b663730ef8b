mod meta;
pub use self::meta::{Parsed, Resource, Response};

mod error;
pub use self::error::{ErrorDetail, ErrorResource, ErrorResponse};

mod charge;
pub use self::charge::{
    Charge, ChargeCustomer, ChargeItemResponse, ChargeItemsResponse, ChargeRefundResponse,
    ChargeRequest, ChargeResponse, Transaction,
};

mod customer;
pub use self::customer::{
    Customer, CustomerItemsResponse, CustomerRequest, CustomerResponse, CustomerUpdateRequest,
    PaymentSource, PaymentSourceRequest,
};

/// Identifier assigned by the API to charges, customers and payment sources.
pub type ObjectID = String;
