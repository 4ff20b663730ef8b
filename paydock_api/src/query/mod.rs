mod common;
pub use self::common::{Query, SortDirection};

mod charge;
pub use self::charge::ChargeSearchRequest;

mod customer;
pub use self::customer::CustomerSearchRequest;
