//! Domain model types

pub mod driver;
pub mod expenses;
pub mod load;
pub mod numeric;
pub mod schema;
pub mod sheet;
pub mod totals;

pub use driver::{Driver, DriverStatus};
pub use expenses::Expenses;
pub use load::Load;
pub use numeric::NumericField;
pub use schema::{FieldDescriptor, InputKind};
pub use sheet::WeeklySheet;
pub use totals::Totals;
