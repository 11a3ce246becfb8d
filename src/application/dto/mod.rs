pub mod categories;
pub mod table;

pub use categories::CategoryDto;
pub use table::{CategoryTableDto, TableSummary};
