pub mod conversion;
pub mod definition;
pub mod values;

pub use conversion::*;
pub use definition::*;
pub use values::*;
