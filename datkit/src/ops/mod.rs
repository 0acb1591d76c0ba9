pub mod aggregate;
pub mod filter;
pub mod lookup;
pub mod macros;
