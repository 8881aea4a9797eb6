//! Sports event betting: odds setting, simulation and settlement

mod book;
pub mod pricing;


pub use book::*;
pub use pricing::*;
