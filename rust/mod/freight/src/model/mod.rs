mod bill;
mod container_company;
mod goni;
mod line;
mod sea_container;
mod sea_voyage;

pub use bill::*;
pub use container_company::*;
pub use goni::*;
pub use line::*;
pub use sea_container::*;
pub use sea_voyage::*;
