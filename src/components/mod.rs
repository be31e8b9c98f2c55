pub mod nav;
pub mod showcase;
