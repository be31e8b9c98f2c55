pub mod hook;
pub mod measure;
pub mod selector;

pub use hook::use_scroll_image;
pub use selector::ImageSlot;
