pub mod alert;
pub mod icons;
pub mod layout;
