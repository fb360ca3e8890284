pub mod confirm;
pub mod gate;
pub mod modal;
pub mod models;
pub mod protocol;
pub mod selection;

#[cfg(test)]
mod confirm_test;
#[cfg(test)]
mod selection_test;
