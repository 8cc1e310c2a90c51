//! Instruction text sent to the models.

pub mod card;
pub mod image;
