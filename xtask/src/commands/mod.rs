//! Command families dispatched from [`crate::execute_from_env`].

pub mod icons;
pub mod verify;
