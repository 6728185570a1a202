//! Terminal client: the interactive menu and record rendering.
//! Nothing here is part of the library API.

pub mod menu;
pub mod print;
