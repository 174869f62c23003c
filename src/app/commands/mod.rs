pub mod deploy;
pub mod install;
pub mod pack;
pub mod update;

mod steps;
