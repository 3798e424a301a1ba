pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod login;
pub mod logout;
pub mod new;
pub mod show;
pub mod stats;
pub mod whoami;
