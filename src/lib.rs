/* Modules */
pub mod config;
pub mod control;
pub mod elevator;
pub mod shared;
