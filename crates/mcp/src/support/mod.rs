#![forbid(unsafe_code)]

mod ai;
mod args;
mod jsonrpc;
mod time;
mod views;

pub(crate) use ai::*;
pub(crate) use args::*;
pub(crate) use jsonrpc::*;
pub(crate) use views::*;
