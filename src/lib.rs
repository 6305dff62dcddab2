pub mod centrifuge;
pub mod classify;
pub mod fastx;
pub mod resolve;
pub mod writer;
