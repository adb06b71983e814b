pub mod create;
pub mod disable;
pub mod environment;
pub mod hash;
pub mod redeem;
pub mod selector;
