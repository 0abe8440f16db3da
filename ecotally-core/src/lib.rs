pub mod calculator;
pub mod error;
pub mod factors;
pub mod recommend;
pub mod service;
