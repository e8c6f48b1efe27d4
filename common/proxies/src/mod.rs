#![no_std]

pub mod proxy_rate_source;
