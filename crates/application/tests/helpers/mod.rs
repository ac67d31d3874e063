#![allow(dead_code)]

pub mod mock_cache;
pub mod mock_exchanger;

pub use mock_cache::MemoryCache;
pub use mock_exchanger::MockExchanger;

use linktracer_application::ports::{AnswerData, AnswerRecord};
use std::net::{Ipv4Addr, Ipv6Addr};

pub const PRIMARY: &str = "192.0.2.53:53";
pub const SECONDARY: &str = "198.51.100.53:53";

pub fn a(name: &str, ip: [u8; 4]) -> AnswerRecord {
    AnswerRecord::new(name, 300, AnswerData::A(Ipv4Addr::from(ip)))
}

pub fn aaaa(name: &str, ip: Ipv6Addr) -> AnswerRecord {
    AnswerRecord::new(name, 300, AnswerData::AAAA(ip))
}

pub fn mx(name: &str, preference: u16, exchange: &str) -> AnswerRecord {
    AnswerRecord::new(
        name,
        3600,
        AnswerData::MX {
            preference,
            exchange: exchange.to_string(),
        },
    )
}

pub fn txt(name: &str, strings: &[&str]) -> AnswerRecord {
    AnswerRecord::new(
        name,
        3600,
        AnswerData::TXT(strings.iter().map(|s| s.to_string()).collect()),
    )
}
