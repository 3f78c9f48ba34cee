mod common;
mod properties;
mod ranking;
