#![cfg(test)]

mod combining;
mod mirroring;
