#![cfg(test)]
mod engine;
mod recon;
mod support;
