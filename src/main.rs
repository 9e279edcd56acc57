//! Binary entrypoint for the vCon server.
//! Run with: cargo run --bin vcon-server

use std::process::ExitCode;

use vcon_server::start_vcon_server;

fn main() -> ExitCode {
    start_vcon_server::run()
}
