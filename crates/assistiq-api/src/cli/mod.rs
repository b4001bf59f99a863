//! CLI command definitions and dispatch for the `assistiq` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod tickets;

use clap::{Parser, Subcommand};

/// Run the AssistIQ support-ticket intake service.
#[derive(Parser)]
#[command(name = "assistiq", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },

    /// List stored tickets.
    #[command(alias = "ls")]
    Tickets,
}
