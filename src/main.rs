// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::io;

use the_greeter::greeter::Greeter;

fn main() {
    // Log to stderr so stdout carries only the announced messages.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <message> [message ...]", args[0]);
        eprintln!("Example: {} \"Hello, World!\"", args[0]);
        std::process::exit(1);
    }

    // Each argument becomes its own greeting, announced in order.
    for message in &args[1..] {
        let greeter = Greeter::new(message.as_str());
        greeter.announce();
    }
}
