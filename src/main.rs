// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::rc::Rc;

use als_core::config::{load_and_validate_config, Config};
use als_core::model::{DataStore, Image, StateLogger};
use als_core::observability::init_tracing;
use als_core::observability::messages::timing::OperationTimed;
use als_core::observability::messages::StructuredLog;
use als_core::traits::AppStateObserver;
use als_core::utils::Timer;
use anyhow::{Context, Result};
use ndarray::{ArrayD, IxDyn};

const DEMO_FRAME_SHAPE: [usize; 2] = [480, 640];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [config.yaml|config.toml]", args[0]);
        eprintln!("Example: {} als.yaml", args[0]);
        eprintln!("Example: RUST_LOG=debug {}", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => Config::default(),
    };

    init_tracing(&config.logging).context("Failed to initialize logging")?;

    if let Err(error) = config.paths.verify_critical_folders() {
        tracing::warn!("{}", error);
    }

    let store = DataStore::shared();
    let console: Rc<dyn AppStateObserver> = Rc::new(StateLogger::new("console", &store));
    store.add_observer(Rc::clone(&console));

    let mut timer = Timer::new();
    {
        let _scope = timer.scope();

        store.set_scan_in_progress(true);

        let mut frame = Image::new(ArrayD::<u16>::zeros(IxDyn(&DEMO_FRAME_SHAPE)))?;
        frame.set_bayer_pattern(Some("RGGB".to_string()));
        frame.set_origin("demo frame");
        tracing::info!("Received image:\n{}", frame);

        store.set_web_server_is_running(true);
    }

    if let Some(elapsed) = timer.elapsed() {
        OperationTimed {
            operation: "starting demo session",
            elapsed,
        }
        .log();
    }

    store.set_web_server_is_running(false);
    store.set_scan_in_progress(false);
    store.remove_observer(&console)?;

    Ok(())
}
