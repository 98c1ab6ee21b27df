// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessors and the configuration dump, end to end.
//!
//! This example demonstrates:
//! - Declaring configuration keys and defaults on a type
//! - Reading validated values through the typed accessors
//! - Writing values back, with byte sizes keeping their suffix
//! - Dumping the declared keys with `print_all`
//!
//! To run this example:
//! ```bash
//! cargo run --example print_config
//! ```

use typedcfg::prelude::*;

struct RaftServerConfigKeys;

impl RaftServerConfigKeys {
    const PREFIX: &'static str = "raft.server";

    const STORAGE_DIR_KEY: &'static str = "raft.server.storage.dir";
    const STORAGE_DIR_DEFAULT: &'static str = "/tmp/raft-server";

    const STAGING_CATCHUP_GAP_KEY: &'static str = "raft.server.staging.catchup.gap";
    const STAGING_CATCHUP_GAP_DEFAULT: i32 = 1000;

    const SEGMENT_SIZE_MAX_KEY: &'static str = "raft.server.log.segment.size.max";

    const RPC_TIMEOUT_MIN_KEY: &'static str = "raft.server.rpc.timeout.min";
    const RPC_TIMEOUT_MIN_DEFAULT: TimeDuration = TimeDuration::new(150, TimeUnit::Milliseconds);

    const ADDRESS_KEY: &'static str = "raft.grpc.server.address";
    const ADDRESS_DEFAULT: &'static str = "127.0.0.1:9872";

    fn segment_size_max_default() -> SizeInBytes {
        SizeInBytes::from(8 << 20)
    }
}

impl Introspect for RaftServerConfigKeys {
    fn config_surface() -> ConfigSurface {
        ConfigSurface::builder("RaftServerConfigKeys")
            .constant("PREFIX", Self::PREFIX)
            .constant("STORAGE_DIR_KEY", Self::STORAGE_DIR_KEY)
            .constant("STORAGE_DIR_DEFAULT", Self::STORAGE_DIR_DEFAULT)
            .constant("STAGING_CATCHUP_GAP_KEY", Self::STAGING_CATCHUP_GAP_KEY)
            .constant("STAGING_CATCHUP_GAP_DEFAULT", &Self::STAGING_CATCHUP_GAP_DEFAULT)
            .constant("SEGMENT_SIZE_MAX_KEY", Self::SEGMENT_SIZE_MAX_KEY)
            .constant("SEGMENT_SIZE_MAX_DEFAULT", &Self::segment_size_max_default())
            .constant("RPC_TIMEOUT_MIN_KEY", Self::RPC_TIMEOUT_MIN_KEY)
            .constant("RPC_TIMEOUT_MIN_DEFAULT", &Self::RPC_TIMEOUT_MIN_DEFAULT)
            .nested(
                ConfigSurface::builder("Grpc")
                    .constant("ADDRESS_KEY", Self::ADDRESS_KEY)
                    .constant("ADDRESS_DEFAULT", Self::ADDRESS_DEFAULT)
                    .build(),
            )
            .build()
    }
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Typed Configuration: Accessors and Dump ===\n");

    let store = MemoryStore::new();

    // Example 1: Defaults are logged as such
    println!("--- Example 1: Defaults ---");
    let gap = get_int(
        &store,
        RaftServerConfigKeys::STAGING_CATCHUP_GAP_KEY,
        RaftServerConfigKeys::STAGING_CATCHUP_GAP_DEFAULT,
        &[&require_min(0i32)],
    )?;
    println!("staging catch-up gap: {}", gap);

    // Example 2: Custom values, with suffixes preserved on write
    println!("\n--- Example 2: Custom Values ---");
    set_size_in_bytes(
        &store,
        RaftServerConfigKeys::SEGMENT_SIZE_MAX_KEY,
        &SizeInBytes::parse("32MB")?,
        &[],
    )?;
    let segment = get_size_in_bytes(
        &store,
        RaftServerConfigKeys::SEGMENT_SIZE_MAX_KEY,
        RaftServerConfigKeys::segment_size_max_default(),
        &[],
    )?;
    println!("segment size: {} ({} bytes)", segment, segment.size());

    set_time_duration(
        &store,
        RaftServerConfigKeys::RPC_TIMEOUT_MIN_KEY,
        &TimeDuration::new(300, TimeUnit::Milliseconds),
        &[],
    )?;
    let timeout = get_time_duration(
        &store,
        RaftServerConfigKeys::RPC_TIMEOUT_MIN_KEY,
        RaftServerConfigKeys::RPC_TIMEOUT_MIN_DEFAULT,
        &[],
    )?;
    println!("rpc timeout: {}", timeout);

    let address = get_socket_addr(
        &store,
        RaftServerConfigKeys::ADDRESS_KEY,
        RaftServerConfigKeys::ADDRESS_DEFAULT,
        &SystemResolver,
    )?;
    println!("server address: {}", address);

    // Example 3: Invalid values fail fast
    println!("\n--- Example 3: Validation ---");
    store.set_raw_text(RaftServerConfigKeys::STAGING_CATCHUP_GAP_KEY, "-1")?;
    match get_int(
        &store,
        RaftServerConfigKeys::STAGING_CATCHUP_GAP_KEY,
        RaftServerConfigKeys::STAGING_CATCHUP_GAP_DEFAULT,
        &[&require_min(0i32)],
    ) {
        Ok(value) => println!("unexpected value: {}", value),
        Err(e) => println!("rejected: {}", e),
    }

    // Example 4: Document every declared key
    println!("\n--- Example 4: Configuration Dump ---");
    print_all::<RaftServerConfigKeys>();

    println!("\n=== Example Complete ===");
    Ok(())
}
