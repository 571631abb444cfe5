//! Shared fixtures for integration tests.

#![allow(dead_code)]

/// A 129-token solution for deal 1 that needs four free cells.
pub const DEAL_ONE_SOLUTION: &str = "\
8a 58 52 87 82 38 3b 63 63 6h 3h 6h 6c 16 12 81 \
8h 15 1h 1h c1 8c 86 a8 36 3a 38 b3 78 a7 71 7a \
7h 5h ch 5h 5h 5b 5h 58 a5 68 6h 4h 47 24 62 b6 \
43 46 64 16v4 17 71v3 74 27 2h 82 81 28 2h 4a 4h 34 \
3b 3h b3 43 4b 4h 6c 6h 4d 4h d4 27 21 2d b2 24 \
2h 1h ah 71 42 4h d7 17 1h 2h 32 c3 13 1h 4h 6h \
14v2 1h 71 7h 34 23 2h 46 74 7h 27 2h 6a 6h 2b 2h \
6c 6h 2d 2h 2h 2h 8h 5h 1h 3h 4h 7h ah bh ch dh \
6h";

/// Install a test subscriber so `RUST_LOG=debug` shows rejected tokens.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
