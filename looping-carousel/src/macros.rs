/// Crate-internal logging: `clog!(level, fields..., "message")`.
///
/// Expands to a `tracing` event under the `looping_carousel` target with `feature = "tracing"`,
/// and to nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! clog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "looping_carousel", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! clog {
    ($level:ident, $($tt:tt)*) => {};
}
