pub mod config;
pub mod error;
pub mod ident;
pub mod record;

#[doc(hidden)]
pub use tracing;

/// Positive confirmation line ("data retrieved", "parsed successfully", ...).
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "cnpjr::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
