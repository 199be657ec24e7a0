#[macro_export]
macro_rules! log_stats {
    ($name:expr, $($arg:tt)*) => {
        log::info!("{:<20} {}", format!("[{}]", $name.to_uppercase()), format!($($arg)*))
    };
}
