//! CLI smoke entry point.
//!
//! Starts core logging under the system temp directory, prints core linkage
//! info and canonicalizes a two-stop sample itinerary so engine wiring can be
//! checked without any UI.

use tabi_core::{default_log_level, init_logging, sort_by_date_time, ScheduleEntry};

const LOG_DIR_NAME: &str = "tabi-logs";

fn main() {
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    match init_logging(default_log_level().as_str(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("tabi_core log_dir={}", log_dir.display()),
        Err(err) => eprintln!("tabi_core logging_disabled={err}"),
    }
    println!("tabi_core ping={}", tabi_core::ping());
    println!("tabi_core version={}", tabi_core::core_version());

    let sample = [
        ScheduleEntry::new(1, "2024-03-20", "11:30", "Asakusa", "Tokyo"),
        ScheduleEntry::new(2, "2024-03-20", "10:00", "Skytree", "Tokyo"),
    ];
    match sort_by_date_time(&sample) {
        Ok(sorted) => {
            let order: Vec<String> = sorted.iter().map(|entry| entry.id.to_string()).collect();
            println!("tabi_core sample_order={}", order.join(","));
        }
        Err(err) => {
            eprintln!("tabi_core sample_error={err}");
            std::process::exit(1);
        }
    }
}
