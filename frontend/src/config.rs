
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const CONTACT_PATH: &str = "/api/contact";

// Timeout for a real submission, and the fake latency of the simulated one.
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;
pub const SIMULATED_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Simulated,
    Http,
}

/// There is no contact endpoint yet, so builds simulate the submission
/// unless compiled with `CONTACT_ENDPOINT_ENABLED=1`.
pub fn transport_mode() -> TransportMode {
    parse_transport_mode(option_env!("CONTACT_ENDPOINT_ENABLED"))
}

fn parse_transport_mode(flag: Option<&str>) -> TransportMode {
    match flag.map(str::trim) {
        Some("1") | Some("true") | Some("yes") => TransportMode::Http,
        _ => TransportMode::Simulated,
    }
}

pub fn contact_endpoint() -> String {
    format!("{}{}", get_backend_url(), CONTACT_PATH)
}
