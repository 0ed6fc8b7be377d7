use chrono::{DateTime, Duration, Utc};
use rand::{Rng, seq::IndexedRandom};

const STATUS: [(&str, u8); 3] = [("OK", 80), ("FAIL", 15), ("TIMEOUT", 5)];
const MALFORMED: [&str; 5] = [
    "{ts};{bytes};OK",
    "{ts};lots;OK;{ip}",
    "{ts};-{bytes};OK;{ip}",
    "{ts};{bytes};OK;",
    "",
];

/// Pool of `192.168.x.y` addresses, drawn once per run so requests repeat.
pub fn host_pool<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<String> {
    (0..size.max(1))
        .map(|_| {
            format!(
                "192.168.{}.{}",
                rng.random_range(0..256),
                rng.random_range(1..255)
            )
        })
        .collect()
}

pub fn generate_access_log<R: Rng + ?Sized>(
    rng: &mut R,
    hosts: &[String],
    at: DateTime<Utc>,
) -> String {
    let ts = at.to_rfc3339();
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..2000);
    let ip = hosts.choose(rng).unwrap();

    format!("{ts};{size};{status};{ip}")
}

pub fn generate_malformed_log<R: Rng + ?Sized>(
    rng: &mut R,
    hosts: &[String],
    at: DateTime<Utc>,
) -> String {
    let shape = MALFORMED.choose(rng).unwrap();
    let size: u32 = rng.random_range(100..2000);
    shape
        .replace("{ts}", &at.to_rfc3339())
        .replace("{bytes}", &size.to_string())
        .replace("{ip}", hosts.choose(rng).unwrap())
}

/// Timestamps advance by up to a second per line.
pub fn next_timestamp<R: Rng + ?Sized>(rng: &mut R, previous: DateTime<Utc>) -> DateTime<Utc> {
    previous + Duration::milliseconds(rng.random_range(0..1000))
}
