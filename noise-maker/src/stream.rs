use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
};

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::args::CliArgs;
use crate::generator::{generate_access_log, generate_malformed_log, host_pool, next_timestamp};

pub fn write_log_file(args: &CliArgs) -> io::Result<usize> {
    if let Some(parent) = args.output().parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(args.output())?;
    let mut out = BufWriter::new(file);

    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    write_lines(&mut out, &mut rng, args)?;
    out.flush()?;
    Ok(*args.lines())
}

fn write_lines<W: Write, R: Rng>(out: &mut W, rng: &mut R, args: &CliArgs) -> io::Result<()> {
    let hosts = host_pool(rng, *args.hosts());
    let malformed_ratio = match *args.malformed_ratio() {
        r if r.is_nan() => 0.0,
        r => r.clamp(0.0, 1.0),
    };
    // seeded runs start from a fixed instant so the whole file is reproducible
    let mut at = match args.seed() {
        Some(_) => DateTime::<Utc>::UNIX_EPOCH,
        None => Utc::now(),
    };

    for _ in 0..*args.lines() {
        at = next_timestamp(rng, at);
        let line = if rng.random_bool(malformed_ratio) {
            generate_malformed_log(rng, &hosts, at)
        } else {
            generate_access_log(rng, &hosts, at)
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}
