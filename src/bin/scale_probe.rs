use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use monostack::problems::{
    car_fleet::car_fleet, container::max_container, histogram::largest_rectangle,
    next_greater::days_until_warmer, trapped_water::trapped_water,
};
use monostack::utils::cmp_ratio;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262_144, 1_048_576];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    init_tracing();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("monostack scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Every scenario runs over deterministic inputs of growing length.");
    eprintln!(
        "  • Results are cross-checked against O(n²) brute force up to length {}",
        options.verify_limit
    );
    eprintln!("  • wall_s: wall-clock seconds; rss_delta_kib: resident memory delta");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/5] Next greater element (monotonic stack)...");
    measurements.extend(run_scenario(&options, &mut sys, "next_greater", |len| {
        let values = sawtooth(len, 97);
        let got = days_until_warmer(&values);
        let checksum = got.iter().map(|&d| d as u128).sum::<u128>();
        let baseline = (len <= options.verify_limit).then(|| {
            brute_next_greater(&values)
                .iter()
                .map(|&d| d as u128)
                .sum::<u128>()
        });
        (checksum, baseline)
    }));

    eprintln!("[2/5] Largest rectangle in histogram (monotonic stack)...");
    measurements.extend(run_scenario(&options, &mut sys, "histogram_area", |len| {
        let heights = sawtooth(len, 61);
        let area = largest_rectangle(&heights);
        let baseline = (len <= options.verify_limit).then(|| brute_histogram(&heights));
        (area, baseline)
    }));

    eprintln!("[3/5] Trapped rain water (two pointers)...");
    measurements.extend(run_scenario(&options, &mut sys, "trapped_water", |len| {
        let heights = sawtooth(len, 43);
        let volume = trapped_water(&heights);
        let baseline = (len <= options.verify_limit).then(|| brute_water(&heights));
        (volume, baseline)
    }));

    eprintln!("[4/5] Container with most water (two pointers)...");
    measurements.extend(run_scenario(&options, &mut sys, "max_container", |len| {
        let heights = sawtooth(len, 89);
        let best = max_container(&heights);
        let baseline = (len <= options.verify_limit).then(|| brute_container(&heights));
        (best, baseline)
    }));

    eprintln!("[5/5] Car fleets (sorted stack)...");
    measurements.extend(run_scenario(&options, &mut sys, "car_fleet", |len| {
        let target = len as i64 * 4;
        let positions: Vec<i64> = (0..len as i64).map(|i| (i * 7919) % target).collect();
        let speeds: Vec<i64> = (0..len as i64).map(|i| i % 13 + 1).collect();
        let fleets = match car_fleet(target, &positions, &speeds) {
            Ok(n) => n as u128,
            Err(err) => {
                eprintln!("car_fleet rejected generated input: {err}");
                u128::MAX
            }
        };
        let baseline = (len <= options.verify_limit)
            .then(|| brute_fleets(target, &positions, &speeds) as u128);
        (fleets, baseline)
    }));

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monostack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 2048usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum sequence length to verify via brute force (default: 2048)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --release --bin scale_probe -- --format table --verify-limit 512
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    len: usize,
    result: u128,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

/// Run `compute` for every size. It returns the engine's result and, when
/// the size is small enough, the brute-force baseline to compare against.
fn run_scenario<F>(
    options: &Options,
    sys: &mut System,
    scenario: &'static str,
    mut compute: F,
) -> Vec<Measurement>
where
    F: FnMut(usize) -> (u128, Option<u128>),
{
    let total = SIZES.len();
    let measurements = SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] len {}... ", idx + 1, total, len);
            let before = rss_kib(sys);
            let start = Instant::now();
            let (result, baseline) = compute(len);
            let wall_s = start.elapsed().as_secs_f64();
            let after = rss_kib(sys);

            let (verification_status, verification_detail) = match baseline {
                None => (VerificationStatus::NotChecked, None),
                Some(expected) if expected == result => (VerificationStatus::Passed, None),
                Some(expected) => (
                    VerificationStatus::Failed,
                    Some(format!("expected {expected}, got {result}")),
                ),
            };
            debug_assert!(baseline.is_none() || len <= options.verify_limit);
            eprintln!(
                "{} result={}, time={:.3}s, status={}",
                verification_status.icon(),
                result,
                wall_s,
                verification_status.label()
            );
            Measurement {
                scenario,
                len,
                result,
                wall_s,
                rss_delta_kib: after.saturating_sub(before),
                verification_status,
                verification_detail,
            }
        })
        .collect();
    eprintln!();
    measurements
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let count = |status| {
        measurements
            .iter()
            .filter(|m| m.verification_status == status)
            .count()
    };
    let passed = count(VerificationStatus::Passed);
    let failed = count(VerificationStatus::Failed);
    let not_checked = count(VerificationStatus::NotChecked);
    let total = measurements.len().max(1) as f64;

    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (len > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed runs:");
        for m in measurements
            .iter()
            .filter(|m| m.verification_status == VerificationStatus::Failed)
        {
            eprintln!("  ✗ {} (len={})", m.scenario, m.len);
            if let Some(ref detail) = m.verification_detail {
                eprintln!("     Error: {detail}");
            }
        }
        eprintln!();
    }

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}: max_time={max_time:.3}s, max_rss_delta={max_mem} KiB");
        // Linear scans: time per element should stay roughly flat as len grows.
        if let (Some(first), Some(last)) = (ms.first(), ms.last()) {
            if first.wall_s > 0.0 {
                let per_elem_ratio =
                    (last.wall_s / last.len as f64) / (first.wall_s / first.len as f64);
                eprintln!("    per-element time ratio (largest/smallest): {per_elem_ratio:.2}");
            }
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,len,result,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.len,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    println!(
        "{:<col1$}  {:>9}  {:>20}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "len", "result", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<9}  {:-<20}  {:-<10}  {:-<14}  {:-<12}  {:-<6}",
        "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>9}  {:>20}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.len,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match &m.verification_detail {
            Some(d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"len\":{},\"result\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.len,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}

/// Rising ramps of length `period` with a slowly drifting floor.
fn sawtooth(len: usize, period: usize) -> Vec<u32> {
    (0..len)
        .map(|i| ((i % period) * 3 + (i / period) % 17) as u32)
        .collect()
}

fn brute_next_greater(values: &[u32]) -> Vec<usize> {
    (0..values.len())
        .map(|i| {
            (i + 1..values.len())
                .find(|&j| values[j] > values[i])
                .map_or(0, |j| j - i)
        })
        .collect()
}

fn brute_histogram(heights: &[u32]) -> u128 {
    let mut best = 0u128;
    for i in 0..heights.len() {
        let mut min = u32::MAX;
        for j in i..heights.len() {
            min = min.min(heights[j]);
            best = best.max(u128::from(min) * (j - i + 1) as u128);
        }
    }
    best
}

fn brute_water(heights: &[u32]) -> u128 {
    (0..heights.len())
        .map(|i| {
            let left = heights[..=i].iter().copied().max().unwrap_or(0);
            let right = heights[i..].iter().copied().max().unwrap_or(0);
            u128::from(left.min(right) - heights[i])
        })
        .sum()
}

fn brute_container(heights: &[u32]) -> u128 {
    let mut best = 0u128;
    for i in 0..heights.len() {
        for j in i + 1..heights.len() {
            best = best.max(u128::from(heights[i].min(heights[j])) * (j - i) as u128);
        }
    }
    best
}

/// A car leads a fleet iff every car starting ahead of it arrives strictly
/// earlier, and among cars sharing its start it is the slowest (lowest index
/// on ties).
fn brute_fleets(target: i64, positions: &[i64], speeds: &[i64]) -> usize {
    let cmp_arrival = |i: usize, j: usize| {
        cmp_ratio(target - positions[i], speeds[i], target - positions[j], speeds[j])
    };
    (0..positions.len())
        .filter(|&i| {
            (0..positions.len()).all(|j| {
                if j == i {
                    return true;
                }
                let ord = cmp_arrival(i, j);
                match positions[j].cmp(&positions[i]) {
                    Ordering::Greater => ord == Ordering::Greater,
                    Ordering::Equal => {
                        ord == Ordering::Greater || (ord == Ordering::Equal && i < j)
                    }
                    Ordering::Less => true,
                }
            })
        })
        .count()
}
