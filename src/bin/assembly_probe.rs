use std::env;
use std::time::Instant;

use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use unit_assembly::{parse_sequence, AssemblyPlanner, BasicUnit, Symbol, Tally};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("assembly_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Unit Assembly Probe: correctness and scaling of the assembly planner");
    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "  • Results up to length {} are checked against a suffix-DP baseline",
        options.verify_limit
    );
    eprintln!("  • wall_s: wall-clock seconds; rss_delta_kib: resident memory delta");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Reference catalogs...");
    match run_reference(&options, &mut sys) {
        Ok(ms) => measurements.extend(ms),
        Err(err) => {
            eprintln!("assembly_probe: {err}");
            std::process::exit(1);
        }
    }
    eprintln!();

    eprintln!("[2/2] Scaling over periodic targets with point edits...");
    match run_scaling(&options, &mut sys) {
        Ok(ms) => measurements.extend(ms),
        Err(err) => {
            eprintln!("assembly_probe: {err}");
            std::process::exit(1);
        }
    }
    eprintln!();

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .count();
    if failed == 0 {
        eprintln!("✓ All verified runs match the baseline.");
    } else {
        eprintln!("✗ {failed} run(s) disagree with the baseline.");
    }
    eprintln!();

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("assembly_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
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
Usage: cargo run --features probe --bin assembly_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Longest target checked against the baseline (default: 2048)
  -h, --help                    Print this help message
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
    size_desc: String,
    outcome: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

type Catalog = &'static [(&'static str, u64, usize)];

const MIXED: Catalog = &[
    ("A", 2, 0),
    ("C", 3, 0),
    ("G", 4, 0),
    ("T", 5, 0),
    ("ACGT", 10, 1),
    ("CGTA", 12, 1),
];

const EXACT: Catalog = &[("A", 2, 0), ("C", 3, 0), ("G", 4, 0), ("T", 5, 0), ("ACGT", 10, 0)];

const SCALING: Catalog = &[
    ("A", 2, 0),
    ("C", 3, 0),
    ("G", 4, 0),
    ("T", 5, 0),
    ("ACGT", 10, 1),
    ("CGTA", 12, 1),
    ("ACGTACGT", 17, 2),
    ("TTACGTAC", 15, 3),
];

fn build_catalog(entries: Catalog) -> Result<Vec<BasicUnit>, String> {
    entries
        .iter()
        .map(|&(seq, cost, dmax)| BasicUnit::parse(seq, cost, dmax).map_err(|e| e.to_string()))
        .collect()
}

fn run_reference(options: &Options, sys: &mut System) -> Result<Vec<Measurement>, String> {
    let cases: [(&'static str, &str, Catalog); 2] = [
        ("reference_mixed", "ACGTACGTA", MIXED),
        ("reference_exact", "ACGT", EXACT),
    ];
    let mut out = Vec::with_capacity(cases.len());
    for (scenario, text, entries) in cases {
        let catalog = build_catalog(entries)?;
        let target = parse_sequence(text.as_bytes()).map_err(|e| e.to_string())?;
        let size_desc = format!("target={text}");
        let m = solve_and_measure(scenario, size_desc, &target, catalog, options, sys)?;
        eprintln!("      {scenario}: {} ({})", m.outcome, m.verification_status.label());
        out.push(m);
    }
    Ok(out)
}

fn run_scaling(options: &Options, sys: &mut System) -> Result<Vec<Measurement>, String> {
    const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536];
    let total = SIZES.len();
    let mut out = Vec::with_capacity(total);
    for (idx, &len) in SIZES.iter().enumerate() {
        eprint!("      [{}/{}] Testing size {}... ", idx + 1, total, len);
        let catalog = build_catalog(SCALING)?;
        let target = edited_periodic_dna(len);
        let size_desc = format!("len={len}");
        let m = solve_and_measure("periodic_edits", size_desc, &target, catalog, options, sys)?;
        eprintln!("{}, time={:.3}s, status={}", m.outcome, m.wall_s, m.verification_status.label());
        out.push(m);
    }
    Ok(out)
}

fn solve_and_measure(
    scenario: &'static str,
    size_desc: String,
    target: &[Symbol],
    catalog: Vec<BasicUnit>,
    options: &Options,
    sys: &mut System,
) -> Result<Measurement, String> {
    let planner = AssemblyPlanner::new(catalog).map_err(|e| e.to_string())?;

    let before = rss_kib(sys);
    let start = Instant::now();
    let result = planner.solve(target).map_err(|e| e.to_string())?;
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let tally = result.as_ref().map(|a| a.tally());
    let outcome = match tally {
        Some(t) => format!("P={} U={}", t.cost, t.units),
        None => "no_solution".to_string(),
    };

    let (verification_status, verification_detail) = if target.len() <= options.verify_limit {
        let baseline = suffix_baseline(target, planner.catalog());
        if baseline == tally {
            (VerificationStatus::Passed, None)
        } else {
            (
                VerificationStatus::Failed,
                Some(format!("expected {baseline:?}, got {tally:?}")),
            )
        }
    } else {
        (VerificationStatus::NotChecked, None)
    };

    Ok(Measurement {
        scenario,
        size_desc,
        outcome,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status,
        verification_detail,
    })
}

/// Independent check: DP over suffixes, feasibility as "subsequence whose
/// length difference fits the budget".
fn suffix_baseline(target: &[Symbol], catalog: &[BasicUnit]) -> Option<Tally> {
    let n = target.len();
    let mut best: Vec<Option<Tally>> = vec![None; n + 1];
    best[n] = Some(Tally::ZERO);
    for start in (0..n).rev() {
        for unit in catalog {
            let max_end = (start + unit.len()).min(n);
            for end in start + 1..=max_end {
                let slice = &target[start..end];
                let over_budget = unit.len() - slice.len() > unit.dmax();
                if over_budget || !is_subsequence(slice, unit.sequence()) {
                    continue;
                }
                if let Some(rest) = best[end] {
                    let cand = Tally {
                        cost: rest.cost + unit.cost(),
                        units: rest.units + 1,
                    };
                    if best[start].map_or(true, |b| cand < b) {
                        best[start] = Some(cand);
                    }
                }
            }
        }
    }
    best[0]
}

fn is_subsequence(needle: &[Symbol], hay: &[Symbol]) -> bool {
    let mut it = hay.iter();
    needle.iter().all(|s| it.any(|h| h == s))
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,outcome,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.outcome,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    let mut col3 = "outcome".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
        col3 = col3.max(m.outcome.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:<col3$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "outcome", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<col3$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:<col3$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.outcome,
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
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"outcome\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.outcome,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// `ACGT` repeated, with every 37th symbol rotated so trimmed units matter.
fn edited_periodic_dna(len: usize) -> Vec<Symbol> {
    (0..len)
        .map(|i| {
            let base = Symbol::ALL[i % Symbol::ALL.len()];
            if i % 37 == 36 {
                Symbol::ALL[(i + 2) % Symbol::ALL.len()]
            } else {
                base
            }
        })
        .collect()
}
