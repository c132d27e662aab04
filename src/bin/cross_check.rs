use std::env;
use std::time::Instant;

use part_dp::costs::ORACLES;
use part_dp::utils::bruteforce_min_cost;
use part_dp::{solve_naive, solve_prefix};
use sysinfo::{get_current_pid, ProcessExt, ProcessRefreshKind, System, SystemExt};

const AGREEMENT_TOLERANCE: f64 = 1e-9;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("cross_check: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Partition Solver Cross-Check: O(n^3) interval DP vs O(n^2) prefix DP");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Every registered cost oracle is run against every test input with both");
    eprintln!("solvers. A run fails if the two minimum costs disagree, or if either");
    eprintln!(
        "disagrees with the brute-force baseline (checked up to length {}).",
        options.max_brute
    );
    eprintln!();
    eprintln!("Status meaning:");
    eprintln!("  passed  = solvers agree and the brute-force baseline confirms");
    eprintln!("  agreed  = solvers agree; input too long for the baseline");
    eprintln!("  failed  = disagreement somewhere (a correctness bug)");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let inputs = test_inputs();
    let mut sys = System::new();
    let mut measurements = Vec::new();

    let total = ORACLES.len();
    for (idx, &(name, oracle)) in ORACLES.iter().enumerate() {
        eprintln!("[{}/{}] Oracle {name}...", idx + 1, total);
        for input in &inputs {
            let m = run_pair(name, oracle, input, &options, &mut sys);
            let icon = match m.status {
                CheckStatus::Passed => "✓",
                CheckStatus::Agreed => "○",
                CheckStatus::Failed => "✗",
            };
            eprintln!(
                "      {icon} {} n={}: naive={:.3} prefix={:.3} ({:.3}s vs {:.3}s)",
                m.input_desc, m.n, m.naive_cost, m.prefix_cost, m.naive_wall_s, m.prefix_wall_s
            );
            measurements.push(m);
        }
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("cross_check output error: {err}");
        std::process::exit(1);
    }

    if measurements
        .iter()
        .any(|m| matches!(m.status, CheckStatus::Failed))
    {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    max_brute: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut max_brute = 12usize;

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
            } else if let Some(value) = arg.strip_prefix("--max-brute=") {
                max_brute = parse_max_brute(value)?;
            } else if arg == "--max-brute" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-brute".to_string())?
                    .into();
                max_brute = parse_max_brute(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self { format, max_brute })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin cross_check [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --max-brute <N>               Longest input verified against the brute-force
                                baseline; must be <= 20 (default: 12)
  -h, --help                    Print this help message

Examples:
  cargo run --bin cross_check
  cargo run --bin cross_check -- --format table --max-brute 14
"
        );
    }
}

fn parse_max_brute(value: &str) -> Result<usize, String> {
    let n = value
        .parse::<usize>()
        .map_err(|_| "max-brute must be a non-negative integer".to_string())?;
    if n > 20 {
        return Err("max-brute must be <= 20".to_string());
    }
    Ok(n)
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
    oracle: &'static str,
    input_desc: String,
    n: usize,
    naive_cost: f64,
    prefix_cost: f64,
    naive_wall_s: f64,
    prefix_wall_s: f64,
    rss_delta_kib: u64,
    status: CheckStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy)]
enum CheckStatus {
    Passed,
    Agreed,
    Failed,
}

impl CheckStatus {
    fn label(self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::Agreed => "agreed",
            CheckStatus::Failed => "failed",
        }
    }
}

enum TestInput {
    Fixed(&'static str),
    Generated { len: usize, offset: usize },
}

impl TestInput {
    fn bytes(&self) -> Vec<u8> {
        match *self {
            TestInput::Fixed(s) => s.as_bytes().to_vec(),
            TestInput::Generated { len, offset } => deterministic_lowercase(len, offset),
        }
    }

    fn desc(&self) -> String {
        match *self {
            TestInput::Fixed(s) => format!("\"{s}\""),
            TestInput::Generated { len, .. } => format!("gen_{len}"),
        }
    }
}

fn test_inputs() -> Vec<TestInput> {
    vec![
        TestInput::Fixed("cat"),
        TestInput::Fixed("aaaa"),
        TestInput::Fixed("ababab"),
        TestInput::Fixed("fjasdlfdfasd"),
        TestInput::Fixed("ajksldjfasdfjaskldfjas"),
        TestInput::Generated { len: 64, offset: 0 },
        TestInput::Generated {
            len: 128,
            offset: 3,
        },
        TestInput::Generated {
            len: 256,
            offset: 5,
        },
    ]
}

fn run_pair(
    oracle_name: &'static str,
    oracle: fn(&[u8]) -> f64,
    input: &TestInput,
    options: &Options,
    sys: &mut System,
) -> Measurement {
    let seq = input.bytes();
    let n = seq.len();

    let rss_before = rss_kib(sys);

    let start = Instant::now();
    let naive = solve_naive(&seq, &oracle);
    let naive_wall_s = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let prefix = solve_prefix(&seq, &oracle);
    let prefix_wall_s = start.elapsed().as_secs_f64();

    let rss_delta_kib = rss_kib(sys).saturating_sub(rss_before);

    let (naive_cost, prefix_cost) = match (naive, prefix) {
        (Ok(a), Ok(b)) => (a, b),
        (a, b) => {
            return Measurement {
                oracle: oracle_name,
                input_desc: input.desc(),
                n,
                naive_cost: f64::NAN,
                prefix_cost: f64::NAN,
                naive_wall_s,
                prefix_wall_s,
                rss_delta_kib,
                status: CheckStatus::Failed,
                detail: Some(format!("solver error: naive={a:?}, prefix={b:?}")),
            };
        }
    };

    let (status, detail) = if (naive_cost - prefix_cost).abs() > AGREEMENT_TOLERANCE {
        (
            CheckStatus::Failed,
            Some(format!(
                "solvers disagree: naive={naive_cost}, prefix={prefix_cost}"
            )),
        )
    } else if n <= options.max_brute {
        match bruteforce_min_cost(&seq, &oracle) {
            Ok(baseline) if (baseline - prefix_cost).abs() <= AGREEMENT_TOLERANCE => {
                (CheckStatus::Passed, None)
            }
            Ok(baseline) => (
                CheckStatus::Failed,
                Some(format!("baseline={baseline}, solvers={prefix_cost}")),
            ),
            Err(err) => (CheckStatus::Failed, Some(format!("baseline error: {err}"))),
        }
    } else {
        (CheckStatus::Agreed, None)
    };

    Measurement {
        oracle: oracle_name,
        input_desc: input.desc(),
        n,
        naive_cost,
        prefix_cost,
        naive_wall_s,
        prefix_wall_s,
        rss_delta_kib,
        status,
        detail,
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    let mut passed = 0;
    let mut agreed = 0;
    let mut failed = 0;
    for m in measurements {
        match m.status {
            CheckStatus::Passed => passed += 1,
            CheckStatus::Agreed => agreed += 1,
            CheckStatus::Failed => failed += 1,
        }
    }

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed (baseline-confirmed): {passed}");
    eprintln!("  ○ Agreed (length > {}): {agreed}", options.max_brute);
    eprintln!("  ✗ Failed: {failed}");

    if failed > 0 {
        eprintln!("\nFailures:");
        for m in measurements {
            if matches!(m.status, CheckStatus::Failed) {
                eprintln!("  ✗ {} on {} (n={})", m.oracle, m.input_desc, m.n);
                if let Some(ref detail) = m.detail {
                    eprintln!("     {detail}");
                }
            }
        }
    } else {
        eprintln!("\n✓ Both dynamic programs agree on every oracle and input.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "oracle,input,n,naive_cost,prefix_cost,naive_wall_s,prefix_wall_s,rss_delta_kib,status,detail"
    );
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{},{:.6},{:.6},{},{},\"{}\"",
            m.oracle,
            m.input_desc.replace(',', ";"),
            m.n,
            m.naive_cost,
            m.prefix_cost,
            m.naive_wall_s,
            m.prefix_wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "oracle".len();
    let mut col2 = "input".len();
    for m in measurements {
        col1 = col1.max(m.oracle.len());
        col2 = col2.max(m.input_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>6}  {:>14}  {:>14}  {:>10}  {:>10}  {}",
        "oracle",
        "input",
        "n",
        "naive_cost",
        "prefix_cost",
        "naive_s",
        "prefix_s",
        "status",
        col1 = col1,
        col2 = col2
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>6}  {:>14.3}  {:>14.3}  {:>10.4}  {:>10.4}  {}",
            m.oracle,
            m.input_desc,
            m.n,
            m.naive_cost,
            m.prefix_cost,
            m.naive_wall_s,
            m.prefix_wall_s,
            m.status.label(),
            col1 = col1,
            col2 = col2
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"oracle\":\"{}\",\"input\":{:?},\"n\":{},\"naive_cost\":{},\"prefix_cost\":{},\"naive_wall_s\":{:.6},\"prefix_wall_s\":{:.6},\"rss_delta_kib\":{},\"status\":\"{}\",\"detail\":{}}}{}",
            m.oracle,
            m.input_desc,
            m.n,
            json_number(m.naive_cost),
            json_number(m.prefix_cost),
            m.naive_wall_s,
            m.prefix_wall_s,
            m.rss_delta_kib,
            m.status.label(),
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

fn json_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        "null".to_string()
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

fn deterministic_lowercase(len: usize, offset: usize) -> Vec<u8> {
    (0..len)
        .map(|i| b'a' + ((i * 7 + offset) % 26) as u8)
        .collect()
}
