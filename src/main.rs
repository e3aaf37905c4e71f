use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use crew_rank::config;
use crew_rank::data::NoCache;
use crew_rank::output;
use crew_rank::output::StatsColumn;
use crew_rank::report;
use crew_rank::scoring;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

const DEFAULT_EMPLOYEE_LIMIT: usize = 10;
const DEFAULT_DEPARTMENT_LIMIT: usize = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Top employees by performance score
    Employees {
        /// How many rows to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_EMPLOYEE_LIMIT)]
        limit: usize,
    },
    /// Top departments by overall score
    Departments {
        /// How many rows to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_DEPARTMENT_LIMIT)]
        limit: usize,
    },
    /// Employees eligible for promotion and bonus
    Eligible,
    /// All views at once (default if no subcommand)
    Overview,
    /// Descriptive statistics and a histogram for one column
    Stats {
        /// Column to summarize (defaults to the performance score)
        #[arg(value_enum)]
        column: Option<StatsColumn>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "crew-rank")]
#[command(about = "Employee performance ranking CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/crew-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the employee CSV (overrides the config file)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Emit tab-separated values for scripting (table views only)
    #[arg(long, global = true)]
    tsv: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Overview);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.unwrap_or_default();
    if let Err(errors) = scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        exit(EXIT_CONFIG);
    }

    // Resolve the data source: flag wins over config file
    let data_path = cli
        .data
        .or_else(|| config.data.and_then(|d| d.path))
        .unwrap_or_else(|| PathBuf::from("employees.csv"));

    if cli.verbose {
        eprintln!("Data source: {}", data_path.display());
    }

    // One-shot run, so nothing is cached; embedding callers pass a real cache
    let report = match report::run(&data_path, &NoCache, &effective_scoring, cli.verbose) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Data error: {}", e);
            exit(EXIT_DATA);
        }
    };

    let use_colors = output::should_use_colors();

    match command {
        Commands::Employees { limit } => {
            let top = report.top_employees(limit);
            if cli.tsv {
                println!("{}", output::format_employee_tsv(top));
            } else if cli.verbose && !top.is_empty() {
                // Verbose mode: detailed output with score breakdowns
                for employee in top {
                    println!("{}", output::format_employee_detail(employee, use_colors));
                    println!();
                }
            } else {
                println!("{}", output::format_employee_table(top, use_colors));
            }
        }
        Commands::Departments { limit } => {
            let top = report.top_departments(limit);
            if cli.tsv {
                println!("{}", output::format_department_tsv(top));
            } else {
                println!("{}", output::format_department_table(top, use_colors));
            }
        }
        Commands::Eligible => {
            if cli.tsv {
                println!("{}", output::format_employee_tsv(&report.eligible));
            } else {
                if !report.eligible.is_empty() {
                    println!(
                        "{} employees meet the promotion criteria.",
                        report.eligible.len()
                    );
                }
                println!(
                    "{}",
                    output::format_eligible_table(&report.eligible, use_colors)
                );
            }
        }
        Commands::Overview => {
            println!("Top {} employees", DEFAULT_EMPLOYEE_LIMIT);
            println!(
                "{}",
                output::format_employee_table(
                    report.top_employees(DEFAULT_EMPLOYEE_LIMIT),
                    use_colors
                )
            );
            println!();
            println!("Top {} departments", DEFAULT_DEPARTMENT_LIMIT);
            println!(
                "{}",
                output::format_department_table(
                    report.top_departments(DEFAULT_DEPARTMENT_LIMIT),
                    use_colors
                )
            );
            println!();
            println!(
                "Eligible for promotion & bonus ({})",
                report.eligible.len()
            );
            println!(
                "{}",
                output::format_eligible_table(&report.eligible, use_colors)
            );
        }
        Commands::Stats { column } => {
            let column = column.unwrap_or(StatsColumn::PerformanceScore);
            let values = output::column_values(&report.scored, column);
            match output::describe(&values) {
                Some(stats) => {
                    println!("{}", output::format_describe(column, &stats));
                    println!();
                    println!("{}", output::format_histogram(&values, 10, 40));
                }
                None => println!("No employee records found."),
            }
        }
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Total: {} records in {:?}",
            report.scored.len(),
            start_time.elapsed()
        );
    }

    exit(EXIT_SUCCESS);
}
