mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ganzhi_base::{
    BirthInput, BirthTime, Branch, ChartReport, CivilDate, DatedTerm, Gender, LuckPeriod,
    SexagenaryIndex, TableLunarCalendar, compute_chart, index_of_str, jie_boundaries,
    life_timeline, lunar_date, pillar_at,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "ganzhi", about = "Four Pillars (八字) calendar CLI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars, luck cycle and lunar date for a birth instant
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (hh:mm)
        #[arg(long)]
        time: String,
        /// male | female (also m/f, 男/女, 乾/坤)
        #[arg(long)]
        gender: Gender,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Year-by-year timeline of annual and luck pillars
    Timeline {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local birth time (hh:mm)
        #[arg(long)]
        time: String,
        /// male | female
        #[arg(long)]
        gender: Gender,
        /// Number of years to list (default from config, 100)
        #[arg(long)]
        span: Option<u16>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Pillar at a sexagenary index (0-59)
    Pillar {
        index: u8,
    },
    /// Sexagenary index of a pillar such as 甲子
    Index {
        pillar: String,
    },
    /// The 12 jie boundaries of a Gregorian year
    Terms {
        #[arg(long)]
        year: i32,
    },
    /// Lunar date of a Gregorian date
    Lunar {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

fn parse_date(s: &str) -> Result<CivilDate, String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    CivilDate::new(year, month, day).map_err(|e| e.to_string())
}

fn parse_time(s: &str) -> Result<BirthTime, String> {
    let (h, m) = s
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("expected hh:mm, got {s}"))?;
    let hour: u32 = h.parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = m.parse().map_err(|e| format!("{e}"))?;
    BirthTime::new(hour, minute).map_err(|e| e.to_string())
}

fn require_date(s: &str) -> CivilDate {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_time(s: &str) -> BirthTime {
    parse_time(s).unwrap_or_else(|e| {
        eprintln!("Invalid time: {e}");
        std::process::exit(1);
    })
}

fn load_config(path: Option<&std::path::Path>) -> CliConfig {
    CliConfig::load_or_default(path).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn compute(date: &str, time: &str, gender: Gender) -> ChartReport {
    let input = BirthInput {
        date: require_date(date),
        time: require_time(time),
        gender,
    };
    compute_chart(&input, &TableLunarCalendar).unwrap_or_else(|e| {
        eprintln!("Chart failed: {e}");
        std::process::exit(1);
    })
}

/// One row of `ganzhi terms`.
#[derive(Serialize)]
struct TermRow {
    #[serde(flatten)]
    term: DatedTerm,
    symbol: &'static str,
    month_slot: u8,
    month_branch: Branch,
}

fn term_rows(year: i32) -> Vec<TermRow> {
    jie_boundaries(year)
        .into_iter()
        .map(|t| TermRow {
            term: t,
            symbol: t.term.symbol(),
            month_slot: t.term.month_slot(),
            month_branch: t.term.month_branch(),
        })
        .collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("JSON encoding failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart(r: &ChartReport) {
    println!(
        "Birth:    {} {} {} ({})",
        r.birth.date,
        r.birth.time,
        r.birth.gender,
        r.birth.gender.symbol()
    );
    println!("Lunar:    {}", r.lunar_date);
    println!("          Year  Month Day   Hour");
    println!(
        "Pillars:  {}  {}  {}  {}",
        r.year_pillar(),
        r.month_pillar(),
        r.day_pillar(),
        r.hour_pillar()
    );
    let start = &r.luck.start;
    println!(
        "Luck:     {} ({}), start age {} ({} days to {})",
        r.luck_direction(),
        r.luck_direction().symbol(),
        start.age,
        start.days,
        start.boundary
    );
    for step in r.luck_sequence() {
        println!(
            "  {:>2}  age {:>3}-{:<3}  {}",
            step.step, step.age_start, step.age_end, step.pillar
        );
    }
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    init_tracing(&config.log.filter);
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), ?config, "loaded config");
    }
    let config_json = config.output.format == OutputFormat::Json;

    match cli.command {
        Commands::Chart {
            date,
            time,
            gender,
            json,
        } => {
            let report = compute(&date, &time, gender);
            if json || config_json {
                print_json(&report);
            } else {
                print_chart(&report);
            }
        }

        Commands::Timeline {
            date,
            time,
            gender,
            span,
            json,
        } => {
            let report = compute(&date, &time, gender);
            let mut tl = config.timeline_config();
            if let Some(n) = span {
                if n == 0 {
                    eprintln!("Invalid span: must be > 0");
                    std::process::exit(1);
                }
                tl.span_years = n;
            }
            let entries = life_timeline(&report, &tl);
            if json || config_json {
                print_json(&entries);
            } else {
                println!("{}  ({})", report.pillars, report.lunar_date);
                for e in &entries {
                    let marker = match e.luck {
                        LuckPeriod::Step(s) if s.age_start == e.age => " *",
                        _ => "",
                    };
                    println!(
                        "{:>3}  {}  {}  {}{}",
                        e.age, e.year, e.annual_pillar, e.luck, marker
                    );
                }
            }
        }

        Commands::Pillar { index } => {
            let Some(idx) = SexagenaryIndex::new(index) else {
                eprintln!("Invalid index: {index} (0-59)");
                std::process::exit(1);
            };
            let p = pillar_at(idx);
            if config_json {
                print_json(&serde_json::json!({ "index": index, "pillar": p }));
            } else {
                println!("{p} ({}{})", p.stem().name(), p.branch().name());
            }
        }

        Commands::Index { pillar } => match index_of_str(&pillar) {
            Ok(idx) => {
                if config_json {
                    print_json(&serde_json::json!({ "pillar": pillar, "index": idx }));
                } else {
                    println!("{}", idx.get());
                }
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Terms { year } => {
            let rows = term_rows(year);
            if config_json {
                print_json(&rows);
            } else {
                for r in &rows {
                    let t = &r.term;
                    println!(
                        "{:04}-{:02}-{:02}  {} ({})  slot {:>2}, opens {} month",
                        t.year,
                        t.month,
                        t.day,
                        r.symbol,
                        t.term.name(),
                        r.month_slot,
                        r.month_branch
                    );
                }
            }
        }

        Commands::Lunar { date } => {
            let d = require_date(&date);
            match lunar_date(&TableLunarCalendar, &d) {
                Ok(l) if config_json => print_json(&l),
                Ok(l) => println!("{d}  {l}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
