use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use xuanji_rs::{
    BaziChart, CivilDateTime, DivinationRequest, HexagramReading, PartialDateTime, QimenReading,
    XuanjiConfig, YearBoundary,
};

#[derive(Parser)]
#[command(name = "xuanji", about = "Hexagram, Qimen and Bazi divination CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a plum-blossom hexagram from two numbers or a time
    Hexagram {
        /// First seed number (with --n2)
        #[arg(long, requires = "n2")]
        n1: Option<i64>,
        /// Second seed number (with --n1)
        #[arg(long, requires = "n1")]
        n2: Option<i64>,
        /// Local time (YYYY[-MM[-DD[ hh[:mm]]]]); missing fields are taken from now
        #[arg(long, conflicts_with = "n1")]
        date: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Simplified Qimen Dunjia reading
    Qimen {
        /// Local time (YYYY-MM-DD hh:mm); missing fields are taken from now
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Four-pillar (bazi) chart of a birth date
    Bazi {
        /// Birth date (YYYY-MM-DD[ hh[:mm]]); hour defaults to 12:00
        #[arg(long)]
        date: String,
        /// Year boundary: lunar_new_year or lichun
        #[arg(long)]
        boundary: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// The 24 solar terms of a year, in the configured zone
    Terms {
        #[arg(long)]
        year: i32,
    },
    /// Lunar New Year date
    NewYear {
        #[arg(long)]
        year: i32,
    },
    /// Sexagenary name of a year
    Ganzhi {
        #[arg(long)]
        year: i32,
    },
    /// Compute the charts of a JSON request and print visualData
    Divine {
        /// Request file ({"category", "question", "birthData", "divineData"})
        #[arg(long)]
        request: PathBuf,
    },
    /// Merge an interpreter reply with the computed charts
    Interpret {
        /// Request JSON file
        #[arg(long)]
        request: PathBuf,
        /// Raw interpreter reply text file
        #[arg(long)]
        reply: PathBuf,
    },
}

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{what}: {e}");
        std::process::exit(1);
    })
}

fn load_config(path: Option<&PathBuf>) -> XuanjiConfig {
    let base = match path {
        Some(p) => or_exit(XuanjiConfig::load(p), "Failed to load config"),
        None => XuanjiConfig::default(),
    };
    or_exit(base.apply_env(), "Invalid environment override")
}

fn init_logging(filter: &str) {
    // RUST_LOG wins over the configured filter.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_fields(date: Option<&str>) -> PartialDateTime {
    date.map_or(PartialDateTime::default(), |d| {
        or_exit(xuanji_rs::parse_birth(d), "Invalid date")
    })
}

fn read_request(path: &PathBuf) -> DivinationRequest {
    let text = or_exit(std::fs::read_to_string(path), "Failed to read request");
    or_exit(serde_json::from_str(&text), "Invalid request JSON")
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value), "Failed to encode JSON"));
}

fn print_hexagram(r: &HexagramReading) {
    println!(
        "本卦: {}{} ({} over {})",
        r.upper.name(),
        r.lower.name(),
        r.upper.nature(),
        r.lower.nature()
    );
    let lines = r.lines();
    for i in (0..6).rev() {
        let glyph = if lines[i] { "━━━━━━━" } else { "━━━ ━━━" };
        let mark = if i + 1 == r.changing as usize { "  ○" } else { "" };
        println!("  {glyph}{mark}");
    }
    println!("动爻: {}", r.changing);
    println!("变卦: {}", r.result);
    println!("{}", r.interpretation);
}

fn print_qimen(r: &QimenReading) {
    println!("宫位: {}", r.palace.name());
    println!("八门: {}", r.gate.name());
    println!("九星: {}", r.star.name());
    println!("方位: {}", r.direction);
    println!("时机: {}", r.timing);
}

fn print_bazi(c: &BaziChart) {
    for (label, p) in ["年柱", "月柱", "日柱", "时柱"].iter().zip(c.pillars()) {
        println!(
            "{label}: {}{} ({})",
            p.heavenly_stem.name(),
            p.earthly_branch.name(),
            p.element.chinese()
        );
    }
    println!("日主: {}", c.day_master.chinese());
    let b = c.element_balance;
    println!(
        "五行: 木{} 火{} 土{} 金{} 水{}",
        b.wood, b.fire, b.earth, b.metal, b.water
    );
}

fn short(dt: &CivilDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        dt.year, dt.month, dt.day, dt.hour, dt.minute
    )
}

fn main() {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref());
    init_logging(&config.logging.filter);

    if let Commands::Bazi {
        boundary: Some(name),
        ..
    } = &cli.command
    {
        config.calendar.year_boundary = YearBoundary::from_name(name).unwrap_or_else(|| {
            eprintln!("Invalid year boundary: {name}. Use lunar_new_year or lichun.");
            std::process::exit(1);
        });
    }
    debug!(?config, "effective configuration");
    let offset = config.calendar.utc_offset_minutes;
    or_exit(xuanji_rs::init(config), "Failed to initialize");

    match cli.command {
        Commands::Hexagram { n1, n2, date, json } => {
            let reading = match (n1, n2) {
                (Some(a), Some(b)) => xuanji_rs::hexagram_by_numbers(a, b),
                _ => xuanji_rs::hexagram_at(parse_fields(date.as_deref())),
            };
            let reading = or_exit(reading, "Hexagram failed");
            if json {
                print_json(&reading);
            } else {
                print_hexagram(&reading);
            }
        }

        Commands::Qimen { date, json } => {
            let reading = or_exit(
                xuanji_rs::qimen_at(parse_fields(date.as_deref())),
                "Qimen failed",
            );
            if json {
                print_json(&reading);
            } else {
                print_qimen(&reading);
            }
        }

        Commands::Bazi { date, json, .. } => {
            let birth = parse_fields(Some(date.as_str()));
            let chart = or_exit(xuanji_rs::bazi_for(birth), "Bazi failed").unwrap_or_else(|| {
                eprintln!("Bazi needs a full date (YYYY-MM-DD), got {date}");
                std::process::exit(1);
            });
            if json {
                print_json(&chart);
            } else {
                print_bazi(&chart);
            }
        }

        Commands::Terms { year } => {
            for event in or_exit(xuanji_rs::solar_terms(year), "Solar terms failed") {
                println!(
                    "{}  {}  {:>5.1} deg  {}",
                    event.term.name(),
                    short(&event.local_time(offset)),
                    event.term.longitude_deg(),
                    if event.term.is_major() { "中气" } else { "节" }
                );
            }
        }

        Commands::NewYear { year } => {
            let d = or_exit(xuanji_rs::lunar_new_year(year), "New Year failed");
            println!(
                "{:04}-{:02}-{:02} ({}年)",
                d.year,
                d.month,
                d.day,
                xuanji_rs::year_name(year).name()
            );
        }

        Commands::Ganzhi { year } => {
            let gz = xuanji_rs::year_name(year);
            println!(
                "{} ({}, {})",
                gz.name(),
                gz.branch.animal(),
                gz.stem.element().chinese()
            );
        }

        Commands::Divine { request } => {
            let req = read_request(&request);
            let visual = or_exit(xuanji_rs::divine(&req), "Divination failed");
            print_json(&visual);
        }

        Commands::Interpret { request, reply } => {
            let req = read_request(&request);
            let text = or_exit(std::fs::read_to_string(&reply), "Failed to read reply");
            let result = or_exit(xuanji_rs::interpret(&req, &text), "Interpretation failed");
            print_json(&result);
        }
    }
}
