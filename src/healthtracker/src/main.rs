#[macro_use]
extern crate log;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use healthtracker::{
    HealthDashboard, JsonSampleStore,
    algo::DailyStatistics,
    fake::fake_samples,
    types::{MetricType, QuantitySample, Weekday},
};

#[derive(Parser)]
pub struct HealthTrackerCli {
    /// JSON export with raw health samples
    #[arg(env, long)]
    pub samples_path: PathBuf,
    /// Last day of the window, defaults to today
    #[arg(env, long)]
    pub today: Option<NaiveDate>,
    #[clap(subcommand)]
    pub subcommand: HealthTrackerCommand,
}

#[derive(Subcommand)]
pub enum HealthTrackerCommand {
    ///
    /// Print averages for steps and weight over the last 28 days
    ///
    Stats,
    ///
    /// List daily values, newest first
    ///
    List {
        #[arg(long)]
        metric: MetricType,
    },
    ///
    /// Print weekday averages
    /// Weight shows the average change from the previous day
    ///
    Weekdays {
        #[arg(long)]
        metric: MetricType,
    },
    ///
    /// Add one reading to the export and print the refreshed values
    ///
    Add {
        #[arg(long)]
        metric: MetricType,
        /// Day of the reading, defaults to `--today`
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        value: f64,
    },
    ///
    /// Write an export filled with random demo data ending on `--today`
    ///
    GenerateFake {
        #[arg(long, default_value_t = DailyStatistics::DEFAULT_WINDOW_DAYS)]
        days: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = HealthTrackerCli::parse();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    match cli.subcommand {
        HealthTrackerCommand::Stats => {
            let store = JsonSampleStore::open(&cli.samples_path).await?;
            let dashboard = HealthDashboard::fetch(&store, today).await?;
            println!("{}", dashboard);
            Ok(())
        }
        HealthTrackerCommand::List { metric } => {
            let store = JsonSampleStore::open(&cli.samples_path).await?;
            let dashboard = HealthDashboard::fetch(&store, today).await?;
            for daily in dashboard.metrics(metric).iter().rev() {
                println!(
                    "{}\t{}",
                    daily.date.format("%b %-d, %Y"),
                    metric.format_value(daily.value)
                );
            }
            Ok(())
        }
        HealthTrackerCommand::Weekdays { metric } => {
            let store = JsonSampleStore::open(&cli.samples_path).await?;
            let dashboard = HealthDashboard::fetch(&store, today).await?;
            let averages = dashboard.weekday_averages(metric);
            for weekday in Weekday::ALL {
                match averages.iter().find(|a| a.weekday == weekday) {
                    Some(average) => match metric {
                        MetricType::Steps => {
                            println!("{}\t{}", weekday, metric.format_value(average.value))
                        }
                        MetricType::Weight => {
                            println!("{}\t{:+.2} {}", weekday, average.value, metric.unit())
                        }
                    },
                    None => println!("{}\t-", weekday),
                }
            }
            Ok(())
        }
        HealthTrackerCommand::Add {
            metric,
            date,
            value,
        } => {
            let mut store = JsonSampleStore::open_or_create(&cli.samples_path).await?;
            let mut dashboard = HealthDashboard::default();
            let start = date.unwrap_or(today).and_time(Local::now().time());
            let sample = QuantitySample::new(metric, start, value);

            dashboard.add_sample(&mut store, sample, today).await?;
            info!("Added {} for {}", metric.format_value(value), start.date());

            println!(
                "{} average: {}",
                metric,
                match metric {
                    MetricType::Steps => metric.format_value(dashboard.average_step_count()),
                    MetricType::Weight => format!(
                        "{:+.2} {} per day",
                        dashboard.average_weight_difference(),
                        metric.unit()
                    ),
                }
            );
            Ok(())
        }
        HealthTrackerCommand::GenerateFake { days } => {
            let now = today.and_time(Local::now().time());
            let samples = fake_samples(now, days);
            let count = samples.len();
            JsonSampleStore::write_export(&cli.samples_path, samples).await?;
            info!(
                "Wrote {} fake samples to {}",
                count,
                cli.samples_path.display()
            );
            Ok(())
        }
    }
}
