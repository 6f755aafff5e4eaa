use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use image_effect::{ProcessIconConfig, process_icon};
use std::{env, ffi::OsString, io::Write, path::PathBuf, process};

/// Turn bright-background artwork into a black PNG silhouette on a transparent background
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Source image
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Destination PNG
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

/// Sets up a logger with timestamp, log level, file name, line number and message.
/// Quiet (`warn`) unless `RUST_LOG` says otherwise.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn usage_exit() -> ! {
    println!("{}", Cli::command().render_usage());
    process::exit(1);
}

/// Exactly two arguments, both taken literally as paths.
fn parse_args() -> Cli {
    let args = env::args_os().collect::<Vec<_>>();
    let Ok([program, input, output]) = <[OsString; 3]>::try_from(args) else {
        usage_exit()
    };

    // `--` stops flag parsing so `-dash.png` stays a path
    match Cli::try_parse_from([program, OsString::from("--"), input, output]) {
        Ok(cli) => cli,
        Err(e) => {
            log::debug!("{e}");
            usage_exit()
        }
    }
}

fn main() -> Result<()> {
    init_logger();

    let cli = parse_args();
    let config = ProcessIconConfig::new(&cli.input, &cli.output);

    process_icon(&config).with_context(|| {
        format!(
            "Failed to turn {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    println!("Created {}", cli.output.display());
    Ok(())
}
