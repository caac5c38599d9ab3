// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg};
use colored::Colorize;
use jiff::{Timestamp, Zoned, civil, tz::TimeZone};
use termcal_core::{ScheduleCompiler, ScheduleInput};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::config::{DEFAULT_OUTPUT, parse_config, resolve_timezone};

/// Where input is read from or output is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Standard input or output, written as `-`
    Std,

    /// A file on disk
    File(PathBuf),
}

impl Target {
    fn parse(s: &str) -> Self {
        if s == "-" {
            Self::Std
        } else {
            Self::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Std => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdCompile {
    pub input: Target,
    pub output: Option<Target>,
    pub tz: Option<String>,
    pub now: Option<civil::DateTime>,
}

impl CmdCompile {
    pub fn args(command: Command) -> Command {
        command
            .arg(
                arg!([INPUT] "Schedule exported as JSON, `-` or nothing for stdin")
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --output <OUTPUT> "Where to write the calendar, `-` for stdout")
                    .long_help(
                        "\
Where to write the calendar, `-` for stdout. Defaults to `output` in the configuration file, \
then schedule.ics in the current directory.",
                    )
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(--tz <TZID> "Timezone of every event, e.g. America/Chicago"))
            .arg(
                arg!(--now <DATETIME> "Reference time, e.g. 2025-08-20T10:00:00")
                    .long_help(
                        "\
Reference time used for exam years, DTSTAMP and the fallback semester window. \
Defaults to the current time in the selected timezone.",
                    )
                    .value_parser(parse_now),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let input = matches
            .get_one::<String>("INPUT")
            .map_or(Target::Std, |a| Target::parse(a));
        let output = matches
            .get_one::<String>("output")
            .map(|a| Target::parse(a));
        Ok(Self {
            input,
            output,
            tz: matches.get_one::<String>("tz").cloned(),
            now: matches.get_one::<civil::DateTime>("now").copied(),
        })
    }

    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "compiling schedule...");
        let (mut core_config, config) = parse_config(config).await?;
        let tz = resolve_timezone(self.tz.as_deref(), core_config.timezone.as_deref());
        core_config.timezone = Some(tz);
        core_config.normalize()?;

        let now = self.now.unwrap_or_else(|| current_time(core_config.timezone()));
        let input = read_input(&self.input).await?;
        let compilation = ScheduleCompiler::new(&core_config, now)
            .compile(&input.courses, &input.breaks)?;

        for failure in &compilation.failures {
            eprintln!("{} {}", "Skipped:".yellow(), failure);
        }

        let output = self
            .output
            .or(config.output.map(Target::File))
            .unwrap_or_else(|| Target::File(PathBuf::from(DEFAULT_OUTPUT)));
        write_output(&output, &compilation.document).await?;

        if output != Target::Std {
            eprintln!(
                "{} {} events written to {}",
                "Done:".green(),
                compilation.schedule.len(),
                output
            );
        }
        Ok(())
    }
}

fn parse_now(s: &str) -> Result<civil::DateTime, String> {
    s.parse::<civil::DateTime>()
        .or_else(|_| s.parse::<civil::Date>().map(|d| d.at(0, 0, 0, 0)))
        .map_err(|e| format!("Invalid date-time '{s}': {e}"))
}

fn current_time(tz: &str) -> civil::DateTime {
    match TimeZone::get(tz) {
        Ok(tz) => Timestamp::now().to_zoned(tz).datetime(),
        Err(e) => {
            tracing::warn!(tz, error = %e, "unknown timezone, using the system clock");
            Zoned::now().datetime()
        }
    }
}

async fn read_input(input: &Target) -> Result<ScheduleInput, Box<dyn Error>> {
    let content = match input {
        Target::Std => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| format!("Failed to read schedule from stdin: {e}"))?;
            buf
        }
        Target::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read schedule at {}: {}", path.display(), e))?,
    };

    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse schedule from {input}: {e}").into())
}

async fn write_output(output: &Target, document: &str) -> Result<(), Box<dyn Error>> {
    match output {
        Target::Std => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(document.as_bytes()).await?;
            stdout.flush().await?;
        }
        Target::File(path) => tokio::fs::write(path, document)
            .await
            .map_err(|e| format!("Failed to write calendar to {}: {}", path.display(), e))?,
    }
    Ok(())
}
