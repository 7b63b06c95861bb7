use dto_mapping::{
    application::{MapAccountRestrictionsUseCase, ParseDurationUseCase},
    shared::{error::AppError, logging::LoggingUtils},
    AppConfig, AppResult, Duration,
};
use serde_json::{json, Value};
use std::io::Read;
use tracing::{debug, error};

const USAGE: &str = "usage: dto-mapper restrictions <path|->\n       dto-mapper duration <token>";

/// Command selected on the command line
#[derive(Debug, PartialEq)]
enum Command {
    /// Map an account restrictions info payload from a file, or stdin for "-"
    Restrictions(String),
    /// Parse a server duration token
    Duration(String),
}

impl Command {
    fn parse(args: &[String]) -> AppResult<Self> {
        match args {
            [cmd, source] if cmd == "restrictions" => Ok(Command::Restrictions(source.clone())),
            [cmd, token] if cmd == "duration" => Ok(Command::Duration(token.clone())),
            _ => Err(AppError::Validation(USAGE.to_string())),
        }
    }
}

fn main() {
    // Load configuration
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_json());
            std::process::exit(1);
        }
    };

    // Initialize logging
    if let Err(e) = LoggingUtils::initialize(&config.logging.level, &config.logging.format) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    match Command::parse(&args).and_then(|command| run(&config, command)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!(kind = %e.kind(), "dto-mapper failed: {}", e);
            eprintln!("{}", e.to_json());
            std::process::exit(1);
        }
    }
}

fn run(config: &AppConfig, command: Command) -> AppResult<Value> {
    debug!(command = ?command, "Running command");

    match command {
        Command::Restrictions(source) => {
            let payload = read_payload(&source, config.input.max_payload_bytes)?;
            let info = MapAccountRestrictionsUseCase::from_config(config).execute(&payload)?;
            Ok(serde_json::to_value(info)?)
        }
        Command::Duration(token) => {
            let duration = ParseDurationUseCase.execute(&token)?;
            Ok(duration_report(&duration))
        }
    }
}

// Reads at most one byte past the limit so the use case can report the overflow.
fn read_payload(source: &str, limit: usize) -> AppResult<Vec<u8>> {
    let reader: Box<dyn Read> = if source == "-" {
        Box::new(std::io::stdin())
    } else {
        Box::new(std::fs::File::open(source)?)
    };

    let mut payload = Vec::new();
    reader.take(limit as u64 + 1).read_to_end(&mut payload)?;
    Ok(payload)
}

fn duration_report(duration: &Duration) -> Value {
    json!({
        "token": duration.to_string(),
        "magnitude": duration.magnitude(),
        "unit": duration.unit(),
        "milliseconds": duration.to_millis(),
        "seconds": duration.seconds(),
        "minutes": duration.to_minutes(),
        "hours": duration.to_hours(),
        "days": duration.to_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(
            Command::parse(&args(&["restrictions", "-"])).unwrap(),
            Command::Restrictions("-".to_string())
        );
        assert_eq!(
            Command::parse(&args(&["duration", "30s"])).unwrap(),
            Command::Duration("30s".to_string())
        );
    }

    #[test]
    fn test_command_parse_usage_error() {
        assert!(Command::parse(&args(&[])).is_err());
        assert!(Command::parse(&args(&["duration"])).is_err());
        assert!(Command::parse(&args(&["convert", "30s"])).is_err());
    }

    #[test]
    fn test_duration_report() {
        let report = run(&AppConfig::default(), Command::Duration("90m".to_string())).unwrap();
        assert_eq!(report["unit"], "minutes");
        assert_eq!(report["minutes"], 90);
        assert_eq!(report["hours"], 1);
        assert_eq!(report["seconds"], 5400);
    }

    #[test]
    fn test_restrictions_from_missing_file() {
        let result = run(
            &AppConfig::default(),
            Command::Restrictions("/nonexistent/restrictions.json".to_string()),
        );
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
