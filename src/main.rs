use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use textfit::{run_request, FitRequest, FitResult, GlyphWidthTable, NumericValue, TableExport};

#[derive(Parser, Debug)]
#[command(name = "textfit", about = "Measure and fit text against the document font's width table")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the advance width of TEXT
    Measure {
        #[arg(long)]
        size: f64,
        #[arg(long)]
        json: bool,
        text: String,
    },

    /// Truncate TEXT with an ellipsis so it fits the budget
    Truncate {
        #[arg(long)]
        size: f64,
        #[arg(long)]
        max_width: f64,
        #[arg(long)]
        json: bool,
        text: String,
    },

    /// Fit a numeric VALUE into the budget
    Format {
        #[arg(long)]
        size: f64,
        #[arg(long)]
        max_width: f64,
        #[arg(long, value_enum, default_value_t = Grouping::Indian)]
        grouping: Grouping,
        #[arg(long)]
        json: bool,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Wrap TEXT into lines that fit the budget
    Wrap {
        #[arg(long)]
        size: f64,
        #[arg(long)]
        max_width: f64,
        #[arg(long)]
        json: bool,
        text: String,
    },

    /// Print the width table as JSON
    Table,

    /// Read JSON requests from stdin, one per line, and write JSON results
    Batch,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Grouping {
    Indian,
    Western,
}

impl From<Grouping> for textfit::DigitGrouping {
    fn from(g: Grouping) -> Self {
        match g {
            Grouping::Indian => textfit::DigitGrouping::Indian,
            Grouping::Western => textfit::DigitGrouping::Western,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Measure { size, json, text } => {
            let req = FitRequest::Measure { text: Some(text), font_size: size };
            let result = run_request(&req);
            if json {
                print_json(&result)?;
            } else {
                println!("{}", result.width);
            }
        }
        Command::Truncate { size, max_width, json, text } => {
            let req = FitRequest::Truncate { text: Some(text), max_width, font_size: size };
            print_result(&run_request(&req), json)?;
        }
        Command::Format { size, max_width, grouping, json, value } => {
            let req = FitRequest::Format {
                value: parse_value(&value),
                max_width,
                font_size: size,
                grouping: grouping.into(),
            };
            print_result(&run_request(&req), json)?;
        }
        Command::Wrap { size, max_width, json, text } => {
            let req = FitRequest::Wrap { text: Some(text), max_width, font_size: size };
            print_result(&run_request(&req), json)?;
        }
        Command::Table => {
            print_json(&TableExport::from_table(GlyphWidthTable::get()))?;
        }
        Command::Batch => {
            let failed = run_batch(io::stdin().lock(), io::stdout().lock())?;
            if failed > 0 {
                eprintln!("[batch] {} request(s) failed", failed);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// A finite number is formatted as a number; anything else is kept as text.
fn parse_value(raw: &str) -> NumericValue {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => NumericValue::Number(n),
        _ => NumericValue::Text(raw.to_string()),
    }
}

fn print_result(result: &FitResult, json: bool) -> anyhow::Result<()> {
    if json {
        print_json(result)
    } else {
        println!("{}", result.text);
        Ok(())
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

/// Returns the number of lines that could not be parsed.
fn run_batch<R: BufRead, W: Write>(input: R, mut output: W) -> anyhow::Result<usize> {
    let mut failed = 0;
    for (idx, line) in input.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match FitRequest::from_json(&line) {
            Ok(req) => {
                let out = serde_json::to_string(&run_request(&req))
                    .context("failed to serialize result")?;
                writeln!(output, "{}", out).context("failed to write stdout")?;
            }
            Err(e) => {
                eprintln!("[batch] line {}: {}", idx + 1, e);
                failed += 1;
            }
        }
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("1234.5"), NumericValue::Number(1234.5));
        assert_eq!(parse_value("-7"), NumericValue::Number(-7.0));
        assert_eq!(parse_value("N/A"), NumericValue::Text("N/A".into()));
        assert_eq!(parse_value("inf"), NumericValue::Text("inf".into()));
    }

    #[test]
    fn test_batch_skips_bad_lines() {
        let input = concat!(
            r#"{"op":"truncate","text":"Supercalifragilistic","maxWidth":50,"fontSize":10}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"op":"format","value":1234567.891,"maxWidth":40,"fontSize":8}"#,
            "\n",
        );
        let mut out = Vec::new();
        let failed = run_batch(input.as_bytes(), &mut out).unwrap();
        assert_eq!(failed, 1);

        let text = String::from_utf8(out).unwrap();
        let results: Vec<FitResult> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].text, "Supercal...");
        assert_eq!(results[1].text, "12,34,568");
    }
}
