// src/io/reporting.rs

use crate::error::SimulationError;
use crate::simulation::engine::{Summary, TurnRecord};
use std::io::Write;
use std::path::Path;

/// Writes the turn history to a CSV file.
///
/// # Arguments
/// * `file_path` - Where to save the file (e.g., "results/turns.csv").
/// * `data` - The turn records collected by the simulator.
pub fn write_turn_log<P: AsRef<Path>>(file_path: P, data: &[TurnRecord]) -> Result<(), SimulationError> {
    let file = std::fs::File::create(file_path.as_ref())?;
    write_turn_log_to(file, data)?;

    tracing::info!(
        rows = data.len(),
        path = %file_path.as_ref().display(),
        "exported turn log"
    );
    Ok(())
}

/// Same as [`write_turn_log`] but into any writer.
pub fn write_turn_log_to<W: Write>(writer: W, data: &[TurnRecord]) -> Result<(), SimulationError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Multi-line closing report: totals plus whoever is still waiting.
pub fn format_report(summary: &Summary, waiting: &[String]) -> String {
    let mut out = format!("{}\n", summary);
    if waiting.is_empty() {
        out.push_str("Nobody is waiting.\n");
    } else {
        out.push_str(&format!("Still waiting ({}):\n", waiting.len()));
        for line in waiting {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_rows() {
        let records = vec![
            TurnRecord {
                turn: 1,
                customer_id: 1,
                served: 5,
                remaining: 4,
                completed: false,
                queue_len_after: 2,
            },
            TurnRecord {
                turn: 2,
                customer_id: 2,
                served: 3,
                remaining: 0,
                completed: true,
                queue_len_after: 1,
            },
        ];
        let mut buf = Vec::new();
        write_turn_log_to(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "turn,customer_id,served,remaining,completed,queue_len_after"
        );
        assert_eq!(lines[1], "1,1,5,4,false,2");
        assert_eq!(lines[2], "2,2,3,0,true,1");
    }

    #[test]
    fn report_lists_waiting_customers() {
        let summary = Summary {
            total_clients_served: 2,
            total_transactions: 41,
        };
        let waiting = vec!["Customer 3 - pending transactions: 10".to_string()];
        let report = format_report(&summary, &waiting);
        assert!(report.starts_with("Customers fully served: 2, Total transactions processed: 41\n"));
        assert!(report.contains("Still waiting (1):\n  Customer 3 - pending transactions: 10\n"));
    }

    #[test]
    fn report_for_empty_lobby() {
        let report = format_report(&Summary::default(), &[]);
        assert!(report.ends_with("Nobody is waiting.\n"));
    }
}
